mod add;
mod create;
mod deactivate;
mod get;

use crate::{error::Result, state::StateTrait};
use axum::{
    routing::{get as http_get, post},
    Router,
};
use entity::users;
use sea_orm::{ConnectionTrait, EntityTrait, IntoActiveModel, Set};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Routes for team management
///
/// POST /team/add        — idempotent upsert, never removes members
/// POST /team/create     — strict create, 409 on duplicate name
/// GET  /team/get        — membership snapshot
/// POST /team/deactivate — deactivate all members, prune open PRs
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/add", post(add::add_team::<S>))
        .route("/create", post(create::create_team::<S>))
        .route("/get", http_get(get::get_team::<S>))
        .route("/deactivate", post(deactivate::deactivate_team::<S>))
}

#[derive(Deserialize, Validate)]
pub struct MemberPayload {
    #[validate(length(min = 1, max = 64))]
    pub user_id: String,
    #[validate(length(min = 1, max = 128))]
    pub username: String,
    pub is_active: bool,
}

#[derive(Serialize)]
pub struct MemberResponse {
    pub user_id: String,
    pub username: String,
    pub is_active: bool,
}

impl From<users::Model> for MemberResponse {
    fn from(user: users::Model) -> Self {
        Self {
            user_id: user.user_id,
            username: user.username,
            is_active: user.is_active,
        }
    }
}

#[derive(Serialize)]
pub struct TeamResponse {
    pub team_name: String,
    pub members: Vec<MemberResponse>,
}

/// Creates the member under `team_name`, or updates username, activity and
/// team of an existing user (moving it from its previous team).
pub(super) async fn upsert_member<C: ConnectionTrait>(
    conn: &C,
    team_name: &str,
    member: MemberPayload,
) -> Result {
    let existing = users::Entity::find_by_id(member.user_id.clone())
        .one(conn)
        .await?;

    match existing {
        Some(user) => {
            let mut model = user.into_active_model();
            model.username = Set(member.username);
            model.is_active = Set(member.is_active);
            model.team_name = Set(team_name.to_owned());

            users::Entity::update(model).exec(conn).await?;
        }
        None => {
            let model = users::ActiveModel {
                user_id: Set(member.user_id),
                username: Set(member.username),
                is_active: Set(member.is_active),
                team_name: Set(team_name.to_owned()),
            };

            users::Entity::insert(model).exec(conn).await?;
        }
    }

    Ok(())
}
