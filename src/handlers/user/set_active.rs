use crate::{
    error::{self, Result},
    extractors::Json,
    state::StateTrait,
};
use axum::extract::State;
use entity::users;
use sea_orm::{EntityTrait, IntoActiveModel, Set, TransactionTrait};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct Request {
    user_id: String,
    is_active: bool,
}

#[derive(Serialize)]
pub struct Response {
    user_id: String,
    username: String,
    team_name: String,
    is_active: bool,
}

/// Toggles a single user's activity flag.
///
/// Deactivation runs the same open-PR reviewer sweep as a team-wide
/// deactivation, so an open pull request never keeps an inactive reviewer
/// regardless of which code path flipped the flag.
pub async fn set_is_active<S: StateTrait>(
    State(state): State<S>,
    Json(request): Json<Request>,
) -> Result<Json<Response>> {
    let txn = state.db().begin().await?;

    let user = users::Entity::find_by_id(request.user_id.clone())
        .one(&txn)
        .await?
        .ok_or(error::USER_NOT_FOUND)?;

    let mut model = user.into_active_model();
    model.is_active = Set(request.is_active);

    let user = users::Entity::update(model).exec(&txn).await?;

    if !request.is_active {
        crate::handlers::prune_inactive_reviewers(&txn).await?;
    }

    txn.commit().await?;

    Ok(Json(Response {
        user_id: user.user_id,
        username: user.username,
        team_name: user.team_name,
        is_active: user.is_active,
    }))
}
