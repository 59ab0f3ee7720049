use super::{MemberPayload, MemberResponse, TeamResponse};
use crate::{
    error::{self, Result},
    extractors::{Json, ValidatedJson},
    state::StateTrait,
};
use axum::{extract::State, http::StatusCode};
use entity::{teams, users};
use sea_orm::{EntityTrait, Set, TransactionTrait};
use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 64))]
    team_name: String,
    #[validate(nested)]
    members: Vec<MemberPayload>,
}

/// Strict variant of `/team/add`: rejects an already existing team name
/// instead of updating it.
pub async fn create_team<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<TeamResponse>)> {
    let txn = state.db().begin().await?;

    let team = teams::Entity::find_by_id(request.team_name.clone())
        .one(&txn)
        .await?;

    if team.is_some() {
        return Err(error::TEAM_EXISTS);
    }

    let model = teams::ActiveModel {
        team_name: Set(request.team_name.clone()),
    };

    teams::Entity::insert(model).exec(&txn).await?;

    for member in request.members {
        super::upsert_member(&txn, &request.team_name, member).await?;
    }

    let members = users::Entity::find_in_team(&request.team_name)
        .all(&txn)
        .await?;

    txn.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(TeamResponse {
            team_name: request.team_name,
            members: members.into_iter().map(MemberResponse::from).collect(),
        }),
    ))
}
