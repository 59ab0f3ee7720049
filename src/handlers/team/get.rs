use super::{MemberResponse, TeamResponse};
use crate::{
    error::{self, Result},
    extractors::Json,
    state::StateTrait,
};
use axum::extract::{Query, State};
use entity::{teams, users};
use sea_orm::EntityTrait;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Params {
    team_name: String,
}

pub async fn get_team<S: StateTrait>(
    State(state): State<S>,
    Query(params): Query<Params>,
) -> Result<Json<TeamResponse>> {
    let team = teams::Entity::find_by_id(params.team_name.clone())
        .one(state.db())
        .await?
        .ok_or(error::TEAM_NOT_FOUND)?;

    let members = users::Entity::find_in_team(&team.team_name)
        .all(state.db())
        .await?;

    Ok(Json(TeamResponse {
        team_name: team.team_name,
        members: members.into_iter().map(MemberResponse::from).collect(),
    }))
}
