use crate::{
    error::{self, Result},
    extractors::Json,
    state::StateTrait,
};
use axum::extract::State;
use entity::{teams, users};
use sea_orm::{sea_query::Expr, ColumnTrait, EntityTrait, QueryFilter, TransactionTrait};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct Request {
    team_name: String,
}

#[derive(Serialize)]
pub struct Response {
    status: &'static str,
    deactivated_users: Vec<String>,
}

/// Deactivates every member of the team, then removes all now-inactive
/// reviewers from open pull requests across the whole system.
pub async fn deactivate_team<S: StateTrait>(
    State(state): State<S>,
    Json(request): Json<Request>,
) -> Result<Json<Response>> {
    let txn = state.db().begin().await?;

    let team = teams::Entity::find_by_id(request.team_name.clone())
        .one(&txn)
        .await?
        .ok_or(error::TEAM_NOT_FOUND)?;

    let members = users::Entity::find_in_team(&team.team_name)
        .all(&txn)
        .await?;

    users::Entity::update_many()
        .col_expr(users::Column::IsActive, Expr::value(false))
        .filter(users::Column::TeamName.eq(&*team.team_name))
        .exec(&txn)
        .await?;

    crate::handlers::prune_inactive_reviewers(&txn).await?;

    txn.commit().await?;

    Ok(Json(Response {
        status: "OK",
        deactivated_users: members.into_iter().map(|u| u.user_id).collect(),
    }))
}
