use crate::{error::Result, extractors::Json, state::StateTrait};
use axum::extract::State;
use entity::pr_reviewers;
use sea_orm::{ColumnTrait, EntityTrait, FromQueryResult, QuerySelect};
use serde::Serialize;
use serde_json::json;
use std::collections::HashMap;

#[derive(Debug, FromQueryResult)]
struct UserCount {
    user_id: String,
    count: i64,
}

#[derive(Debug, FromQueryResult)]
struct PrCount {
    pr_id: String,
    count: i64,
}

#[derive(Debug, Serialize)]
pub struct Response {
    users: HashMap<String, i64>,
    pull_requests: HashMap<String, i64>,
}

/// Review-load projection over the assignment relation. Users and pull
/// requests without a single assignment row do not appear at all.
pub async fn get_stats<S: StateTrait>(State(state): State<S>) -> Result<Json<Response>> {
    let users = pr_reviewers::Entity::find()
        .select_only()
        .column(pr_reviewers::Column::UserId)
        .column_as(pr_reviewers::Column::PrId.count(), "count")
        .group_by(pr_reviewers::Column::UserId)
        .into_model::<UserCount>()
        .all(state.db())
        .await?;

    let prs = pr_reviewers::Entity::find()
        .select_only()
        .column(pr_reviewers::Column::PrId)
        .column_as(pr_reviewers::Column::UserId.count(), "count")
        .group_by(pr_reviewers::Column::PrId)
        .into_model::<PrCount>()
        .all(state.db())
        .await?;

    Ok(Json(Response {
        users: users.into_iter().map(|r| (r.user_id, r.count)).collect(),
        pull_requests: prs.into_iter().map(|r| (r.pr_id, r.count)).collect(),
    }))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
