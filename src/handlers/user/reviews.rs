use crate::{error::Result, extractors::Json, state::StateTrait};
use axum::extract::{Query, State};
use entity::{pull_requests, users};
use sea_orm::{EntityTrait, ModelTrait};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct Params {
    user_id: String,
}

#[derive(Serialize)]
pub struct PullRequestShort {
    pull_request_id: String,
    pull_request_name: String,
    author_id: String,
    status: pull_requests::Status,
}

#[derive(Serialize)]
pub struct Response {
    user_id: String,
    pull_requests: Vec<PullRequestShort>,
}

/// Pull requests the user is currently assigned to review. An unknown
/// user yields an empty list, matching the lenient read-only contract of
/// the stats endpoints.
pub async fn get_user_reviews<S: StateTrait>(
    State(state): State<S>,
    Query(params): Query<Params>,
) -> Result<Json<Response>> {
    let user = users::Entity::find_by_id(params.user_id.clone())
        .one(state.db())
        .await?;

    let Some(user) = user else {
        return Ok(Json(Response {
            user_id: params.user_id,
            pull_requests: Vec::new(),
        }));
    };

    let prs = user
        .find_related(pull_requests::Entity)
        .all(state.db())
        .await?;

    Ok(Json(Response {
        user_id: user.user_id,
        pull_requests: prs
            .into_iter()
            .map(|pr| PullRequestShort {
                pull_request_id: pr.pull_request_id,
                pull_request_name: pr.pull_request_name,
                author_id: pr.author_id,
                status: pr.status,
            })
            .collect(),
    }))
}
