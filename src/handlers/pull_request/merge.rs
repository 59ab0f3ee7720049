use super::PullRequestResponse;
use crate::{
    error::{self, Result},
    extractors::Json,
    state::StateTrait,
};
use axum::extract::State;
use chrono::Utc;
use entity::{pr_reviewers, pull_requests};
use sea_orm::{EntityTrait, IntoActiveModel, Set, TransactionTrait};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Request {
    pull_request_id: String,
}

/// OPEN → MERGED, setting `merged_at` exactly once. Merging an already
/// merged pull request is a no-op success returning the current state.
pub async fn merge_pr<S: StateTrait>(
    State(state): State<S>,
    Json(request): Json<Request>,
) -> Result<Json<PullRequestResponse>> {
    let txn = state.db().begin().await?;

    let pr = pull_requests::Entity::find_by_id(request.pull_request_id.clone())
        .one(&txn)
        .await?
        .ok_or(error::PR_NOT_FOUND)?;

    let pr = if pr.status == pull_requests::Status::Open {
        let mut model = pr.into_active_model();
        model.status = Set(pull_requests::Status::Merged);
        model.merged_at = Set(Some(Utc::now().fixed_offset()));

        pull_requests::Entity::update(model).exec(&txn).await?
    } else {
        pr
    };

    let reviewers = pr_reviewers::Entity::find_for_pr(&pr.pull_request_id)
        .all(&txn)
        .await?
        .into_iter()
        .map(|row| row.user_id)
        .collect();

    txn.commit().await?;

    Ok(Json(PullRequestResponse::new(pr, reviewers)))
}
