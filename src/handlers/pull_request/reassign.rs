use super::PullRequestResponse;
use crate::{
    engine,
    error::{self, Result},
    extractors::Json,
    state::StateTrait,
};
use axum::extract::State;
use entity::{pr_reviewers, pull_requests, users};
use sea_orm::{EntityTrait, Set, TransactionTrait};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Deserialize)]
pub struct Request {
    pull_request_id: String,
    #[serde(alias = "old_reviewer_id")]
    old_user_id: String,
}

#[derive(Serialize)]
pub struct Response {
    pr: PullRequestResponse,
    replaced_by: String,
}

/// Swaps one assigned reviewer for a fresh pick from the old reviewer's
/// team. The reviewer set keeps its cardinality.
///
/// The old join row is removed with a keyed delete; `rows_affected == 0`
/// means someone else already took it and the call fails with NOT_ASSIGNED.
/// That compare-and-swap serialises concurrent reassignments of the same
/// reviewer without relying on backend-specific row locks.
pub async fn reassign_reviewer<S: StateTrait>(
    State(state): State<S>,
    Json(request): Json<Request>,
) -> Result<Json<Response>> {
    let txn = state.db().begin().await?;

    let pr = pull_requests::Entity::find_by_id(request.pull_request_id.clone())
        .one(&txn)
        .await?
        .ok_or(error::PR_NOT_FOUND)?;

    if pr.status == pull_requests::Status::Merged {
        return Err(error::PR_MERGED);
    }

    let assigned = pr_reviewers::Entity::find_for_pr(&pr.pull_request_id)
        .all(&txn)
        .await?
        .into_iter()
        .map(|row| row.user_id)
        .collect::<HashSet<_>>();

    let removed = pr_reviewers::Entity::delete_by_id((
        pr.pull_request_id.clone(),
        request.old_user_id.clone(),
    ))
    .exec(&txn)
    .await?;

    if removed.rows_affected == 0 {
        return Err(error::NOT_ASSIGNED);
    }

    // candidates come from the *old* reviewer's team, which is not
    // necessarily the author's team
    let old_reviewer = users::Entity::find_by_id(request.old_user_id.clone())
        .one(&txn)
        .await?
        .ok_or(error::USER_NOT_FOUND)?;

    let members = users::Entity::find_in_team(&old_reviewer.team_name)
        .all(&txn)
        .await?;

    let Some(new_reviewer) = engine::replacement_reviewer(&mut state.rng(), &members, &assigned)
    else {
        // transaction drop rolls the delete back
        return Err(error::NO_CANDIDATE);
    };

    let row = pr_reviewers::ActiveModel {
        pr_id: Set(pr.pull_request_id.clone()),
        user_id: Set(new_reviewer.clone()),
    };

    pr_reviewers::Entity::insert(row).exec(&txn).await?;

    txn.commit().await?;

    let mut reviewers = assigned;
    reviewers.remove(&request.old_user_id);
    reviewers.insert(new_reviewer.clone());

    let mut reviewers = reviewers.into_iter().collect::<Vec<_>>();
    reviewers.sort();

    Ok(Json(Response {
        pr: PullRequestResponse::new(pr, reviewers),
        replaced_by: new_reviewer,
    }))
}
