use super::PullRequestResponse;
use crate::{
    engine,
    error::{self, Result},
    extractors::{Json, ValidatedJson},
    state::StateTrait,
};
use axum::{extract::State, http::StatusCode};
use chrono::Utc;
use entity::{pr_reviewers, pull_requests, users};
use sea_orm::{EntityTrait, IntoActiveModel, Set, TransactionTrait};
use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 64))]
    pull_request_id: String,
    #[validate(length(min = 1, max = 256))]
    pull_request_name: String,
    #[validate(length(min = 1, max = 64))]
    author_id: String,
}

/// Creates an OPEN pull request and assigns up to two reviewers from the
/// author's team. Selection and persistence happen in one transaction so a
/// concurrent reader never observes a partially written reviewer set.
pub async fn create_pr<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<PullRequestResponse>)> {
    let txn = state.db().begin().await?;

    let existing = pull_requests::Entity::find_by_id(request.pull_request_id.clone())
        .one(&txn)
        .await?;

    if existing.is_some() {
        return Err(error::PR_EXISTS);
    }

    let author = users::Entity::find_by_id(request.author_id.clone())
        .one(&txn)
        .await?
        .ok_or(error::AUTHOR_OR_TEAM_NOT_FOUND)?;

    let members = users::Entity::find_in_team(&author.team_name)
        .all(&txn)
        .await?;

    let assigned = engine::initial_reviewers(&mut state.rng(), &members, &author.user_id);

    let pr = pull_requests::Model {
        pull_request_id: request.pull_request_id,
        pull_request_name: request.pull_request_name,
        author_id: request.author_id,
        status: pull_requests::Status::Open,
        created_at: Utc::now().fixed_offset(),
        merged_at: None,
    };

    pull_requests::Entity::insert(pr.clone().into_active_model())
        .exec(&txn)
        .await?;

    if !assigned.is_empty() {
        let rows = assigned.iter().map(|user_id| pr_reviewers::ActiveModel {
            pr_id: Set(pr.pull_request_id.clone()),
            user_id: Set(user_id.clone()),
        });

        pr_reviewers::Entity::insert_many(rows).exec(&txn).await?;
    }

    txn.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(PullRequestResponse::new(pr, assigned)),
    ))
}
