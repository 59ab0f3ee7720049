mod create;
mod merge;
mod reassign;

use crate::state::StateTrait;
use axum::{routing::post, Router};
use entity::pull_requests;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::Serialize;

pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/create", post(create::create_pr::<S>))
        .route("/merge", post(merge::merge_pr::<S>))
        .route("/reassign", post(reassign::reassign_reviewer::<S>))
}

#[derive(Serialize)]
pub struct PullRequestResponse {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: pull_requests::Status,
    pub assigned_reviewers: Vec<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTimeWithTimeZone,
    #[serde(rename = "mergedAt")]
    pub merged_at: Option<DateTimeWithTimeZone>,
}

impl PullRequestResponse {
    pub(super) fn new(pr: pull_requests::Model, assigned_reviewers: Vec<String>) -> Self {
        Self {
            pull_request_id: pr.pull_request_id,
            pull_request_name: pr.pull_request_name,
            author_id: pr.author_id,
            status: pr.status,
            assigned_reviewers,
            created_at: pr.created_at,
            merged_at: pr.merged_at,
        }
    }
}
