mod pull_request;
mod stats;
mod team;
mod user;

use crate::{error::Result, state::StateTrait};
use axum::{
    routing::{get, post},
    Router,
};
use entity::{pr_reviewers, pull_requests, users};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QuerySelect};

pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .nest("/team", team::routes::<S>())
        .nest("/users", user::routes::<S>())
        .nest("/pullRequest", pull_request::routes::<S>())
        .route("/stats", get(stats::get_stats::<S>))
        .route("/health", get(stats::health))
}

/// Removes every inactive reviewer from every OPEN pull request.
///
/// This is a system-wide sweep, deliberately not scoped to a single team:
/// merged pull requests keep their historical reviewer set, open ones must
/// never reference an inactive reviewer after a deactivation.
pub(crate) async fn prune_inactive_reviewers<C: ConnectionTrait>(conn: &C) -> Result {
    let open_ids = pull_requests::Entity::find_open()
        .select_only()
        .column(pull_requests::Column::PullRequestId)
        .into_tuple::<String>()
        .all(conn)
        .await?;

    if open_ids.is_empty() {
        return Ok(());
    }

    let inactive_ids = users::Entity::find()
        .filter(users::Column::IsActive.eq(false))
        .select_only()
        .column(users::Column::UserId)
        .into_tuple::<String>()
        .all(conn)
        .await?;

    if inactive_ids.is_empty() {
        return Ok(());
    }

    pr_reviewers::Entity::delete_many()
        .filter(pr_reviewers::Column::PrId.is_in(open_ids))
        .filter(pr_reviewers::Column::UserId.is_in(inactive_ids))
        .exec(conn)
        .await?;

    Ok(())
}
