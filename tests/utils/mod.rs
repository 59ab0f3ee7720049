pub mod macros;
pub mod prelude;
mod request;
mod response;
pub mod setup;

use axum::Router;
use http::{Method, StatusCode};
use request::RequestBuilder;
use serde_json::{json, Value};

#[derive(Clone)]
pub struct App {
    router: Router,
}

#[allow(unused)]
impl App {
    pub async fn new() -> Self {
        setup::setup().await
    }

    pub(super) fn with_router(router: Router) -> Self {
        App { router }
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.router.clone(), Method::GET, url)
    }

    pub fn post(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.router.clone(), Method::POST, url)
    }

    /// Upserts a team where every member is named after its id.
    pub async fn add_team(&self, team_name: &str, members: &[(&str, bool)]) {
        let members = members
            .iter()
            .map(|(user_id, is_active)| {
                json!({
                    "user_id": user_id,
                    "username": format!("user {user_id}"),
                    "is_active": is_active,
                })
            })
            .collect::<Vec<_>>();

        let res = self
            .post("/team/add")
            .json(&json!({
                "team_name": team_name,
                "members": members,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);
    }

    pub async fn create_pr(&self, pr_id: &str, author_id: &str) -> Value {
        let res = self
            .post("/pullRequest/create")
            .json(&json!({
                "pull_request_id": pr_id,
                "pull_request_name": format!("PR {pr_id}"),
                "author_id": author_id,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);
        res.json::<Value>().await
    }

    pub async fn merge_pr(&self, pr_id: &str) -> Value {
        let res = self
            .post("/pullRequest/merge")
            .json(&json!({ "pull_request_id": pr_id }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);
        res.json::<Value>().await
    }
}

#[allow(unused)]
pub fn reviewer_ids(pr: &Value) -> Vec<String> {
    pr["assigned_reviewers"]
        .as_array()
        .expect("assigned_reviewers is not an array")
        .iter()
        .map(|v| v.as_str().expect("reviewer id is not a string").to_owned())
        .collect()
}
