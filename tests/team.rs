mod utils;

use utils::prelude::*;

mod create {
    use super::*;

    #[tokio::test]
    async fn success() {
        let app = App::new().await;

        let res = app
            .post("/team/create")
            .json(&json!({
                "team_name": "backend",
                "members": [
                    { "user_id": "u1", "username": "Alice", "is_active": true },
                    { "user_id": "u2", "username": "Bob", "is_active": false },
                ],
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let body = res.json::<Value>().await;
        assert_json_eq!(
            body,
            json!({
                "team_name": "backend",
                "members": [
                    { "user_id": "u1", "username": "Alice", "is_active": true },
                    { "user_id": "u2", "username": "Bob", "is_active": false },
                ],
            })
        );
    }

    #[tokio::test]
    async fn duplicate_name_is_rejected() {
        let app = App::new().await;
        app.add_team("backend", &[("u1", true)]).await;

        let res = app
            .post("/team/create")
            .json(&json!({
                "team_name": "backend",
                "members": [],
            }))
            .send()
            .await;

        assert_error!(res, error::TEAM_EXISTS);
    }

    #[tokio::test]
    async fn missing_fields() {
        let app = App::new().await;

        let res = app
            .post("/team/create")
            .json(&json!({ "team_name": "backend" }))
            .send()
            .await;

        assert_error!(res, error::JSON_MISSING_FIELDS);
    }
}

mod add {
    use super::*;

    #[tokio::test]
    async fn creates_team_when_missing() {
        let app = App::new().await;

        let res = app
            .post("/team/add")
            .json(&json!({
                "team_name": "backend",
                "members": [
                    { "user_id": "u1", "username": "Alice", "is_active": true },
                ],
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn is_additive_and_never_removes_members() {
        let app = App::new().await;
        app.add_team("backend", &[("u1", true), ("u2", true)]).await;

        // a second call mentioning only a new member must keep u1 and u2
        let res = app
            .post("/team/add")
            .json(&json!({
                "team_name": "backend",
                "members": [
                    { "user_id": "u3", "username": "Carol", "is_active": true },
                ],
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let body = res.json::<Value>().await;
        let ids = body["members"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["user_id"].as_str().unwrap().to_owned())
            .collect::<Vec<_>>();

        assert_eq!(ids, vec!["u1", "u2", "u3"]);
    }

    #[tokio::test]
    async fn updates_existing_members() {
        let app = App::new().await;
        app.add_team("backend", &[("u1", true)]).await;

        let res = app
            .post("/team/add")
            .json(&json!({
                "team_name": "backend",
                "members": [
                    { "user_id": "u1", "username": "renamed", "is_active": false },
                ],
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let body = res.json::<Value>().await;
        assert_json_eq!(
            body["members"],
            json!([{ "user_id": "u1", "username": "renamed", "is_active": false }])
        );
    }

    #[tokio::test]
    async fn moves_user_between_teams() {
        let app = App::new().await;
        app.add_team("old-team", &[("u1", true)]).await;
        app.add_team("new-team", &[("u1", true)]).await;

        let res = app.get("/team/get?team_name=old-team").send().await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = res.json::<Value>().await;
        assert_eq!(body["members"].as_array().unwrap().len(), 0);

        let res = app.get("/team/get?team_name=new-team").send().await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = res.json::<Value>().await;
        assert_eq!(body["members"][0]["user_id"], "u1");
    }
}

mod get {
    use super::*;

    #[tokio::test]
    async fn not_found() {
        let app = App::new().await;

        let res = app.get("/team/get?team_name=ghosts").send().await;

        assert_error!(res, error::TEAM_NOT_FOUND);
    }

    #[tokio::test]
    async fn returns_membership_snapshot() {
        let app = App::new().await;
        app.add_team("backend", &[("u2", false), ("u1", true)]).await;

        let res = app.get("/team/get?team_name=backend").send().await;

        assert_eq!(res.status(), StatusCode::OK);

        let body = res.json::<Value>().await;
        assert_json_eq!(
            body,
            json!({
                "team_name": "backend",
                "members": [
                    { "user_id": "u1", "username": "user u1", "is_active": true },
                    { "user_id": "u2", "username": "user u2", "is_active": false },
                ],
            })
        );
    }
}

mod deactivate {
    use super::*;

    #[tokio::test]
    async fn not_found() {
        let app = App::new().await;

        let res = app
            .post("/team/deactivate")
            .json(&json!({ "team_name": "ghosts" }))
            .send()
            .await;

        assert_error!(res, error::TEAM_NOT_FOUND);
    }

    #[tokio::test]
    async fn deactivates_every_member() {
        let app = App::new().await;
        app.add_team("backend", &[("u1", true), ("u2", true)]).await;

        let res = app
            .post("/team/deactivate")
            .json(&json!({ "team_name": "backend" }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let body = res.json::<Value>().await;
        assert_eq!(body["status"], "OK");
        assert_eq!(body["deactivated_users"].as_array().unwrap().len(), 2);

        let res = app.get("/team/get?team_name=backend").send().await;
        let body = res.json::<Value>().await;
        for member in body["members"].as_array().unwrap() {
            assert_eq!(member["is_active"], false);
        }
    }

    #[tokio::test]
    async fn prunes_reviewers_from_open_prs() {
        let app = App::new().await;
        app.add_team("backend", &[("author", true), ("r1", true), ("r2", true)])
            .await;

        let pr = app.create_pr("pr-1", "author").await;
        let reviewers = reviewer_ids(&pr);
        assert_eq!(reviewers.len(), 2);

        let res = app
            .post("/team/deactivate")
            .json(&json!({ "team_name": "backend" }))
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::OK);

        // the PR is still open, so the reviewers must be gone
        for reviewer in &reviewers {
            let res = app
                .get(&format!("/users/getReview?user_id={reviewer}"))
                .send()
                .await;
            let body = res.json::<Value>().await;
            assert_eq!(body["pull_requests"].as_array().unwrap().len(), 0);
        }
    }

    #[tokio::test]
    async fn merged_prs_keep_their_reviewers() {
        let app = App::new().await;
        app.add_team("backend", &[("author", true), ("r1", true)]).await;

        let pr = app.create_pr("pr-1", "author").await;
        assert_eq!(reviewer_ids(&pr), vec!["r1"]);

        app.merge_pr("pr-1").await;

        let res = app
            .post("/team/deactivate")
            .json(&json!({ "team_name": "backend" }))
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::OK);

        let res = app.get("/users/getReview?user_id=r1").send().await;
        let body = res.json::<Value>().await;
        assert_eq!(body["pull_requests"].as_array().unwrap().len(), 1);
        assert_eq!(body["pull_requests"][0]["status"], "MERGED");
    }
}
