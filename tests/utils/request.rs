use super::response::TestResponse;
use axum::{body::Body, Router};
use http::{header, Method, Request};
use serde::Serialize;
use tower::ServiceExt;

#[derive(Debug)]
pub struct RequestBuilder {
    router: Router,
    method: Method,
    uri: String,
    body: Option<Vec<u8>>,
}

#[allow(unused)]
impl RequestBuilder {
    pub(super) fn new(router: Router, method: Method, uri: &str) -> Self {
        RequestBuilder {
            router,
            method,
            uri: uri.to_owned(),
            body: None,
        }
    }

    pub fn json<T>(mut self, value: &T) -> RequestBuilder
    where
        T: Serialize,
    {
        self.body = Some(serde_json::to_vec(value).expect("failed to serialize body"));
        self
    }

    pub async fn send(self) -> TestResponse {
        let mut builder = Request::builder().method(self.method).uri(self.uri);

        let body = match self.body {
            Some(bytes) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(bytes)
            }
            None => Body::empty(),
        };

        let request = builder.body(body).expect("failed to build request");

        let response = self
            .router
            .oneshot(request)
            .await
            .expect("failed to handle request");

        TestResponse::new(response).await
    }
}
