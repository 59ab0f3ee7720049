use axum::{
    body::{to_bytes, Body},
    response::Response,
};
use bytes::Bytes;
use http::StatusCode;
use serde::de::DeserializeOwned;

#[derive(Debug)]
pub struct TestResponse {
    status: StatusCode,
    body: Bytes,
}

#[allow(unused)]
impl TestResponse {
    pub(super) async fn new(response: Response<Body>) -> Self {
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");

        TestResponse { status, body }
    }

    pub async fn json<T: DeserializeOwned>(self) -> T {
        serde_json::from_slice(&self.body).expect("failed to deserialize to json")
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}
