//! Wiremock responders for the review service endpoints.

use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path of the next-edit endpoint.
pub const NEXT_EDIT_PATH: &str = "/api/edit/next";
/// Path of the classification endpoint.
pub const CLASSIFICATION_PATH: &str = "/api/user-classification";

/// Serves each id once, in order, from the next-edit endpoint.
pub async fn mount_queue(server: &MockServer, edit_ids: &[u64]) {
    for edit_id in edit_ids {
        Mock::given(method("GET"))
            .and(path(NEXT_EDIT_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "edit_id": edit_id })))
            .up_to_n_times(1)
            .mount(server)
            .await;
    }
}

/// Answers the next-edit endpoint with a bare status code.
pub async fn mount_next_edit_status(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path(NEXT_EDIT_PATH))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Answers classifications whose body contains `matching` with
/// `require_confirmation`.
pub async fn mount_classification(server: &MockServer, matching: Value, require_confirmation: bool) {
    Mock::given(method("POST"))
        .and(path(CLASSIFICATION_PATH))
        .and(body_partial_json(matching))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "require_confirmation": require_confirmation })),
        )
        .mount(server)
        .await;
}

/// Returns the JSON bodies of every request sent to `endpoint`.
pub async fn request_bodies(server: &MockServer, endpoint: &str) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|request| request.url.path() == endpoint)
        .map(|request| serde_json::from_slice(&request.body).unwrap_or(Value::Null))
        .collect()
}
