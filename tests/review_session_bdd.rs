//! Behavioural tests for a review session against a fake review server.

mod support;

use std::sync::Arc;

use reviewng::browser::test_support::RecordingBrowser;
use reviewng::cli::build_controller_with;
use reviewng::{Classification, EditId, ReviewConfig, ReviewController, ReviewError};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::json;
use support::review_server::{
    CLASSIFICATION_PATH, NEXT_EDIT_PATH, mount_classification, mount_next_edit_status, mount_queue,
    request_bodies,
};
use support::runtime::{SharedRuntime, ensure_runtime_and_server};
use wiremock::MockServer;

#[derive(ScenarioState, Default)]
struct SessionScenario {
    runtime: Slot<SharedRuntime>,
    server: Slot<MockServer>,
    browser: Slot<Arc<RecordingBrowser>>,
    open_viewer: Slot<bool>,
    controller: Slot<ReviewController>,
    alert: Slot<String>,
}

#[fixture]
fn state() -> SessionScenario {
    SessionScenario::default()
}

fn step_error(message: impl Into<String>) -> ReviewError {
    ReviewError::Io {
        message: message.into(),
    }
}

fn prepare(state: &SessionScenario) -> Result<SharedRuntime, ReviewError> {
    ensure_runtime_and_server(&state.runtime, &state.server)
        .map_err(|error| step_error(format!("failed to prepare scenario: {error}")))
}

fn runtime(state: &SessionScenario) -> Result<SharedRuntime, ReviewError> {
    state
        .runtime
        .get()
        .ok_or_else(|| step_error("runtime not initialised"))
}

/// Runs `operation` against the controller and records any alert it raises.
fn with_controller<T>(
    state: &SessionScenario,
    operation: impl AsyncFnOnce(&mut ReviewController) -> Result<T, ReviewError>,
) -> Result<(), ReviewError> {
    let runtime = runtime(state)?;
    let mut controller = state
        .controller
        .take()
        .ok_or_else(|| step_error("session has not been started"))?;

    let result = runtime.block_on(operation(&mut controller));
    state.controller.set(controller);

    if let Err(error) = result
        && let Some(alert) = error.alert_message()
    {
        state.alert.set(alert);
    }
    Ok(())
}

#[given("a review server whose queue holds edits {first:u64} and {second:u64}")]
fn seed_queue(state: &SessionScenario, first: u64, second: u64) -> Result<(), ReviewError> {
    let runtime = prepare(state)?;
    state
        .server
        .with_ref(|server| runtime.block_on(mount_queue(server, &[first, second])))
        .ok_or_else(|| step_error("mock server not initialised"))
}

#[given("a review server that answers the next-edit request with status {status:u64}")]
fn seed_failing_queue(state: &SessionScenario, status: u64) -> Result<(), ReviewError> {
    let runtime = prepare(state)?;
    let status_code =
        u16::try_from(status).map_err(|_| step_error(format!("invalid status {status}")))?;
    state
        .server
        .with_ref(|server| runtime.block_on(mount_next_edit_status(server, status_code)))
        .ok_or_else(|| step_error("mock server not initialised"))
}

#[given("the server accepts classifications")]
fn accept_classifications(state: &SessionScenario) -> Result<(), ReviewError> {
    let runtime = runtime(state)?;
    state
        .server
        .with_ref(|server| runtime.block_on(mount_classification(server, json!({}), false)))
        .ok_or_else(|| step_error("mock server not initialised"))
}

#[given("the server asks for confirmation before accepting")]
fn demand_confirmation(state: &SessionScenario) -> Result<(), ReviewError> {
    let runtime = runtime(state)?;
    state
        .server
        .with_ref(|server| {
            runtime.block_on(async {
                mount_classification(server, json!({ "confirmation": false }), true).await;
                mount_classification(server, json!({ "confirmation": true }), false).await;
            });
        })
        .ok_or_else(|| step_error("mock server not initialised"))
}

#[given("the reviewer opens every edit in the browser")]
fn enable_viewer(state: &SessionScenario) {
    state.open_viewer.set(true);
}

#[when("the reviewer starts a session")]
fn start_session(state: &SessionScenario) -> Result<(), ReviewError> {
    let server_url = state
        .server
        .with_ref(MockServer::uri)
        .ok_or_else(|| step_error("mock server not initialised"))?;
    let config = ReviewConfig {
        server_url: Some(server_url),
        open_viewer: state.open_viewer.get().unwrap_or(false),
        ..ReviewConfig::default()
    };
    let browser = Arc::new(RecordingBrowser::default());
    state.browser.set(Arc::clone(&browser));
    state
        .controller
        .set(build_controller_with(&config, browser)?);

    with_controller(state, async |controller| controller.start().await)
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[when("the reviewer classifies the edit as {label} with comment {comment}")]
fn classify_edit(state: &SessionScenario, label: String, comment: String) -> Result<(), ReviewError> {
    let classification = Classification::new(label.trim_matches('"'));
    let text = comment.trim_matches('"').to_owned();
    with_controller(state, async move |controller| {
        controller.set_comment(text);
        controller.classify(classification, false).await
    })
}

#[when("the reviewer confirms")]
fn confirm(state: &SessionScenario) -> Result<(), ReviewError> {
    with_controller(state, async |controller| {
        controller.resolve_confirmation(true).await
    })
}

#[then("the displayed edit is {edit_id:u64}")]
fn assert_displayed(state: &SessionScenario, edit_id: u64) -> Result<(), ReviewError> {
    let displayed = state
        .controller
        .with_ref(|controller| controller.state().current_edit())
        .ok_or_else(|| step_error("session has not been started"))?;

    if displayed == Some(EditId::new(edit_id)) {
        Ok(())
    } else {
        Err(step_error(format!("expected edit {edit_id}, found {displayed:?}")))
    }
}

#[then("no edit is displayed")]
fn assert_nothing_displayed(state: &SessionScenario) -> Result<(), ReviewError> {
    let displayed = state
        .controller
        .with_ref(|controller| controller.state().current_edit())
        .ok_or_else(|| step_error("session has not been started"))?;

    match displayed {
        None => Ok(()),
        Some(edit_id) => Err(step_error(format!("unexpected edit {edit_id} on display"))),
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the viewer shows {url}")]
fn assert_viewer(state: &SessionScenario, url: String) -> Result<(), ReviewError> {
    let expected = url.trim_matches('"');
    let actual = state
        .controller
        .with_ref(|controller| controller.state().viewer_url().map(ToString::to_string))
        .flatten()
        .ok_or_else(|| step_error("no viewer URL rendered"))?;

    if actual == expected {
        Ok(())
    } else {
        Err(step_error(format!("expected viewer {expected}, found {actual}")))
    }
}

#[then("a confirmation is pending for edit {edit_id:u64}")]
fn assert_pending(state: &SessionScenario, edit_id: u64) -> Result<(), ReviewError> {
    let pending = state
        .controller
        .with_ref(|controller| {
            controller
                .state()
                .pending_confirmation()
                .map(|request| request.edit_id)
        })
        .flatten();

    if pending == Some(EditId::new(edit_id)) {
        Ok(())
    } else {
        Err(step_error(format!(
            "expected confirmation for edit {edit_id}, found {pending:?}"
        )))
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the browser opened {count:u64} pages, the last being {url}")]
fn assert_browser(state: &SessionScenario, count: u64, url: String) -> Result<(), ReviewError> {
    let opened = state
        .browser
        .with_ref(|browser| browser.opened())
        .ok_or_else(|| step_error("session has not been started"))?;
    let expected = url.trim_matches('"');
    let actual_count = u64::try_from(opened.len()).unwrap_or(u64::MAX);

    match opened.last() {
        Some(last) if actual_count == count && last.as_str() == expected => Ok(()),
        _ => Err(step_error(format!(
            "expected {count} pages ending with {expected}, found {opened:?}"
        ))),
    }
}

fn count_requests(state: &SessionScenario, endpoint: &str) -> Result<u64, ReviewError> {
    let runtime = runtime(state)?;
    state
        .server
        .with_ref(|server| runtime.block_on(request_bodies(server, endpoint)).len())
        .map(|len| u64::try_from(len).unwrap_or(u64::MAX))
        .ok_or_else(|| step_error("mock server not initialised"))
}

#[then("the server received {count:u64} next-edit requests")]
fn assert_next_edit_requests(state: &SessionScenario, count: u64) -> Result<(), ReviewError> {
    let actual = count_requests(state, NEXT_EDIT_PATH)?;
    if actual == count {
        Ok(())
    } else {
        Err(step_error(format!(
            "expected {count} next-edit requests, found {actual}"
        )))
    }
}

#[then("the server received {count:u64} classification requests")]
fn assert_classification_requests(
    state: &SessionScenario,
    count: u64,
) -> Result<(), ReviewError> {
    let actual = count_requests(state, CLASSIFICATION_PATH)?;
    if actual == count {
        Ok(())
    } else {
        Err(step_error(format!(
            "expected {count} classification requests, found {actual}"
        )))
    }
}

#[then("the last classification carried the confirmation flag")]
fn assert_confirmed(state: &SessionScenario) -> Result<(), ReviewError> {
    let runtime = runtime(state)?;
    let bodies = state
        .server
        .with_ref(|server| runtime.block_on(request_bodies(server, CLASSIFICATION_PATH)))
        .ok_or_else(|| step_error("mock server not initialised"))?;

    match bodies.last() {
        Some(body) if body.get("confirmation") == Some(&json!(true)) => Ok(()),
        other => Err(step_error(format!(
            "expected a confirmed classification, found {other:?}"
        ))),
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the alert reads {message}")]
fn assert_alert(state: &SessionScenario, message: String) -> Result<(), ReviewError> {
    let expected = message.trim_matches('"');
    let actual = state
        .alert
        .get()
        .ok_or_else(|| step_error("no alert was raised"))?;

    if actual == expected {
        Ok(())
    } else {
        Err(step_error(format!("expected alert {expected}, found {actual}")))
    }
}

#[scenario(path = "tests/features/review_session.feature", index = 0)]
fn classification_advances(state: SessionScenario) {
    let _ = state;
}

#[scenario(path = "tests/features/review_session.feature", index = 1)]
fn confirmation_round_trip(state: SessionScenario) {
    let _ = state;
}

#[scenario(path = "tests/features/review_session.feature", index = 2)]
fn load_failure_alerts(state: SessionScenario) {
    let _ = state;
}

#[scenario(path = "tests/features/review_session.feature", index = 3)]
fn empty_queue_alerts(state: SessionScenario) {
    let _ = state;
}

#[scenario(path = "tests/features/review_session.feature", index = 4)]
fn viewer_opens_each_edit(state: SessionScenario) {
    let _ = state;
}
