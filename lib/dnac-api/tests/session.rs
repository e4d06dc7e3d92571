#![allow(missing_docs, clippy::expect_used)]

use assert2::{check, let_assert};
use axum::http::{Method, StatusCode};
use dnac_api::misc;
use dnac_core::Authentication;
use rstest::rstest;
use serde_json::json;

mod common;
pub use self::common::*;

#[rstest]
#[tokio::test]
async fn should_switch_to_token_after_login(
    #[future] controller: MockController,
) -> anyhow::Result<()> {
    let controller = controller.await;
    controller.respond_json(
        Method::POST,
        "/api/system/v1/auth/token",
        StatusCode::OK,
        &json!({"Token": "eyJ0eXAiOiJKV1Qi"}),
    );
    controller.respond_json(
        Method::GET,
        "/api/v1/task/task-1",
        StatusCode::OK,
        &json!({
            "response": {"id": "task-1", "isError": false, "progress": "done", "endTime": 1_700_000_001_000_i64},
            "version": "1.0"
        }),
    );

    let authorization = Authentication::basic_credentials("devnetuser", "Cisco123!")?;
    let token = misc::post_auth_token(&controller, &authorization)?.await?;
    let client = controller.with_authentication(Authentication::Token(token.token));
    let task = misc::get_task_by_id(&client, "task-1")?.await?;

    check!(task.response.is_error == Some(false));

    let requests = controller.requests();
    let_assert!([login, poll] = requests.as_slice());
    check!(login.header("authorization") == Some("Basic ZGV2bmV0dXNlcjpDaXNjbzEyMyE="));
    check!(login.header("x-auth-token") == None);
    check!(poll.header("x-auth-token") == Some("eyJ0eXAiOiJKV1Qi"));
    check!(poll.header("authorization") == None);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn should_reject_bad_credentials(
    #[future] controller: MockController,
) -> anyhow::Result<()> {
    let controller = controller.await;
    controller.respond_json(
        Method::POST,
        "/api/system/v1/auth/token",
        StatusCode::UNAUTHORIZED,
        &json!({"error": "Authentication has failed. Please provide valid credentials."}),
    );

    let authorization = Authentication::basic_credentials("devnetuser", "wrong")?;
    let result = misc::post_auth_token(&controller, &authorization)?.await;

    let_assert!(Err(error) = result);
    check!(error.status_code() == Some(401));
    check!(error.error_response() == None);
    Ok(())
}
