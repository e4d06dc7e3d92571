#![allow(missing_docs, clippy::expect_used)]

use assert2::check;
use axum::http::{Method, StatusCode};
use dnac_api::dna_intent::{
    self, Area, IntentHeaders, SiteCreateRequest, SiteDetails, SiteType,
};
use rstest::rstest;
use serde_json::json;

mod common;
pub use self::common::*;

#[rstest]
#[tokio::test]
async fn should_create_site_with_execution_headers(
    #[future] controller: MockController,
) -> anyhow::Result<()> {
    let controller = controller.await;
    controller.respond_json(
        Method::POST,
        "/dna/intent/api/v1/site",
        StatusCode::ACCEPTED,
        &json!({
            "executionId": "exec-1",
            "executionStatusUrl": "/dna/platform/management/business-api/v1/execution-status/exec-1",
            "message": "The request has been accepted for execution"
        }),
    );
    let site = SiteCreateRequest {
        site_type: SiteType::Area,
        site: SiteDetails {
            area: Some(Area {
                name: "Paris".to_string(),
                parent_name: "Global/France".to_string(),
            }),
            ..Default::default()
        },
    };
    let headers = IntentHeaders {
        runsync: Some(false),
        timeout: None,
        persist_bapi_output: Some(true),
    };

    let result = dna_intent::create_site(&controller, &headers, &site)?.await?;

    check!(result.execution_id.as_deref() == Some("exec-1"));
    let request = controller.last_request();
    check!(request.header("__runsync") == Some("false"));
    check!(request.header("__timeout") == None);
    check!(request.header("__persistbapioutput") == Some("true"));
    check!(request.header("content-type") == Some("application/json"));
    check!(
        request.body_json()
            == json!({"type": "area", "site": {"area": {"name": "Paris", "parentName": "Global/France"}}})
    );
    Ok(())
}

#[rstest]
#[tokio::test]
async fn should_decode_raw_network_health(
    #[future] controller: MockController,
) -> anyhow::Result<()> {
    let controller = controller.await;
    controller.respond_json(
        Method::GET,
        "/dna/intent/api/v1/network-health",
        StatusCode::OK,
        &json!({
            "version": "1.0",
            "response": [{"time": "2026-10-12T10:00:00.000+0000", "healthScore": 90}],
            "latestHealthScore": 90,
            "monitoredDevices": 14
        }),
    );

    let health = dna_intent::get_network_health(&controller, Some(1_760_263_200_000))?.await?;

    check!(health.latest_health_score == Some(90));
    check!(health.monitored_devices == Some(14));
    check!(controller.last_request().query.as_deref() == Some("timestamp=1760263200000"));
    Ok(())
}
