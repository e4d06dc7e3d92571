//! Intent API: sites and health, under `/dna/intent/api/v1`.
//!
//! Site mutations are asynchronous unless [`IntentHeaders::runsync`] is set.
//! The controller enforces `__timeout`; the client only forwards it.

use dnac_core::{CallPath, CallQuery, DnacClient, Envelope};
use serde::{Deserialize, Serialize};

use crate::common::EndpointCall;

mod models;

pub use self::models::*;

/// Execution control headers of the intent mutations.
///
/// Unset headers are not sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IntentHeaders {
    /// Run the call synchronously.
    #[serde(rename = "__runsync")]
    pub runsync: Option<bool>,
    /// Seconds the controller waits for a synchronous call.
    #[serde(rename = "__timeout")]
    pub timeout: Option<u32>,
    /// Keep the output of an asynchronous call for later retrieval.
    #[serde(rename = "__persistbapioutput")]
    pub persist_bapi_output: Option<bool>,
}

impl IntentHeaders {
    /// Synchronous execution bounded by `timeout` seconds.
    pub fn sync(timeout: u32) -> Self {
        Self {
            runsync: Some(true),
            timeout: Some(timeout),
            persist_bapi_output: None,
        }
    }
}

/// Kind of site created by [`create_site`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteType {
    /// A region grouping other areas and buildings.
    #[default]
    Area,
    /// A building, with an address and coordinates.
    Building,
    /// A floor of a building.
    Floor,
}

/// Creates an area, building, or floor.
pub fn create_site(
    client: &DnacClient,
    headers: &IntentHeaders,
    site: &SiteCreateRequest,
) -> EndpointCall<AsyncIntentResult> {
    Ok(client
        .post("/dna/intent/api/v1/site")?
        .with_header_params(headers)?
        .json(site)?
        .into_json())
}

/// Assigns devices, by management address, to a site.
pub fn assign_devices_to_site(
    client: &DnacClient,
    site_id: &str,
    headers: &IntentHeaders,
    devices: &AssignDevicesRequest,
) -> EndpointCall<AsyncIntentResult> {
    let path = CallPath::from("/dna/intent/api/v1/site/{siteId}/device").add_param("siteId", site_id);
    Ok(client
        .post(path)?
        .with_header_params(headers)?
        .json(devices)?
        .into_json())
}

/// Health of every site, at `timestamp` (epoch milliseconds) or now.
pub fn get_site_health(
    client: &DnacClient,
    timestamp: Option<i64>,
) -> EndpointCall<Envelope<Vec<SiteHealth>>> {
    let query = CallQuery::new().add_param("timestamp", timestamp);
    Ok(client
        .get("/dna/intent/api/v1/site-health")?
        .with_query(query)
        .into_json())
}

/// Overall network health, at `timestamp` (epoch milliseconds) or now.
pub fn get_network_health(
    client: &DnacClient,
    timestamp: Option<i64>,
) -> EndpointCall<NetworkHealth> {
    let query = CallQuery::new().add_param("timestamp", timestamp);
    Ok(client
        .get("/dna/intent/api/v1/network-health")?
        .with_query(query)
        .into_json())
}

/// Client health per site.
pub fn get_client_health(
    client: &DnacClient,
    timestamp: Option<i64>,
) -> EndpointCall<Envelope<Vec<ClientHealth>>> {
    let query = CallQuery::new().add_param("timestamp", timestamp);
    Ok(client
        .get("/dna/intent/api/v1/client-health")?
        .with_query(query)
        .into_json())
}

/// Details of the client with `mac_address`.
pub fn get_client_detail(
    client: &DnacClient,
    mac_address: &str,
    timestamp: Option<i64>,
) -> EndpointCall<ClientDetail> {
    let query = CallQuery::new()
        .add_param("timestamp", timestamp)
        .add_param("macAddress", mac_address);
    Ok(client
        .get("/dna/intent/api/v1/client-detail")?
        .with_query(query)
        .into_json())
}

/// Details of one device.
///
/// `search_by` names the kind of `identifier`: `macAddress`, `uuid`, or `nwDeviceName`.
pub fn get_network_device_detail(
    client: &DnacClient,
    search_by: &str,
    identifier: &str,
    timestamp: Option<i64>,
) -> EndpointCall<Envelope<DeviceDetail>> {
    let query = CallQuery::new()
        .add_param("timestamp", timestamp)
        .add_param("searchBy", search_by)
        .add_param("identifier", identifier);
    Ok(client
        .get("/dna/intent/api/v1/network-device-detail")?
        .with_query(query)
        .into_json())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::common::testing::{assert_round_trip, body, client, url};

    fn header(call: &dnac_core::RequestBuilder<AsyncIntentResult>, name: &str) -> Option<String> {
        let request = call.to_request().expect("should build request");
        request
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    }

    #[test]
    fn should_forward_intent_headers_as_strings() {
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

        let call =
            create_site(&client(), &IntentHeaders::sync(30), &site).expect("should build call");

        assert_eq!(header(&call, "__runsync").as_deref(), Some("true"));
        assert_eq!(header(&call, "__timeout").as_deref(), Some("30"));
        assert_eq!(header(&call, "__persistbapioutput"), None);
        insta::assert_snapshot!(body(&call), @r#"{"type":"area","site":{"area":{"name":"Paris","parentName":"Global/France"}}}"#);
    }

    #[test]
    fn should_send_no_header_by_default() {
        let devices = AssignDevicesRequest {
            device: vec![DeviceIp {
                ip: "10.10.20.81".to_string(),
            }],
        };

        let call = assign_devices_to_site(&client(), "site-1", &IntentHeaders::default(), &devices)
            .expect("should build call");

        assert_eq!(header(&call, "__runsync"), None);
        assert_eq!(url(&call), "http://dnac.local/dna/intent/api/v1/site/site-1/device");
        insta::assert_snapshot!(body(&call), @r#"{"device":[{"ip":"10.10.20.81"}]}"#);
    }

    #[test]
    fn should_omit_missing_timestamp() {
        let call = get_site_health(&client(), None).expect("should build call");

        assert_eq!(url(&call), "http://dnac.local/dna/intent/api/v1/site-health");
    }

    #[test]
    fn should_query_device_detail() {
        let call = get_network_device_detail(&client(), "macAddress", "00:1e:7a:2b:3c:4d", None)
            .expect("should build call");

        insta::assert_snapshot!(url(&call), @"http://dnac.local/dna/intent/api/v1/network-device-detail?searchBy=macAddress&identifier=00%3A1e%3A7a%3A2b%3A3c%3A4d");
    }

    #[test]
    fn should_decode_network_health_with_irregular_key() {
        let json = r#"{
            "version": "1.0",
            "response": [{"time": "2026-10-12T10:00:00.000+0000", "healthScore": 100, "totalCount": 14.0, "goodCount": 14.0}],
            "measuredBy": "global",
            "latestMeasuredByEntity": null,
            "latestHealthScore": 100,
            "monitoredDevices": 14,
            "noHealthDevices": 0,
            "healthDistirubution": [{"category": "Access", "totalCount": 2.0, "healthScore": 100, "goodPercentage": 100.0}]
        }"#;

        let health: NetworkHealth = serde_json::from_str(json).expect("valid network health");

        assert_eq!(health.latest_health_score, Some(100));
        assert_eq!(health.response[0].health_score, Some(100));
        assert_eq!(health.health_distribution[0].category.as_deref(), Some("Access"));
    }

    #[test]
    fn should_decode_site_health() {
        let json = r#"{
            "response": [{
                "siteName": "Global",
                "siteId": "site-1",
                "siteType": "area",
                "healthyNetworkDevicePercentage": 100,
                "numberOfClients": null,
                "networkHealthAverage": 98.5
            }],
            "version": "1.0"
        }"#;

        let health: Envelope<Vec<SiteHealth>> = serde_json::from_str(json).expect("valid site health");

        let site = &health.response[0];
        assert_eq!(site.site_name.as_deref(), Some("Global"));
        assert_eq!(site.healthy_network_device_percentage, Some(100.0));
        assert_eq!(site.number_of_clients, None);
    }

    #[rstest]
    #[case::building(
        assert_round_trip::<SiteCreateRequest>,
        r#"{"type": "building", "site": {"building": {"name": "HQ", "parentName": "Global/France/Paris", "address": "1 rue de Rivoli", "latitude": 48.8566, "longitude": 2.3522}}}"#
    )]
    #[case::floor(
        assert_round_trip::<SiteCreateRequest>,
        r#"{"type": "floor", "site": {"floor": {"name": "Floor 1", "parentName": "Global/France/Paris/HQ", "rfModel": "Cubes And Walled Offices", "width": 100.5, "length": 50.25, "height": 3.5}}}"#
    )]
    #[case::async_result(
        assert_round_trip::<AsyncIntentResult>,
        r#"{"executionId": "exec-1", "executionStatusUrl": "/dna/platform/management/business-api/v1/execution-status/exec-1", "message": "accepted"}"#
    )]
    #[case::site_health(
        assert_round_trip::<SiteHealth>,
        r#"{"siteId": "site-1", "siteName": "Paris", "siteType": "area", "healthyClientsPercentage": 87.5, "networkHealthAverage": 92.5, "numberOfClients": 12.5, "dnacInfo": {"uuid": "dnac-1"}}"#
    )]
    #[case::network_health(
        assert_round_trip::<NetworkHealth>,
        r#"{
            "version": "1.0",
            "response": [{"time": "2025-10-12T10:00:00.000+0000", "healthScore": 95, "totalCount": 20.5, "goodCount": 19.5}],
            "healthDistirubution": [{"category": "Access", "healthScore": 100, "goodPercentage": 99.5, "kpiMetrics": [{"key": "cpu"}]}],
            "monitoredDevices": 20,
            "latestHealthScore": 95
        }"#
    )]
    #[case::client_health(
        assert_round_trip::<ClientHealth>,
        r#"{"siteId": "global", "scoreDetail": [{"scoreCategory": {"scoreCategory": "CLIENT_TYPE", "value": "ALL"}, "scoreValue": 85, "clientCount": 10, "scoreList": [{"scoreCategory": {"scoreCategory": "SCORE_TYPE", "value": "POOR"}, "clientCount": 1}]}]}"#
    )]
    #[case::client_detail(
        assert_round_trip::<ClientDetail>,
        r#"{"detail": {"id": "aa:bb:cc:dd:ee:ff", "hostName": "laptop", "hostMac": "aa:bb:cc:dd:ee:ff", "hostType": "WIRELESS", "ssid": "corp", "issueCount": 0.5, "healthScore": [{"healthType": "OVERALL", "score": 10}]}, "topology": {"nodes": [{"id": "aa:bb:cc:dd:ee:ff"}]}, "connectionInfo": {"band": "5"}}"#
    )]
    #[case::device_detail(
        assert_round_trip::<DeviceDetail>,
        r#"{"nwDeviceName": "edge-1", "nwDeviceId": "abc-123", "HAStatus": "Non-redundant", "overallHealth": 10, "cpuScore": 10, "memory": "37.5", "managementIpAddr": "10.10.20.81"}"#
    )]
    fn should_round_trip_models(#[case] check: fn(&str), #[case] json: &str) {
        check(json);
    }
}
