//! Network discovery: `/api/v1/discovery`.
//!
//! Starting, updating, or deleting a discovery returns a task; the
//! discovery itself runs asynchronously on the controller.

use dnac_core::{CallPath, CallQuery, DnacClient, Envelope};
use serde::Serialize;

use crate::common::{CountResult, EndpointCall, SortOrder, TaskIdResult};

mod models;

pub use self::models::*;

/// Filters of [`get_discovery_summary`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverySummaryFilter {
    pub task_id: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub ip_address: Vec<String>,
    pub ping_status: Vec<String>,
    pub snmp_status: Vec<String>,
    pub cli_status: Vec<String>,
    pub netconf_status: Vec<String>,
    pub http_status: Vec<String>,
}

/// Filters of [`get_discovery_jobs_by_id`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryJobFilter {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub ip_address: Option<String>,
}

/// Filters of [`get_discovery_jobs`], besides the required address.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryJobsQuery {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub name: Option<String>,
}

/// Number of discoveries.
pub fn get_discovery_count(client: &DnacClient) -> EndpointCall<CountResult> {
    Ok(client.get("/api/v1/discovery/count")?.into_json())
}

/// Starts a new discovery.
pub fn start_discovery(
    client: &DnacClient,
    request: &InventoryRequest,
) -> EndpointCall<TaskIdResult> {
    Ok(client.post("/api/v1/discovery")?.json(request)?.into_json())
}

/// Updates an existing discovery, e.g. sets `discovery_status` to `Active` to rerun it.
pub fn update_discovery(client: &DnacClient, discovery: &Discovery) -> EndpointCall<TaskIdResult> {
    Ok(client.put("/api/v1/discovery")?.json(discovery)?.into_json())
}

/// Deletes every discovery.
pub fn delete_all_discoveries(client: &DnacClient) -> EndpointCall<TaskIdResult> {
    Ok(client.delete("/api/v1/discovery")?.into_json())
}

/// One discovery.
pub fn get_discovery_by_id(client: &DnacClient, id: &str) -> EndpointCall<Envelope<Discovery>> {
    let path = CallPath::from("/api/v1/discovery/{id}").add_param("id", id);
    Ok(client.get(path)?.into_json())
}

/// Deletes one discovery.
pub fn delete_discovery_by_id(client: &DnacClient, id: &str) -> EndpointCall<TaskIdResult> {
    let path = CallPath::from("/api/v1/discovery/{id}").add_param("id", id);
    Ok(client.delete(path)?.into_json())
}

/// A page of discoveries; `start_index` is 1-based.
pub fn get_discovery_range(
    client: &DnacClient,
    start_index: i64,
    records_to_return: i64,
) -> EndpointCall<Envelope<Vec<Discovery>>> {
    let path = CallPath::from("/api/v1/discovery/{startIndex}/{recordsToReturn}")
        .add_param("startIndex", start_index)
        .add_param("recordsToReturn", records_to_return);
    Ok(client.get(path)?.into_json())
}

/// Deletes `records_to_delete` discoveries starting at `start_index`.
pub fn delete_discovery_range(
    client: &DnacClient,
    start_index: i64,
    records_to_delete: i64,
) -> EndpointCall<TaskIdResult> {
    let path = CallPath::from("/api/v1/discovery/{startIndex}/{recordsToDelete}")
        .add_param("startIndex", start_index)
        .add_param("recordsToDelete", records_to_delete);
    Ok(client.delete(path)?.into_json())
}

/// Devices found by a discovery.
pub fn get_discovered_devices(
    client: &DnacClient,
    id: &str,
    task_id: Option<&str>,
) -> EndpointCall<Envelope<Vec<DiscoveredDevice>>> {
    let path = CallPath::from("/api/v1/discovery/{id}/network-device").add_param("id", id);
    let query = CallQuery::new().add_param("taskId", task_id);
    Ok(client.get(path)?.with_query(query).into_json())
}

/// Number of devices found by a discovery.
pub fn get_discovered_device_count(
    client: &DnacClient,
    id: &str,
    task_id: Option<&str>,
) -> EndpointCall<CountResult> {
    let path = CallPath::from("/api/v1/discovery/{id}/network-device/count").add_param("id", id);
    let query = CallQuery::new().add_param("taskId", task_id);
    Ok(client.get(path)?.with_query(query).into_json())
}

/// A page of the devices found by a discovery.
pub fn get_discovered_device_range(
    client: &DnacClient,
    id: &str,
    start_index: i64,
    records_to_return: i64,
    task_id: Option<&str>,
) -> EndpointCall<Envelope<Vec<DiscoveredDevice>>> {
    let path =
        CallPath::from("/api/v1/discovery/{id}/network-device/{startIndex}/{recordsToReturn}")
            .add_param("id", id)
            .add_param("startIndex", start_index)
            .add_param("recordsToReturn", records_to_return);
    let query = CallQuery::new().add_param("taskId", task_id);
    Ok(client.get(path)?.with_query(query).into_json())
}

/// Number of devices of a discovery matching the status filters.
pub fn get_discovery_summary(
    client: &DnacClient,
    id: &str,
    filter: &DiscoverySummaryFilter,
) -> EndpointCall<CountResult> {
    let path = CallPath::from("/api/v1/discovery/{id}/summary").add_param("id", id);
    Ok(client.get(path)?.with_query_params(filter)?.into_json())
}

/// Jobs of one discovery.
pub fn get_discovery_jobs_by_id(
    client: &DnacClient,
    id: &str,
    filter: &DiscoveryJobFilter,
) -> EndpointCall<Envelope<Vec<DiscoveryJob>>> {
    let path = CallPath::from("/api/v1/discovery/{id}/job").add_param("id", id);
    Ok(client.get(path)?.with_query_params(filter)?.into_json())
}

/// Discovery jobs that covered `ip_address`.
pub fn get_discovery_jobs(
    client: &DnacClient,
    ip_address: &str,
    query: &DiscoveryJobsQuery,
) -> EndpointCall<Envelope<Vec<DiscoveryJob>>> {
    let query = CallQuery::new()
        .add_param("offset", query.offset)
        .add_param("limit", query.limit)
        .add_param("ipAddress", ip_address)
        .add_param("name", query.name.as_deref());
    Ok(client
        .get("/api/v1/discovery/job")?
        .with_query(query)
        .into_json())
}
