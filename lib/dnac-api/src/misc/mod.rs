//! Session token, tasks, command runner, and topology.

use dnac_core::{CallPath, CallQuery, DnacClient, Envelope, SecureString};
use serde::{Deserialize, Serialize};

use crate::common::{CountResult, EndpointCall, SortOrder, TaskIdResult};

mod models;

pub use self::models::*;

/// Session token issued against Basic credentials.
///
/// Send it back in the `X-Auth-Token` header, see
/// [`Authentication::Token`](dnac_core::Authentication::Token).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    /// The token, redacted in debug output.
    #[serde(rename = "Token")]
    pub token: SecureString,
}

/// Filters of [`get_tasks`] and [`get_task_count`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFilter {
    /// Epoch milliseconds.
    pub start_time: Option<String>,
    /// Epoch milliseconds.
    pub end_time: Option<String>,
    pub data: Option<String>,
    pub error_code: Option<String>,
    pub service_type: Option<String>,
    pub username: Option<String>,
    pub progress: Option<String>,
    pub is_error: Option<bool>,
    pub failure_reason: Option<String>,
    pub parent_id: Option<String>,
}

/// Paging and ordering of [`get_tasks`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskListOptions {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub sort_by: Option<String>,
    pub order: Option<SortOrder>,
}

/// Exchanges Basic credentials for a session token.
///
/// `authorization` is the full header value, see
/// [`Authentication::basic_credentials`](dnac_core::Authentication::basic_credentials).
/// It replaces any authentication configured on the client for this call.
pub fn post_auth_token(client: &DnacClient, authorization: &str) -> EndpointCall<AuthToken> {
    Ok(client
        .post("/api/system/v1/auth/token")?
        .with_header("Authorization", authorization)
        .into_json())
}

/// Tasks matching `filter`.
pub fn get_tasks(
    client: &DnacClient,
    filter: &TaskFilter,
    options: &TaskListOptions,
) -> EndpointCall<Envelope<Vec<Task>>> {
    let query = CallQuery::from_serializable(filter)?.merge(CallQuery::from_serializable(options)?);
    Ok(client.get("/api/v1/task")?.with_query(query).into_json())
}

/// One task; poll it until `end_time` is set.
pub fn get_task_by_id(client: &DnacClient, task_id: &str) -> EndpointCall<Envelope<Task>> {
    let path = CallPath::from("/api/v1/task/{taskId}").add_param("taskId", task_id);
    Ok(client.get(path)?.into_json())
}

/// A task and its sub tasks.
pub fn get_task_tree(client: &DnacClient, task_id: &str) -> EndpointCall<Envelope<Vec<Task>>> {
    let path = CallPath::from("/api/v1/task/{taskId}/tree").add_param("taskId", task_id);
    Ok(client.get(path)?.into_json())
}

/// Number of tasks matching `filter`.
pub fn get_task_count(client: &DnacClient, filter: &TaskFilter) -> EndpointCall<CountResult> {
    Ok(client
        .get("/api/v1/task/count")?
        .with_query_params(filter)?
        .into_json())
}

/// Tasks started by one operation.
pub fn get_tasks_by_operation(
    client: &DnacClient,
    operation_id: &str,
    offset: i64,
    limit: i64,
) -> EndpointCall<Envelope<Vec<Task>>> {
    let path = CallPath::from("/api/v1/task/operation/{operationId}/{offset}/{limit}")
        .add_param("operationId", operation_id)
        .add_param("offset", offset)
        .add_param("limit", limit);
    Ok(client.get(path)?.into_json())
}

/// Runs read-only commands; the task progress holds the id of the output file.
pub fn run_read_only_commands(
    client: &DnacClient,
    request: &CommandRunnerRequest,
) -> EndpointCall<TaskIdResult> {
    Ok(client
        .post("/api/v1/network-device-poller/cli/read-request")?
        .json(request)?
        .into_json())
}

/// Command keywords accepted by [`run_read_only_commands`].
pub fn get_legit_cli_keywords(client: &DnacClient) -> EndpointCall<Envelope<Vec<String>>> {
    Ok(client
        .get("/api/v1/network-device-poller/cli/legit-reads")?
        .into_json())
}

/// Physical topology, optionally restricted to one node type (e.g. `device`).
pub fn get_physical_topology(
    client: &DnacClient,
    node_type: Option<&str>,
) -> EndpointCall<Envelope<Topology>> {
    let query = CallQuery::new().add_param("nodeType", node_type);
    Ok(client
        .get("/api/v1/topology/physical-topology")?
        .with_query(query)
        .into_json())
}

/// Site hierarchy.
pub fn get_site_topology(client: &DnacClient) -> EndpointCall<Envelope<SiteTopology>> {
    Ok(client.get("/api/v1/topology/site-topology")?.into_json())
}

/// VLAN names known to the topology service.
pub fn get_vlan_names(client: &DnacClient) -> EndpointCall<Envelope<Vec<String>>> {
    Ok(client.get("/api/v1/topology/vlan/vlan-names")?.into_json())
}

/// Layer 2 topology of one VLAN, e.g. `vlan1`.
pub fn get_l2_topology(client: &DnacClient, vlan_id: &str) -> EndpointCall<Envelope<Topology>> {
    let path = CallPath::from("/api/v1/topology/l2/{vlanID}").add_param("vlanID", vlan_id);
    Ok(client.get(path)?.into_json())
}

/// Layer 3 topology of one routing protocol, e.g. `ospf` or `static`.
pub fn get_l3_topology(
    client: &DnacClient,
    topology_type: &str,
) -> EndpointCall<Envelope<Topology>> {
    let path =
        CallPath::from("/api/v1/topology/l3/{topologyType}").add_param("topologyType", topology_type);
    Ok(client.get(path)?.into_json())
}
