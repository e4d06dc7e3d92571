//! Path traces: `/api/v1/flow-analysis`.

use dnac_core::{CallPath, DnacClient, Envelope};
use serde::Serialize;

use crate::common::{EndpointCall, SortOrder, TaskIdResult};

mod models;

pub use self::models::*;

/// Filters of [`get_flow_analyses`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowAnalysisFilter {
    pub periodic_refresh: Option<bool>,
    #[serde(rename = "sourceIP")]
    pub source_ip: Option<String>,
    #[serde(rename = "destIP")]
    pub dest_ip: Option<String>,
    pub source_port: Option<String>,
    pub dest_port: Option<String>,
    /// Epoch milliseconds.
    pub gt_create_time: Option<String>,
    /// Epoch milliseconds.
    pub lt_create_time: Option<String>,
    pub protocol: Option<String>,
    pub status: Option<String>,
    pub task_id: Option<String>,
    pub last_update_time: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub order: Option<SortOrder>,
    pub sort_by: Option<String>,
}

/// Path traces matching `filter`.
pub fn get_flow_analyses(
    client: &DnacClient,
    filter: &FlowAnalysisFilter,
) -> EndpointCall<Envelope<Vec<FlowAnalysisSummary>>> {
    Ok(client
        .get("/api/v1/flow-analysis")?
        .with_query_params(filter)?
        .into_json())
}

/// Starts a path trace.
///
/// The trace runs asynchronously; poll it with [`get_flow_analysis_by_id`].
pub fn start_flow_analysis(
    client: &DnacClient,
    request: &FlowAnalysisRequest,
) -> EndpointCall<Envelope<FlowAnalysisStarted>> {
    Ok(client
        .post("/api/v1/flow-analysis")?
        .json(request)?
        .into_json())
}

/// Result of a path trace.
pub fn get_flow_analysis_by_id(
    client: &DnacClient,
    flow_analysis_id: &str,
) -> EndpointCall<Envelope<PathTrace>> {
    let path = CallPath::from("/api/v1/flow-analysis/{flowAnalysisId}")
        .add_param("flowAnalysisId", flow_analysis_id);
    Ok(client.get(path)?.into_json())
}

/// Deletes a path trace.
pub fn delete_flow_analysis(
    client: &DnacClient,
    flow_analysis_id: &str,
) -> EndpointCall<TaskIdResult> {
    let path = CallPath::from("/api/v1/flow-analysis/{flowAnalysisId}")
        .add_param("flowAnalysisId", flow_analysis_id);
    Ok(client.delete(path)?.into_json())
}
