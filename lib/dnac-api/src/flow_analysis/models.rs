//! Payloads of the `/api/v1/flow-analysis` endpoints.
#![allow(missing_docs)]

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A path trace between two hosts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowAnalysisRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_path: Option<bool>,
    #[serde(rename = "destIP")]
    pub dest_ip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dest_port: Option<String>,
    /// `INTERFACE-STATS`, `QOS-STATS`, `DEVICE-STATS`, `PERFORMANCE-STATS`, `ACL-TRACE`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inclusions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periodic_refresh: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(rename = "sourceIP")]
    pub source_ip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_port: Option<String>,
}

/// Identifiers of a started path trace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowAnalysisStarted {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow_analysis_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A path trace as listed by the controller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowAnalysisSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_path: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<i64>,
    #[serde(rename = "destIP", skip_serializing_if = "Option::is_none")]
    pub dest_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dest_port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inclusions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periodic_refresh: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(rename = "sourceIP", skip_serializing_if = "Option::is_none")]
    pub source_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// The result of a path trace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathTrace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_status: Option<DetailedStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub network_elements: Vec<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub network_elements_info: Vec<NetworkElement>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<FlowAnalysisSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acl_trace_calculation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acl_trace_calculation_failure_reason: Option<String>,
}

/// One hop of a path trace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkElement {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accuracy_list: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_status: Option<DetailedStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_statistics: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_stats_collection: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_stats_collection_failure_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub egress_interface: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub egress_physical_interface: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_connect: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingress_interface: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_information_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perf_mon_collection: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perf_mon_collection_failure_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub perf_mon_statistics: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssid: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tunnels: Vec<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wlan_id: Option<String>,
}
