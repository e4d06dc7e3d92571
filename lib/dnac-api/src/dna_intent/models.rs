//! Payloads of the `/dna/intent/api/v1` endpoints.
#![allow(missing_docs)]

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::SiteType;
use crate::misc::Topology;

/// A new area, building, or floor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteCreateRequest {
    #[serde(rename = "type")]
    pub site_type: SiteType,
    pub site: SiteDetails,
}

/// Exactly one of the three is expected, matching the site type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<Area>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building: Option<Building>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<Floor>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub name: String,
    /// e.g. `Global/USA`
    pub parent_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    pub name: String,
    pub parent_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    pub name: String,
    pub parent_name: String,
    /// e.g. `Cubes And Walled Offices`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rf_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

/// Acknowledgement of an asynchronous intent call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsyncIntentResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_status_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Devices to assign to a site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignDevicesRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub device: Vec<DeviceIp>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceIp {
    pub ip: String,
}

/// Health of one site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteHealth {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_good_count: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_total_count: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_bytes_total_count: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_good_count: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_health: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_total_count: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_health_wired: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_health_wireless: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub core_good_count: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub core_total_count: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution_good_count: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution_total_count: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dnac_info: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub healthy_clients_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub healthy_network_device_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_health_access: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_health_average: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_health_core: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_health_distribution: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_health_others: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_health_router: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_health_wireless: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_clients: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_network_device: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_wired_clients: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_wireless_clients: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_site_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_site_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub router_good_count: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub router_total_count: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_number_of_active_wireless_clients: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_number_of_connected_wired_clients: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wireless_device_good_count: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wireless_device_total_count: Option<f64>,
}

/// Overall network health, returned bare.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkHealth {
    #[serde(rename = "healthDistirubution", default, skip_serializing_if = "Vec::is_empty")]
    pub health_distribution: Vec<HealthDistribution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_health_score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_measured_by_entity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitored_devices: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_health_devices: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub response: Vec<NetworkHealthPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkHealthPoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bad_count: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fair_count: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub good_count: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_health_count: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unmon_count: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthDistribution {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bad_count: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bad_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fair_count: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fair_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub good_count: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub good_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_score: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub kpi_metrics: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_health_count: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<f64>,
}

/// Client health of one site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientHealth {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub score_detail: Vec<ScoreDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_unique_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endtime: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_category: Option<ScoreCategory>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub score_list: Vec<ScoreDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starttime: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// One client with its connection and topology, returned bare.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_info: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<ClientDetailInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topology: Option<Topology>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDetailInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_rssi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_snr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_connection: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub connected_device: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_failure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_success: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub health_score: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_ip_v4: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub host_ip_v6: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_mac: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_os: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_count: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onboarding: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx_bytes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_hierarchy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_bytes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vnid: Option<String>,
}

/// Detailed state of one network device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub air_quality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub air_quality_score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_count: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub communication_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_mbuf: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_mbuf_score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_timer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_timer_score: Option<i64>,
    #[serde(rename = "HAStatus", skip_serializing_if = "Option::is_none")]
    pub ha_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interference: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_ip_addr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noise: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noise_score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nw_device_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nw_device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nw_device_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nw_device_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nw_device_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_health: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packet_pool: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packet_pool_score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utilization: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wqe_pool: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wqe_pool_score: Option<i64>,
}
