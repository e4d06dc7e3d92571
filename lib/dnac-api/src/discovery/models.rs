//! Payloads of the `/api/v1/discovery` endpoints.
#![allow(missing_docs)]

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::global_credential::HttpCredential;

/// Parameters of a new discovery.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cdp_level: Option<i64>,
    /// `Single`, `Range`, `CDP`, `LLDP`, or `CIDR`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discovery_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enable_password_list: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub global_credential_id_list: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_read_credential: Option<HttpCredential>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_write_credential: Option<HttpCredential>,
    /// e.g. `10.10.20.1-10.10.20.254`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address_list: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ip_filter_list: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lldp_level: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub netconf_port: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub password_list: Vec<String>,
    #[serde(rename = "preferredMgmtIPMethod", skip_serializing_if = "Option::is_none")]
    pub preferred_mgmt_ip_method: Option<String>,
    /// e.g. `ssh,telnet`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmp_auth_passphrase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmp_auth_protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmp_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmp_priv_passphrase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmp_priv_protocol: Option<String>,
    #[serde(rename = "snmpROCommunity", skip_serializing_if = "Option::is_none")]
    pub snmp_ro_community: Option<String>,
    #[serde(rename = "snmpROCommunityDesc", skip_serializing_if = "Option::is_none")]
    pub snmp_ro_community_desc: Option<String>,
    #[serde(rename = "snmpRWCommunity", skip_serializing_if = "Option::is_none")]
    pub snmp_rw_community: Option<String>,
    #[serde(rename = "snmpRWCommunityDesc", skip_serializing_if = "Option::is_none")]
    pub snmp_rw_community_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmp_user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmp_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_name_list: Vec<String>,
}

/// A discovery job definition and its progress.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discovery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_info: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cdp_level: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_ids: Option<String>,
    /// `Complete`, `In Progress`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discovery_condition: Option<String>,
    /// `Active` or `Inactive`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discovery_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discovery_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_password_list: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub global_credential_id_list: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_read_credential: Option<HttpCredential>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_write_credential: Option<HttpCredential>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address_list: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_filter_list: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_auto_cdp: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lldp_level: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub netconf_port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_devices: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_discovery_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_list: Option<String>,
    #[serde(rename = "preferredMgmtIPMethod", skip_serializing_if = "Option::is_none")]
    pub preferred_mgmt_ip_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmp_auth_passphrase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmp_auth_protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmp_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmp_priv_passphrase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmp_priv_protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmp_ro_community: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmp_ro_community_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmp_rw_community: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmp_rw_community_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmp_user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_out: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_mgmt_ip: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name_list: Option<String>,
}

/// One run of a discovery against one address range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryJob {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_info: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cli_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discovery_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_collection_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_reachability_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub netconf_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ping_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmp_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
}

/// A device found by a discovery.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveredDevice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor_wlc_for_ap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_update_frequency: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boot_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cli_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicate_device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingress_queue_config: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface_count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_collection_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_reachability_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_card_count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_card_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub netconf_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_updates: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ping_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qos_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reachability_failure_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reachability_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmp_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmp_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmp_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_count: Option<i64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub up_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wlc_ap_device_status: Option<String>,
}
