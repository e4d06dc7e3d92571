//! Payloads of the `/api/v1/network-device` endpoints.
#![allow(missing_docs)]

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A device of the inventory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDevice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ap_manager_interface_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_wlc_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boot_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_interval: Option<String>,
    /// `Managed`, `In Progress`, `Partial Collection Failure`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
    /// e.g. `Switches and Hubs`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// Device UUID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_tenant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface_count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_status_detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update_time: Option<i64>,
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
    pub platform_id: Option<String>,
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
    pub series: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmp_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmp_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tunnel_udp_port: Option<String>,
    /// e.g. `Cisco Catalyst 9300 Switch`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub up_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waas_device_mode: Option<String>,
}

/// Role information of a device, also the body of a role update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDeviceBrief {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_info: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_source: Option<String>,
}

/// Credentials and addresses of a device to add or update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryDeviceInfo {
    /// `ssh` or `telnet`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cli_transport: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compute_device: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_discovery_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_secure: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ip_address: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub meraki_org_id: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub netconf_port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
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
    #[serde(rename = "snmpRWCommunity", skip_serializing_if = "Option::is_none")]
    pub snmp_rw_community: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmp_retry: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmp_timeout: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmp_user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmp_version: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    #[serde(rename = "updateMgmtIPaddressList", default, skip_serializing_if = "Vec::is_empty")]
    pub update_mgmt_ip_address_list: Vec<UpdateMgmtIpAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

/// Replacement of a management address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMgmtIpAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exist_mgmt_ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_mgmt_ip_address: Option<String>,
}

/// Raw CLI outputs collected from a device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCliInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_info: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cdp_neighbors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_monitor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intf_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_intf_brief: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address_table: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running_config: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// A VLAN interface of a device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VlanInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_address: Option<String>,
    #[serde(rename = "numberOfIPs", skip_serializing_if = "Option::is_none")]
    pub number_of_ips: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan_type: Option<String>,
}

/// Wireless controller details of a device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WirelessInfo {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub admin_enabled_ports: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ap_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eth_mac_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_tenant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lag_mode_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub netconf_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wireless_license_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wireless_package_installed: Option<bool>,
}

/// A hardware module (line card, power supply, fan, ...) of a device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceModule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assembly_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assembly_revision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_info: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub containment_entity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_physical_index: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_field_replaceable: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_reporting_alarms_allowed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operational_state_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_equipment_type: Option<String>,
}

/// Functional capabilities of one device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionalCapability {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_info: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub functional_capability: Vec<FunctionCapabilityEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// One capability (e.g. `Ethernet`, `Wireless`) with its details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionCapabilityEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_info: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub function_details: Vec<FunctionDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_op_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_info: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,
}

/// Export of device details or credentials to an encrypted file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDeviceRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub device_uuids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// `CREDENTIALDETAILS` or `DEVICEDETAILS`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_enum: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
