//! Inventory of managed devices: `/api/v1/network-device`.

use dnac_core::{CallPath, CallQuery, DnacClient, Envelope};
use serde::Serialize;

use crate::common::{CountResult, EndpointCall, Paging, TaskIdResult};

mod models;

pub use self::models::*;

/// Filters of [`get_network_devices`].
///
/// Every list is sent as repeated query keys; an empty list is omitted.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDeviceFilter {
    pub hostname: Vec<String>,
    pub management_ip_address: Vec<String>,
    pub mac_address: Vec<String>,
    pub location_name: Vec<String>,
    pub serial_number: Vec<String>,
    pub location: Vec<String>,
    pub family: Vec<String>,
    #[serde(rename = "type")]
    pub device_type: Vec<String>,
    pub series: Vec<String>,
    pub collection_status: Vec<String>,
    pub collection_interval: Vec<String>,
    pub not_synced_for_minutes: Vec<String>,
    pub error_code: Vec<String>,
    pub error_description: Vec<String>,
    pub software_version: Vec<String>,
    pub software_type: Vec<String>,
    pub platform_id: Vec<String>,
    pub role: Vec<String>,
    pub reachability_status: Vec<String>,
    pub up_time: Vec<String>,
    pub associated_wlc_ip: Vec<String>,
    /// Comma separated device ids.
    pub id: Option<String>,
    pub module_name: Option<String>,
    pub module_equpimenttype: Option<String>,
    pub module_servicestate: Option<String>,
    pub module_vendorequipmenttype: Option<String>,
    pub module_partnumber: Option<String>,
    pub module_operationstatecode: Option<String>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

/// Filters of [`get_network_device_modules`] and [`get_network_device_module_count`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleFilter {
    pub name_list: Vec<String>,
    pub vendor_equipment_type_list: Vec<String>,
    pub part_number_list: Vec<String>,
    pub operational_state_code_list: Vec<String>,
}

/// Lists devices matching `filter`.
pub fn get_network_devices(
    client: &DnacClient,
    filter: &NetworkDeviceFilter,
) -> EndpointCall<Envelope<Vec<NetworkDevice>>> {
    Ok(client
        .get("/api/v1/network-device")?
        .with_query_params(filter)?
        .into_json())
}

/// Adds a device to the inventory.
pub fn add_network_device(
    client: &DnacClient,
    device: &InventoryDeviceInfo,
) -> EndpointCall<TaskIdResult> {
    Ok(client
        .post("/api/v1/network-device")?
        .json(device)?
        .into_json())
}

/// Updates credentials or management addresses of devices and resynchronizes them.
pub fn sync_network_devices(
    client: &DnacClient,
    device: &InventoryDeviceInfo,
) -> EndpointCall<TaskIdResult> {
    Ok(client
        .put("/api/v1/network-device")?
        .json(device)?
        .into_json())
}

/// One device.
pub fn get_network_device_by_id(
    client: &DnacClient,
    id: &str,
) -> EndpointCall<Envelope<NetworkDevice>> {
    let path = CallPath::from("/api/v1/network-device/{id}").add_param("id", id);
    Ok(client.get(path)?.into_json())
}

/// Removes a device from the inventory.
///
/// With `is_force_delete` the device configuration is not cleaned up first.
pub fn delete_network_device(
    client: &DnacClient,
    id: &str,
    is_force_delete: Option<bool>,
) -> EndpointCall<TaskIdResult> {
    let path = CallPath::from("/api/v1/network-device/{id}").add_param("id", id);
    let query = CallQuery::new().add_param("isForceDelete", is_force_delete);
    Ok(client.delete(path)?.with_query(query).into_json())
}

/// Role of one device.
pub fn get_network_device_brief(
    client: &DnacClient,
    id: &str,
) -> EndpointCall<Envelope<NetworkDeviceBrief>> {
    let path = CallPath::from("/api/v1/network-device/{id}/brief").add_param("id", id);
    Ok(client.get(path)?.into_json())
}

/// Changes the role of a device, e.g. to `ACCESS` or `CORE`.
pub fn update_network_device_role(
    client: &DnacClient,
    brief: &NetworkDeviceBrief,
) -> EndpointCall<TaskIdResult> {
    Ok(client
        .put("/api/v1/network-device/brief")?
        .json(brief)?
        .into_json())
}

/// Number of devices in the inventory.
pub fn get_network_device_count(client: &DnacClient) -> EndpointCall<CountResult> {
    Ok(client.get("/api/v1/network-device/count")?.into_json())
}

/// Lists `records_to_return` devices starting at `start_index` (1-based).
pub fn get_network_device_range(
    client: &DnacClient,
    start_index: i64,
    records_to_return: i64,
) -> EndpointCall<Envelope<Vec<NetworkDevice>>> {
    let path = CallPath::from("/api/v1/network-device/{startIndex}/{recordsToReturn}")
        .add_param("startIndex", start_index)
        .add_param("recordsToReturn", records_to_return);
    Ok(client.get(path)?.into_json())
}

/// The device managed at `ip_address`.
pub fn get_network_device_by_ip(
    client: &DnacClient,
    ip_address: &str,
) -> EndpointCall<Envelope<NetworkDevice>> {
    let path = CallPath::from("/api/v1/network-device/ip-address/{ipAddress}")
        .add_param("ipAddress", ip_address);
    Ok(client.get(path)?.into_json())
}

/// The device with `serial_number`.
pub fn get_network_device_by_serial_number(
    client: &DnacClient,
    serial_number: &str,
) -> EndpointCall<Envelope<NetworkDevice>> {
    let path = CallPath::from("/api/v1/network-device/serial-number/{serialNumber}")
        .add_param("serialNumber", serial_number);
    Ok(client.get(path)?.into_json())
}

/// The running configuration of one device, as text.
pub fn get_network_device_config(
    client: &DnacClient,
    network_device_id: &str,
) -> EndpointCall<Envelope<String>> {
    let path = CallPath::from("/api/v1/network-device/{networkDeviceId}/config")
        .add_param("networkDeviceId", network_device_id);
    Ok(client.get(path)?.into_json())
}

/// Raw CLI outputs of every device.
pub fn get_network_device_configs(
    client: &DnacClient,
) -> EndpointCall<Envelope<Vec<RawCliInfo>>> {
    Ok(client.get("/api/v1/network-device/config")?.into_json())
}

/// Number of device configurations.
pub fn get_network_device_config_count(client: &DnacClient) -> EndpointCall<CountResult> {
    Ok(client.get("/api/v1/network-device/config/count")?.into_json())
}

/// VLAN interfaces of a device, optionally restricted to one interface type.
pub fn get_network_device_vlans(
    client: &DnacClient,
    id: &str,
    interface_type: Option<&str>,
) -> EndpointCall<Envelope<Vec<VlanInfo>>> {
    let path = CallPath::from("/api/v1/network-device/{id}/vlan").add_param("id", id);
    let query = CallQuery::new().add_param("interfaceType", interface_type);
    Ok(client.get(path)?.with_query(query).into_json())
}

/// Wireless details of a controller.
pub fn get_network_device_wireless_info(
    client: &DnacClient,
    id: &str,
) -> EndpointCall<Envelope<WirelessInfo>> {
    let path = CallPath::from("/api/v1/network-device/{id}/wireless-info").add_param("id", id);
    Ok(client.get(path)?.into_json())
}

/// Meraki organizations of a Meraki device.
pub fn get_network_device_meraki_organization(
    client: &DnacClient,
    id: &str,
) -> EndpointCall<Envelope<Vec<String>>> {
    let path =
        CallPath::from("/api/v1/network-device/{id}/meraki-organization").add_param("id", id);
    Ok(client.get(path)?.into_json())
}

/// Collection interval of a device.
pub fn get_network_device_collection_schedule(
    client: &DnacClient,
    id: &str,
) -> EndpointCall<Envelope<String>> {
    let path =
        CallPath::from("/api/v1/network-device/{id}/collection-schedule").add_param("id", id);
    Ok(client.get(path)?.into_json())
}

/// Hardware modules of one device.
pub fn get_network_device_modules(
    client: &DnacClient,
    device_id: &str,
    paging: Paging,
    filter: &ModuleFilter,
) -> EndpointCall<Envelope<Vec<DeviceModule>>> {
    let query = CallQuery::new()
        .add_param("deviceId", device_id)
        .add_param("limit", paging.limit)
        .add_param("offset", paging.offset)
        .merge(CallQuery::from_serializable(filter)?);
    Ok(client
        .get("/api/v1/network-device/module")?
        .with_query(query)
        .into_json())
}

/// One module.
pub fn get_network_device_module_by_id(
    client: &DnacClient,
    id: &str,
) -> EndpointCall<Envelope<DeviceModule>> {
    let path = CallPath::from("/api/v1/network-device/module/{id}").add_param("id", id);
    Ok(client.get(path)?.into_json())
}

/// Number of modules of one device.
pub fn get_network_device_module_count(
    client: &DnacClient,
    device_id: &str,
    filter: &ModuleFilter,
) -> EndpointCall<CountResult> {
    let query = CallQuery::new()
        .add_param("deviceId", device_id)
        .merge(CallQuery::from_serializable(filter)?);
    Ok(client
        .get("/api/v1/network-device/module/count")?
        .with_query(query)
        .into_json())
}

/// Functional capabilities of the given devices.
///
/// `device_id` accepts several comma separated ids.
pub fn get_network_device_functional_capabilities(
    client: &DnacClient,
    device_id: &str,
    function_name: &[String],
) -> EndpointCall<Envelope<Vec<FunctionalCapability>>> {
    let query = CallQuery::new()
        .add_param("deviceId", device_id)
        .add_param("functionName", function_name);
    Ok(client
        .get("/api/v1/network-device/functional-capability")?
        .with_query(query)
        .into_json())
}

/// One functional capability.
pub fn get_network_device_functional_capability_by_id(
    client: &DnacClient,
    id: &str,
) -> EndpointCall<Envelope<FunctionCapabilityEntry>> {
    let path =
        CallPath::from("/api/v1/network-device/functional-capability/{id}").add_param("id", id);
    Ok(client.get(path)?.into_json())
}

/// Resynchronizes the given devices.
///
/// With `force_sync` a running collection is interrupted.
pub fn sync_network_devices_by_id(
    client: &DnacClient,
    device_ids: &[String],
    force_sync: Option<bool>,
) -> EndpointCall<TaskIdResult> {
    let query = CallQuery::new().add_param("forceSync", force_sync);
    Ok(client
        .put("/api/v1/network-device/sync")?
        .with_query(query)
        .json(device_ids)?
        .into_json())
}

/// Exports device details or credentials into an encrypted file.
///
/// The task result holds the id of the file to fetch with
/// [`file::download_file`](crate::file::download_file).
pub fn export_network_devices(
    client: &DnacClient,
    request: &ExportDeviceRequest,
) -> EndpointCall<TaskIdResult> {
    Ok(client
        .post("/api/v1/network-device/file")?
        .json(request)?
        .into_json())
}

#[cfg(test)]
mod tests {
    use http::Method;
    use rstest::rstest;

    use super::*;
    use crate::common::testing::{assert_round_trip, body, client, url};

    #[test]
    fn should_repeat_list_filters_in_declaration_order() {
        let filter = NetworkDeviceFilter {
            hostname: vec!["edge-1".to_string(), "edge-2".to_string()],
            family: vec!["Switches and Hubs".to_string()],
            device_type: vec!["Cisco Catalyst 9300 Switch".to_string()],
            limit: Some(10),
            ..Default::default()
        };

        let call = get_network_devices(&client(), &filter).expect("should build call");

        insta::assert_snapshot!(url(&call), @"http://dnac.local/api/v1/network-device?hostname=edge-1&hostname=edge-2&family=Switches+and+Hubs&type=Cisco+Catalyst+9300+Switch&limit=10");
    }

    #[test]
    fn should_omit_empty_filter() {
        let call = get_network_devices(&client(), &NetworkDeviceFilter::default())
            .expect("should build call");

        assert_eq!(url(&call), "http://dnac.local/api/v1/network-device");
    }

    #[test]
    fn should_encode_device_id_in_path() {
        let call = get_network_device_by_id(&client(), "a/b c").expect("should build call");

        assert_eq!(url(&call), "http://dnac.local/api/v1/network-device/a%2Fb%20c");
    }

    #[test]
    fn should_delete_with_force_flag() {
        let call =
            delete_network_device(&client(), "abc-123", Some(true)).expect("should build call");
        let request = call.to_request().expect("should build request");

        assert_eq!(request.method(), Method::DELETE);
        insta::assert_snapshot!(request.url().as_str(), @"http://dnac.local/api/v1/network-device/abc-123?isForceDelete=true");
    }

    #[test]
    fn should_resolve_range_placeholders() {
        let call = get_network_device_range(&client(), 1, 500).expect("should build call");

        assert_eq!(url(&call), "http://dnac.local/api/v1/network-device/1/500");
    }

    #[test]
    fn should_put_device_ids_as_body() {
        let ids = vec!["abc-123".to_string(), "def-456".to_string()];

        let call = sync_network_devices_by_id(&client(), &ids, Some(false))
            .expect("should build call");

        insta::assert_snapshot!(url(&call), @"http://dnac.local/api/v1/network-device/sync?forceSync=false");
        insta::assert_snapshot!(body(&call), @r#"["abc-123","def-456"]"#);
    }

    #[test]
    fn should_send_device_id_before_module_filters() {
        let filter = ModuleFilter {
            name_list: vec!["Switch 1".to_string()],
            operational_state_code_list: vec!["ok".to_string(), "failed".to_string()],
            ..Default::default()
        };

        let call = get_network_device_modules(&client(), "abc-123", Paging::new(1, 5), &filter)
            .expect("should build call");

        insta::assert_snapshot!(url(&call), @"http://dnac.local/api/v1/network-device/module?deviceId=abc-123&limit=5&offset=1&nameList=Switch+1&operationalStateCodeList=ok&operationalStateCodeList=failed");
    }

    #[test]
    fn should_rename_reserved_and_irregular_keys() {
        let device = InventoryDeviceInfo {
            ip_address: vec!["10.10.20.81".to_string()],
            snmp_ro_community: Some("public".to_string()),
            device_type: Some("NETWORK_DEVICE".to_string()),
            update_mgmt_ip_address_list: vec![UpdateMgmtIpAddress {
                exist_mgmt_ip_address: Some("10.10.20.81".to_string()),
                new_mgmt_ip_address: Some("10.10.20.82".to_string()),
            }],
            ..Default::default()
        };

        let call = add_network_device(&client(), &device).expect("should build call");

        insta::assert_snapshot!(body(&call), @r#"{"ipAddress":["10.10.20.81"],"snmpROCommunity":"public","type":"NETWORK_DEVICE","updateMgmtIPaddressList":[{"existMgmtIpAddress":"10.10.20.81","newMgmtIpAddress":"10.10.20.82"}]}"#);
    }

    #[test]
    fn should_decode_device_list() {
        let json = r#"{
            "response": [{
                "hostname": "cat_9k_1",
                "id": "f16955ae-c349-47e9-8e8f-9b62104ab604",
                "managementIpAddress": "10.10.20.81",
                "family": "Switches and Hubs",
                "type": "Cisco Catalyst 9300 Switch",
                "reachabilityStatus": "Reachable",
                "uptimeSeconds": 1234,
                "lastUpdateTime": 1700000000000
            }],
            "version": "1.0"
        }"#;

        let devices: Envelope<Vec<NetworkDevice>> =
            serde_json::from_str(json).expect("valid device list");

        let device = &devices.response[0];
        assert_eq!(device.hostname.as_deref(), Some("cat_9k_1"));
        assert_eq!(device.device_type.as_deref(), Some("Cisco Catalyst 9300 Switch"));
        assert_eq!(device.uptime_seconds, Some(1234));
        assert_eq!(device.serial_number, None);

        let encoded = serde_json::to_value(&devices).expect("serializable");
        let decoded: Envelope<Vec<NetworkDevice>> =
            serde_json::from_value(encoded).expect("round trip");
        assert_eq!(decoded, devices);
    }

    #[rstest]
    #[case::device(
        assert_round_trip::<NetworkDevice>,
        r#"{"id": "abc-123", "hostname": "edge-1", "family": "Switches and Hubs", "type": "Cisco Catalyst 9300 Switch", "managementIpAddress": "10.10.20.81", "serialNumber": "FOC1234X0AB", "lastUpdateTime": 1760263200000, "uptimeSeconds": 3600}"#
    )]
    #[case::brief(
        assert_round_trip::<NetworkDeviceBrief>,
        r#"{"id": "abc-123", "role": "ACCESS", "roleSource": "MANUAL", "attributeInfo": {}}"#
    )]
    #[case::inventory_info(
        assert_round_trip::<InventoryDeviceInfo>,
        r#"{"ipAddress": ["10.10.20.81"], "type": "NETWORK_DEVICE", "cliTransport": "ssh", "snmpROCommunity": "public", "snmpRWCommunity": "private", "snmpRetry": 3, "updateMgmtIPaddressList": [{"existMgmtIpAddress": "10.10.20.81", "newMgmtIpAddress": "10.10.20.82"}]}"#
    )]
    #[case::raw_cli(
        assert_round_trip::<RawCliInfo>,
        r#"{"id": "abc-123", "runningConfig": "hostname edge-1", "cdpNeighbors": "edge-2", "version": "17.9.4"}"#
    )]
    #[case::vlan(
        assert_round_trip::<VlanInfo>,
        r#"{"interfaceName": "Vlan100", "ipAddress": "10.10.100.1", "mask": 24, "numberOfIPs": 254, "vlanNumber": 100, "vlanType": "Data"}"#
    )]
    #[case::wireless(
        assert_round_trip::<WirelessInfo>,
        r#"{"deviceId": "abc-123", "adminEnabledPorts": [1, 2], "lagModeEnabled": false, "netconfEnabled": true}"#
    )]
    #[case::module(
        assert_round_trip::<DeviceModule>,
        r#"{"id": "mod-1", "name": "Switch 1 - Power Supply A", "moduleIndex": 0, "partNumber": "PWR-C1-715WAC", "isFieldReplaceable": "true"}"#
    )]
    #[case::functional_capability(
        assert_round_trip::<FunctionalCapability>,
        r#"{"deviceId": "abc-123", "functionalCapability": [{"functionName": "LLDP", "functionOpState": "ENABLED", "functionDetails": [{"propertyName": "version", "stringValue": "2"}]}]}"#
    )]
    #[case::export(
        assert_round_trip::<ExportDeviceRequest>,
        r#"{"deviceUuids": ["abc-123"], "operationEnum": "CREDENTIALDETAILS", "parameters": ["snmp"], "password": "Export123!"}"#
    )]
    fn should_round_trip_models(#[case] check: fn(&str), #[case] json: &str) {
        check(json);
    }
}
