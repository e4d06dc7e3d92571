//! Device interfaces: `/api/v1/interface`.

use dnac_core::{CallPath, CallQuery, DnacClient, Envelope};

use crate::common::{CountResult, EndpointCall};

mod models;

pub use self::models::*;

/// Every interface of every device.
pub fn get_interfaces(client: &DnacClient) -> EndpointCall<Envelope<Vec<DeviceInterface>>> {
    Ok(client.get("/api/v1/interface")?.into_json())
}

/// Number of interfaces across the inventory.
pub fn get_interface_count(client: &DnacClient) -> EndpointCall<CountResult> {
    Ok(client.get("/api/v1/interface/count")?.into_json())
}

/// One interface by id.
pub fn get_interface_by_id(
    client: &DnacClient,
    id: &str,
) -> EndpointCall<Envelope<DeviceInterface>> {
    let path = CallPath::from("/api/v1/interface/{id}").add_param("id", id);
    Ok(client.get(path)?.into_json())
}

/// Interfaces of one device.
pub fn get_interfaces_by_device(
    client: &DnacClient,
    device_id: &str,
) -> EndpointCall<Envelope<Vec<DeviceInterface>>> {
    let path =
        CallPath::from("/api/v1/interface/network-device/{deviceId}").add_param("deviceId", device_id);
    Ok(client.get(path)?.into_json())
}

/// Number of interfaces of one device.
pub fn get_interface_count_by_device(
    client: &DnacClient,
    device_id: &str,
) -> EndpointCall<CountResult> {
    let path = CallPath::from("/api/v1/interface/network-device/{deviceId}/count")
        .add_param("deviceId", device_id);
    Ok(client.get(path)?.into_json())
}

/// One interface of a device, by its name (e.g. `GigabitEthernet1/0/1`).
pub fn get_interface_by_name(
    client: &DnacClient,
    device_id: &str,
    name: &str,
) -> EndpointCall<Envelope<DeviceInterface>> {
    let path = CallPath::from("/api/v1/interface/network-device/{deviceId}/interface-name")
        .add_param("deviceId", device_id);
    let query = CallQuery::new().add_param("name", name);
    Ok(client.get(path)?.with_query(query).into_json())
}

/// A page of the interfaces of one device; `start_index` is 1-based.
pub fn get_interface_range_by_device(
    client: &DnacClient,
    device_id: &str,
    start_index: i64,
    records_to_return: i64,
) -> EndpointCall<Envelope<Vec<DeviceInterface>>> {
    let path = CallPath::from(
        "/api/v1/interface/network-device/{deviceId}/{startIndex}/{recordsToReturn}",
    )
    .add_param("deviceId", device_id)
    .add_param("startIndex", start_index)
    .add_param("recordsToReturn", records_to_return);
    Ok(client.get(path)?.into_json())
}

/// Interfaces holding the given IPv4 address.
pub fn get_interfaces_by_ip(
    client: &DnacClient,
    ip_address: &str,
) -> EndpointCall<Envelope<Vec<DeviceInterface>>> {
    let path =
        CallPath::from("/api/v1/interface/ip-address/{ipAddress}").add_param("ipAddress", ip_address);
    Ok(client.get(path)?.into_json())
}

/// Interfaces running IS-IS.
pub fn get_isis_interfaces(client: &DnacClient) -> EndpointCall<Envelope<Vec<DeviceInterface>>> {
    Ok(client.get("/api/v1/interface/isis")?.into_json())
}

/// Interfaces running OSPF.
pub fn get_ospf_interfaces(client: &DnacClient) -> EndpointCall<Envelope<Vec<DeviceInterface>>> {
    Ok(client.get("/api/v1/interface/ospf")?.into_json())
}
