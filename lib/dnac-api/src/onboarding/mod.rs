//! Plug and Play onboarding: `/api/v1/onboarding`.
//!
//! These endpoints answer with the bare payload, except the counts which are
//! enveloped. Records carry their identifier under the `_id` key.

use dnac_core::{CallPath, CallQuery, DnacClient};
use serde::Serialize;

use crate::common::{CountResult, EndpointCall, SortOrder};

mod models;

pub use self::models::*;

/// Paging and ordering of Plug and Play listings.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PnpListOptions {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub sort: Vec<String>,
    pub sort_order: Option<SortOrder>,
}

/// Filters of [`get_pnp_devices`] and [`get_pnp_device_count`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PnpDeviceFilter {
    pub serial_number: Vec<String>,
    pub state: Vec<String>,
    pub onb_state: Vec<String>,
    pub cm_state: Vec<String>,
    pub name: Vec<String>,
    pub pid: Vec<String>,
    pub source: Vec<String>,
    pub project_id: Vec<String>,
    pub workflow_id: Vec<String>,
    pub project_name: Vec<String>,
    pub workflow_name: Vec<String>,
    pub smart_account_id: Vec<String>,
    pub virtual_account_id: Vec<String>,
    pub last_contact: Option<bool>,
}

/// Filters of [`get_pnp_workflows`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkflowFilter {
    #[serde(rename = "type")]
    pub workflow_type: Vec<String>,
    pub name: Vec<String>,
}

/// Devices matching `filter`.
pub fn get_pnp_devices(
    client: &DnacClient,
    options: &PnpListOptions,
    filter: &PnpDeviceFilter,
) -> EndpointCall<Vec<PnpDevice>> {
    let query = CallQuery::from_serializable(options)?.merge(CallQuery::from_serializable(filter)?);
    Ok(client
        .get("/api/v1/onboarding/pnp-device")?
        .with_query(query)
        .into_json())
}

/// Adds a device to the Plug and Play database.
pub fn add_pnp_device(client: &DnacClient, device: &PnpDevice) -> EndpointCall<PnpDevice> {
    Ok(client
        .post("/api/v1/onboarding/pnp-device")?
        .json(device)?
        .into_json())
}

/// One device.
pub fn get_pnp_device_by_id(client: &DnacClient, id: &str) -> EndpointCall<PnpDevice> {
    let path = CallPath::from("/api/v1/onboarding/pnp-device/{id}").add_param("id", id);
    Ok(client.get(path)?.into_json())
}

/// Replaces a device record.
pub fn update_pnp_device(
    client: &DnacClient,
    id: &str,
    device: &PnpDevice,
) -> EndpointCall<PnpDevice> {
    let path = CallPath::from("/api/v1/onboarding/pnp-device/{id}").add_param("id", id);
    Ok(client.put(path)?.json(device)?.into_json())
}

/// Deletes a device and returns the removed record.
pub fn delete_pnp_device(client: &DnacClient, id: &str) -> EndpointCall<PnpDevice> {
    let path = CallPath::from("/api/v1/onboarding/pnp-device/{id}").add_param("id", id);
    Ok(client.delete(path)?.into_json())
}

/// Number of devices matching `filter`.
pub fn get_pnp_device_count(
    client: &DnacClient,
    filter: &PnpDeviceFilter,
) -> EndpointCall<CountResult> {
    Ok(client
        .get("/api/v1/onboarding/pnp-device/count")?
        .with_query_params(filter)?
        .into_json())
}

/// Onboarding history of the device with `serial_number`.
pub fn get_pnp_device_history(
    client: &DnacClient,
    serial_number: &str,
    sort: &[String],
    sort_order: Option<SortOrder>,
) -> EndpointCall<PnpDeviceHistory> {
    let query = CallQuery::new()
        .add_param("serialNumber", serial_number)
        .add_param("sort", sort)
        .add_param("sortOrder", sort_order);
    Ok(client
        .get("/api/v1/onboarding/pnp-device/history")?
        .with_query(query)
        .into_json())
}

/// Claims devices into a workflow.
pub fn claim_pnp_devices(
    client: &DnacClient,
    request: &ClaimDeviceRequest,
) -> EndpointCall<PnpOperationResult> {
    Ok(client
        .post("/api/v1/onboarding/pnp-device/claim")?
        .json(request)?
        .into_json())
}

/// Adds several devices at once.
pub fn import_pnp_devices(
    client: &DnacClient,
    devices: &[PnpDevice],
) -> EndpointCall<ImportDevicesResult> {
    Ok(client
        .post("/api/v1/onboarding/pnp-device/import")?
        .json(devices)?
        .into_json())
}

/// Resets devices in error.
pub fn reset_pnp_devices(
    client: &DnacClient,
    request: &ResetDeviceRequest,
) -> EndpointCall<PnpOperationResult> {
    Ok(client
        .post("/api/v1/onboarding/pnp-device/reset")?
        .json(request)?
        .into_json())
}

/// Returns devices to the unclaimed state.
pub fn unclaim_pnp_devices(
    client: &DnacClient,
    request: &UnclaimDeviceRequest,
) -> EndpointCall<PnpOperationResult> {
    Ok(client
        .post("/api/v1/onboarding/pnp-device/unclaim")?
        .json(request)?
        .into_json())
}

/// Claims a device to a site; the site settings drive its configuration.
pub fn claim_pnp_device_to_site(
    client: &DnacClient,
    request: &SiteClaimRequest,
) -> EndpointCall<PnpOperationResult> {
    Ok(client
        .post("/api/v1/onboarding/pnp-device/site-claim")?
        .json(request)?
        .into_json())
}

/// Global settings.
pub fn get_pnp_settings(client: &DnacClient) -> EndpointCall<PnpSettings> {
    Ok(client.get("/api/v1/onboarding/pnp-settings")?.into_json())
}

/// Replaces the global settings.
pub fn update_pnp_settings(
    client: &DnacClient,
    settings: &PnpSettings,
) -> EndpointCall<PnpSettings> {
    Ok(client
        .put("/api/v1/onboarding/pnp-settings")?
        .json(settings)?
        .into_json())
}

/// Workflows matching `filter`.
pub fn get_pnp_workflows(
    client: &DnacClient,
    options: &PnpListOptions,
    filter: &WorkflowFilter,
) -> EndpointCall<Vec<Workflow>> {
    let query = CallQuery::from_serializable(options)?.merge(CallQuery::from_serializable(filter)?);
    Ok(client
        .get("/api/v1/onboarding/pnp-workflow")?
        .with_query(query)
        .into_json())
}

/// Creates a workflow.
pub fn add_pnp_workflow(client: &DnacClient, workflow: &Workflow) -> EndpointCall<Workflow> {
    Ok(client
        .post("/api/v1/onboarding/pnp-workflow")?
        .json(workflow)?
        .into_json())
}

/// One workflow.
pub fn get_pnp_workflow_by_id(client: &DnacClient, id: &str) -> EndpointCall<Workflow> {
    let path = CallPath::from("/api/v1/onboarding/pnp-workflow/{id}").add_param("id", id);
    Ok(client.get(path)?.into_json())
}

/// Replaces a workflow.
pub fn update_pnp_workflow(
    client: &DnacClient,
    id: &str,
    workflow: &Workflow,
) -> EndpointCall<Workflow> {
    let path = CallPath::from("/api/v1/onboarding/pnp-workflow/{id}").add_param("id", id);
    Ok(client.put(path)?.json(workflow)?.into_json())
}

/// Deletes a workflow and returns it.
pub fn delete_pnp_workflow(client: &DnacClient, id: &str) -> EndpointCall<Workflow> {
    let path = CallPath::from("/api/v1/onboarding/pnp-workflow/{id}").add_param("id", id);
    Ok(client.delete(path)?.into_json())
}

/// Number of workflows, optionally restricted to some names.
pub fn get_pnp_workflow_count(client: &DnacClient, name: &[String]) -> EndpointCall<CountResult> {
    let query = CallQuery::new().add_param("name", name);
    Ok(client
        .get("/api/v1/onboarding/pnp-workflow/count")?
        .with_query(query)
        .into_json())
}
