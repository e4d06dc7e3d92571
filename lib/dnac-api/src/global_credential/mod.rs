//! Global device credentials: `/api/v1/global-credential`.
//!
//! Each credential kind has its own collection. Creation takes a list,
//! update takes a single credential carrying its `id`.

use dnac_core::{CallPath, CallQuery, DnacClient, Envelope};
use serde::{Deserialize, Serialize};

use crate::common::{EndpointCall, SortOrder, TaskIdResult};

mod models;

pub use self::models::*;

/// Kind of credential to list with [`get_global_credentials`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CredentialSubType {
    /// SSH or telnet.
    Cli,
    /// SNMPv2 read community.
    #[serde(rename = "SNMPV2_READ_COMMUNITY")]
    SnmpV2ReadCommunity,
    /// SNMPv2 write community.
    #[serde(rename = "SNMPV2_WRITE_COMMUNITY")]
    SnmpV2WriteCommunity,
    /// SNMPv3 user.
    #[serde(rename = "SNMPV3")]
    SnmpV3,
    /// HTTP(S) write access.
    HttpWrite,
    /// HTTP(S) read access.
    HttpRead,
    /// NETCONF port.
    Netconf,
}

/// Ordering of [`get_global_credentials`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialSortQuery {
    pub sort_by: Option<String>,
    pub order: Option<SortOrder>,
}

/// Credentials of one kind, secrets omitted.
pub fn get_global_credentials(
    client: &DnacClient,
    credential_sub_type: CredentialSubType,
    sort: &CredentialSortQuery,
) -> EndpointCall<Envelope<Vec<GlobalCredential>>> {
    let query = CallQuery::new()
        .add_param("credentialSubType", credential_sub_type)
        .merge(CallQuery::from_serializable(sort)?);
    Ok(client
        .get("/api/v1/global-credential")?
        .with_query(query)
        .into_json())
}

/// The kind of a credential, e.g. `CLI`.
pub fn get_credential_sub_type(client: &DnacClient, id: &str) -> EndpointCall<Envelope<String>> {
    let path = CallPath::from("/api/v1/global-credential/{id}").add_param("id", id);
    Ok(client.get(path)?.into_json())
}

/// Assigns a credential to sites.
pub fn update_global_credential_sites(
    client: &DnacClient,
    global_credential_id: &str,
    sites: &SitesInfo,
) -> EndpointCall<TaskIdResult> {
    let path = CallPath::from("/api/v1/global-credential/{globalCredentialId}")
        .add_param("globalCredentialId", global_credential_id);
    Ok(client.put(path)?.json(sites)?.into_json())
}

/// Deletes a credential.
pub fn delete_global_credential(
    client: &DnacClient,
    global_credential_id: &str,
) -> EndpointCall<TaskIdResult> {
    let path = CallPath::from("/api/v1/global-credential/{globalCredentialId}")
        .add_param("globalCredentialId", global_credential_id);
    Ok(client.delete(path)?.into_json())
}

fn create_credentials<T>(
    client: &DnacClient,
    path: &str,
    credentials: &[T],
) -> EndpointCall<TaskIdResult>
where
    T: Serialize,
{
    Ok(client.post(path)?.json(credentials)?.into_json())
}

fn update_credential<T>(client: &DnacClient, path: &str, credential: &T) -> EndpointCall<TaskIdResult>
where
    T: Serialize,
{
    Ok(client.put(path)?.json(credential)?.into_json())
}

const CLI: &str = "/api/v1/global-credential/cli";
const SNMPV2_READ_COMMUNITY: &str = "/api/v1/global-credential/snmpv2-read-community";
const SNMPV2_WRITE_COMMUNITY: &str = "/api/v1/global-credential/snmpv2-write-community";
const SNMPV3: &str = "/api/v1/global-credential/snmpv3";
const HTTP_READ: &str = "/api/v1/global-credential/http-read";
const HTTP_WRITE: &str = "/api/v1/global-credential/http-write";
const NETCONF: &str = "/api/v1/global-credential/netconf";

/// Creates CLI credentials.
pub fn create_cli_credentials(
    client: &DnacClient,
    credentials: &[CliCredential],
) -> EndpointCall<TaskIdResult> {
    create_credentials(client, CLI, credentials)
}

/// Updates a CLI credential.
pub fn update_cli_credential(
    client: &DnacClient,
    credential: &CliCredential,
) -> EndpointCall<TaskIdResult> {
    update_credential(client, CLI, credential)
}

/// Creates SNMPv2 read communities.
pub fn create_snmpv2_read_communities(
    client: &DnacClient,
    credentials: &[SnmpV2ReadCredential],
) -> EndpointCall<TaskIdResult> {
    create_credentials(client, SNMPV2_READ_COMMUNITY, credentials)
}

/// Updates an SNMPv2 read community.
pub fn update_snmpv2_read_community(
    client: &DnacClient,
    credential: &SnmpV2ReadCredential,
) -> EndpointCall<TaskIdResult> {
    update_credential(client, SNMPV2_READ_COMMUNITY, credential)
}

/// Creates SNMPv2 write communities.
pub fn create_snmpv2_write_communities(
    client: &DnacClient,
    credentials: &[SnmpV2WriteCredential],
) -> EndpointCall<TaskIdResult> {
    create_credentials(client, SNMPV2_WRITE_COMMUNITY, credentials)
}

/// Updates an SNMPv2 write community.
pub fn update_snmpv2_write_community(
    client: &DnacClient,
    credential: &SnmpV2WriteCredential,
) -> EndpointCall<TaskIdResult> {
    update_credential(client, SNMPV2_WRITE_COMMUNITY, credential)
}

/// Creates SNMPv3 credentials.
pub fn create_snmpv3_credentials(
    client: &DnacClient,
    credentials: &[SnmpV3Credential],
) -> EndpointCall<TaskIdResult> {
    create_credentials(client, SNMPV3, credentials)
}

/// Updates an SNMPv3 credential.
pub fn update_snmpv3_credential(
    client: &DnacClient,
    credential: &SnmpV3Credential,
) -> EndpointCall<TaskIdResult> {
    update_credential(client, SNMPV3, credential)
}

/// Creates HTTP read credentials.
pub fn create_http_read_credentials(
    client: &DnacClient,
    credentials: &[HttpCredential],
) -> EndpointCall<TaskIdResult> {
    create_credentials(client, HTTP_READ, credentials)
}

/// Updates an HTTP read credential.
pub fn update_http_read_credential(
    client: &DnacClient,
    credential: &HttpCredential,
) -> EndpointCall<TaskIdResult> {
    update_credential(client, HTTP_READ, credential)
}

/// Creates HTTP write credentials.
pub fn create_http_write_credentials(
    client: &DnacClient,
    credentials: &[HttpCredential],
) -> EndpointCall<TaskIdResult> {
    create_credentials(client, HTTP_WRITE, credentials)
}

/// Updates an HTTP write credential.
pub fn update_http_write_credential(
    client: &DnacClient,
    credential: &HttpCredential,
) -> EndpointCall<TaskIdResult> {
    update_credential(client, HTTP_WRITE, credential)
}

/// Creates NETCONF credentials.
pub fn create_netconf_credentials(
    client: &DnacClient,
    credentials: &[NetconfCredential],
) -> EndpointCall<TaskIdResult> {
    create_credentials(client, NETCONF, credentials)
}

/// Updates a NETCONF credential.
pub fn update_netconf_credential(
    client: &DnacClient,
    credential: &NetconfCredential,
) -> EndpointCall<TaskIdResult> {
    update_credential(client, NETCONF, credential)
}
