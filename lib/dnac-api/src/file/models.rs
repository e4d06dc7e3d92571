//! Payloads of the `/api/v1/file` endpoints.
#![allow(missing_docs)]

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A file stored by the controller in a namespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_info: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub md5_checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_space: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sftp_server_list: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha1_checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
}
