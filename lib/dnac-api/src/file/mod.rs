//! Files stored by the controller: `/api/v1/file`.

use dnac_core::{CallPath, DnacClient, Envelope};

use crate::common::EndpointCall;

mod models;

pub use self::models::*;

/// Names of the file namespaces, e.g. `config` or `ejbca`.
pub fn get_name_spaces(client: &DnacClient) -> EndpointCall<Envelope<Vec<String>>> {
    Ok(client.get("/api/v1/file/namespace")?.into_json())
}

/// Files of one namespace.
pub fn get_files_by_name_space(
    client: &DnacClient,
    name_space: &str,
) -> EndpointCall<Envelope<Vec<FileObject>>> {
    let path =
        CallPath::from("/api/v1/file/namespace/{nameSpace}").add_param("nameSpace", name_space);
    Ok(client.get(path)?.into_json())
}

/// Downloads a file; the body is returned as is.
pub fn download_file(client: &DnacClient, file_id: &str) -> EndpointCall<Vec<u8>> {
    let path = CallPath::from("/api/v1/file/{fileId}").add_param("fileId", file_id);
    Ok(client.get(path)?.into_bytes())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::common::testing::{assert_round_trip, client, url};

    #[test]
    fn should_encode_name_space() {
        let call = get_files_by_name_space(&client(), "config backups").expect("should build call");

        assert_eq!(url(&call), "http://dnac.local/api/v1/file/namespace/config%20backups");
    }

    #[test]
    fn should_decode_file_list() {
        let json = r#"{
            "response": [{
                "id": "file-1",
                "name": "running-config",
                "nameSpace": "config",
                "fileSize": "1234",
                "md5Checksum": "d41d8cd98f00b204e9800998ecf8427e",
                "sftpServerList": [],
                "encrypted": false
            }],
            "version": "1.0"
        }"#;

        let files: Envelope<Vec<FileObject>> = serde_json::from_str(json).expect("valid file list");

        let file = &files.response[0];
        assert_eq!(file.name_space.as_deref(), Some("config"));
        assert_eq!(file.md5_checksum.as_deref(), Some("d41d8cd98f00b204e9800998ecf8427e"));
        assert_eq!(file.encrypted, Some(false));
    }

    #[rstest]
    #[case::config(
        r#"{"id": "file-1", "name": "edge-1-running-config.txt", "nameSpace": "config", "fileFormat": "text/plain", "fileSize": "2048", "md5Checksum": "d41d8cd98f00b204e9800998ecf8427e", "downloadPath": "/file/file-1", "encrypted": false}"#
    )]
    #[case::with_servers(
        r#"{"id": "file-2", "name": "image.bin", "nameSpace": "swimage", "sftpServerList": [{"server": "10.10.20.10"}], "taskId": "task-1", "attributeInfo": {}}"#
    )]
    fn should_round_trip_file_object(#[case] json: &str) {
        assert_round_trip::<FileObject>(json);
    }
}
