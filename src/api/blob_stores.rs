use serde::{Deserialize, Serialize};
use urlencoding::encode;

use crate::client::NexusClient;
use crate::error::Result;
use crate::types::{BlobStore, QuotaStatus, SoftQuota};

/// Blob store management.
pub struct BlobStoreApi<'a> {
    client: &'a NexusClient,
}

/// Payload for creating or updating a file blob store. An unset path
/// lets the server place the store under its data directory.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileBlobStoreConfig {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soft_quota: Option<SoftQuota>,
}

impl FileBlobStoreConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
            soft_quota: None,
        }
    }
}

/// File blob store configuration as returned by the server.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileBlobStore {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub soft_quota: Option<SoftQuota>,
}

impl<'a> BlobStoreApi<'a> {
    pub(crate) fn new(client: &'a NexusClient) -> Self {
        Self { client }
    }

    pub fn list(&self) -> Result<Vec<BlobStore>> {
        self.client.get_json("/v1/blobstores", &[])
    }

    pub fn get_file(&self, name: &str) -> Result<FileBlobStore> {
        self.client
            .get_json(&format!("/v1/blobstores/file/{}", encode(name)), &[])
    }

    pub fn create_file(&self, config: &FileBlobStoreConfig) -> Result<()> {
        self.client.post_json("/v1/blobstores/file", config)?;
        Ok(())
    }

    pub fn update_file(&self, config: &FileBlobStoreConfig) -> Result<()> {
        self.client.put_json(
            &format!("/v1/blobstores/file/{}", encode(&config.name)),
            config,
        )?;
        Ok(())
    }

    pub fn delete(&self, name: &str) -> Result<()> {
        self.client
            .delete(&format!("/v1/blobstores/{}", encode(name)))
    }

    pub fn quota_status(&self, name: &str) -> Result<QuotaStatus> {
        self.client.get_json(
            &format!("/v1/blobstores/{}/quota-status", encode(name)),
            &[],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_omits_unset_path_and_quota() {
        let config = FileBlobStoreConfig::new("artifacts");
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value, serde_json::json!({ "name": "artifacts" }));
    }

    #[test]
    fn config_includes_soft_quota_when_set() {
        let mut config = FileBlobStoreConfig::new("artifacts");
        config.soft_quota = Some(SoftQuota {
            kind: "spaceRemainingQuota".to_string(),
            limit: 1024,
        });
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(
            value["softQuota"],
            serde_json::json!({ "type": "spaceRemainingQuota", "limit": 1024 })
        );
    }
}
