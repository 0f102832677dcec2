use std::fs::File;
use std::io;
use std::path::Path;

use urlencoding::encode;

use crate::client::NexusClient;
use crate::error::{Error, Result};
use crate::types::{Asset, Page};

/// Asset management and downloads.
pub struct AssetApi<'a> {
    client: &'a NexusClient,
}

impl<'a> AssetApi<'a> {
    pub(crate) fn new(client: &'a NexusClient) -> Self {
        Self { client }
    }

    pub fn list(&self, repository: &str, continuation_token: Option<&str>) -> Result<Page<Asset>> {
        let mut query = vec![("repository", repository.to_string())];
        if let Some(token) = continuation_token {
            query.push(("continuationToken", token.to_string()));
        }
        self.client.get_json("/v1/assets", &query)
    }

    pub fn get(&self, asset_id: &str) -> Result<Asset> {
        self.client
            .get_json(&format!("/v1/assets/{}", encode(asset_id)), &[])
    }

    pub fn delete(&self, asset_id: &str) -> Result<()> {
        self.client
            .delete(&format!("/v1/assets/{}", encode(asset_id)))
    }

    /// Streams the asset's content to `dest` and returns the number of
    /// bytes written. The body is copied in chunks, never held in memory
    /// whole. Fails with [`Error::MissingDownloadUrl`] when the asset
    /// record carries no download link.
    pub fn download(&self, asset_id: &str, dest: &Path) -> Result<u64> {
        let asset = self.get(asset_id)?;
        let url = asset
            .download_url
            .ok_or_else(|| Error::MissingDownloadUrl(asset_id.to_string()))?;

        let mut resp = self.client.get_absolute(&url)?;
        let mut file = File::create(dest)?;
        Ok(io::copy(&mut resp, &mut file)?)
    }
}
