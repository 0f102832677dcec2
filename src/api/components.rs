use std::path::PathBuf;

use reqwest::blocking::multipart::Form;
use urlencoding::encode;

use crate::client::NexusClient;
use crate::error::Result;
use crate::types::{Component, Page};

/// Component management and typed uploads.
///
/// Uploads send `multipart/form-data` with the field names the server
/// expects per format; the file part streams from disk.
pub struct ComponentApi<'a> {
    client: &'a NexusClient,
}

#[derive(Debug, Clone)]
pub struct MavenUpload {
    pub repository: String,
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub file: PathBuf,
    /// jar, war, pom, ...
    pub packaging: String,
    pub generate_pom: bool,
}

impl MavenUpload {
    pub fn new(
        repository: impl Into<String>,
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
        file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            repository: repository.into(),
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            file: file.into(),
            packaging: "jar".to_string(),
            generate_pom: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RawUpload {
    pub repository: String,
    /// Directory path inside the repository.
    pub directory: String,
    /// Filename inside the repository.
    pub filename: String,
    pub file: PathBuf,
}

impl<'a> ComponentApi<'a> {
    pub(crate) fn new(client: &'a NexusClient) -> Self {
        Self { client }
    }

    pub fn list(&self, repository: &str, continuation_token: Option<&str>) -> Result<Page<Component>> {
        let mut query = vec![("repository", repository.to_string())];
        if let Some(token) = continuation_token {
            query.push(("continuationToken", token.to_string()));
        }
        self.client.get_json("/v1/components", &query)
    }

    pub fn get(&self, component_id: &str) -> Result<Component> {
        self.client
            .get_json(&format!("/v1/components/{}", encode(component_id)), &[])
    }

    pub fn delete(&self, component_id: &str) -> Result<()> {
        self.client
            .delete(&format!("/v1/components/{}", encode(component_id)))
    }

    pub fn upload_maven(&self, upload: &MavenUpload) -> Result<()> {
        let form = Form::new()
            .text("maven2.groupId", upload.group_id.clone())
            .text("maven2.artifactId", upload.artifact_id.clone())
            .text("maven2.version", upload.version.clone())
            .text("maven2.asset1.extension", upload.packaging.clone())
            .text("maven2.generate-pom", upload.generate_pom.to_string())
            .file("maven2.asset1", &upload.file)?;
        self.client.post_multipart(
            "/v1/components",
            &[("repository", upload.repository.clone())],
            form,
        )?;
        Ok(())
    }

    /// Uploads an npm `.tgz` archive; all metadata comes from the archive
    /// itself, so the form carries only the asset.
    pub fn upload_npm(&self, repository: &str, package: impl Into<PathBuf>) -> Result<()> {
        let form = Form::new().file("npm.asset", package.into())?;
        self.client.post_multipart(
            "/v1/components",
            &[("repository", repository.to_string())],
            form,
        )?;
        Ok(())
    }

    pub fn upload_raw(&self, upload: &RawUpload) -> Result<()> {
        let form = Form::new()
            .text("raw.directory", upload.directory.clone())
            .text("raw.asset1.filename", upload.filename.clone())
            .file("raw.asset1", &upload.file)?;
        self.client.post_multipart(
            "/v1/components",
            &[("repository", upload.repository.clone())],
            form,
        )?;
        Ok(())
    }
}
