use serde::Serialize;
use urlencoding::encode;

use crate::client::NexusClient;
use crate::error::Result;
use crate::types::{
    LayoutPolicy, MavenAttributes, Repository, Storage, VersionPolicy, WritePolicy,
};

/// Repository management.
pub struct RepositoryApi<'a> {
    client: &'a NexusClient,
}

/// Creation payload for a Maven hosted repository. `new` fills the
/// server defaults; adjust fields before submitting.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MavenHosted {
    pub name: String,
    pub online: bool,
    pub storage: Storage,
    pub maven: MavenAttributes,
}

impl MavenHosted {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            online: true,
            storage: default_storage(),
            maven: MavenAttributes {
                version_policy: VersionPolicy::Release,
                layout_policy: LayoutPolicy::Strict,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DockerHosted {
    pub name: String,
    pub online: bool,
    pub storage: Storage,
    pub docker: DockerAttributes,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DockerAttributes {
    pub v1_enabled: bool,
    pub force_basic_auth: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub https_port: Option<u16>,
}

impl DockerHosted {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            online: true,
            storage: default_storage(),
            docker: DockerAttributes {
                v1_enabled: false,
                force_basic_auth: true,
                http_port: None,
                https_port: None,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NpmHosted {
    pub name: String,
    pub online: bool,
    pub storage: Storage,
}

impl NpmHosted {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            online: true,
            storage: default_storage(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawHosted {
    pub name: String,
    pub online: bool,
    pub storage: Storage,
}

impl RawHosted {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            online: true,
            storage: default_storage(),
        }
    }
}

fn default_storage() -> Storage {
    Storage {
        blob_store_name: "default".to_string(),
        strict_content_type_validation: true,
        write_policy: Some(WritePolicy::Allow),
    }
}

impl<'a> RepositoryApi<'a> {
    pub(crate) fn new(client: &'a NexusClient) -> Self {
        Self { client }
    }

    pub fn list(&self) -> Result<Vec<Repository>> {
        self.client.get_json("/v1/repositories", &[])
    }

    /// A missing repository surfaces as [`crate::Error::NotFound`].
    pub fn get(&self, name: &str) -> Result<Repository> {
        self.client
            .get_json(&format!("/v1/repositories/{}", encode(name)), &[])
    }

    pub fn create_maven_hosted(&self, repo: &MavenHosted) -> Result<()> {
        self.client
            .post_json("/v1/repositories/maven/hosted", repo)?;
        Ok(())
    }

    pub fn create_docker_hosted(&self, repo: &DockerHosted) -> Result<()> {
        self.client
            .post_json("/v1/repositories/docker/hosted", repo)?;
        Ok(())
    }

    pub fn create_npm_hosted(&self, repo: &NpmHosted) -> Result<()> {
        self.client.post_json("/v1/repositories/npm/hosted", repo)?;
        Ok(())
    }

    pub fn create_raw_hosted(&self, repo: &RawHosted) -> Result<()> {
        self.client.post_json("/v1/repositories/raw/hosted", repo)?;
        Ok(())
    }

    pub fn delete(&self, name: &str) -> Result<()> {
        self.client
            .delete(&format!("/v1/repositories/{}", encode(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maven_hosted_payload_shape() {
        let repo = MavenHosted::new("maven-demo");
        let value = serde_json::to_value(&repo).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "maven-demo",
                "online": true,
                "storage": {
                    "blobStoreName": "default",
                    "strictContentTypeValidation": true,
                    "writePolicy": "ALLOW"
                },
                "maven": {
                    "versionPolicy": "RELEASE",
                    "layoutPolicy": "STRICT"
                }
            })
        );
    }

    #[test]
    fn docker_hosted_omits_unset_ports() {
        let repo = DockerHosted::new("docker-demo");
        let value = serde_json::to_value(&repo).unwrap();
        let docker = &value["docker"];
        assert_eq!(docker["v1Enabled"], false);
        assert_eq!(docker["forceBasicAuth"], true);
        assert!(docker.get("httpPort").is_none());
        assert!(docker.get("httpsPort").is_none());
    }

    #[test]
    fn docker_hosted_includes_set_ports() {
        let mut repo = DockerHosted::new("docker-demo");
        repo.docker.http_port = Some(5000);
        let value = serde_json::to_value(&repo).unwrap();
        assert_eq!(value["docker"]["httpPort"], 5000);
        assert!(value["docker"].get("httpsPort").is_none());
    }
}
