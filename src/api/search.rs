use crate::client::NexusClient;
use crate::error::Result;
use crate::types::{Asset, Component, Page};

/// Component and asset search.
pub struct SearchApi<'a> {
    client: &'a NexusClient,
}

/// Search filters, combined by logical AND on the server.
///
/// Each field is independently optional. An unset (or empty) filter is
/// omitted from the request entirely — the server treats an absent
/// parameter differently from an empty one.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub repository: Option<String>,
    pub format: Option<String>,
    pub group: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
    pub md5: Option<String>,
    pub sha1: Option<String>,
    pub sha256: Option<String>,
    pub sha512: Option<String>,
    pub continuation_token: Option<String>,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push(&mut params, "repository", &self.repository);
        push(&mut params, "format", &self.format);
        push(&mut params, "group", &self.group);
        push(&mut params, "name", &self.name);
        push(&mut params, "version", &self.version);
        push(&mut params, "md5", &self.md5);
        push(&mut params, "sha1", &self.sha1);
        push(&mut params, "sha256", &self.sha256);
        push(&mut params, "sha512", &self.sha512);
        push(&mut params, "continuationToken", &self.continuation_token);
        params
    }
}

fn push(params: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<String>) {
    if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
        params.push((key, v.to_string()));
    }
}

impl<'a> SearchApi<'a> {
    pub(crate) fn new(client: &'a NexusClient) -> Self {
        Self { client }
    }

    pub fn components(&self, query: &SearchQuery) -> Result<Page<Component>> {
        self.client.get_json("/v1/search", &query.params())
    }

    pub fn assets(&self, query: &SearchQuery) -> Result<Page<Asset>> {
        self.client.get_json("/v1/search/assets", &query.params())
    }
}
