use std::time::Duration;

use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder, Response, multipart::Form};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::api::{
    AssetApi, BlobStoreApi, ComponentApi, RepositoryApi, SearchApi, SecurityApi, TaskApi,
};
use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// Blocking client for the Nexus Repository Manager REST API.
///
/// Owns one connection pool, reused across all calls. Basic credentials,
/// timeout, and TLS verification are fixed at construction. The pool is
/// released when the client is dropped. Every operation is one blocking
/// HTTP request; there are no retries.
///
/// ```rust,ignore
/// let client = NexusClient::new(&ClientConfig::from_env()?)?;
/// for repo in client.repositories().list()? {
///     println!("{} ({})", repo.name, repo.format);
/// }
/// ```
pub struct NexusClient {
    http: Client,
    api_base: String,
    credentials: Option<(String, String)>,
}

impl NexusClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(!config.verify_ssl)
            .build()?;

        let credentials = match (&config.username, &config.password) {
            (Some(user), Some(pass)) => Some((user.clone(), pass.clone())),
            _ => None,
        };

        Ok(Self {
            http,
            api_base: format!("{}/service/rest", config.base_url.trim_end_matches('/')),
            credentials,
        })
    }

    // Resource clients, all sharing this client's pool.

    pub fn repositories(&self) -> RepositoryApi<'_> {
        RepositoryApi::new(self)
    }

    pub fn components(&self) -> ComponentApi<'_> {
        ComponentApi::new(self)
    }

    pub fn assets(&self) -> AssetApi<'_> {
        AssetApi::new(self)
    }

    pub fn security(&self) -> SecurityApi<'_> {
        SecurityApi::new(self)
    }

    pub fn tasks(&self) -> TaskApi<'_> {
        TaskApi::new(self)
    }

    pub fn search(&self) -> SearchApi<'_> {
        SearchApi::new(self)
    }

    pub fn blob_stores(&self) -> BlobStoreApi<'_> {
        BlobStoreApi::new(self)
    }

    /// Server status as reported by `GET /v1/status`. The endpoint may
    /// answer with an empty body, which is returned as an empty object.
    pub fn get_status(&self) -> Result<serde_json::Value> {
        let text = self.get("/v1/status", &[])?.text()?;
        if text.is_empty() {
            Ok(serde_json::Value::Object(serde_json::Map::new()))
        } else {
            Ok(serde_json::from_str(&text)?)
        }
    }

    /// Whether the server accepts writes (not frozen / read-only).
    pub fn is_writable(&self) -> Result<bool> {
        #[derive(Deserialize)]
        struct ReadOnlyState {
            #[serde(default = "default_frozen")]
            frozen: bool,
        }
        fn default_frozen() -> bool {
            true
        }

        let text = self.get("/v1/read-only", &[])?.text()?;
        if text.is_empty() {
            return Ok(false);
        }
        let state: ReadOnlyState = serde_json::from_str(&text)?;
        Ok(!state.frozen)
    }

    // Request plumbing shared by the resource clients.

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.api_base, path);
        self.authorize(self.http.request(method, url))
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.credentials {
            Some((user, pass)) => req.basic_auth(user, Some(pass)),
            None => req,
        }
    }

    fn execute(&self, req: RequestBuilder) -> Result<Response> {
        let resp = req.send()?;
        check_status(resp)
    }

    /// GET with pre-filtered query pairs. Callers push only the filters
    /// that are set; an absent filter must not appear in the query at all.
    pub(crate) fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Response> {
        self.execute(self.request(Method::GET, path).query(query))
    }

    pub(crate) fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        decode(self.get(path, query)?)
    }

    /// GET against an absolute URL (asset download links live outside the
    /// API base), with the same credentials and pool.
    pub(crate) fn get_absolute(&self, url: &str) -> Result<Response> {
        self.execute(self.authorize(self.http.get(url)))
    }

    pub(crate) fn post(&self, path: &str) -> Result<Response> {
        self.execute(self.request(Method::POST, path))
    }

    pub(crate) fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Response> {
        self.execute(self.request(Method::POST, path).json(body))
    }

    pub(crate) fn post_multipart(
        &self,
        path: &str,
        query: &[(&str, String)],
        form: Form,
    ) -> Result<Response> {
        self.execute(self.request(Method::POST, path).query(query).multipart(form))
    }

    pub(crate) fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Response> {
        self.execute(self.request(Method::PUT, path).json(body))
    }

    pub(crate) fn put_text(&self, path: &str, body: String) -> Result<Response> {
        self.execute(
            self.request(Method::PUT, path)
                .header(reqwest::header::CONTENT_TYPE, "text/plain")
                .body(body),
        )
    }

    pub(crate) fn delete(&self, path: &str) -> Result<()> {
        self.execute(self.request(Method::DELETE, path))?;
        Ok(())
    }
}

pub(crate) fn decode<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let text = resp.text()?;
    Ok(serde_json::from_str(&text)?)
}

/// Maps a completed response to a typed failure. Anything below 400
/// passes through untouched; the body is only consumed on the error path.
fn check_status(resp: Response) -> Result<Response> {
    let status = resp.status().as_u16();
    if status < 400 {
        return Ok(resp);
    }
    let body = resp.text().unwrap_or_default();
    Err(match status {
        401 => Error::Authentication { status, body },
        403 => Error::Forbidden { status, body },
        404 => Error::NotFound { status, body },
        400 => Error::BadRequest { status, body },
        _ => Error::Status { status, body },
    })
}
