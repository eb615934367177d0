// Back-office HTTP client.
//
// Wraps reqwest with shopdesk-specific URL construction, envelope
// unwrapping, and error normalization. Endpoint knowledge stays in the
// callers (shopdesk-core stores); this module is transport mechanics.

use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

// ── Response envelopes ───────────────────────────────────────────────

/// A page of list results: `{ <entityPlural>: [..], count }`.
///
/// `count` is `-1` when the server omitted it — callers must only
/// overwrite their cached count when this is non-negative.
#[derive(Debug, Clone)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub count: i64,
}

/// Detail and create endpoints wrap the record: `{ data: Record }`.
#[derive(serde::Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// Structured error body reported by the back office.
#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<Value>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the back-office REST API.
///
/// One instance per application, shared by every domain store. The
/// session cookie lives in the underlying client's jar, so all stores
/// observe the same authentication state.
pub struct AdminClient {
    http: reqwest::Client,
    base_url: Url,
}

impl AdminClient {
    /// Build a client for the given API root (e.g. `https://shop.example.com/api`).
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        Ok(Self {
            http: transport.build_client()?,
            base_url: Url::parse(base_url)?,
        })
    }

    /// Wrap an existing `reqwest::Client` (tests, custom transports).
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The API root this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join an endpoint path onto the base URL.
    pub(crate) fn url(&self, path: &str) -> Url {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Url::parse(&format!("{base}/{path}")).expect("invalid API URL")
    }

    /// The cache-defeating query parameter appended to every list and
    /// detail GET.
    fn nocache_param() -> (&'static str, String) {
        ("t", chrono::Utc::now().timestamp_millis().to_string())
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    /// GET a list endpoint and unwrap the `{ <plural>: [..], count }`
    /// envelope. A missing array yields an empty page.
    pub async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
        plural: &str,
    ) -> Result<ListPage<T>, Error> {
        let url = self.url(path);
        debug!("GET {url} params={query:?}");

        let resp = self
            .http
            .get(url)
            .query(query)
            .query(&[Self::nocache_param()])
            .send()
            .await
            .map_err(normalize_send_error)?;
        let value: Value = self.handle_response(resp).await?;

        let items = match value.get(plural) {
            Some(array) => {
                serde_json::from_value(array.clone()).map_err(|e| Error::Deserialization {
                    message: format!("invalid `{plural}` array: {e}"),
                    body: value.to_string(),
                })?
            }
            None => Vec::new(),
        };
        let count = value.get("count").and_then(Value::as_i64).unwrap_or(-1);

        Ok(ListPage { items, count })
    }

    /// GET a reference dataset (`{ statuses: [..] }`, `{ categories: [..] }`).
    ///
    /// No cache-defeating parameter: these endpoints are explicitly
    /// cacheable and fetched at most once per session anyway.
    pub async fn get_reference<T: DeserializeOwned>(
        &self,
        path: &str,
        key: &str,
    ) -> Result<Vec<T>, Error> {
        let url = self.url(path);
        debug!("GET {url}");

        let resp = self.http.get(url).send().await.map_err(normalize_send_error)?;
        let value: Value = self.handle_response(resp).await?;

        match value.get(key) {
            Some(array) => serde_json::from_value(array.clone()).map_err(|e| {
                Error::Deserialization {
                    message: format!("invalid `{key}` array: {e}"),
                    body: value.to_string(),
                }
            }),
            None => Ok(Vec::new()),
        }
    }

    /// GET a detail endpoint and unwrap the `{ data: Record }` envelope.
    pub async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path);
        debug!("GET {url}");

        let resp = self
            .http
            .get(url)
            .query(&[Self::nocache_param()])
            .send()
            .await
            .map_err(normalize_send_error)?;
        let envelope: DataEnvelope<T> = self.handle_response(resp).await?;
        Ok(envelope.data)
    }

    /// GET an endpoint whose body is the record itself (no envelope).
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path);
        debug!("GET {url}");

        let resp = self.http.get(url).send().await.map_err(normalize_send_error)?;
        self.handle_response(resp).await
    }

    /// POST a create endpoint and unwrap the `{ data: Record }` envelope.
    pub async fn post_data<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!("POST {url}");

        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(normalize_send_error)?;
        let envelope: DataEnvelope<T> = self.handle_response(resp).await?;
        Ok(envelope.data)
    }

    /// POST and parse the response body directly (no envelope).
    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!("POST {url}");

        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(normalize_send_error)?;
        self.handle_response(resp).await
    }

    /// PATCH an update endpoint. The response body is discarded — the
    /// caller merges its own patch into the cache on success.
    pub async fn patch<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<(), Error> {
        let url = self.url(path);
        debug!("PATCH {url}");

        let resp = self
            .http
            .patch(url)
            .json(body)
            .send()
            .await
            .map_err(normalize_send_error)?;
        self.handle_empty(resp).await
    }

    /// DELETE an endpoint, discarding any response body.
    pub async fn delete(&self, path: &str) -> Result<(), Error> {
        let url = self.url(path);
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await.map_err(normalize_send_error)?;
        self.handle_empty(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    pub(crate) async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview = &body[..body.len().min(200)];
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(parse_error(status, resp).await)
        }
    }

    pub(crate) async fn handle_empty(&self, resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(parse_error(status, resp).await)
        }
    }
}

// ── Error normalization ──────────────────────────────────────────────

/// Map a send-phase failure. Connect failures and the client timeout
/// both become the normalized abort error; anything else stays a
/// transport error.
fn normalize_send_error(err: reqwest::Error) -> Error {
    if err.is_timeout() || err.is_connect() {
        Error::Timeout
    } else {
        Error::Transport(err)
    }
}

/// Normalize a non-2xx response.
///
/// A structured `{message, code?}` body propagates verbatim; anything
/// else collapses into `unknown error[<status>]`.
async fn parse_error(status: StatusCode, resp: reqwest::Response) -> Error {
    let raw = resp.text().await.unwrap_or_default();

    if let Ok(body) = serde_json::from_str::<ErrorBody>(&raw) {
        if let Some(message) = body.message {
            return Error::Api {
                message,
                code: body.code.map(code_to_string),
                status: status.as_u16(),
            };
        }
    }

    Error::Unknown {
        status: i32::from(status.as_u16()),
    }
}

/// The back office reports codes as strings, but older endpoints emit
/// bare numbers. Normalize both to a string.
fn code_to_string(code: Value) -> String {
    match code {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
