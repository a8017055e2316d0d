use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{AgentError, Result};
use crate::models::NamePayload;

pub const DEFAULT_BASE_URL: &str = "https://api.clickup.com/api/v2/";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking client for the ClickUp v2 team and space endpoints.
///
/// Every method performs exactly one request and hands back the decoded
/// JSON body untouched.
pub struct ClickUpClient {
    base_url: String,
    client: Client,
}

impl ClickUpClient {
    pub fn new(token: &str) -> Result<Self> {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(token: &str, base_url: &str) -> Result<Self> {
        let mut auth = HeaderValue::from_str(token).map_err(|_| {
            AgentError::Config("API token contains characters not allowed in a header".to_string())
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            base_url: base_url.to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Teams (workspaces) visible to the token: `{"teams": [...]}`.
    pub fn get_teams(&self) -> Result<Value> {
        self.send(Method::GET, "team", None)
    }

    /// All spaces of a team: `{"spaces": [...]}`.
    pub fn get_spaces(&self, team_id: &str) -> Result<Value> {
        self.send(Method::GET, &format!("team/{}/space", team_id), None)
    }

    pub fn get_space(&self, space_id: &str) -> Result<Value> {
        self.send(Method::GET, &format!("space/{}", space_id), None)
    }

    pub fn create_space(&self, team_id: &str, name: &str) -> Result<Value> {
        self.send(
            Method::POST,
            &format!("team/{}/space", team_id),
            Some(&NamePayload { name }),
        )
    }

    pub fn update_space(&self, space_id: &str, name: &str) -> Result<Value> {
        self.send(
            Method::PUT,
            &format!("space/{}", space_id),
            Some(&NamePayload { name }),
        )
    }

    /// ClickUp answers a delete with `{}`; an empty body is reported the same way.
    pub fn delete_space(&self, space_id: &str) -> Result<Value> {
        self.send(Method::DELETE, &format!("space/{}", space_id), None)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    fn send(&self, method: Method, path: &str, payload: Option<&NamePayload<'_>>) -> Result<Value> {
        let url = self.url(path);
        debug!(method = %method, url = %url, "sending request");

        let mut request = self.client.request(method.clone(), &url);
        if let Some(payload) = payload {
            request = request.json(payload);
        }
        let resp = request.send()?;

        let status = resp.status();
        let body = resp.text()?;
        if status.is_client_error() || status.is_server_error() {
            return Err(AgentError::Http {
                method: method.to_string(),
                url,
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
                body,
            });
        }

        decode(url, body)
    }
}

fn decode(url: String, body: String) -> Result<Value> {
    if body.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_str(&body).map_err(|source| AgentError::Decode { url, body, source })
}
