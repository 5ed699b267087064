use crate::{CliClientResult, ClientError};

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method, Url};
use serde::Serialize;
use serde_json::Value;

/// HTTP client for the pms-server REST API
pub struct Client {
    pub base_url: String,
    pub token: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:3008")
    /// * `token` - Optional session token sent as `Authorization: Bearer`
    pub fn new(base_url: &str, token: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    /// Build a URL from a path and query pairs; `None` values are skipped
    fn url(&self, path: &str, query: &[(&str, Option<&str>)]) -> CliClientResult<Url> {
        let mut url =
            Url::parse(&format!("{}{}", self.base_url, path)).map_err(|e| ClientError::Url {
                message: format!("{}: {}", self.base_url, e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let present: Vec<(&str, &str)> = query
            .iter()
            .filter_map(|(key, value)| value.map(|v| (*key, v)))
            .collect();
        if !present.is_empty() {
            url.query_pairs_mut().extend_pairs(present);
        }

        Ok(url)
    }

    /// Build a request with the optional bearer token
    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        let mut req = self.client.request(method, url);

        if let Some(ref token) = self.token {
            req = req.bearer_auth(token);
        }

        req
    }

    async fn get(&self, path: &str, query: &[(&str, Option<&str>)]) -> CliClientResult<Value> {
        let url = self.url(path, query)?;
        self.execute(self.request(Method::GET, url)).await
    }

    /// Execute request and handle errors
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;
        let body: Value = serde_json::from_str(&text)?;

        if status.is_success() {
            return Ok(body);
        }

        // Handler errors carry an `error` object; the 404 fallback only a message
        let (code, message) = match body.get("error") {
            Some(error) => (
                error.get("code").and_then(|v| v.as_str()).unwrap_or("UNKNOWN"),
                error.get("message").and_then(|v| v.as_str()),
            ),
            None => ("UNKNOWN", body.get("message").and_then(|v| v.as_str())),
        };

        Err(ClientError::api_error(
            status.as_u16(),
            code.to_string(),
            message.unwrap_or("Unknown error").to_string(),
        ))
    }

    // =========================================================================
    // Operational
    // =========================================================================

    pub async fn health(&self) -> CliClientResult<Value> {
        self.get("/api/health", &[]).await
    }

    pub async fn debug_db(&self) -> CliClientResult<Value> {
        self.get("/api/debug/db", &[]).await
    }

    pub async fn login(&self, email: &str, password: &str) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        let url = self.url("/login", &[])?;
        let req = self
            .request(Method::POST, url)
            .json(&LoginRequest { email, password });
        self.execute(req).await
    }

    // =========================================================================
    // Collections
    // =========================================================================

    pub async fn list_projects(&self) -> CliClientResult<Value> {
        self.get("/projects", &[]).await
    }

    pub async fn get_project(&self, id: &str) -> CliClientResult<Value> {
        self.get(&format!("/projects/{}", id), &[]).await
    }

    pub async fn list_users(&self) -> CliClientResult<Value> {
        self.get("/users", &[]).await
    }

    pub async fn list_sprints(&self) -> CliClientResult<Value> {
        self.get("/sprints", &[]).await
    }

    /// Create a sprint from a raw JSON body
    pub async fn create_sprint(&self, body: &Value) -> CliClientResult<Value> {
        let url = self.url("/sprints/add", &[])?;
        let req = self.request(Method::POST, url).json(body);
        self.execute(req).await
    }

    pub async fn list_tasks(
        &self,
        user_id: Option<&str>,
        role: Option<&str>,
    ) -> CliClientResult<Value> {
        self.get("/tasks", &[("userId", user_id), ("role", role)])
            .await
    }

    pub async fn list_daily_tasks(
        &self,
        user_id: Option<&str>,
        role: Option<&str>,
    ) -> CliClientResult<Value> {
        self.get("/daily-tasks", &[("userId", user_id), ("role", role)])
            .await
    }
}
