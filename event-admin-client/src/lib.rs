use serde::Deserialize;
use thiserror::Error;

pub mod form;
pub mod panel;

use crate::form::EventForm;

/// Tunneling proxies such as ngrok show a warning page unless this is set.
const SKIP_BROWSER_WARNING: (&str, &str) = ("ngrok-skip-browser-warning", "true");

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("HTTP request failed")]
    Request(#[from] reqwest::Error),

    #[error("Failed to serialize/deserialize message")]
    Serde(#[from] serde_json::Error),

    #[error("Server responded with {status}: {message}")]
    Api { status: u16, message: String },
}

impl HttpError {
    /// The message the server put in its error body, if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            HttpError::Api { message, .. } => Some(message),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Deserialize, Debug)]
struct CategoriesResponse {
    data: Vec<Category>,
}

#[derive(Deserialize, Debug)]
pub struct CreatedEvent {
    pub id: i64,
}

#[derive(Deserialize, Debug)]
pub struct CreateEventResponse {
    pub success: bool,
    pub message: String,
    pub data: CreatedEvent,
}

#[derive(Deserialize, Debug)]
struct ErrorResponse {
    message: String,
}

#[async_trait::async_trait]
pub trait EventApi {
    async fn create_event(&self, form: &EventForm) -> Result<CreateEventResponse, HttpError>;
    async fn list_categories(&self) -> Result<Vec<Category>, HttpError>;
}

#[derive(Clone)]
pub struct EventAdminClient {
    api_url: String,
    http_client: reqwest::Client,
}

impl EventAdminClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        let api_url: String = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    async fn read_body<R>(resp: reqwest::Response) -> Result<R, HttpError>
    where
        R: serde::de::DeserializeOwned,
    {
        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            let body: ErrorResponse = serde_json::from_str(&text)?;
            return Err(HttpError::Api {
                status: status.as_u16(),
                message: body.message,
            });
        }
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait::async_trait]
impl EventApi for EventAdminClient {
    async fn create_event(&self, form: &EventForm) -> Result<CreateEventResponse, HttpError> {
        let body = serde_json::to_string(form)?;
        let resp = self
            .http_client
            .post(format!("{}/api/events", self.api_url))
            .header("Content-Type", "application/json")
            .header(SKIP_BROWSER_WARNING.0, SKIP_BROWSER_WARNING.1)
            .body(body)
            .send()
            .await?;
        Self::read_body(resp).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, HttpError> {
        let resp = self
            .http_client
            .get(format!("{}/api/categories", self.api_url))
            .header(SKIP_BROWSER_WARNING.0, SKIP_BROWSER_WARNING.1)
            .send()
            .await?;
        let body: CategoriesResponse = Self::read_body(resp).await?;
        Ok(body.data)
    }
}
