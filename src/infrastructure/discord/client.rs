//! Discord REST client - builds one request per call and checks the answer

use serde_json::Value;

use crate::application::errors::BotError;
use crate::domain::entities::{CommandDescriptor, InteractionEdit};
use crate::domain::traits::{ApiRequest, ApiResponse, Method, Transport};
use crate::infrastructure::config::{redact, DiscordConfig};

/// Discord REST API client
pub struct DiscordClient<T: Transport> {
    transport: T,
    api_base: String,
    token: String,
}

impl<T: Transport> DiscordClient<T> {
    pub fn new(transport: T, api_base: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            transport,
            api_base: api_base.into(),
            token: token.into(),
        }
    }

    pub fn from_config(transport: T, config: &DiscordConfig) -> Self {
        Self::new(transport, config.api_base.clone(), config.bot_token.clone())
    }

    /// Absolute URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn authorization(&self) -> String {
        format!("Bot {}", self.token)
    }

    fn request(&self, method: Method, path: &str) -> ApiRequest {
        ApiRequest::new(method, self.url(path)).with_header("Authorization", self.authorization())
    }

    fn json_request(&self, method: Method, path: &str, body: Value) -> ApiRequest {
        self.request(method, path)
            .with_header("Content-Type", "application/json")
            .with_json(body)
    }

    fn encode<S: serde::Serialize>(payload: &S) -> Result<Value, BotError> {
        serde_json::to_value(payload).map_err(|e| BotError::Parse(e.to_string()))
    }

    /// Send the request and return the body as JSON.
    ///
    /// An empty 2xx body (e.g. 204) comes back as `Value::Null`.
    fn send(&self, request: ApiRequest) -> Result<Value, BotError> {
        tracing::debug!(
            "{} {} (token: {})",
            request.method,
            request.url,
            redact(&self.token)
        );

        let response = check_status(self.transport.execute(request)?)?;

        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&response.body).map_err(|e| BotError::Parse(e.to_string()))
    }

    /// POST /applications/{app_id}/commands
    pub fn create_global_command(
        &self,
        app_id: &str,
        command: &CommandDescriptor,
    ) -> Result<Value, BotError> {
        let path = format!("applications/{}/commands", app_id);
        let request = self.json_request(Method::Post, &path, Self::encode(command)?);
        self.send(request)
    }

    /// PUT /applications/{app_id}/commands
    pub fn overwrite_global_commands(
        &self,
        app_id: &str,
        commands: &[CommandDescriptor],
    ) -> Result<Value, BotError> {
        let path = format!("applications/{}/commands", app_id);
        let request = self.json_request(Method::Put, &path, Self::encode(&commands)?);
        self.send(request)
    }

    /// GET /channels/{channel_id}/messages
    pub fn get_channel_messages(&self, channel_id: &str) -> Result<Value, BotError> {
        let path = format!("channels/{}/messages", channel_id);
        self.send(self.request(Method::Get, &path))
    }

    /// PATCH /webhooks/{app_id}/{interaction_token}/messages/@original
    pub fn edit_original_response(
        &self,
        app_id: &str,
        interaction_token: &str,
        edit: &InteractionEdit,
    ) -> Result<Value, BotError> {
        let path = format!("webhooks/{}/{}/messages/@original", app_id, interaction_token);
        let request = self.json_request(Method::Patch, &path, Self::encode(edit)?);
        self.send(request)
    }
}

/// Map non-2xx answers to errors. Nothing is retried.
pub fn check_status(response: ApiResponse) -> Result<ApiResponse, BotError> {
    if response.status == 429 {
        return Err(BotError::RateLimited(response.body));
    }

    if !response.is_success() {
        return Err(BotError::Api {
            status: response.status,
            body: response.body,
        });
    }

    Ok(response)
}
