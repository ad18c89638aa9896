//! Blocking reqwest transport

use reqwest::blocking::Client;

use crate::application::errors::BotError;
use crate::domain::traits::{ApiRequest, ApiResponse, Method, Transport};

/// Transport backed by a blocking reqwest client
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, BotError> {
        let client = Client::builder()
            .user_agent(user_agent())
            .build()
            .map_err(|e| BotError::Network(format!("Client error: {}", e)))?;

        Ok(Self { client })
    }
}

/// Discord asks bots to identify as `DiscordBot (<url or name>, <version>)`
fn user_agent() -> String {
    format!("DiscordBot ({}, {})", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
    }
}

impl Transport for ReqwestTransport {
    fn execute(&self, request: ApiRequest) -> Result<ApiResponse, BotError> {
        let mut builder = self.client.request(to_reqwest(request.method), &request.url);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .map_err(|e| BotError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| BotError::Network(format!("Failed to read body: {}", e)))?;

        Ok(ApiResponse::new(status, body))
    }
}
