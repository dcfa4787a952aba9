use dioxus_logger::tracing;
use reqwasm::http::{Request, Response};
use serde_json::Value;

use crate::{
    client::{
        api::{AuthApi, EntityApi},
        config::ClientConfig,
        error::{ApiError, Error},
        util::RequestScope,
    },
    model::{
        api::{AuthDto, ErrorDto, LoginDto, RegisterDto},
        entity::Resource,
        stats::CountsSnapshot,
        user::UserRecord,
    },
};

/// JSON-over-HTTP client for the garage backend
///
/// Requests carry `Authorization: Bearer <token>` when the client was built with a token.
#[derive(Clone, Debug, PartialEq)]
pub struct RestClient {
    config: ClientConfig,
    token: Option<String>,
}

enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl RestClient {
    pub fn new(config: ClientConfig, token: Option<String>) -> Self {
        Self { config, token }
    }

    /// Client without credentials, for public endpoints
    pub fn anonymous(config: ClientConfig) -> Self {
        Self::new(config, None)
    }

    async fn send(&self, verb: Verb, path: &str, body: Option<&Value>) -> Result<Value, Error> {
        let url = self.config.endpoint(path);

        let mut request = match verb {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
            Verb::Put => Request::put(&url),
            Verb::Delete => Request::delete(&url),
        }
        .header("Accept", "application/json");

        if let Some(token) = &self.token {
            request = request.header("Authorization", &format!("Bearer {}", token));
        }

        if let Some(body) = body {
            let encoded = serde_json::to_string(body).map_err(|e| {
                Error::ParseError(format!("Failed to encode request body: {}", e))
            })?;

            request = request
                .header("Content-Type", "application/json")
                .body(encoded);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::read_response(&url, response).await
    }

    /// Decode a response body, mapping non-success statuses to `ApiError::Status`
    async fn read_response(url: &str, response: Response) -> Result<Value, Error> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            match serde_json::from_str::<Value>(&text) {
                Ok(body) => body,
                Err(_) if !(200..300).contains(&status) => Value::String(text),
                Err(e) => return Err(ApiError::Decode(e.to_string()).into()),
            }
        };

        if (200..300).contains(&status) {
            return Ok(body);
        }

        let message = ErrorDto::message_from(&body);

        tracing::warn!(
            url = %url,
            status = status,
            message = message.as_deref().unwrap_or_default(),
            "Backend request failed"
        );

        Err(ApiError::Status { status, message }.into())
    }

    fn item_path(resource: Resource, id: i64) -> String {
        format!("{}/{}", resource.path(), id)
    }
}

impl EntityApi for RestClient {
    async fn list(&self, resource: Resource, scope: &RequestScope) -> Result<Value, Error> {
        scope
            .run_fallible(self.send(Verb::Get, resource.path(), None))
            .await
    }

    async fn get(&self, resource: Resource, id: i64, scope: &RequestScope) -> Result<Value, Error> {
        scope
            .run_fallible(self.send(Verb::Get, &Self::item_path(resource, id), None))
            .await
    }

    async fn create(
        &self,
        resource: Resource,
        body: Value,
        scope: &RequestScope,
    ) -> Result<Value, Error> {
        scope
            .run_fallible(self.send(Verb::Post, resource.path(), Some(&body)))
            .await
    }

    async fn update(
        &self,
        resource: Resource,
        id: i64,
        body: Value,
        scope: &RequestScope,
    ) -> Result<Value, Error> {
        scope
            .run_fallible(self.send(Verb::Put, &Self::item_path(resource, id), Some(&body)))
            .await
    }

    async fn delete(&self, resource: Resource, id: i64, scope: &RequestScope) -> Result<(), Error> {
        scope
            .run_fallible(self.send(Verb::Delete, &Self::item_path(resource, id), None))
            .await
            .map(|_| ())
    }

    async fn stats(&self, scope: &RequestScope) -> Result<CountsSnapshot, Error> {
        scope
            .run_fallible(self.send(Verb::Get, "stats", None))
            .await
            .map(CountsSnapshot::from_value)
    }
}

impl AuthApi for RestClient {
    async fn login(&self, credentials: &LoginDto, scope: &RequestScope) -> Result<AuthDto, Error> {
        let body = serde_json::to_value(credentials)
            .map_err(|e| Error::ParseError(format!("Failed to encode credentials: {}", e)))?;

        let response = scope
            .run_fallible(self.send(Verb::Post, "auth/login", Some(&body)))
            .await?;

        AuthDto::from_value(response)
            .ok_or_else(|| ApiError::Decode("login response has no token and user".to_string()).into())
    }

    async fn register(&self, form: &RegisterDto, scope: &RequestScope) -> Result<AuthDto, Error> {
        let body = serde_json::to_value(form)
            .map_err(|e| Error::ParseError(format!("Failed to encode registration: {}", e)))?;

        let response = scope
            .run_fallible(self.send(Verb::Post, "auth/register", Some(&body)))
            .await?;

        AuthDto::from_value(response).ok_or_else(|| {
            ApiError::Decode("registration response has no token and user".to_string()).into()
        })
    }

    async fn current_user(&self, scope: &RequestScope) -> Result<UserRecord, Error> {
        let response = scope
            .run_fallible(self.send(Verb::Get, "auth/me", None))
            .await?;

        let user = match response {
            Value::Object(mut map) => match map.remove("user").or_else(|| map.remove("data")) {
                Some(user @ Value::Object(_)) => user,
                _ => Value::Object(map),
            },
            other => other,
        };

        serde_json::from_value(user).map_err(|e| ApiError::Decode(e.to_string()).into())
    }
}
