//! Client for the Abia Rise membership registration API.
//!
//! A small reqwest-based client with no UI knowledge: it serializes an
//! assembled [`RegistrationPayload`] into a multipart body, POSTs it to the
//! registration service, and maps the JSON response envelope to either an
//! issued [`MemberRecord`] or a [`ClientError`] carrying the server's
//! rejection message.
//!
//! # Example
//!
//! ```rust,ignore
//! use registration_client::RegistrationClient;
//!
//! let client = RegistrationClient::from_env();
//! let record = client.register(payload).await?;
//! println!("registered member {}", record.id);
//! ```

pub mod error;
pub mod types;

pub use error::{ClientError, Result, FALLBACK_MESSAGE};
pub use types::{ApiResponse, MemberRecord, PassportPhoto, RegistrationPayload};

use reqwest::multipart;

/// Production registration service.
pub const DEFAULT_API_URL: &str = "https://govtregistrationapi.onrender.com";

/// Registration endpoint path, relative to the service base URL.
const REGISTER_PATH: &str = "/api/Registration/register";

/// Client for the registration service.
#[derive(Debug, Clone)]
pub struct RegistrationClient {
    client: reqwest::Client,
    base_url: String,
}

impl RegistrationClient {
    /// Create a client against the given service base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create a client from `REGISTRATION_API_URL`, falling back to the
    /// production service.
    pub fn from_env() -> Self {
        let url = std::env::var("REGISTRATION_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(url)
    }

    /// Submit a registration. A single POST with no retries; the platform
    /// default timeout applies.
    pub async fn register(&self, payload: RegistrationPayload) -> Result<MemberRecord> {
        let url = format!("{}{}", self.base_url, REGISTER_PATH);

        let mut form = multipart::Form::new();
        for (name, value) in payload.fields() {
            form = form.text(name, value);
        }

        let photo = payload.passport;
        let part = multipart::Part::bytes(photo.bytes)
            .file_name(photo.file_name)
            .mime_str(&photo.content_type)?;
        form = form.part("passport", part);

        tracing::info!(url = %url, "submitting registration");

        let response = self.client.post(&url).multipart(form).send().await?;
        let status = response.status().as_u16();

        let body = match response.json::<ApiResponse>().await {
            Ok(body) => body,
            // An unreadable body on a rejected request still surfaces the
            // status; on a 2xx it means we have no record to hand back.
            Err(err) if (200..300).contains(&status) => {
                tracing::warn!(error = %err, "registration response body unreadable");
                return Err(ClientError::NoData);
            }
            Err(_) => {
                return Err(ClientError::Api {
                    status,
                    message: None,
                })
            }
        };

        match body.into_result(status) {
            Ok(record) => {
                tracing::info!(member_id = %record.id, "registration accepted");
                Ok(record)
            }
            Err(err) => {
                tracing::warn!(status, error = %err, "registration failed");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped_from_base_url() {
        let client = RegistrationClient::new("https://example.test///");
        assert_eq!(client.base_url, "https://example.test");
    }

    #[test]
    fn from_env_falls_back_to_production() {
        // Only exercises the fallback; the env var is not set in tests.
        if std::env::var("REGISTRATION_API_URL").is_err() {
            let client = RegistrationClient::from_env();
            assert_eq!(client.base_url, DEFAULT_API_URL);
        }
    }
}
