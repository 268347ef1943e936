use super::{RequestDescriptor, Transport};
use crate::config::Credentials;
use crate::error::TransportError;
use async_trait::async_trait;
use reqwest::header;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

/// [`Transport`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(base_url: Url) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuses an existing client, e.g. one configured with a timeout or proxy.
    pub fn with_client(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends `path` to the base URL as-is.
    ///
    /// `Url::join` would both discard the base path and re-encode segments,
    /// and callers rely on pre-encoded segments (such as emails) surviving.
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }
}

/// Renders a scalar query value. `null` becomes an empty value.
fn render_query_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        credentials: &Credentials,
        request: RequestDescriptor,
    ) -> Result<Value, TransportError> {
        let endpoint = self.endpoint(&request.path);
        debug!(method = %request.method, path = %request.path, "sending request");

        let mut builder = self
            .client
            .request(request.method.into(), endpoint)
            .header(header::AUTHORIZATION, credentials.authorization_header())
            .header(header::ACCEPT, "application/json");

        if !request.query.is_empty() {
            let query: Vec<(&str, String)> = request
                .query
                .iter()
                .map(|(name, value)| (name.as_str(), render_query_value(value)))
                .collect();
            builder = builder.query(&query);
        }

        if let Some(body) = &request.body {
            let posted_contents = serde_json::to_string(body).map_err(TransportError::Encode)?;
            builder = builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(posted_contents);
        }

        let response = builder.send().await?;
        let status = response.status();
        let response_text = response.text().await?;
        debug!(method = %request.method, path = %request.path, %status, "received response");

        if !status.is_success() {
            warn!(method = %request.method, path = %request.path, %status, "request was not successful");
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: response_text,
            });
        }

        // Some endpoints answer with an empty body.
        if response_text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&response_text).map_err(TransportError::Parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn endpoint_keeps_base_path_and_encoded_segments() {
        let transport = HttpTransport::new(Url::parse("https://mp.knawat.io/api").unwrap());
        assert_eq!(
            transport.endpoint("/suppliers/a%40b.com/users"),
            "https://mp.knawat.io/api/suppliers/a%40b.com/users"
        );

        let transport = HttpTransport::new(Url::parse("http://localhost:1234/").unwrap());
        assert_eq!(transport.endpoint("/suppliers"), "http://localhost:1234/suppliers");
    }

    #[test]
    fn query_values_render_as_text() {
        assert_eq!(render_query_value(&json!(20)), "20");
        assert_eq!(render_query_value(&json!("name")), "name");
        assert_eq!(render_query_value(&json!(true)), "true");
        assert_eq!(render_query_value(&Value::Null), "");
    }
}
