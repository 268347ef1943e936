mod http;

pub use http::HttpTransport;

use crate::config::Credentials;
use crate::error::TransportError;
use async_trait::async_trait;
use serde_json::Value;
use std::{fmt, sync::Arc};

/// The HTTP verbs the suppliers API is called with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }
}

/// A single request, relative to the API's base URL.
///
/// Query values are kept as JSON scalars so that a `null` is forwarded rather
/// than dropped; the transport decides how to render them.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, Value)>,
    pub body: Option<Value>,
}

impl RequestDescriptor {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }

    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }
}

/// Performs authenticated requests and hands back the parsed JSON response.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        credentials: &Credentials,
        request: RequestDescriptor,
    ) -> Result<Value, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(
        &self,
        credentials: &Credentials,
        request: RequestDescriptor,
    ) -> Result<Value, TransportError> {
        (**self).send(credentials, request).await
    }
}
