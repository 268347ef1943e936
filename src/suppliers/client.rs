use super::ListSuppliersQuery;
use crate::config::{Config, Credentials};
use crate::error::{Result, SupplierError, TransportError};
use crate::transport::{HttpTransport, RequestDescriptor, Transport};
use serde::Serialize;
use serde_json::{Map, Value};

const SUPPLIERS_PATH: &str = "/suppliers";

/// Client for the supplier endpoints of the Knawat marketplace API.
///
/// Every operation issues exactly one request and returns the response body
/// untouched. Errors from the transport are surfaced as-is and never retried.
#[derive(Debug, Clone)]
pub struct SupplierClient<T = HttpTransport> {
    credentials: Credentials,
    transport: T,
}

impl SupplierClient<HttpTransport> {
    /// Creates a client talking HTTP to the configured API.
    pub fn from_config(config: &Config) -> Self {
        Self::with_credentials(
            config.credentials.clone(),
            HttpTransport::new(config.base_url.clone()),
        )
    }
}

impl<T: Transport> SupplierClient<T> {
    /// Creates a client, failing if either the username or password is empty.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        transport: T,
    ) -> Result<Self> {
        let credentials = Credentials::new(username, password)?;
        Ok(Self::with_credentials(credentials, transport))
    }

    pub fn with_credentials(credentials: Credentials, transport: T) -> Self {
        Self {
            credentials,
            transport,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Lists suppliers a page at a time.
    pub async fn list_suppliers(&self, query: ListSuppliersQuery) -> Result<Value> {
        let request = RequestDescriptor::get(SUPPLIERS_PATH)
            .with_query("limit", query.limit)
            .with_query("page", query.page)
            .with_query("sort", query.sort);
        self.fetch(request).await
    }

    /// Creates a supplier. The payload is wrapped as `{"supplier": ...}`.
    pub async fn create_supplier<S>(&self, supplier: &S) -> Result<Value>
    where
        S: Serialize + ?Sized + Sync,
    {
        let supplier = serde_json::to_value(supplier).map_err(TransportError::Encode)?;
        let mut body = Map::new();
        body.insert("supplier".to_string(), supplier);

        self.fetch(RequestDescriptor::post(SUPPLIERS_PATH, Value::Object(body)))
            .await
    }

    pub async fn get_supplier_keys(&self, id: &str) -> Result<Value> {
        self.fetch(RequestDescriptor::get(format!("{SUPPLIERS_PATH}/{id}/keys")))
            .await
    }

    pub async fn get_supplier_by_id(&self, id: &str) -> Result<Value> {
        self.fetch(RequestDescriptor::get(format!("{SUPPLIERS_PATH}/{id}")))
            .await
    }

    /// Looks up the users of a supplier by email.
    ///
    /// The email is placed into the path verbatim, so it must already be
    /// URL-encoded (`a%40b.com`, not `a@b.com`).
    pub async fn get_supplier_by_email(&self, email: &str) -> Result<Value> {
        self.fetch(RequestDescriptor::get(format!("{SUPPLIERS_PATH}/{email}/users")))
            .await
    }

    async fn fetch(&self, request: RequestDescriptor) -> Result<Value> {
        self.transport
            .send(&self.credentials, request)
            .await
            .map_err(SupplierError::Transport)
    }
}
