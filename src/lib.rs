//! Client for the supplier endpoints of the Knawat marketplace API.
//!
//! ```no_run
//! use knawat_suppliers::{Config, ListSuppliersQuery, SupplierClient};
//!
//! # async fn run() -> knawat_suppliers::Result<()> {
//! let config = Config::from_env()?;
//! let client = SupplierClient::from_config(&config);
//! let suppliers = client.list_suppliers(ListSuppliersQuery::default()).await?;
//! println!("{suppliers}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod suppliers;
pub mod transport;

pub use config::{Config, Credentials};
pub use error::{ConfigurationError, Result, SupplierError, TransportError};
pub use suppliers::{ListSuppliersQuery, NewSupplier, SupplierClient};
pub use transport::{HttpTransport, Method, RequestDescriptor, Transport};
