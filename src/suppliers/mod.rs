mod client;
mod query;

pub use client::SupplierClient;
pub use query::{ListSuppliersQuery, NewSupplier};
