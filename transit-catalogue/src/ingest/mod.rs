//! Ingestion boundary: typed records and the request document.
//!
//! Records mirror the JSON input format. Loading applies them to a
//! [`CatalogueBuilder`](crate::catalogue::CatalogueBuilder) in dependency
//! order.

mod document;
mod error;
mod records;

pub use document::TransitDocument;
pub use error::DocumentError;
pub use records::{BaseRequest, BusRecord, StopRecord, load_catalogue};
