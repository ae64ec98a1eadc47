//! Product listing: the single entry point the transport layer calls.

pub mod error;
pub mod lister;

pub use error::{ListingError, ListingResult};
pub use lister::{ListingService, ProductLister};
