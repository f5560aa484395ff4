mod form;
mod store;
mod submission;

pub use form::*;
pub use store::*;
pub use submission::*;

pub use folio_shared::contact::Status;

/// Collection that receives contact submissions unless configured otherwise.
pub const DEFAULT_COLLECTION: &str = "contacts";
