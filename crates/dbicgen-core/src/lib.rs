mod error;
pub use error::{Error, IntoError};

mod namespace;
pub use namespace::{Namespace, SEPARATOR};

pub mod schema;
pub use schema::Schema;

/// A Result type alias that uses dbicgen's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
