//! Infrastructure layer.

pub mod advisor;
pub mod database;

pub use self::{advisor::Advisor, database::Database};
#[cfg(feature = "gemini")]
pub use self::advisor::Gemini;
#[cfg(feature = "memory")]
pub use self::database::{memory, Memory};
