//! Read entities definitions.

pub mod project;
pub mod summary;

pub use self::summary::Summary;
