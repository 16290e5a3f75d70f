//! Domain definitions.

pub mod project;
pub mod unit;

pub use self::{project::Project, unit::Unit};
