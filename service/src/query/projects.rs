//! [`Query`] collection related to the multiple [`Project`]s.

use common::operations::By;

use crate::{domain::Project, read::project::list::Filter};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a list of [`Project`]s satisfying a [`Filter`], in their insertion
/// order.
pub type List = DatabaseQuery<By<Vec<Project>, Filter>>;
