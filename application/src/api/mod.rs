//! GraphQL API definitions.

mod mutation;
pub mod project;
mod query;
pub mod summary;
pub mod unit;

use juniper::EmptySubscription;

use crate::Context;

pub use self::{
    mutation::Mutation, project::Project, query::Query, summary::Summary,
    unit::Unit,
};

/// GraphQL schema.
pub type Schema =
    juniper::RootNode<'static, Query, Mutation, EmptySubscription<Context>>;

/// Creates a new [`Schema`].
#[must_use]
pub fn schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
