//! GraphQL [`Query`] definitions.

use juniper::graphql_object;
use service::{query, read::project::list, Query as _};

use crate::{api, define_error, AsError, Context, Error};

/// Root of all GraphQL queries.
#[derive(Clone, Copy, Debug)]
pub struct Query;

impl Query {
    /// Name of the [`tracing::Span`] for the queries.
    pub(crate) const SPAN_NAME: &'static str = "GraphQL query";
}

#[graphql_object(context = Context)]
impl Query {
    /// Returns the reference list of `Unit`s, in their display order.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "units",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub fn units(ctx: &Context) -> Vec<api::Unit> {
        ctx.service().units().iter().cloned().map(Into::into).collect()
    }

    /// Returns the `Unit` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `UNIT_NOT_EXISTS` - the `Unit` with the specified ID does not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "unit",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub fn unit(id: api::unit::Id, ctx: &Context) -> Result<api::Unit, Error> {
        ctx.service()
            .unit(&id.into())
            .cloned()
            .map(Into::into)
            .ok_or_else(|| UnitError::NotExists.into())
            .map_err(ctx.error())
    }

    /// Returns the `Project` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `PROJECT_NOT_EXISTS` - the `Project` with the specified ID does not
    ///                          exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "project",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn project(
        id: api::project::Id,
        ctx: &Context,
    ) -> Result<api::Project, Error> {
        ctx.service()
            .execute(query::project::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| ProjectError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Returns the `Project`s in their creation order.
    ///
    /// `unitId` restricts the `Project`s to the ones of the specified `Unit`.
    /// `search` keeps only the `Project`s containing it (case-insensitively)
    /// in their title, contractor name, requester or department. An empty
    /// `search` matches everything.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "projects",
            otel.name = Self::SPAN_NAME,
            search = ?search,
            unit_id = ?unit_id,
        ),
    )]
    pub async fn projects(
        unit_id: Option<api::unit::Id>,
        search: Option<String>,
        ctx: &Context,
    ) -> Result<Vec<api::Project>, Error> {
        ctx.service()
            .execute(query::projects::List::by(list::Filter {
                unit_id: unit_id.map(Into::into),
                search: search.and_then(list::SearchTerm::new),
            }))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|projects| projects.into_iter().map(Into::into).collect())
    }

    /// Returns the `Summary` statistics of the `Project`s.
    ///
    /// `unitId` restricts the counted `Project`s to the ones of the specified
    /// `Unit`, while `costByUnit` still lists every `Unit`. So, all the
    /// `costByUnit` entries are zero then, except the one of the specified
    /// `Unit`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "summary",
            otel.name = Self::SPAN_NAME,
            unit_id = ?unit_id,
        ),
    )]
    pub async fn summary(
        unit_id: Option<api::unit::Id>,
        ctx: &Context,
    ) -> Result<api::Summary, Error> {
        ctx.service()
            .execute(query::Summary {
                unit_id: unit_id.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }
}

define_error! {
    enum ProjectError {
        #[code = "PROJECT_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Project` with the specified ID does not exist"]
        NotExists,
    }
}

define_error! {
    enum UnitError {
        #[code = "UNIT_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Unit` with the specified ID does not exist"]
        NotExists,
    }
}
