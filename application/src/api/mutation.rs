//! GraphQL [`Mutation`]s definitions.

use juniper::graphql_object;
use service::{
    command,
    domain::project::evaluation::{Comment, Rating},
    Command as _,
};

use crate::{
    api::{self, query::ProjectError, query::UnitError},
    define_error, AsError, Context, Error,
};

/// Root of all GraphQL mutations.
#[derive(Clone, Copy, Debug)]
pub struct Mutation;

impl Mutation {
    /// Name of the [`tracing::Span`] for the mutations.
    const SPAN_NAME: &'static str = "GraphQL mutation";
}

#[graphql_object(context = Context)]
impl Mutation {
    /// Creates a new `Project` out of the provided `input`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `NEGATIVE_COST` - any of the cost components is negative;
    /// - `UNIT_NOT_EXISTS` - the `Unit` with the specified ID does not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "createProject",
            otel.name = Self::SPAN_NAME,
            title = %input.title,
            unit_id = %input.unit_id,
        ),
    )]
    pub async fn create_project(
        input: api::project::Input,
        ctx: &Context,
    ) -> Result<api::Project, Error> {
        let draft = input.into_draft().map_err(ctx.error())?;

        ctx.service()
            .execute(command::CreateProject { draft })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Replaces all the editable fields of the `Project` with the specified
    /// ID by the provided `input`.
    ///
    /// Evaluation and advisory text of the `Project` are left untouched.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `NEGATIVE_COST` - any of the cost components is negative;
    /// - `PROJECT_NOT_EXISTS` - the `Project` with the specified ID does not
    ///                          exist;
    /// - `UNIT_NOT_EXISTS` - the `Unit` with the specified ID does not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "updateProject",
            id = %id,
            otel.name = Self::SPAN_NAME,
            title = %input.title,
            unit_id = %input.unit_id,
        ),
    )]
    pub async fn update_project(
        id: api::project::Id,
        input: api::project::Input,
        ctx: &Context,
    ) -> Result<api::Project, Error> {
        let draft = input.into_draft().map_err(ctx.error())?;

        ctx.service()
            .execute(command::UpdateProject {
                id: id.into(),
                draft,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Evaluates the `Project` with the specified ID, replacing its previous
    /// evaluation, if any.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_RATING` - `rating` is not in `1..=5` range;
    /// - `EMPTY_COMMENT` - `comment` is empty;
    /// - `PROJECT_NOT_EXISTS` - the `Project` with the specified ID does not
    ///                          exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "evaluateProject",
            id = %id,
            otel.name = Self::SPAN_NAME,
            rating = rating,
        ),
    )]
    pub async fn evaluate_project(
        id: api::project::Id,
        rating: i32,
        comment: String,
        ctx: &Context,
    ) -> Result<api::Project, Error> {
        let rating = Rating::try_from(rating)
            .map_err(|_| EvaluationError::InvalidRating.into())
            .map_err(ctx.error())?;
        let comment = Comment::new(comment)
            .ok_or_else(|| EvaluationError::EmptyComment.into())
            .map_err(ctx.error())?;

        ctx.service()
            .execute(command::EvaluateProject {
                id: id.into(),
                rating,
                comment,
                created_at: None,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Stores the provided advisory `text` on the `Project` with the
    /// specified ID verbatim.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `PROJECT_NOT_EXISTS` - the `Project` with the specified ID does not
    ///                          exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "setProjectAdvice",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn set_project_advice(
        id: api::project::Id,
        text: String,
        ctx: &Context,
    ) -> Result<api::Project, Error> {
        ctx.service()
            .execute(command::UpdateProjectAdvice {
                id: id.into(),
                advice: text.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Asks the advisor about the cost proportions of the `Project` with the
    /// specified ID and stores its answer.
    ///
    /// If the advisor is unavailable, a fixed fallback text is stored
    /// instead.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `PROJECT_NOT_EXISTS` - the `Project` with the specified ID does not
    ///                          exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "adviseProject",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn advise_project(
        id: api::project::Id,
        ctx: &Context,
    ) -> Result<api::Project, Error> {
        ctx.service()
            .execute(command::AdviseProject { id: id.into() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Deletes the `Project` with the specified ID irrevocably.
    ///
    /// Returns the ID of the deleted `Project`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `PROJECT_NOT_EXISTS` - the `Project` with the specified ID does not
    ///                          exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "deleteProject",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn delete_project(
        id: api::project::Id,
        ctx: &Context,
    ) -> Result<api::project::Id, Error> {
        ctx.service()
            .execute(command::DeleteProject { id: id.into() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|()| id)
    }
}

define_error! {
    enum EvaluationError {
        #[code = "INVALID_RATING"]
        #[status = BAD_REQUEST]
        #[message = "`rating` must be in `1..=5` range"]
        InvalidRating,

        #[code = "EMPTY_COMMENT"]
        #[status = BAD_REQUEST]
        #[message = "`comment` must not be empty"]
        EmptyComment,
    }
}

impl AsError for command::create_project::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::UnitNotExists(_) => Some(UnitError::NotExists.into()),
        }
    }
}

impl AsError for command::update_project::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::ProjectNotExists(_) => Some(ProjectError::NotExists.into()),
            Self::UnitNotExists(_) => Some(UnitError::NotExists.into()),
        }
    }
}

impl AsError for command::evaluate_project::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::ProjectNotExists(_) => Some(ProjectError::NotExists.into()),
        }
    }
}

/// Also covers [`command::AdviseProject`], sharing the same error type.
impl AsError for command::update_project_advice::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::ProjectNotExists(_) => Some(ProjectError::NotExists.into()),
        }
    }
}

impl AsError for command::delete_project::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::ProjectNotExists(_) => Some(ProjectError::NotExists.into()),
        }
    }
}
