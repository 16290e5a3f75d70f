//! [`Command`] for evaluating a [`Project`].

use common::{
    operations::{By, Commit, Select, Transact, Transacted, Update},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::project::evaluation::{Comment, Rating};
use crate::{
    domain::{
        project::{self, evaluation, Evaluation},
        Project,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for saving an [`Evaluation`] of a [`Project`].
///
/// Any existing [`Evaluation`] of the [`Project`] is replaced.
#[derive(Clone, Debug)]
pub struct EvaluateProject {
    /// ID of the [`Project`] to be evaluated.
    pub id: project::Id,

    /// [`Rating`] given to the [`Project`].
    pub rating: evaluation::Rating,

    /// [`Comment`] on the [`Project`].
    pub comment: evaluation::Comment,

    /// [`DateTime`] of the [`Evaluation`], if not the current one.
    pub created_at: Option<evaluation::CreationDateTime>,
}

impl<Db, Adv> Command<EvaluateProject> for Service<Db, Adv>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Project>, project::Id>>,
            Ok = Option<Project>,
            Err = Traced<database::Error>,
        > + Database<Update<Project>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Project;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: EvaluateProject,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let EvaluateProject {
            id,
            rating,
            comment,
            created_at,
        } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let mut project = tx
            .execute(Select(By::<Option<Project>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ProjectNotExists(id))
            .map_err(tracerr::wrap!())?;

        project.evaluation = Some(Evaluation {
            rating,
            comment,
            created_at: created_at
                .unwrap_or_else(|| DateTime::now().coerce()),
        });

        tx.execute(Update(project.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(project)
    }
}

/// Error of [`EvaluateProject`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Project`] with the provided ID does not exist.
    #[display("`Project(id: {_0})` does not exist")]
    ProjectNotExists(#[error(not(source))] project::Id),
}

#[cfg(all(test, feature = "memory"))]
mod spec {
    use common::DateTime;

    use crate::{
        command::CreateProject,
        domain::project::{self, evaluation},
        fixture,
        query::{self, Query as _},
        Command as _,
    };

    use super::{EvaluateProject, ExecutionError};

    #[tokio::test]
    async fn replaces_evaluation() {
        let svc = fixture::service();
        let created = svc
            .execute(CreateProject {
                draft: fixture::draft("2"),
            })
            .await
            .unwrap();

        let before = DateTime::now();
        let first = svc
            .execute(EvaluateProject {
                id: created.id,
                rating: evaluation::Rating::new(3).unwrap(),
                comment: "Atrasou uma semana.".parse().unwrap(),
                created_at: None,
            })
            .await
            .unwrap();
        let first = first.evaluation.unwrap();
        assert_eq!(first.rating, evaluation::Rating::new(3).unwrap());
        assert!(first.created_at.coerce::<()>() >= before);

        let second = svc
            .execute(EvaluateProject {
                id: created.id,
                rating: evaluation::Rating::MAX,
                comment: "Serviço excelente e rápido.".parse().unwrap(),
                created_at: None,
            })
            .await
            .unwrap();

        let stored = svc
            .execute(query::project::ById::by(created.id))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored, second);
        let eval = stored.evaluation.clone().unwrap();
        assert_eq!(eval.rating, evaluation::Rating::MAX);
        assert_eq!(eval.comment.to_string(), "Serviço excelente e rápido.");
        assert_eq!(stored.title, created.title);
        assert_eq!(stored.advice, None);
    }

    #[tokio::test]
    async fn keeps_provided_creation_time() {
        let svc = fixture::service();
        let created = svc
            .execute(CreateProject {
                draft: fixture::draft("2"),
            })
            .await
            .unwrap();
        let at = DateTime::from_rfc3339("2023-10-01T00:00:00Z")
            .unwrap()
            .coerce();

        let evaluated = svc
            .execute(EvaluateProject {
                id: created.id,
                rating: evaluation::Rating::MAX,
                comment: "Serviço excelente e rápido.".parse().unwrap(),
                created_at: Some(at),
            })
            .await
            .unwrap();

        assert_eq!(evaluated.evaluation.unwrap().created_at, at);
    }

    #[tokio::test]
    async fn fails_on_missing_project() {
        let svc = fixture::service();
        let id = project::Id::new();

        let err = svc
            .execute(EvaluateProject {
                id,
                rating: evaluation::Rating::MIN,
                comment: "Ruim".parse().unwrap(),
                created_at: None,
            })
            .await
            .unwrap_err();

        assert!(
            matches!(err.as_ref(), ExecutionError::ProjectNotExists(_)),
            "{err}",
        );
    }
}
