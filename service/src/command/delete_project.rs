//! [`Command`] for deleting a [`Project`].

use common::operations::{By, Commit, Delete, Select, Transact, Transacted};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{project, Project},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for irrevocably deleting a [`Project`].
#[derive(Clone, Copy, Debug)]
pub struct DeleteProject {
    /// ID of the [`Project`] to be deleted.
    pub id: project::Id,
}

impl<Db, Adv> Command<DeleteProject> for Service<Db, Adv>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Project>, project::Id>>,
            Ok = Option<Project>,
            Err = Traced<database::Error>,
        > + Database<
            Delete<By<Project, project::Id>>,
            Err = Traced<database::Error>,
        > + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        DeleteProject { id }: DeleteProject,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        tx.execute(Select(By::<Option<Project>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ProjectNotExists(id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        tx.execute(Delete(By::<Project, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(())
    }
}

/// Error of [`DeleteProject`] [`Command`] execution.
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
    use crate::{
        command::{
            self, CreateProject, EvaluateProject, UpdateProject,
            UpdateProjectAdvice,
        },
        domain::project::evaluation::Rating,
        fixture,
        query::{self, Query as _},
        Command as _,
    };

    use super::{DeleteProject, ExecutionError};

    #[tokio::test]
    async fn deletion_is_terminal() {
        let svc = fixture::service();
        let kept = svc
            .execute(CreateProject {
                draft: fixture::draft("1"),
            })
            .await
            .unwrap();
        let deleted = svc
            .execute(CreateProject {
                draft: fixture::draft("2"),
            })
            .await
            .unwrap();
        let id = deleted.id;

        svc.execute(DeleteProject { id }).await.unwrap();

        let listed = svc
            .execute(query::projects::List::by(Default::default()))
            .await
            .unwrap();
        assert_eq!(listed, [kept]);
        assert_eq!(
            svc.execute(query::project::ById::by(id)).await.unwrap(),
            None,
        );

        let err = svc.execute(DeleteProject { id }).await.unwrap_err();
        assert!(
            matches!(err.as_ref(), ExecutionError::ProjectNotExists(_)),
            "{err}",
        );

        let err = svc
            .execute(UpdateProject {
                id,
                draft: fixture::draft("1"),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err.as_ref(),
            command::update_project::ExecutionError::ProjectNotExists(_),
        ));

        let err = svc
            .execute(EvaluateProject {
                id,
                rating: Rating::MAX,
                comment: "Ótimo".parse().unwrap(),
                created_at: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err.as_ref(),
            command::evaluate_project::ExecutionError::ProjectNotExists(_),
        ));

        let err = svc
            .execute(UpdateProjectAdvice {
                id,
                advice: "Texto".to_owned().into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err.as_ref(),
            command::update_project_advice::ExecutionError::ProjectNotExists(
                _
            ),
        ));
    }
}
