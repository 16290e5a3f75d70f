//! [`Command`] for storing an [`Advice`] on a [`Project`].

use common::operations::{By, Commit, Select, Transact, Transacted, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        project::{self, Advice},
        Project,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for setting (or replacing) the [`Advice`] of a [`Project`].
#[derive(Clone, Debug)]
pub struct UpdateProjectAdvice {
    /// ID of the [`Project`] to store the [`Advice`] for.
    pub id: project::Id,

    /// [`Advice`] to be stored.
    pub advice: Advice,
}

impl<Db, Adv> Command<UpdateProjectAdvice> for Service<Db, Adv>
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
        UpdateProjectAdvice { id, advice }: UpdateProjectAdvice,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

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

        project.advice = Some(advice);

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

/// Error of [`UpdateProjectAdvice`] [`Command`] execution.
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
        command::CreateProject, domain::project, fixture, Command as _,
    };

    use super::{ExecutionError, UpdateProjectAdvice};

    #[tokio::test]
    async fn replaces_only_advice() {
        let svc = fixture::service();
        let created = svc
            .execute(CreateProject {
                draft: fixture::draft("1"),
            })
            .await
            .unwrap();

        for text in ["Primeira análise.", "Segunda análise."] {
            let updated = svc
                .execute(UpdateProjectAdvice {
                    id: created.id,
                    advice: text.to_owned().into(),
                })
                .await
                .unwrap();

            assert_eq!(updated.advice, Some(text.to_owned().into()));
            assert_eq!(
                project::Project {
                    advice: None,
                    ..updated
                },
                created,
            );
        }
    }

    #[tokio::test]
    async fn fails_on_missing_project() {
        let svc = fixture::service();

        let err = svc
            .execute(UpdateProjectAdvice {
                id: project::Id::new(),
                advice: "Texto".to_owned().into(),
            })
            .await
            .unwrap_err();

        assert!(
            matches!(err.as_ref(), ExecutionError::ProjectNotExists(_)),
            "{err}",
        );
    }
}
