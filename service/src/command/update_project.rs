//! [`Command`] for editing an existing [`Project`].

use common::operations::{By, Commit, Select, Transact, Transacted, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::{
    project::{Advice, Evaluation},
    Unit,
};
use crate::{
    domain::{
        project::{self, Draft},
        unit, Project,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for replacing all the editable fields of a [`Project`].
///
/// [`Evaluation`] and [`Advice`] of the [`Project`] are preserved.
#[derive(Clone, Debug)]
pub struct UpdateProject {
    /// ID of the [`Project`] to be edited.
    pub id: project::Id,

    /// New [`Draft`] of the [`Project`].
    pub draft: Draft,
}

impl<Db, Adv> Command<UpdateProject> for Service<Db, Adv>
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
        UpdateProject { id, draft }: UpdateProject,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        if self.unit(&draft.unit_id).is_none() {
            return Err(tracerr::new!(E::UnitNotExists(draft.unit_id)));
        }

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

        project.replace(draft);

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

/// Error of [`UpdateProject`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Project`] with the provided ID does not exist.
    #[display("`Project(id: {_0})` does not exist")]
    ProjectNotExists(#[error(not(source))] project::Id),

    /// [`Unit`] with the provided ID does not exist.
    #[display("`Unit(id: {_0})` does not exist")]
    UnitNotExists(#[error(not(source))] unit::Id),
}

#[cfg(all(test, feature = "memory"))]
mod spec {
    use crate::{
        command::{CreateProject, EvaluateProject, UpdateProjectAdvice},
        domain::project::{self, evaluation, Status},
        fixture,
        query::{self, Query as _},
        Command as _,
    };

    use super::{ExecutionError, UpdateProject};

    #[tokio::test]
    async fn preserves_id_evaluation_and_advice() {
        let svc = fixture::service();
        let created = svc
            .execute(CreateProject {
                draft: fixture::draft("1"),
            })
            .await
            .unwrap();
        _ = svc
            .execute(EvaluateProject {
                id: created.id,
                rating: evaluation::Rating::new(4).unwrap(),
                comment: "Bom trabalho".parse().unwrap(),
                created_at: None,
            })
            .await
            .unwrap();
        let before = svc
            .execute(UpdateProjectAdvice {
                id: created.id,
                advice: "Custos equilibrados.".to_owned().into(),
            })
            .await
            .unwrap();

        let mut draft = fixture::draft("3");
        draft.title = "Ampliação do Galpão B".to_owned().into();
        draft.status = Status::Completed;
        draft.costs = fixture::costs(150_000, 80_000, 30_000);
        draft.images = vec![];

        let updated = svc
            .execute(UpdateProject {
                id: created.id,
                draft: draft.clone(),
            })
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.evaluation, before.evaluation);
        assert!(updated.evaluation.is_some());
        assert_eq!(updated.advice, before.advice);
        assert_eq!(updated.unit_id, draft.unit_id);
        assert_eq!(updated.title, draft.title);
        assert_eq!(updated.status, draft.status);
        assert_eq!(updated.costs, draft.costs);
        assert!(updated.images.is_empty());

        let stored = svc
            .execute(query::project::ById::by(created.id))
            .await
            .unwrap();
        assert_eq!(stored, Some(updated));
    }

    #[tokio::test]
    async fn fails_on_missing_project() {
        let svc = fixture::service();
        let id = project::Id::new();

        let err = svc
            .execute(UpdateProject {
                id,
                draft: fixture::draft("1"),
            })
            .await
            .unwrap_err();

        assert!(
            matches!(
                err.as_ref(),
                ExecutionError::ProjectNotExists(i) if *i == id,
            ),
            "{err}",
        );
    }

    #[tokio::test]
    async fn rejects_unknown_unit() {
        let svc = fixture::service();
        let created = svc
            .execute(CreateProject {
                draft: fixture::draft("1"),
            })
            .await
            .unwrap();

        let err = svc
            .execute(UpdateProject {
                id: created.id,
                draft: fixture::draft("0"),
            })
            .await
            .unwrap_err();

        assert!(
            matches!(err.as_ref(), ExecutionError::UnitNotExists(_)),
            "{err}",
        );
        let stored = svc
            .execute(query::project::ById::by(created.id))
            .await
            .unwrap();
        assert_eq!(stored, Some(created));
    }
}
