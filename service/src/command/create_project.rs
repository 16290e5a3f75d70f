//! [`Command`] for creating a new [`Project`].

use common::operations::{By, Commit, Insert, Select, Transact, Transacted};
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::Unit;
use crate::{
    domain::{
        project::{self, Draft},
        unit, Project,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Project`].
#[derive(Clone, Debug)]
pub struct CreateProject {
    /// [`Draft`] of a new [`Project`].
    pub draft: Draft,
}

impl<Db, Adv> Command<CreateProject> for Service<Db, Adv>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Project>, project::Id>>,
            Ok = Option<Project>,
            Err = Traced<database::Error>,
        > + Database<Insert<Project>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Project;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        CreateProject { draft }: CreateProject,
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

        let mut id = project::Id::new();
        while tx
            .execute(Select(By::<Option<Project>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .is_some()
        {
            id = project::Id::new();
        }

        let project = Project::new(id, draft);

        tx.execute(Insert(project.clone()))
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

/// Error of [`CreateProject`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Unit`] with the provided ID does not exist.
    #[display("`Unit(id: {_0})` does not exist")]
    UnitNotExists(#[error(not(source))] unit::Id),
}
