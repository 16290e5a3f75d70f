//! [`Project`]-related [`Database`] implementations.

use common::operations::{By, Delete, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{project, Project},
    infra::{
        database::{self, memory::Connection, Memory},
        Database,
    },
    read::project::list::Filter,
};

impl<C> Database<Select<By<Option<Project>, project::Id>>> for Memory<C>
where
    C: Connection,
{
    type Ok = Option<Project>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Project>, project::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        self.read(|c| c.projects.iter().find(|p| p.id == id).cloned())
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<C> Database<Select<By<Vec<Project>, Filter>>> for Memory<C>
where
    C: Connection,
{
    type Ok = Vec<Project>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Project>, Filter>>,
    ) -> Result<Self::Ok, Self::Err> {
        let filter = by.into_inner();
        self.read(|c| filter.apply(&c.projects))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<C> Database<Insert<Project>> for Memory<C>
where
    C: Connection,
    Self: Database<Update<Project>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(project): Insert<Project>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(project)).await.map_err(tracerr::wrap!())
    }
}

impl<C> Database<Update<Project>> for Memory<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(project): Update<Project>,
    ) -> Result<Self::Ok, Self::Err> {
        self.write(|c| {
            if let Some(existing) =
                c.projects.iter_mut().find(|p| p.id == project.id)
            {
                *existing = project;
            } else {
                c.projects.push(project);
            }
        })
        .await
        .map_err(tracerr::wrap!())
    }
}

impl<C> Database<Delete<By<Project, project::Id>>> for Memory<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Project, project::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        self.write(|c| c.projects.retain(|p| p.id != id))
            .await
            .map_err(tracerr::wrap!())
    }
}
