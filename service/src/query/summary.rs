//! [`Summary`] definition.

use common::operations::{By, Select};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::Unit;
use crate::{
    domain::{unit, Project},
    infra::{database, Database},
    read::{self, project::list::Filter},
    Query, Service,
};

/// [`Query`] to compute [`read::Summary`] statistics of [`Project`]s.
#[derive(Clone, Debug, Default)]
pub struct Summary {
    /// ID of the [`Unit`] to restrict the [`Project`]s to, if any.
    ///
    /// [`read::Summary::cost_by_unit`] lists all the [`Unit`]s regardless,
    /// having zero costs for every [`Unit`] except the specified one.
    pub unit_id: Option<unit::Id>,
}

impl<Db, Adv> Query<Summary> for Service<Db, Adv>
where
    Db: Database<
        Select<By<Vec<Project>, Filter>>,
        Ok = Vec<Project>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = read::Summary;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Summary { unit_id }: Summary,
    ) -> Result<Self::Ok, Self::Err> {
        let projects = self
            .database()
            .execute(Select(By::<Vec<Project>, _>::new(Filter {
                unit_id,
                search: None,
            })))
            .await
            .map_err(tracerr::wrap!())?;

        Ok(read::Summary::compute(&projects, self.units()))
    }
}
