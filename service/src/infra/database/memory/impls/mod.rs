//! [`Database`] implementations.

mod project;

use common::operations::{Commit, Transact};
use tracerr::Traced;

use crate::infra::{database, Database};

use super::{Memory, NonTx, Tx};

impl Database<Transact> for Memory<NonTx> {
    type Ok = Memory<Tx>;
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Transact) -> Result<Self::Ok, Self::Err> {
        Ok(Memory(Tx::from_non_tx(&self.0)))
    }
}

impl Database<Transact> for Memory<Tx> {
    type Ok = Self;
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Transact) -> Result<Self::Ok, Self::Err> {
        Ok(self.clone())
    }
}

impl Database<Commit> for Memory<Tx> {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Commit) -> Result<Self::Ok, Self::Err> {
        self.commit().await.map_err(tracerr::wrap!())
    }
}

#[cfg(test)]
mod spec {
    use common::operations::{By, Commit, Insert, Select, Transact};

    use crate::{
        domain::Project,
        fixture,
        infra::{database::Memory, Database as _},
        read::project::list::Filter,
    };

    async fn list(db: &Memory) -> Vec<Project> {
        db.execute(Select(By::<Vec<Project>, _>::new(Filter::default())))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn dropped_tx_discards_writes() {
        let db = Memory::new();

        let tx = db.execute(Transact).await.unwrap();
        tx.execute(Insert(fixture::project("1"))).await.unwrap();
        drop(tx);

        assert!(list(&db).await.is_empty());
    }

    #[tokio::test]
    async fn committed_tx_publishes_writes() {
        let db = Memory::new();
        let project = fixture::project("1");

        let tx = db.execute(Transact).await.unwrap();
        tx.execute(Insert(project.clone())).await.unwrap();

        let staged = tx
            .execute(Select(By::<Vec<Project>, _>::new(Filter::default())))
            .await
            .unwrap();
        assert_eq!(staged, [project.clone()]);

        tx.execute(Commit).await.unwrap();
        drop(tx);

        assert_eq!(list(&db).await, [project]);
    }

    #[tokio::test]
    async fn finished_tx_cannot_be_reused() {
        let db = Memory::new();

        let tx = db.execute(Transact).await.unwrap();
        tx.execute(Insert(fixture::project("1"))).await.unwrap();
        tx.execute(Commit).await.unwrap();

        assert!(tx.execute(Insert(fixture::project("2"))).await.is_err());
        assert!(tx.execute(Commit).await.is_err());
        assert_eq!(list(&db).await.len(), 1);
    }
}
