//! [`Command`] for producing an [`Advice`] on a [`Project`].

use common::operations::{By, Select};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::project::Advice;
use crate::{
    domain::{project, Project},
    infra::{advisor, database, Advisor, Database},
    Service,
};

use super::{update_project_advice, Command, UpdateProjectAdvice};

/// [`Command`] for asking the [`Advisor`] about a [`Project`] and storing its
/// [`Advice`].
///
/// Failures of the [`Advisor`] are not errors: a fixed fallback [`Advice`] is
/// stored instead.
#[derive(Clone, Copy, Debug)]
pub struct AdviseProject {
    /// ID of the [`Project`] to be advised on.
    pub id: project::Id,
}

impl<Db, Adv> Command<AdviseProject> for Service<Db, Adv>
where
    Db: Database<
        Select<By<Option<Project>, project::Id>>,
        Ok = Option<Project>,
        Err = Traced<database::Error>,
    >,
    Adv: Advisor<
        advisor::Prompt,
        Ok = project::Advice,
        Err = Traced<advisor::Error>,
    >,
    Self: Command<
        UpdateProjectAdvice,
        Ok = Project,
        Err = Traced<ExecutionError>,
    >,
{
    type Ok = Project;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        AdviseProject { id }: AdviseProject,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let project = self
            .database()
            .execute(Select(By::<Option<Project>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ProjectNotExists(id))
            .map_err(tracerr::wrap!())?;

        // Advisor is asked outside any transaction, so no lock is held while
        // waiting for it.
        let advice = self
            .advisor()
            .execute(advisor::Prompt::for_project(&project))
            .await
            .unwrap_or_else(|e| {
                log::warn!("`Advisor` failed for `Project(id: {id})`: {e}");
                e.as_ref().fallback()
            });

        self.execute(UpdateProjectAdvice { id, advice })
            .await
            .map_err(tracerr::wrap!())
    }
}

/// Error of [`AdviseProject`] [`Command`] execution.
pub type ExecutionError = update_project_advice::ExecutionError;

#[cfg(all(test, feature = "memory"))]
mod spec {
    use crate::{
        command::CreateProject,
        domain::project,
        fixture,
        query::{self, Query as _},
        Command as _,
    };

    use super::{AdviseProject, ExecutionError};

    #[tokio::test]
    async fn stores_advice_verbatim() {
        let svc = fixture::service();
        let created = svc
            .execute(CreateProject {
                draft: fixture::draft("1"),
            })
            .await
            .unwrap();

        let advised = svc
            .execute(AdviseProject { id: created.id })
            .await
            .unwrap();

        assert_eq!(advised.advice, Some(fixture::ADVICE.to_owned().into()));
        let stored = svc
            .execute(query::project::ById::by(created.id))
            .await
            .unwrap();
        assert_eq!(stored, Some(advised));
    }

    #[cfg(feature = "gemini")]
    #[tokio::test]
    async fn stores_fallback_of_unconfigured_gemini() {
        use crate::{
            infra::{advisor::gemini, Gemini, Memory},
            Config, Service,
        };

        let svc = Service::new(
            Config {
                units: fixture::units(),
            },
            Memory::new(),
            Gemini::new(gemini::Config {
                // Unreachable, so any network exchange fails differently.
                endpoint: "http://127.0.0.1:9".into(),
                ..gemini::Config::default()
            })
            .unwrap(),
        );
        let created = svc
            .execute(CreateProject {
                draft: fixture::draft("1"),
            })
            .await
            .unwrap();

        let advised = svc
            .execute(AdviseProject { id: created.id })
            .await
            .unwrap();

        assert_eq!(
            advised.advice.map(String::from).as_deref(),
            Some("API Key is missing. Cannot perform AI analysis."),
        );
    }

    #[tokio::test]
    async fn fails_on_missing_project() {
        let svc = fixture::service();

        let err = svc
            .execute(AdviseProject {
                id: project::Id::new(),
            })
            .await
            .unwrap_err();

        assert!(
            matches!(err.as_ref(), ExecutionError::ProjectNotExists(_)),
            "{err}",
        );
    }
}
