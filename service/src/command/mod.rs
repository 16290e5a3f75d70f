//! [`Command`] definition.

pub mod advise_project;
pub mod create_project;
pub mod delete_project;
pub mod evaluate_project;
pub mod update_project;
pub mod update_project_advice;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    advise_project::AdviseProject, create_project::CreateProject,
    delete_project::DeleteProject, evaluate_project::EvaluateProject,
    update_project::UpdateProject,
    update_project_advice::UpdateProjectAdvice,
};
