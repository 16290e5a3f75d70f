//! [`Project`]-related read definitions.

#[cfg(doc)]
use crate::domain::Project;

pub mod list {
    //! [`Project`] list definitions.

    use crate::domain::{unit, Project};
    #[cfg(doc)]
    use crate::domain::Unit;

    /// Filter of a [`Project`]s list.
    ///
    /// Both criteria are combined, and an absent criterion matches everything.
    #[derive(Clone, Debug, Default)]
    pub struct Filter {
        /// ID of the [`Unit`] the [`Project`]s should belong to.
        pub unit_id: Option<unit::Id>,

        /// [`SearchTerm`] to look for in the [`Project`]s.
        pub search: Option<SearchTerm>,
    }

    impl Filter {
        /// Indicates whether the provided [`Project`] satisfies this
        /// [`Filter`].
        #[must_use]
        pub fn matches(&self, project: &Project) -> bool {
            self.unit_id.as_ref().is_none_or(|id| &project.unit_id == id)
                && self.search.as_ref().is_none_or(|s| s.matches(project))
        }

        /// Applies this [`Filter`] to the provided [`Project`]s, preserving
        /// their order.
        #[must_use]
        pub fn apply<'p>(
            &self,
            projects: impl IntoIterator<Item = &'p Project>,
        ) -> Vec<Project> {
            projects
                .into_iter()
                .filter(|p| self.matches(p))
                .cloned()
                .collect()
        }
    }

    /// Case-insensitive substring to search for in a [`Project`]'s title,
    /// contractor name, requester and department.
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub struct SearchTerm(String);

    impl SearchTerm {
        /// Creates a new [`SearchTerm`] out of the provided `text`.
        ///
        /// [`None`] is returned for an empty `text`, as it matches everything.
        #[must_use]
        pub fn new(text: impl AsRef<str>) -> Option<Self> {
            let text = text.as_ref();
            (!text.is_empty()).then(|| Self(text.to_lowercase()))
        }

        /// Indicates whether the provided [`Project`] contains this
        /// [`SearchTerm`] in any of the searchable fields.
        #[must_use]
        pub fn matches(&self, project: &Project) -> bool {
            let fields: [&str; 4] = [
                project.title.as_ref(),
                project.contractor.name.as_ref(),
                project.requester.as_ref(),
                project.department.as_ref(),
            ];
            fields
                .into_iter()
                .any(|field| field.to_lowercase().contains(&self.0))
        }
    }

}
