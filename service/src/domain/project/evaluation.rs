//! [`Evaluation`] definitions.

use std::str::FromStr;

#[cfg(doc)]
use common::DateTime;
use common::{unit, DateTimeOf};
use derive_more::{AsRef, Display, Into};

#[cfg(doc)]
use crate::domain::Project;

/// Post-completion quality assessment of a [`Project`].
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    /// [`Rating`] given to the [`Project`].
    pub rating: Rating,

    /// [`Comment`] on the [`Project`].
    pub comment: Comment,

    /// [`DateTime`] when this [`Evaluation`] was made.
    pub created_at: CreationDateTime,
}

/// Rating of a [`Project`] on a `1..=5` scale.
#[derive(
    Clone, Copy, Debug, Display, Eq, Hash, Into, Ord, PartialEq, PartialOrd,
)]
pub struct Rating(u8);

impl Rating {
    /// Lowest possible [`Rating`].
    pub const MIN: Self = Self(1);

    /// Highest possible [`Rating`].
    pub const MAX: Self = Self(5);

    /// Creates a new [`Rating`] if the provided `value` is in `1..=5` range.
    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN.0..=Self::MAX.0)
            .contains(&value)
            .then_some(Self(value))
    }
}

impl TryFrom<i32> for Rating {
    type Error = &'static str;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or("`Rating` must be in `1..=5` range")
    }
}

/// Non-empty textual comment of an [`Evaluation`].
#[derive(AsRef, Clone, Debug, Display, Eq, Into, PartialEq)]
#[as_ref(str, String)]
pub struct Comment(String);

impl Comment {
    /// Creates a new [`Comment`] if the provided `text` is not empty.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        Self::check(&text).then_some(Self(text))
    }

    /// Checks whether the given `text` is a valid [`Comment`].
    fn check(text: impl AsRef<str>) -> bool {
        !text.as_ref().is_empty()
    }
}

impl FromStr for Comment {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("`Comment` must not be empty")
    }
}

/// [`DateTime`] of an [`Evaluation`] creation.
pub type CreationDateTime = DateTimeOf<(Evaluation, unit::Creation)>;

#[cfg(test)]
mod spec {
    use super::{Comment, Rating};

    #[test]
    fn rating_range() {
        assert_eq!(Rating::new(0), None);
        assert_eq!(Rating::new(1), Some(Rating::MIN));
        assert_eq!(Rating::new(5), Some(Rating::MAX));
        assert_eq!(Rating::new(6), None);

        assert!(Rating::try_from(3).is_ok());
        assert!(Rating::try_from(-1).is_err());
        assert!(Rating::try_from(261).is_err());
    }

    #[test]
    fn comment_is_not_empty() {
        assert!(Comment::new("").is_none());
        assert_eq!(
            Comment::new("  \n\t").map(String::from),
            Some("  \n\t".to_owned()),
        );
        assert_eq!(
            Comment::new("Excelente execução").map(String::from),
            Some("Excelente execução".to_owned()),
        );
        assert!("ok".parse::<Comment>().is_ok());
    }
}
