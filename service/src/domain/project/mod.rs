//! [`Project`] definitions.

pub mod contractor;
pub mod evaluation;

use common::{define_kind, Date, Money};
use derive_more::{AsRef, Display, From, FromStr, Into};
use uuid::Uuid;

use crate::domain::unit;
#[cfg(doc)]
use crate::domain::Unit;

pub use self::{contractor::Contractor, evaluation::Evaluation};

/// Construction or maintenance work performed at a [`Unit`].
#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    /// ID of this [`Project`].
    pub id: Id,

    /// ID of the [`Unit`] this [`Project`] takes place at.
    pub unit_id: unit::Id,

    /// [`Title`] of this [`Project`].
    pub title: Title,

    /// [`Description`] of this [`Project`].
    pub description: Description,

    /// [`Requester`] of this [`Project`].
    pub requester: Requester,

    /// [`Department`] requesting this [`Project`].
    pub department: Department,

    /// [`Contractor`] performing this [`Project`].
    pub contractor: Contractor,

    /// [`Date`] this [`Project`] starts at.
    pub start_date: Date,

    /// [`Status`] of this [`Project`].
    pub status: Status,

    /// [`Costs`] of this [`Project`].
    pub costs: Costs,

    /// Images attached to this [`Project`].
    pub images: Vec<Attachment>,

    /// Invoices attached to this [`Project`].
    pub invoices: Vec<Attachment>,

    /// [`Evaluation`] of this [`Project`], if it was evaluated.
    pub evaluation: Option<Evaluation>,

    /// Latest [`Advice`] on this [`Project`], if any was produced.
    pub advice: Option<Advice>,
}

impl Project {
    /// Creates a new [`Project`] out of the provided [`Draft`].
    ///
    /// A new [`Project`] has neither [`Evaluation`] nor [`Advice`].
    #[must_use]
    pub fn new(id: Id, draft: Draft) -> Self {
        let Draft {
            unit_id,
            title,
            description,
            requester,
            department,
            contractor,
            start_date,
            status,
            costs,
            images,
            invoices,
        } = draft;

        Self {
            id,
            unit_id,
            title,
            description,
            requester,
            department,
            contractor,
            start_date,
            status,
            costs,
            images,
            invoices,
            evaluation: None,
            advice: None,
        }
    }

    /// Replaces all the editable fields of this [`Project`] with the ones of
    /// the provided [`Draft`].
    ///
    /// [`Id`], [`Evaluation`] and [`Advice`] are left untouched.
    pub fn replace(&mut self, draft: Draft) {
        let evaluation = self.evaluation.take();
        let advice = self.advice.take();

        *self = Self {
            evaluation,
            advice,
            ..Self::new(self.id, draft)
        };
    }

    /// Returns the total cost of this [`Project`].
    #[must_use]
    pub fn total_cost(&self) -> Money {
        self.costs.total()
    }
}

/// Editable fields of a [`Project`].
#[derive(Clone, Debug, PartialEq)]
pub struct Draft {
    /// ID of the [`Unit`] the [`Project`] takes place at.
    pub unit_id: unit::Id,

    /// [`Title`] of the [`Project`].
    pub title: Title,

    /// [`Description`] of the [`Project`].
    pub description: Description,

    /// [`Requester`] of the [`Project`].
    pub requester: Requester,

    /// [`Department`] requesting the [`Project`].
    pub department: Department,

    /// [`Contractor`] performing the [`Project`].
    pub contractor: Contractor,

    /// [`Date`] the [`Project`] starts at.
    pub start_date: Date,

    /// [`Status`] of the [`Project`].
    pub status: Status,

    /// [`Costs`] of the [`Project`].
    pub costs: Costs,

    /// Images attached to the [`Project`].
    pub images: Vec<Attachment>,

    /// Invoices attached to the [`Project`].
    pub invoices: Vec<Attachment>,
}

/// ID of a [`Project`].
#[derive(
    Clone, Copy, Debug, Default, Display, Eq, From, FromStr, Hash, Into,
    PartialEq,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Title of a [`Project`].
#[derive(AsRef, Clone, Debug, Display, Eq, From, Into, PartialEq)]
#[as_ref(str, String)]
pub struct Title(String);

/// Free-form description of a [`Project`].
#[derive(AsRef, Clone, Debug, Default, Display, Eq, From, Into, PartialEq)]
#[as_ref(str, String)]
pub struct Description(String);

/// Name of a person who requested a [`Project`].
#[derive(AsRef, Clone, Debug, Display, Eq, From, Into, PartialEq)]
#[as_ref(str, String)]
pub struct Requester(String);

/// Name of a department which requested a [`Project`].
#[derive(AsRef, Clone, Debug, Display, Eq, From, Into, PartialEq)]
#[as_ref(str, String)]
pub struct Department(String);

/// Opaque reference (usually a URL) to a file attached to a [`Project`].
#[derive(AsRef, Clone, Debug, Display, Eq, From, Into, PartialEq)]
#[as_ref(str, String)]
pub struct Attachment(String);

/// Advisory text about a [`Project`] produced by an external advisor.
#[derive(AsRef, Clone, Debug, Display, Eq, From, Into, PartialEq)]
#[as_ref(str, String)]
pub struct Advice(String);

define_kind! {
    #[doc = "Lifecycle status of a [`Project`]."]
    enum Status {
        #[doc = "[`Project`] is planned, but not started yet."]
        Planned = 1,

        #[doc = "[`Project`] is being executed."]
        InProgress = 2,

        #[doc = "[`Project`] is paused."]
        OnHold = 3,

        #[doc = "[`Project`] is finished."]
        Completed = 4,
    }
}

/// Cost breakdown of a [`Project`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Costs {
    /// Cost of materials.
    pub material: Money,

    /// Cost of labor.
    pub labor: Money,

    /// Cost of equipment.
    pub equipment: Money,
}

impl Costs {
    /// Returns the sum of all the cost components.
    #[must_use]
    pub fn total(&self) -> Money {
        self.material + self.labor + self.equipment
    }

    /// Indicates whether any of the cost components is negative.
    #[must_use]
    pub fn has_negative(&self) -> bool {
        [self.material, self.labor, self.equipment]
            .iter()
            .any(Money::is_negative)
    }
}
