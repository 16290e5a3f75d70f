//! [`Summary`]-related definitions.

use common::Money;
use derive_more::{From, Into};
use juniper::{graphql_object, GraphQLObject};
use service::read;

use crate::{api, Context};

/// Summary statistics of `Project`s.
#[derive(Clone, Debug, From, Into)]
pub struct Summary(read::Summary);

/// Summary statistics of `Project`s.
#[graphql_object(context = Context)]
impl Summary {
    /// Number of all the `Project`s.
    #[must_use]
    pub fn total_projects(&self) -> i32 {
        count(self.0.total_projects)
    }

    /// Number of `Project`s being executed.
    #[must_use]
    pub fn active_projects(&self) -> i32 {
        count(self.0.active_projects)
    }

    /// Number of finished `Project`s.
    #[must_use]
    pub fn completed_projects(&self) -> i32 {
        count(self.0.completed_projects)
    }

    /// Total cost of all the `Project`s.
    #[must_use]
    pub fn total_invested(&self) -> Money {
        self.0.total_invested
    }

    /// Total cost of `Project`s per each `Unit`, the most expensive first.
    ///
    /// Every `Unit` is listed, even without any `Project`s.
    #[must_use]
    pub fn cost_by_unit(&self) -> Vec<UnitCost> {
        self.0.cost_by_unit.iter().cloned().map(Into::into).collect()
    }

    /// Total cost of `Project`s per each month they started in,
    /// chronologically.
    #[must_use]
    pub fn monthly_costs(&self) -> Vec<MonthlyCost> {
        self.0.monthly_costs.iter().cloned().map(Into::into).collect()
    }
}

/// Saturates the provided count into the GraphQL `Int` range.
fn count(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

/// Total cost of `Project`s of a single `Unit`.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(name = "SummaryUnitCost")]
pub struct UnitCost {
    /// ID of the `Unit`.
    pub unit_id: api::unit::Id,

    /// City the `Unit` is located in.
    pub city: String,

    /// State the `Unit` is located in.
    pub state: String,

    /// Total cost of the `Unit`'s `Project`s.
    pub total: Money,
}

impl From<read::summary::UnitCost> for UnitCost {
    fn from(cost: read::summary::UnitCost) -> Self {
        let read::summary::UnitCost {
            unit_id,
            city,
            state,
            total,
        } = cost;
        Self {
            unit_id: unit_id.into(),
            city: city.into(),
            state: state.into(),
            total,
        }
    }
}

/// Total cost of `Project`s started in a single month.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(name = "SummaryMonthlyCost")]
pub struct MonthlyCost {
    /// Month in a `YYYY-MM` format.
    pub month: String,

    /// Short human-readable label of the month, like `out. de 23`.
    pub label: String,

    /// Total cost of the `Project`s.
    pub total: Money,
}

impl From<read::summary::MonthlyCost> for MonthlyCost {
    fn from(cost: read::summary::MonthlyCost) -> Self {
        let read::summary::MonthlyCost {
            month,
            label,
            total,
        } = cost;
        Self {
            month: month.to_string(),
            label,
            total,
        }
    }
}
