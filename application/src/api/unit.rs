//! [`Unit`]-related definitions.

use derive_more::{Display, From, Into};
use juniper::{graphql_object, GraphQLObject, GraphQLScalar};
use service::domain;

use crate::Context;

/// A site of the company.
#[derive(Clone, Debug, From, Into)]
pub struct Unit(domain::Unit);

/// A site of the company where `Project`s take place.
#[graphql_object(context = Context)]
impl Unit {
    /// Unique identifier of this `Unit`.
    #[must_use]
    pub fn id(&self) -> Id {
        self.0.id.clone().into()
    }

    /// Display name of this `Unit`.
    #[must_use]
    pub fn name(&self) -> &str {
        self.0.name.as_ref()
    }

    /// City this `Unit` is located in.
    #[must_use]
    pub fn city(&self) -> &str {
        self.0.city.as_ref()
    }

    /// State this `Unit` is located in.
    #[must_use]
    pub fn state(&self) -> &str {
        self.0.state.as_ref()
    }

    /// Geographical coordinates of this `Unit`, if known.
    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.0.coordinates.map(Into::into)
    }
}

/// Unique identifier of a `Unit`.
#[derive(Clone, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::unit::Id)]
#[into(domain::unit::Id)]
#[graphql(name = "UnitId", transparent)]
pub struct Id(String);

/// Geographical coordinates of a `Unit`.
#[derive(Clone, Copy, Debug, GraphQLObject)]
#[graphql(name = "UnitCoordinates")]
pub struct Coordinates {
    /// Latitude in degrees.
    pub latitude: f64,

    /// Longitude in degrees.
    pub longitude: f64,
}

impl From<domain::unit::Coordinates> for Coordinates {
    fn from(coordinates: domain::unit::Coordinates) -> Self {
        let domain::unit::Coordinates {
            latitude,
            longitude,
        } = coordinates;
        Self {
            latitude,
            longitude,
        }
    }
}
