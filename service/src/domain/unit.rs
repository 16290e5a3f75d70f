//! [`Unit`] definitions.

use derive_more::{AsRef, Display, From, Into};

/// Physical site of the company where projects take place.
///
/// [`Unit`]s are reference data: they are supplied once on startup and never
/// change afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Unit {
    /// ID of this [`Unit`].
    pub id: Id,

    /// Display [`Name`] of this [`Unit`].
    pub name: Name,

    /// [`City`] this [`Unit`] is located in.
    pub city: City,

    /// [`State`] this [`Unit`] is located in.
    pub state: State,

    /// Geographical [`Coordinates`] of this [`Unit`], if known.
    pub coordinates: Option<Coordinates>,
}

/// ID of a [`Unit`].
#[derive(AsRef, Clone, Debug, Display, Eq, From, Hash, Into, PartialEq)]
#[as_ref(str, String)]
pub struct Id(String);

/// Display name of a [`Unit`].
#[derive(AsRef, Clone, Debug, Display, Eq, From, Into, PartialEq)]
#[as_ref(str, String)]
pub struct Name(String);

/// City of a [`Unit`].
#[derive(AsRef, Clone, Debug, Display, Eq, From, Into, PartialEq)]
#[as_ref(str, String)]
pub struct City(String);

/// State (region code) of a [`Unit`].
#[derive(AsRef, Clone, Debug, Display, Eq, From, Into, PartialEq)]
#[as_ref(str, String)]
pub struct State(String);

/// Geographical coordinates of a [`Unit`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    /// Latitude in degrees.
    pub latitude: f64,

    /// Longitude in degrees.
    pub longitude: f64,
}
