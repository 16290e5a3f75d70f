//! [`Contractor`] definitions.

use derive_more::{AsRef, Display, From, Into};

#[cfg(doc)]
use crate::domain::Project;

/// Company performing a [`Project`].
#[derive(Clone, Debug, PartialEq)]
pub struct Contractor {
    /// Trade [`Name`] of this [`Contractor`].
    pub name: Name,

    /// Registered [`LegalName`] of this [`Contractor`].
    pub legal_name: LegalName,

    /// [`TaxId`] of this [`Contractor`].
    pub tax_id: TaxId,

    /// [`Manager`] responsible for the [`Project`] on this [`Contractor`]'s
    /// side.
    pub manager: Manager,

    /// [`Contact`] of this [`Contractor`].
    pub contact: Contact,
}

/// Trade name of a [`Contractor`].
#[derive(AsRef, Clone, Debug, Display, Eq, From, Into, PartialEq)]
#[as_ref(str, String)]
pub struct Name(String);

/// Registered legal name of a [`Contractor`].
#[derive(AsRef, Clone, Debug, Display, Eq, From, Into, PartialEq)]
#[as_ref(str, String)]
pub struct LegalName(String);

/// Tax registration number (CNPJ) of a [`Contractor`].
///
/// Format is not validated.
#[derive(AsRef, Clone, Debug, Display, Eq, From, Into, PartialEq)]
#[as_ref(str, String)]
pub struct TaxId(String);

/// Name of a [`Contractor`]'s manager.
#[derive(AsRef, Clone, Debug, Display, Eq, From, Into, PartialEq)]
#[as_ref(str, String)]
pub struct Manager(String);

/// Free-form contact (phone or email) of a [`Contractor`].
#[derive(AsRef, Clone, Debug, Display, Eq, From, Into, PartialEq)]
#[as_ref(str, String)]
pub struct Contact(String);
