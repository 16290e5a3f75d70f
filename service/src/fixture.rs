//! Test fixtures.

use common::{Date, Money};

use crate::domain::{
    project::{self, Contractor, Costs, Draft, Status},
    Project, Unit,
};
#[cfg(feature = "memory")]
use crate::{
    infra::{advisor::Canned, Memory},
    Config, Service,
};

/// [`Service`] used in tests.
#[cfg(feature = "memory")]
pub(crate) type TestService = Service<Memory, Canned>;

/// Text answered by the canned advisor in tests.
pub(crate) const ADVICE: &str = "Proporção de custos adequada.";

/// Returns the reference [`Unit`]s.
pub(crate) fn units() -> Vec<Unit> {
    [
        ("1", "Capanema", "PA"),
        ("2", "Paragominas", "PA"),
        ("3", "Marabá", "PA"),
        ("4", "Jequié", "BA"),
    ]
    .into_iter()
    .map(|(id, city, state)| Unit {
        id: id.to_owned().into(),
        name: format!("Unidade {city}").into(),
        city: city.to_owned().into(),
        state: state.to_owned().into(),
        coordinates: None,
    })
    .collect()
}

/// Creates a new [`TestService`] with an empty database.
#[cfg(feature = "memory")]
pub(crate) fn service() -> TestService {
    Service::new(
        Config { units: units() },
        Memory::new(),
        Canned(ADVICE.to_owned().into()),
    )
}

/// Returns a [`Draft`] of a roof renovation at the provided unit.
pub(crate) fn draft(unit_id: &str) -> Draft {
    Draft {
        unit_id: unit_id.to_owned().into(),
        title: "Reforma do Telhado".to_owned().into(),
        description: "Substituição completa das telhas.".to_owned().into(),
        requester: "João Silva".to_owned().into(),
        department: "Manutenção Predial".to_owned().into(),
        contractor: Contractor {
            name: "ConstruNorte Ltda".to_owned().into(),
            legal_name: "ConstruNorte Engenharia e Construções LTDA"
                .to_owned()
                .into(),
            tax_id: "12.345.678/0001-90".to_owned().into(),
            manager: "Roberto Almeida".to_owned().into(),
            contact: "(91) 98877-6655".to_owned().into(),
        },
        start_date: date("2023-10-15"),
        status: Status::InProgress,
        costs: costs(45_000, 20_000, 5_000),
        images: vec!["https://example.com/telhado.jpg".to_owned().into()],
        invoices: vec![],
    }
}

/// Returns a [`Project`] made of the [`draft()`] at the provided unit.
pub(crate) fn project(unit_id: &str) -> Project {
    Project::new(project::Id::new(), draft(unit_id))
}

/// Returns [`Costs`] of the provided whole amounts.
pub(crate) fn costs(material: i64, labor: i64, equipment: i64) -> Costs {
    Costs {
        material: Money::from(material),
        labor: Money::from(labor),
        equipment: Money::from(equipment),
    }
}

/// Parses a `YYYY-MM-DD` [`Date`].
pub(crate) fn date(s: &str) -> Date {
    s.parse().unwrap()
}
