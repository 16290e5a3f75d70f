//! [`Summary`] statistics definitions.

use std::collections::BTreeMap;

use common::{Money, YearMonth};

use crate::domain::{project::Status, unit, Project, Unit};

/// Summary statistics derived from a collection of [`Project`]s.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    /// Number of all the [`Project`]s.
    pub total_projects: usize,

    /// Number of [`Project`]s in [`Status::InProgress`].
    pub active_projects: usize,

    /// Number of [`Project`]s in [`Status::Completed`].
    pub completed_projects: usize,

    /// Total cost of all the [`Project`]s.
    pub total_invested: Money,

    /// Total cost of [`Project`]s per each [`Unit`], the most expensive
    /// first.
    pub cost_by_unit: Vec<UnitCost>,

    /// Total cost of [`Project`]s per each month they started in,
    /// chronologically.
    pub monthly_costs: Vec<MonthlyCost>,
}

impl Summary {
    /// Computes a [`Summary`] of the provided [`Project`]s.
    ///
    /// [`Summary::cost_by_unit`] contains an entry for every provided
    /// [`Unit`], even if it has no [`Project`]s. [`Unit`]s of equal cost keep
    /// their relative order.
    #[must_use]
    pub fn compute(projects: &[Project], units: &[Unit]) -> Self {
        let count_of = |status: Status| {
            projects.iter().filter(|p| p.status == status).count()
        };

        let mut cost_by_unit = units
            .iter()
            .map(|u| UnitCost {
                unit_id: u.id.clone(),
                city: u.city.clone(),
                state: u.state.clone(),
                total: projects
                    .iter()
                    .filter(|p| p.unit_id == u.id)
                    .map(Project::total_cost)
                    .sum(),
            })
            .collect::<Vec<_>>();
        cost_by_unit.sort_by(|a, b| b.total.cmp(&a.total));

        let mut months = BTreeMap::<YearMonth, Money>::new();
        for p in projects {
            *months.entry(p.start_date.year_month()).or_default() +=
                p.total_cost();
        }
        let monthly_costs = months
            .into_iter()
            .map(|(month, total)| MonthlyCost {
                month,
                label: MonthlyCost::label_of(month),
                total,
            })
            .collect();

        Self {
            total_projects: projects.len(),
            active_projects: count_of(Status::InProgress),
            completed_projects: count_of(Status::Completed),
            total_invested: projects.iter().map(Project::total_cost).sum(),
            cost_by_unit,
            monthly_costs,
        }
    }
}

/// Total cost of [`Project`]s of a single [`Unit`].
#[derive(Clone, Debug, PartialEq)]
pub struct UnitCost {
    /// ID of the [`Unit`].
    pub unit_id: unit::Id,

    /// [`unit::City`] of the [`Unit`].
    pub city: unit::City,

    /// [`unit::State`] of the [`Unit`].
    pub state: unit::State,

    /// Total cost of the [`Unit`]'s [`Project`]s.
    pub total: Money,
}

/// Total cost of [`Project`]s started in a single month.
#[derive(Clone, Debug, PartialEq)]
pub struct MonthlyCost {
    /// [`YearMonth`] the [`Project`]s started in.
    pub month: YearMonth,

    /// Human-readable label of the [`MonthlyCost::month`].
    pub label: String,

    /// Total cost of the [`Project`]s.
    pub total: Money,
}

impl MonthlyCost {
    /// Abbreviated month names in the `pt-BR` locale.
    const MONTHS: [&'static str; 12] = [
        "jan.", "fev.", "mar.", "abr.", "mai.", "jun.", "jul.", "ago.", "set.",
        "out.", "nov.", "dez.",
    ];

    /// Renders a short `pt-BR` label of the provided [`YearMonth`], like
    /// `out. de 23`.
    #[must_use]
    pub fn label_of(month: YearMonth) -> String {
        let name = Self::MONTHS[usize::from(month.month() - 1)];
        format!("{name} de {:02}", month.year().rem_euclid(100))
    }
}

#[cfg(test)]
mod spec {
    use common::{Date, Money, YearMonth};

    use crate::domain::{
        project::{self, Contractor, Costs, Draft, Status},
        unit, Project, Unit,
    };

    use super::{MonthlyCost, Summary};

    fn units() -> Vec<Unit> {
        [
            ("1", "Capanema", "PA"),
            ("2", "Paragominas", "PA"),
            ("3", "Marabá", "PA"),
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

    fn project(
        unit: &str,
        status: Status,
        start: (i32, u8, u8),
        (material, labor, equipment): (i64, i64, i64),
    ) -> Project {
        Project::new(
            project::Id::new(),
            Draft {
                unit_id: unit.to_owned().into(),
                title: "Obra".to_owned().into(),
                description: project::Description::default(),
                requester: "Requerente".to_owned().into(),
                department: "Manutenção".to_owned().into(),
                contractor: Contractor {
                    name: "Construtora".to_owned().into(),
                    legal_name: "Construtora Ltda".to_owned().into(),
                    tax_id: "00.000.000/0001-00".to_owned().into(),
                    manager: "Gerente".to_owned().into(),
                    contact: "contato@example.com".to_owned().into(),
                },
                start_date: Date::new(start.0, start.1, start.2).unwrap(),
                status,
                costs: Costs {
                    material: material.into(),
                    labor: labor.into(),
                    equipment: equipment.into(),
                },
                images: vec![],
                invoices: vec![],
            },
        )
    }

    fn unit_ids(summary: &Summary) -> Vec<String> {
        summary
            .cost_by_unit
            .iter()
            .map(|c| c.unit_id.to_string())
            .collect()
    }

    #[test]
    fn empty_collection() {
        let summary = Summary::compute(&[], &units());

        assert_eq!(summary.total_projects, 0);
        assert_eq!(summary.active_projects, 0);
        assert_eq!(summary.completed_projects, 0);
        assert_eq!(summary.total_invested, Money::ZERO);
        assert_eq!(unit_ids(&summary), ["1", "2", "3"]);
        assert!(summary.cost_by_unit.iter().all(|c| c.total == Money::ZERO));
        assert!(summary.monthly_costs.is_empty());
    }

    #[test]
    fn counts_and_ranks() {
        use Status as S;

        let projects = [
            project("1", S::InProgress, (2023, 10, 1), (45_000, 20_000, 5_000)),
            project("3", S::Planned, (2023, 11, 1), (150_000, 80_000, 30_000)),
            project("2", S::Completed, (2023, 9, 1), (12_000, 8_000, 2_000)),
        ];

        let summary = Summary::compute(&projects, &units());

        assert_eq!(summary.total_projects, 3);
        assert_eq!(summary.active_projects, 1);
        assert_eq!(summary.completed_projects, 1);
        assert_eq!(summary.total_invested, Money::from(352_000));
        assert_eq!(unit_ids(&summary), ["3", "1", "2"]);
        assert_eq!(summary.cost_by_unit[0].total, Money::from(260_000));
        assert_eq!(
            summary.cost_by_unit[0].city,
            unit::City::from("Marabá".to_owned()),
        );
    }

    #[test]
    fn ties_keep_reference_order() {
        let projects = [
            project("3", Status::Planned, (2023, 10, 1), (10, 0, 0)),
            project("2", Status::Planned, (2023, 10, 1), (10, 0, 0)),
        ];

        let summary = Summary::compute(&projects, &units());

        assert_eq!(unit_ids(&summary), ["2", "3", "1"]);
    }

    #[test]
    fn negative_costs_pass_through() {
        let projects =
            [project("1", Status::Planned, (2023, 10, 1), (100, -30, 0))];

        let summary = Summary::compute(&projects, &units());

        assert_eq!(summary.total_invested, Money::from(70));
        assert_eq!(summary.monthly_costs[0].total, Money::from(70));
    }

    #[test]
    fn buckets_months_chronologically() {
        use Status as S;

        let projects = [
            project("1", S::InProgress, (2023, 10, 15), (45_000, 20_000, 5_000)),
            project("2", S::Completed, (2023, 9, 10), (12_000, 8_000, 2_000)),
            project("1", S::Planned, (2024, 1, 3), (1, 0, 0)),
            project("3", S::Planned, (2023, 10, 31), (0, 0, 30)),
        ];

        let summary = Summary::compute(&projects, &units());

        let months = summary
            .monthly_costs
            .iter()
            .map(|m| (m.month.to_string(), m.label.as_str(), m.total))
            .collect::<Vec<_>>();
        assert_eq!(
            months,
            [
                ("2023-09".to_owned(), "set. de 23", Money::from(22_000)),
                ("2023-10".to_owned(), "out. de 23", Money::from(70_030)),
                ("2024-01".to_owned(), "jan. de 24", Money::from(1)),
            ],
        );
    }

    #[test]
    fn labels_months_in_pt_br() {
        let label = |y, m| MonthlyCost::label_of(YearMonth::new(y, m).unwrap());

        assert_eq!(label(2023, 10), "out. de 23");
        assert_eq!(label(2000, 5), "mai. de 00");
        assert_eq!(label(2009, 12), "dez. de 09");
    }
}
