//! [`Project`]-related definitions.

use common::{Date, DateTime, Money};
use derive_more::{Display, From, Into};
use juniper::{
    graphql_object, GraphQLEnum, GraphQLInputObject, GraphQLObject,
    GraphQLScalar,
};
use service::domain;
use uuid::Uuid;

use crate::{api, define_error, Context, Error};

/// A construction project.
#[derive(Clone, Debug, From, Into)]
pub struct Project(domain::Project);

/// Construction or maintenance work performed at a `Unit`.
#[graphql_object(context = Context)]
impl Project {
    /// Unique identifier of this `Project`.
    #[must_use]
    pub fn id(&self) -> Id {
        self.0.id.into()
    }

    /// ID of the `Unit` this `Project` takes place at.
    #[must_use]
    pub fn unit_id(&self) -> api::unit::Id {
        self.0.unit_id.clone().into()
    }

    /// `Unit` this `Project` takes place at.
    ///
    /// `null` if the `Unit` was removed from the reference list.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Project.unit",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn unit(&self, ctx: &Context) -> Option<api::Unit> {
        ctx.service().unit(&self.0.unit_id).cloned().map(Into::into)
    }

    /// Title of this `Project`.
    #[must_use]
    pub fn title(&self) -> &str {
        self.0.title.as_ref()
    }

    /// Free-form description of this `Project`.
    #[must_use]
    pub fn description(&self) -> &str {
        self.0.description.as_ref()
    }

    /// Name of the person who requested this `Project`.
    #[must_use]
    pub fn requester(&self) -> &str {
        self.0.requester.as_ref()
    }

    /// Department which requested this `Project`.
    #[must_use]
    pub fn department(&self) -> &str {
        self.0.department.as_ref()
    }

    /// `Contractor` performing this `Project`.
    #[must_use]
    pub fn contractor(&self) -> Contractor {
        self.0.contractor.clone().into()
    }

    /// `Date` this `Project` starts at.
    #[must_use]
    pub fn start_date(&self) -> Date {
        self.0.start_date
    }

    /// Lifecycle status of this `Project`.
    #[must_use]
    pub fn status(&self) -> Status {
        self.0.status.into()
    }

    /// Cost breakdown of this `Project`.
    #[must_use]
    pub fn costs(&self) -> Costs {
        self.0.costs.into()
    }

    /// References to the images attached to this `Project`.
    #[must_use]
    pub fn images(&self) -> Vec<String> {
        self.0.images.iter().map(ToString::to_string).collect()
    }

    /// References to the invoices attached to this `Project`.
    #[must_use]
    pub fn invoices(&self) -> Vec<String> {
        self.0.invoices.iter().map(ToString::to_string).collect()
    }

    /// `Evaluation` of this `Project`, if it was evaluated.
    #[must_use]
    pub fn evaluation(&self) -> Option<Evaluation> {
        self.0.evaluation.clone().map(Into::into)
    }

    /// Latest advisory text on this `Project`, if any was produced.
    #[must_use]
    pub fn advice(&self) -> Option<&str> {
        self.0.advice.as_ref().map(AsRef::<str>::as_ref)
    }
}

/// Unique identifier of a `Project`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::project::Id)]
#[into(domain::project::Id)]
#[graphql(name = "ProjectId", transparent)]
pub struct Id(Uuid);

/// Lifecycle status of a `Project`.
#[derive(Clone, Copy, Debug, Eq, GraphQLEnum, PartialEq)]
#[graphql(name = "ProjectStatus")]
pub enum Status {
    /// Planned, but not started yet.
    Planned,

    /// Being executed.
    InProgress,

    /// Paused.
    OnHold,

    /// Finished.
    Completed,
}

impl From<domain::project::Status> for Status {
    fn from(status: domain::project::Status) -> Self {
        use domain::project::Status as S;
        match status {
            S::Planned => Self::Planned,
            S::InProgress => Self::InProgress,
            S::OnHold => Self::OnHold,
            S::Completed => Self::Completed,
        }
    }
}

impl From<Status> for domain::project::Status {
    fn from(status: Status) -> Self {
        match status {
            Status::Planned => Self::Planned,
            Status::InProgress => Self::InProgress,
            Status::OnHold => Self::OnHold,
            Status::Completed => Self::Completed,
        }
    }
}

/// Company performing a `Project`.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(name = "ProjectContractor")]
pub struct Contractor {
    /// Trade name of the company.
    pub name: String,

    /// Registered legal name of the company.
    pub legal_name: String,

    /// Tax registration number (CNPJ) of the company.
    pub tax_id: String,

    /// Person responsible for the `Project` on the company side.
    pub manager: String,

    /// Phone number or email of the company.
    pub contact: String,
}

impl From<domain::project::Contractor> for Contractor {
    fn from(contractor: domain::project::Contractor) -> Self {
        let domain::project::Contractor {
            name,
            legal_name,
            tax_id,
            manager,
            contact,
        } = contractor;
        Self {
            name: name.into(),
            legal_name: legal_name.into(),
            tax_id: tax_id.into(),
            manager: manager.into(),
            contact: contact.into(),
        }
    }
}

/// Cost breakdown of a `Project`.
#[derive(Clone, Copy, Debug, GraphQLObject)]
#[graphql(name = "ProjectCosts")]
pub struct Costs {
    /// Cost of materials.
    pub material: Money,

    /// Cost of labor.
    pub labor: Money,

    /// Cost of equipment.
    pub equipment: Money,

    /// Sum of all the cost components.
    pub total: Money,
}

impl From<domain::project::Costs> for Costs {
    fn from(costs: domain::project::Costs) -> Self {
        Self {
            material: costs.material,
            labor: costs.labor,
            equipment: costs.equipment,
            total: costs.total(),
        }
    }
}

/// Post-completion quality assessment of a `Project`.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(name = "ProjectEvaluation")]
pub struct Evaluation {
    /// Rating on a `1..=5` scale.
    pub rating: i32,

    /// Comment of the assessment.
    pub comment: String,

    /// `DateTime` when the assessment was made.
    pub created_at: DateTime,
}

impl From<domain::project::Evaluation> for Evaluation {
    fn from(evaluation: domain::project::Evaluation) -> Self {
        let domain::project::Evaluation {
            rating,
            comment,
            created_at,
        } = evaluation;
        Self {
            rating: u8::from(rating).into(),
            comment: comment.into(),
            created_at: created_at.coerce(),
        }
    }
}

/// Editable fields of a `Project`.
#[derive(Clone, Debug, GraphQLInputObject)]
#[graphql(name = "ProjectInput")]
pub struct Input {
    /// ID of the `Unit` the `Project` takes place at.
    pub unit_id: api::unit::Id,

    /// Title of the `Project`.
    pub title: String,

    /// Free-form description of the `Project`.
    pub description: Option<String>,

    /// Name of the person who requested the `Project`.
    pub requester: String,

    /// Department which requested the `Project`.
    pub department: String,

    /// Company performing the `Project`.
    pub contractor: ContractorInput,

    /// `Date` the `Project` starts at.
    pub start_date: Date,

    /// Lifecycle status of the `Project`.
    pub status: Status,

    /// Cost breakdown of the `Project`.
    pub costs: CostsInput,

    /// References to the images attached to the `Project`.
    ///
    /// Blank references are ignored.
    pub images: Option<Vec<String>>,

    /// References to the invoices attached to the `Project`.
    ///
    /// Blank references are ignored.
    pub invoices: Option<Vec<String>>,
}

impl Input {
    /// Converts this [`Input`] into a [`domain::project::Draft`].
    ///
    /// # Errors
    ///
    /// With [`InputError::NegativeCost`] if any of the cost components is
    /// negative.
    pub fn into_draft(self) -> Result<domain::project::Draft, Error> {
        let Self {
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
        } = self;

        let costs = domain::project::Costs::from(costs);
        if costs.has_negative() {
            return Err(InputError::NegativeCost.into());
        }

        Ok(domain::project::Draft {
            unit_id: unit_id.into(),
            title: title.into(),
            description: description.unwrap_or_default().into(),
            requester: requester.into(),
            department: department.into(),
            contractor: contractor.into(),
            start_date,
            status: status.into(),
            costs,
            images: attachments(images),
            invoices: attachments(invoices),
        })
    }
}

/// Converts the provided references into [`domain::project::Attachment`]s,
/// trimming them and omitting the blank ones.
fn attachments(refs: Option<Vec<String>>) -> Vec<domain::project::Attachment> {
    refs.into_iter()
        .flatten()
        .map(|r| r.trim().to_owned())
        .filter(|r| !r.is_empty())
        .map(Into::into)
        .collect()
}

/// Company performing a `Project`.
#[derive(Clone, Debug, GraphQLInputObject)]
#[graphql(name = "ProjectContractorInput")]
pub struct ContractorInput {
    /// Trade name of the company.
    pub name: String,

    /// Registered legal name of the company.
    pub legal_name: String,

    /// Tax registration number (CNPJ) of the company.
    pub tax_id: String,

    /// Person responsible for the `Project` on the company side.
    pub manager: String,

    /// Phone number or email of the company.
    pub contact: String,
}

impl From<ContractorInput> for domain::project::Contractor {
    fn from(input: ContractorInput) -> Self {
        let ContractorInput {
            name,
            legal_name,
            tax_id,
            manager,
            contact,
        } = input;
        Self {
            name: name.into(),
            legal_name: legal_name.into(),
            tax_id: tax_id.into(),
            manager: manager.into(),
            contact: contact.into(),
        }
    }
}

/// Cost breakdown of a `Project`.
#[derive(Clone, Copy, Debug, GraphQLInputObject)]
#[graphql(name = "ProjectCostsInput")]
pub struct CostsInput {
    /// Cost of materials.
    pub material: Money,

    /// Cost of labor.
    pub labor: Money,

    /// Cost of equipment.
    pub equipment: Money,
}

impl From<CostsInput> for domain::project::Costs {
    fn from(input: CostsInput) -> Self {
        let CostsInput {
            material,
            labor,
            equipment,
        } = input;
        Self {
            material,
            labor,
            equipment,
        }
    }
}

define_error! {
    enum InputError {
        #[code = "NEGATIVE_COST"]
        #[status = BAD_REQUEST]
        #[message = "`Project` cost components must not be negative"]
        NegativeCost,
    }
}

#[cfg(test)]
mod spec {
    use common::{Date, Money};
    use service::domain;

    use super::{ContractorInput, CostsInput, Input, Status};

    fn input() -> Input {
        Input {
            unit_id: domain::unit::Id::from("1".to_owned()).into(),
            title: "Reforma do Telhado".to_owned(),
            description: None,
            requester: "João Silva".to_owned(),
            department: "Manutenção Predial".to_owned(),
            contractor: ContractorInput {
                name: "ConstruNorte Ltda".to_owned(),
                legal_name: "ConstruNorte Engenharia e Construções LTDA"
                    .to_owned(),
                tax_id: "12.345.678/0001-90".to_owned(),
                manager: "Roberto Almeida".to_owned(),
                contact: "(91) 98877-6655".to_owned(),
            },
            start_date: Date::new(2023, 10, 15).unwrap(),
            status: Status::InProgress,
            costs: CostsInput {
                material: Money::from(45_000),
                labor: Money::from(20_000),
                equipment: Money::from(5_000),
            },
            images: Some(vec![
                " https://example.com/a.jpg ".to_owned(),
                "  ".to_owned(),
            ]),
            invoices: None,
        }
    }

    #[test]
    fn converts_into_draft() {
        let draft = input().into_draft().unwrap();

        assert_eq!(draft.unit_id.to_string(), "1");
        assert_eq!(draft.description.to_string(), "");
        assert_eq!(draft.costs.total(), Money::from(70_000));
        assert_eq!(
            draft.images.iter().map(ToString::to_string).collect::<Vec<_>>(),
            ["https://example.com/a.jpg"],
        );
        assert!(draft.invoices.is_empty());
    }

    #[test]
    fn rejects_negative_costs() {
        let mut input = input();
        input.costs.equipment = Money::from(-1);

        let err = input.into_draft().unwrap_err();

        assert_eq!(err.code, "NEGATIVE_COST");
        assert_eq!(err.status_code, http::StatusCode::BAD_REQUEST);
    }
}
