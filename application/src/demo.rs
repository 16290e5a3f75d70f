//! Demo [`Project`]s to seed an empty store with.
//!
//! [`Project`]: service::domain::Project

use common::{Date, DateTime, Money};
use service::{
    command,
    domain::project::{
        evaluation::{Comment, Rating},
        Contractor, Costs, Draft, Status,
    },
    Command as _,
};
use tracing as log;

use crate::{AsError, Error, Service};

/// Sample of a demo [`Project`].
///
/// [`Project`]: service::domain::Project
struct Sample {
    unit_id: &'static str,
    title: &'static str,
    description: &'static str,
    requester: &'static str,
    department: &'static str,

    /// Trade name, legal name, tax ID, manager and contact.
    contractor: [&'static str; 5],

    start_date: &'static str,
    status: Status,

    /// Material, labor and equipment costs.
    costs: (i64, i64, i64),

    images: &'static [&'static str],
    invoices: &'static [&'static str],

    /// Rating, comment and RFC 3339 creation time.
    evaluation: Option<(u8, &'static str, &'static str)>,
}

const SAMPLES: [Sample; 3] = [
    Sample {
        unit_id: "1",
        title: "Reforma do Telhado",
        description: "Substituição completa das telhas de fibrocimento por \
                      termoacústicas devido a infiltrações.",
        requester: "João Silva",
        department: "Manutenção Predial",
        contractor: [
            "ConstruNorte Ltda",
            "ConstruNorte Engenharia e Construções LTDA",
            "12.345.678/0001-90",
            "Roberto Almeida",
            "(91) 98877-6655",
        ],
        start_date: "2023-10-15",
        status: Status::InProgress,
        costs: (45_000, 20_000, 5_000),
        images: &[
            "https://images.unsplash.com/photo-1503387762-592deb58ef4e?\
             auto=format&fit=crop&q=80&w=300&h=200",
            "https://images.unsplash.com/photo-1590069261209-f8e9b8642343?\
             auto=format&fit=crop&q=80&w=300&h=200",
        ],
        invoices: &[
            "https://www.w3.org/WAI/ER/tests/xhtml/testfiles/resources/pdf/\
             dummy.pdf",
        ],
        evaluation: None,
    },
    Sample {
        unit_id: "3",
        title: "Ampliação do Galpão B",
        description: "Construção de nova área de armazenagem com 500m².",
        requester: "Maria Oliveira",
        department: "Logística",
        contractor: [
            "Marabá Engenharia",
            "Marabá Soluções em Engenharia S.A.",
            "98.765.432/0001-10",
            "Fernanda Costa",
            "contato@marabaeng.com.br",
        ],
        start_date: "2023-11-01",
        status: Status::Planned,
        costs: (150_000, 80_000, 30_000),
        images: &[],
        invoices: &[],
        evaluation: None,
    },
    Sample {
        unit_id: "2",
        title: "Pintura Externa",
        description: "Pintura de toda a fachada e muros laterais.",
        requester: "Carlos Santos",
        department: "Administrativo",
        contractor: [
            "Pinturas Express",
            "Pinturas Express LTDA",
            "11.222.333/0001-44",
            "Carlos Pintor",
            "(91) 99999-8888",
        ],
        start_date: "2023-09-10",
        status: Status::Completed,
        costs: (12_000, 8_000, 2_000),
        images: &["https://images.unsplash.com/photo-1562259949-e8e7689d7828?\
                   auto=format&fit=crop&q=80&w=300&h=200"],
        invoices: &[],
        evaluation: Some((
            5,
            "Serviço excelente e rápido.",
            "2023-10-01T00:00:00Z",
        )),
    },
];

impl Sample {
    /// Converts this [`Sample`] into a [`Draft`].
    ///
    /// # Errors
    ///
    /// If the [`Sample::start_date`] is malformed.
    fn draft(&self) -> Result<Draft, Error> {
        let [name, legal_name, tax_id, manager, contact] = self.contractor;
        let (material, labor, equipment) = self.costs;

        Ok(Draft {
            unit_id: self.unit_id.to_owned().into(),
            title: self.title.to_owned().into(),
            description: self.description.to_owned().into(),
            requester: self.requester.to_owned().into(),
            department: self.department.to_owned().into(),
            contractor: Contractor {
                name: name.to_owned().into(),
                legal_name: legal_name.to_owned().into(),
                tax_id: tax_id.to_owned().into(),
                manager: manager.to_owned().into(),
                contact: contact.to_owned().into(),
            },
            start_date: self
                .start_date
                .parse::<Date>()
                .map_err(|e| Error::internal(&e))?,
            status: self.status,
            costs: Costs {
                material: Money::from(material),
                labor: Money::from(labor),
                equipment: Money::from(equipment),
            },
            images: self.images.iter().map(|&i| i.to_owned().into()).collect(),
            invoices: self
                .invoices
                .iter()
                .map(|&i| i.to_owned().into())
                .collect(),
        })
    }
}

/// Seeds the provided [`Service`] with the demo [`Project`]s.
///
/// # Errors
///
/// If any of the demo [`Project`]s refers to a [`Unit`] missing in the
/// [`Service`] configuration.
///
/// [`Project`]: service::domain::Project
/// [`Unit`]: service::domain::Unit
pub async fn seed(service: &Service) -> Result<(), Error> {
    for sample in &SAMPLES {
        let project = service
            .execute(command::CreateProject {
                draft: sample.draft()?,
            })
            .await
            .map_err(AsError::into_error)?;

        if let Some((rating, comment, created_at)) = sample.evaluation {
            let rating = Rating::new(rating).ok_or_else(|| {
                Error::internal(&format!("invalid demo rating: {rating}"))
            })?;
            let comment = Comment::new(comment).ok_or_else(|| {
                Error::internal(&"demo evaluation comment is empty")
            })?;
            let created_at = DateTime::from_rfc3339(created_at)
                .map_err(|e| Error::internal(&e))?
                .coerce();
            _ = service
                .execute(command::EvaluateProject {
                    id: project.id,
                    rating,
                    comment,
                    created_at: Some(created_at),
                })
                .await
                .map_err(AsError::into_error)?;
        }

        log::debug!("seeded demo `Project(id: {})`", project.id);
    }

    log::info!("seeded {} demo `Project`s", SAMPLES.len());

    Ok(())
}

#[cfg(test)]
mod spec {
    use common::Money;
    use service::{
        infra::{advisor::gemini, Gemini, Memory},
        query, Query as _,
    };

    use crate::{config, Service};

    fn reference_service() -> Service {
        Service::new(
            config::Service::default().try_into().unwrap(),
            Memory::new(),
            Gemini::new(gemini::Config::default()).unwrap(),
        )
    }

    #[tokio::test]
    async fn seeds_sample_projects() {
        let svc = reference_service();

        super::seed(&svc).await.unwrap();

        let projects = svc
            .execute(query::projects::List::by(Default::default()))
            .await
            .unwrap();
        let titles =
            projects.iter().map(|p| p.title.to_string()).collect::<Vec<_>>();
        assert_eq!(
            titles,
            ["Reforma do Telhado", "Ampliação do Galpão B", "Pintura Externa"],
        );
        assert_eq!(
            projects[2]
                .evaluation
                .as_ref()
                .map(|e| (u8::from(e.rating), e.created_at.to_rfc3339())),
            Some((5, "2023-10-01T00:00:00Z".to_owned())),
        );

        let summary = svc.execute(query::Summary::default()).await.unwrap();
        assert_eq!(summary.total_invested, Money::from(352_000));
        assert_eq!(summary.active_projects, 1);
        assert_eq!(summary.completed_projects, 1);
    }

    #[tokio::test]
    async fn fails_without_reference_units() {
        let svc = Service::new(
            service::Config::default(),
            Memory::new(),
            Gemini::new(gemini::Config::default()).unwrap(),
        );

        let err = super::seed(&svc).await.unwrap_err();

        assert_eq!(err.code, "UNIT_NOT_EXISTS");
    }
}
