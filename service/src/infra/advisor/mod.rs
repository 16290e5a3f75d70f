//! [`Advisor`]-related implementations.

#[cfg(feature = "gemini")]
pub mod gemini;

use derive_more::{AsRef, Display, Error as StdError, From, Into};
use tracerr::Traced;

use crate::domain::{
    project::{Advice, Status},
    Project,
};

#[cfg(feature = "gemini")]
pub use self::gemini::Gemini;

/// Producer of free-form advisory text.
pub use common::Handler as Advisor;

/// Request for an advisory text about a single [`Project`].
#[derive(AsRef, Clone, Debug, Display, Eq, Into, PartialEq)]
#[as_ref(str)]
pub struct Prompt(String);

impl Prompt {
    /// Renders a [`Prompt`] asking for cost guidance on the provided
    /// [`Project`].
    #[must_use]
    pub fn for_project(project: &Project) -> Self {
        let costs = &project.costs;
        Self(format!(
            "Atue como um especialista em engenharia civil e gestão de \
             custos.\n\
             Analise os dados desta obra da GP7 Distribuidora:\n\
             \n\
             Título: {title}\n\
             Descrição: {description}\n\
             Status: {status}\n\
             Empresa Contratada: {contractor} (CNPJ: {tax_id})\n\
             \n\
             Custos:\n\
             - Material: R$ {material}\n\
             - Mão-de-obra: R$ {labor}\n\
             - Equipamentos: R$ {equipment}\n\
             - TOTAL: R$ {total}\n\
             \n\
             Forneça um breve parágrafo (máximo 50 palavras) com um insight \
             sobre a proporção dos custos e se parecem adequados para o tipo \
             de obra descrito. Seja direto e profissional.",
            title = project.title,
            description = project.description,
            status = status_label(project.status),
            contractor = project.contractor.name,
            tax_id = project.contractor.tax_id,
            material = costs.material,
            labor = costs.labor,
            equipment = costs.equipment,
            total = costs.total(),
        ))
    }
}

/// Returns a human-readable `pt-BR` label of the provided [`Status`].
const fn status_label(status: Status) -> &'static str {
    match status {
        Status::Planned => "Planejado",
        Status::InProgress => "Em Andamento",
        Status::OnHold => "Pausado",
        Status::Completed => "Concluído",
    }
}

/// [`Advisor`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// No API key is configured.
    #[display("API key is not configured")]
    #[from(ignore)]
    MissingApiKey,

    /// Answer contains no text.
    #[display("Answer contains no text")]
    #[from(ignore)]
    EmptyAnswer,

    #[cfg(feature = "gemini")]
    /// HTTP exchange failed.
    #[display("HTTP request failed: {_0}")]
    Request(reqwest::Error),
}

impl Error {
    /// Returns the fixed [`Advice`] to be stored instead of the one which
    /// failed to be produced.
    #[must_use]
    pub fn fallback(&self) -> Advice {
        let text = match self {
            Self::MissingApiKey => {
                "API Key is missing. Cannot perform AI analysis."
            }
            Self::EmptyAnswer => "Não foi possível gerar a análise.",
            #[cfg(feature = "gemini")]
            Self::Request(_) => "Erro ao conectar com a IA para análise.",
        };
        Advice::from(text.to_owned())
    }
}

/// [`Advisor`] always answering with the same [`Advice`].
#[derive(Clone, Debug)]
pub struct Canned(pub Advice);

impl Advisor<Prompt> for Canned {
    type Ok = Advice;
    type Err = Traced<Error>;

    async fn execute(&self, _: Prompt) -> Result<Self::Ok, Self::Err> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod spec {
    use crate::fixture;

    use super::{Error, Prompt};

    #[test]
    fn renders_project_summary() {
        let prompt = Prompt::for_project(&fixture::project("1")).to_string();

        assert!(prompt.contains("Título: Reforma do Telhado\n"), "{prompt}");
        assert!(prompt.contains("Status: Em Andamento\n"), "{prompt}");
        assert!(
            prompt.contains(
                "Empresa Contratada: ConstruNorte Ltda \
                 (CNPJ: 12.345.678/0001-90)\n",
            ),
            "{prompt}",
        );
        assert!(prompt.contains("- Material: R$ 45000\n"), "{prompt}");
        assert!(prompt.contains("- TOTAL: R$ 70000\n"), "{prompt}");
    }

    #[test]
    fn fallbacks() {
        assert_eq!(
            Error::MissingApiKey.fallback().to_string(),
            "API Key is missing. Cannot perform AI analysis.",
        );
        assert_eq!(
            Error::EmptyAnswer.fallback().to_string(),
            "Não foi possível gerar a análise.",
        );
    }
}
