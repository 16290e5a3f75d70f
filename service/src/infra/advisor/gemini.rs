//! [Gemini] [`Advisor`] implementation.
//!
//! [Gemini]: https://ai.google.dev/gemini-api/docs

use std::{sync::Arc, time::Duration};

use derive_more::Debug;
use secrecy::{ExposeSecret as _, SecretString};
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use tracerr::Traced;

use crate::{
    domain::project::Advice,
    infra::advisor::{self, Advisor, Prompt},
};

/// [`Gemini`] configuration.
#[derive(Debug, SmartDefault)]
pub struct Config {
    /// API key to authorize requests with.
    ///
    /// Every request fails with [`advisor::Error::MissingApiKey`] without it.
    pub api_key: Option<SecretString>,

    /// Name of the model generating the text.
    #[default("gemini-2.5-flash".into())]
    pub model: String,

    /// Base URL of the API.
    #[default("https://generativelanguage.googleapis.com/v1beta".into())]
    pub endpoint: String,

    /// Timeout of a single request.
    #[default(Duration::from_secs(30))]
    pub timeout: Duration,
}

/// [`Advisor`] asking a [Gemini] model for advisory text.
///
/// [Gemini]: https://ai.google.dev/gemini-api/docs
#[derive(Clone, Debug)]
pub struct Gemini {
    /// HTTP client to perform requests with.
    #[debug(skip)]
    client: reqwest::Client,

    /// [`Config`] of this [`Gemini`].
    config: Arc<Config>,
}

impl Gemini {
    /// Creates a new [`Gemini`] [`Advisor`] with the provided [`Config`].
    ///
    /// # Errors
    ///
    /// If failed to build an HTTP client.
    pub fn new(config: Config) -> Result<Self, Traced<advisor::Error>> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(tracerr::from_and_wrap!(=> advisor::Error))?;
        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Returns the URL of the text generation method.
    fn url(&self) -> String {
        let Config {
            endpoint, model, ..
        } = &*self.config;
        let endpoint = endpoint.trim_end_matches('/');
        format!("{endpoint}/models/{model}:generateContent")
    }
}

impl Advisor<Prompt> for Gemini {
    type Ok = Advice;
    type Err = Traced<advisor::Error>;

    async fn execute(&self, prompt: Prompt) -> Result<Self::Ok, Self::Err> {
        use advisor::Error as E;

        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| tracerr::new!(E::MissingApiKey))?;

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", api_key.expose_secret())
            .json(&Request::new(prompt))
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(tracerr::from_and_wrap!(=> E))?
            .json::<Response>()
            .await
            .map_err(tracerr::from_and_wrap!(=> E))?;

        response
            .text()
            .map(Advice::from)
            .ok_or_else(|| tracerr::new!(E::EmptyAnswer))
    }
}

/// Body of a `generateContent` request.
#[derive(Debug, Serialize)]
struct Request {
    /// Conversation turns. A single user turn here.
    contents: [Content; 1],
}

impl Request {
    /// Creates a new single-turn [`Request`] out of the provided [`Prompt`].
    fn new(prompt: Prompt) -> Self {
        Self {
            contents: [Content {
                parts: vec![Part {
                    text: Some(prompt.into()),
                }],
            }],
        }
    }
}

/// Body of a `generateContent` response.
#[derive(Debug, Deserialize)]
struct Response {
    /// Generated answer variants.
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl Response {
    /// Returns the whole text of the first [`Candidate`], if it has any.
    fn text(self) -> Option<String> {
        let text = self
            .candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .filter_map(|p| p.text)
            .collect::<String>();
        (!text.is_empty()).then_some(text)
    }
}

/// Single answer variant in a [`Response`].
#[derive(Debug, Deserialize)]
struct Candidate {
    /// [`Content`] of this [`Candidate`].
    content: Option<Content>,
}

/// Content of a conversation turn.
#[derive(Debug, Deserialize, Serialize)]
struct Content {
    /// [`Part`]s of this [`Content`].
    #[serde(default)]
    parts: Vec<Part>,
}

/// Part of a [`Content`].
#[derive(Debug, Deserialize, Serialize)]
struct Part {
    /// Text of this [`Part`], if it's a textual one.
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}
