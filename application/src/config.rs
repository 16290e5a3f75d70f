//! [`Config`]-related definitions.

use std::time;

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use derive_more::{Debug, Display, Error};
use itertools::Itertools as _;
use serde::Deserialize;
use service::{domain, infra::advisor::gemini};
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Server configuration.
    pub server: Server,

    /// Service configuration.
    pub service: Service,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Server configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Server {
    /// Host to bind the server to.
    #[default("0.0.0.0".to_owned())]
    pub host: String,

    /// Port to bind the server to.
    #[default(8080)]
    pub port: u16,

    /// [CORS] configuration.
    ///
    /// [CORS]: https://developer.mozilla.org/en-US/docs/Web/HTTP/CORS
    pub cors: Cors,
}

/// [CORS] configuration.
///
/// [CORS]: https://developer.mozilla.org/en-US/docs/Web/HTTP/CORS
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Cors {
    /// List of allowed origins.
    #[default(vec!["*".to_owned()])]
    pub origins: Vec<String>,
}

/// Service configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Service {
    /// Reference list of the company [`Unit`]s.
    #[default(Unit::defaults())]
    pub units: Vec<Unit>,

    /// Indicator whether the store should be seeded with the demo projects on
    /// startup.
    pub demo: bool,

    /// Advisor configuration.
    pub advisor: Advisor,
}

impl TryFrom<Service> for service::Config {
    type Error = DuplicateUnitId;

    fn try_from(value: Service) -> Result<Self, Self::Error> {
        if let Some(id) = value.units.iter().map(|u| &u.id).duplicates().next()
        {
            return Err(DuplicateUnitId(id.clone()));
        }
        Ok(Self {
            units: value.units.into_iter().map(Into::into).collect(),
        })
    }
}

/// Error of the same ID being configured for multiple [`Unit`]s.
#[derive(Clone, Debug, Display, Error)]
#[display("`Unit(id: {_0})` is configured more than once")]
pub struct DuplicateUnitId(#[error(not(source))] pub String);

/// Company site configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct Unit {
    /// ID of the site.
    pub id: String,

    /// Display name of the site.
    pub name: String,

    /// City the site is located in.
    pub city: String,

    /// State the site is located in.
    pub state: String,

    /// Geographical coordinates of the site, if known.
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

impl Unit {
    /// Returns the sites of the company known out of the box.
    fn defaults() -> Vec<Self> {
        [
            ("1", "Capanema", "PA"),
            ("2", "Paragominas", "PA"),
            ("3", "Marabá", "PA"),
            ("4", "Jequié", "BA"),
            ("5", "Eunápolis", "BA"),
            ("6", "Teixeira de Freitas", "BA"),
            ("7", "Itapetinga", "BA"),
            ("8", "Porto Seguro", "BA"),
            ("9", "Rio Branco", "AC"),
        ]
        .into_iter()
        .map(|(id, city, state)| Self {
            id: id.to_owned(),
            name: format!("Unidade {city}"),
            city: city.to_owned(),
            state: state.to_owned(),
            coordinates: None,
        })
        .collect()
    }
}

impl From<Unit> for domain::Unit {
    fn from(value: Unit) -> Self {
        let Unit {
            id,
            name,
            city,
            state,
            coordinates,
        } = value;

        Self {
            id: id.into(),
            name: name.into(),
            city: city.into(),
            state: state.into(),
            coordinates: coordinates.map(|c| domain::unit::Coordinates {
                latitude: c.latitude,
                longitude: c.longitude,
            }),
        }
    }
}

/// Geographical coordinates of a company site.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees.
    pub latitude: f64,

    /// Longitude in degrees.
    pub longitude: f64,
}

/// Advisor configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Advisor {
    /// API key of the [Gemini] API.
    ///
    /// Advisor answers with a fallback text if it's not provided.
    ///
    /// [Gemini]: https://ai.google.dev/gemini-api/docs
    #[debug(skip)]
    pub api_key: Option<String>,

    /// Name of the model to ask.
    #[default("gemini-2.5-flash".to_owned())]
    pub model: String,

    /// Base URL of the [Gemini] API.
    ///
    /// [Gemini]: https://ai.google.dev/gemini-api/docs
    #[default("https://generativelanguage.googleapis.com/v1beta".to_owned())]
    pub endpoint: String,

    /// Timeout of a single request to the [Gemini] API.
    ///
    /// [Gemini]: https://ai.google.dev/gemini-api/docs
    #[default(time::Duration::from_secs(30))]
    #[serde(with = "humantime_serde")]
    pub timeout: time::Duration,
}

impl From<Advisor> for gemini::Config {
    fn from(value: Advisor) -> Self {
        let Advisor {
            api_key,
            model,
            endpoint,
            timeout,
        } = value;

        Self {
            api_key: api_key
                .filter(|key| !key.is_empty())
                .map(secrecy::SecretString::from),
            model,
            endpoint,
            timeout,
        }
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use service::infra::advisor::gemini;

    use super::{Advisor, Service};

    #[test]
    fn defaults_to_reference_units() {
        let config = service::Config::try_from(Service::default()).unwrap();

        assert_eq!(config.units.len(), 9);
        assert_eq!(config.units[2].id.to_string(), "3");
        assert_eq!(config.units[2].name.to_string(), "Unidade Marabá");
        assert_eq!(config.units[8].state.to_string(), "AC");
    }

    #[test]
    fn rejects_duplicate_unit_ids() {
        let mut config = Service::default();
        let mut duplicate = config.units[1].clone();
        duplicate.name = "Unidade Paragominas II".to_owned();
        config.units.push(duplicate);

        let err = service::Config::try_from(config).unwrap_err();

        assert_eq!(err.0, "2");
    }

    #[test]
    fn empty_api_key_is_absent() {
        let config = gemini::Config::from(Advisor {
            api_key: Some(String::new()),
            ..Advisor::default()
        });
        assert!(config.api_key.is_none());

        let config = gemini::Config::from(Advisor {
            api_key: Some("key".to_owned()),
            ..Advisor::default()
        });
        assert!(config.api_key.is_some());
    }

    #[test]
    fn hides_api_key() {
        let advisor = Advisor {
            api_key: Some("very-secret".to_owned()),
            ..Advisor::default()
        };

        assert!(!format!("{advisor:?}").contains("very-secret"));
    }
}
