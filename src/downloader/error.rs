extern crate reqwest;

use reqwest::StatusCode;
use std::{error::Error as StdError, fmt, result::Result as StdResult};

const BODY_EXCERPT: usize = 300;

#[derive(Debug)]
pub struct Error(Box<Inner>);
#[derive(Debug)]
pub(crate) enum Kind {
    Builder(reqwest::Error),
    Network(reqwest::Error),
    Status {
        status: StatusCode,
        url: String,
        body: String,
    },
    Auth,
    Schema,
    Config,
}
#[derive(Debug)]
struct Inner {
    kind: Kind,
    description: Option<String>,
}

pub type Result<T> = StdResult<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.kind {
            Kind::Builder(err) => write!(f, "Error building client: {}", err),
            Kind::Network(err) => write!(f, "Error sending request: {}", err),
            Kind::Status { status, url, body } => write!(
                f,
                "Request to {} returned status {} with body: {}",
                url,
                status,
                excerpt(body)
            ),
            Kind::Auth => {
                write!(f, "Authentication failed")?;
                self.write_description(f)
            }
            Kind::Schema => {
                write!(f, "Expected response field absent")?;
                self.write_description(f)
            }
            Kind::Config => {
                write!(f, "Invalid configuration")?;
                self.write_description(f)
            }
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.0.kind {
            Kind::Builder(err) | Kind::Network(err) => Some(err),
            Kind::Status { .. } | Kind::Auth | Kind::Schema | Kind::Config => None,
        }
    }
}
impl Error {
    fn new(inner: Inner) -> Self {
        Self(Box::new(inner))
    }
    pub(crate) fn with_kind(kind: Kind) -> Self {
        Self::new(Inner {
            kind,
            description: None,
        })
    }
    pub(crate) fn with_description<T: Into<String>>(kind: Kind, description: T) -> Self {
        Self::new(Inner {
            kind,
            description: Some(description.into()),
        })
    }
    fn write_description(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(d) = &self.0.description {
            write!(f, ": {}", d)
        } else {
            Ok(())
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self.0.kind, Kind::Auth)
    }
    pub fn is_schema(&self) -> bool {
        matches!(self.0.kind, Kind::Schema)
    }
    pub fn status(&self) -> Option<StatusCode> {
        match &self.0.kind {
            Kind::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Error::with_kind(Kind::Builder(err))
        } else if err.is_decode() {
            Error::with_description(Kind::Schema, err.to_string())
        } else {
            Error::with_kind(Kind::Network(err))
        }
    }
}

fn excerpt(body: &str) -> &str {
    match body.char_indices().nth(BODY_EXCERPT) {
        Some((pos, _)) => &body[..pos],
        None => body,
    }
}

/// Explicit presence check for an optional decoded field; `None` becomes a
/// schema error naming the field path.
pub(crate) fn field<T>(value: Option<T>, path: &'static str) -> Result<T> {
    value.ok_or_else(|| schema_error(path))
}

pub(crate) fn auth_error<T: Into<String>>(description: T) -> Error {
    Error::with_description(Kind::Auth, description)
}
pub(crate) fn schema_error(path: &str) -> Error {
    Error::with_description(Kind::Schema, path)
}
pub(crate) fn config_error<T: Into<String>>(description: T) -> Error {
    Error::with_description(Kind::Config, description)
}
pub(crate) fn status_error(status: StatusCode, url: String, body: String) -> Error {
    Error::with_kind(Kind::Status { status, url, body })
}
