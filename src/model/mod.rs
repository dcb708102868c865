mod chain;
mod dashboard;
mod safe_app;

pub use chain::*;
pub use dashboard::*;
pub use safe_app::*;

use std::{
    fmt::Display,
    io::{self, ErrorKind},
};

/// Reasons a `dashboard.yaml` cannot be turned into a [`Dashboard`].
#[derive(Debug)]
pub enum Error {
    Syntax(serde_yaml::Error),
    /// Two catalog entries share a URL, so share links cannot tell them apart.
    DuplicateAppUrl(String),
}

impl From<serde_yaml::Error> for Error {
    fn from(value: serde_yaml::Error) -> Self {
        Self::Syntax(value)
    }
}

impl From<Error> for io::Error {
    fn from(value: Error) -> Self {
        io::Error::new(ErrorKind::InvalidData, value.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Syntax(err) => write!(f, "dashboard config is not valid: {err}"),
            Error::DuplicateAppUrl(url) => write!(f, "dashboard config lists {url} more than once"),
        }
    }
}

impl std::error::Error for Error {}
