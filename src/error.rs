#![warn(missing_docs)]
//! Polray specific error structures
use std::{error::Error, fmt::Display};

/// Polray specific Result type
pub type PolResult<T> = std::result::Result<T, PolrayError>;

/// Errors that can be returned by various polray functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolrayError {
    /// degenerate or non-finite geometry (segment too short, arc radius smaller than half the chord, ...)
    Geometry(String),
    /// invalid property values of an optical interface
    Interface(String),
    /// error while assembling a scene. The message names the offending interface or source.
    Scene(String),
    /// invalid source definition
    Source(String),
    /// invalid trace configuration
    Config(String),
    /// invalid polarization state (e.g. a Jones vector of zero length)
    Polarization(String),
    /// errors not falling in one of the categories above
    Other(String),
}

impl Display for PolrayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Geometry(m) => write!(f, "Geometry:{m}"),
            Self::Interface(m) => write!(f, "Interface:{m}"),
            Self::Scene(m) => write!(f, "Scene:{m}"),
            Self::Source(m) => write!(f, "Source:{m}"),
            Self::Config(m) => write!(f, "Config:{m}"),
            Self::Polarization(m) => write!(f, "Polarization:{m}"),
            Self::Other(m) => write!(f, "Polray Error:Other:{m}"),
        }
    }
}
impl Error for PolrayError {}

impl std::convert::From<String> for PolrayError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}
