use serde::Deserialize;
use std::fmt;

/// How the relay answers requests: by calling the InfraBot service, or by
/// synthesizing canned responses without any network traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendMode {
    #[default]
    Live,
    Mock,
}

impl std::str::FromStr for BackendMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "live" => Ok(BackendMode::Live),
            "mock" => Ok(BackendMode::Mock),
            _ => Err(format!(
                "Invalid mode: {}. Please specify 'live' or 'mock'",
                s
            )),
        }
    }
}

impl fmt::Display for BackendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendMode::Live => write!(f, "live"),
            BackendMode::Mock => write!(f, "mock"),
        }
    }
}
