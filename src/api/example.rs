use chrono::{DateTime, SecondsFormat, Utc};

use crate::foundation::error::WhisperResult;

pub const EXAMPLE_MESSAGE: &str = "Hello from the API route!";
pub const EXAMPLE_INFO: &str = "This API route can be connected to any backend service";
pub const SERVICE_STATUS: &str = "ready to configure";
pub const SERVICES: [&str; 3] = ["Python Backend", "Go Microservice", "Database"];
pub const FETCH_FAILED: &str = "Failed to fetch data";

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ServiceStatus {
    pub name: String,
    pub status: String,
}

/// Body of `GET /api/example`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExampleResponse {
    pub message: String,
    /// RFC 3339 UTC timestamp with millisecond precision.
    pub timestamp: String,
    pub info: String,
    pub services: Vec<ServiceStatus>,
}

impl ExampleResponse {
    /// The mock document stamped with `now`.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            message: EXAMPLE_MESSAGE.to_owned(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            info: EXAMPLE_INFO.to_owned(),
            services: SERVICES
                .iter()
                .map(|name| ServiceStatus {
                    name: (*name).to_owned(),
                    status: SERVICE_STATUS.to_owned(),
                })
                .collect(),
        }
    }
}

/// Structured fallback returned when fetching fails.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: FETCH_FAILED.to_owned(),
            message: message.into(),
        }
    }
}

/// Either the document or the fallback. Serializes as whichever object it holds.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum FetchOutcome {
    Data(ExampleResponse),
    Failed(ApiError),
}

impl FetchOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Data(_))
    }

    pub fn to_json_pretty(&self) -> WhisperResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Where the example document comes from.
pub trait ExampleSource {
    fn get(&self) -> WhisperResult<ExampleResponse>;
}

/// The in-process route: always answers with the mock document, no side effects.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalRoute;

impl ExampleSource for LocalRoute {
    fn get(&self) -> WhisperResult<ExampleResponse> {
        Ok(ExampleResponse::at(Utc::now()))
    }
}

/// Fetch the example document, mapping any failure into an [`ApiError`].
pub fn fetch_example(source: &dyn ExampleSource) -> FetchOutcome {
    match source.get() {
        Ok(doc) => FetchOutcome::Data(doc),
        Err(e) => {
            tracing::error!(error = %e, "fetching example data failed");
            FetchOutcome::Failed(ApiError::new(e.to_string()))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/api/example.rs"]
mod tests;
