use crate::provisioning::domain::{
    ComponentCreateRequest, CreateComponentPayload, InitProjectPayload, ProjectInitRequest,
    DEFAULT_COMPONENT_NAME, DEFAULT_MAX_ATTEMPTS, DEFAULT_MODEL,
};
use crate::shared::{RelayError, RelayResult};
use serde_json::Value;

/// RequestValidator - checks required fields and fills in defaults
///
/// Only presence is validated. Paths, model names and counts are passed
/// through to the InfraBot service without interpretation, whatever their
/// JSON type.
pub struct RequestValidator;

impl RequestValidator {
    /// Validates an init payload.
    ///
    /// # Errors
    /// Returns `RelayError::MissingField` when `workdir` is absent or empty.
    pub fn init_request(payload: InitProjectPayload) -> RelayResult<ProjectInitRequest> {
        let workdir = Self::require(payload.workdir, "workdir")?;

        Ok(ProjectInitRequest {
            workdir,
            verbose: payload.verbose.unwrap_or(Value::Bool(false)),
            local: payload.local.unwrap_or(Value::Bool(false)),
        })
    }

    /// Validates a component creation payload, checking `prompt` before `workdir`.
    ///
    /// # Errors
    /// Returns `RelayError::MissingField` naming the first missing field.
    pub fn component_request(
        payload: CreateComponentPayload,
    ) -> RelayResult<ComponentCreateRequest> {
        let prompt = Self::require(payload.prompt, "prompt")?;
        let workdir = Self::require(payload.workdir, "workdir")?;

        Ok(ComponentCreateRequest {
            prompt,
            name: payload
                .name
                .unwrap_or_else(|| Value::from(DEFAULT_COMPONENT_NAME)),
            model: payload.model.unwrap_or_else(|| Value::from(DEFAULT_MODEL)),
            self_healing: payload.self_healing.unwrap_or(Value::Bool(false)),
            max_attempts: payload
                .max_attempts
                .unwrap_or_else(|| Value::from(DEFAULT_MAX_ATTEMPTS)),
            keep_on_failure: payload.keep_on_failure.unwrap_or(Value::Bool(false)),
            langfuse_session_id: payload.langfuse_session_id.unwrap_or(Value::Null),
            workdir,
        })
    }

    fn require(value: Option<String>, field: &'static str) -> RelayResult<String> {
        match value {
            Some(v) if !v.is_empty() => Ok(v),
            _ => Err(RelayError::missing(field)),
        }
    }
}
