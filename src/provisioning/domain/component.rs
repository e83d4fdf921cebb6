use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_COMPONENT_NAME: &str = "main";
pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Body of `POST /api/component/create` as received from the caller.
///
/// Tuning parameters are kept as raw JSON so they reach the InfraBot service
/// exactly as sent; an explicit `null` reads as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateComponentPayload {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub model: Option<Value>,
    #[serde(default)]
    pub self_healing: Option<Value>,
    #[serde(default)]
    pub max_attempts: Option<Value>,
    #[serde(default)]
    pub keep_on_failure: Option<Value>,
    #[serde(default)]
    pub langfuse_session_id: Option<Value>,
    #[serde(default)]
    pub workdir: Option<String>,
}

/// Validated component creation request with every tuning parameter resolved.
///
/// Serialized verbatim as the upstream request body, so `langfuse_session_id`
/// is sent as `null` rather than omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentCreateRequest {
    pub prompt: String,
    pub name: Value,
    pub model: Value,
    pub self_healing: Value,
    pub max_attempts: Value,
    pub keep_on_failure: Value,
    pub langfuse_session_id: Value,
    pub workdir: String,
}

impl ComponentCreateRequest {
    /// Request with default tuning parameters.
    pub fn new(prompt: impl Into<String>, workdir: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            name: Value::from(DEFAULT_COMPONENT_NAME),
            model: Value::from(DEFAULT_MODEL),
            self_healing: Value::Bool(false),
            max_attempts: Value::from(DEFAULT_MAX_ATTEMPTS),
            keep_on_failure: Value::Bool(false),
            langfuse_session_id: Value::Null,
            workdir: workdir.into(),
        }
    }

    pub fn with_self_healing(mut self, enabled: bool) -> Self {
        self.self_healing = Value::Bool(enabled);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Value::String(name.into());
        self
    }

    /// The requested component name as text; non-string names are rendered as JSON.
    pub fn component_name(&self) -> String {
        match &self.name {
            Value::String(name) => name.clone(),
            other => other.to_string(),
        }
    }
}

/// An error the upstream service fixed during a self-healing attempt.
///
/// The service reports either a structured record or a bare description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FixedError {
    Attempt { attempt: u32, error: String },
    Description(String),
}

impl FixedError {
    pub fn description(&self) -> &str {
        match self {
            FixedError::Attempt { error, .. } => error,
            FixedError::Description(text) => text,
        }
    }
}

/// Generated component artifacts returned by the InfraBot service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentCreateResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default)]
    pub component_name: String,
    #[serde(default)]
    pub terraform_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tfvars_code: Option<String>,
    #[serde(default)]
    pub plan_summary: String,
    /// Output name to value, in the order the service produced them.
    #[serde(default)]
    pub outputs: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_outputs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_healing_attempts: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_errors: Option<Vec<FixedError>>,
    /// Base64-encoded diagram image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagram: Option<String>,
}

impl ComponentCreateResponse {
    /// Synthesized result for a creation that never produced artifacts.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error_message: Some(message.into()),
            component_name: String::new(),
            terraform_code: String::new(),
            tfvars_code: None,
            plan_summary: String::new(),
            outputs: Map::new(),
            formatted_outputs: None,
            self_healing_attempts: None,
            fixed_errors: None,
            diagram: None,
        }
    }

    pub fn has_diagram(&self) -> bool {
        self.diagram.as_deref().is_some_and(|d| !d.is_empty())
    }
}
