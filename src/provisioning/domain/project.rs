use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parent directory used when a project listing names none.
pub const DEFAULT_PARENT_DIR: &str = ".";

/// Body of `POST /api/init` as received from the caller.
///
/// Every field is optional here so that a missing `workdir` can be reported
/// as a validation error instead of a deserialization failure. The flags are
/// raw JSON and reach the InfraBot service untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InitProjectPayload {
    #[serde(default)]
    pub workdir: Option<String>,
    #[serde(default)]
    pub verbose: Option<Value>,
    #[serde(default)]
    pub local: Option<Value>,
}

/// Validated project initialization request, forwarded upstream as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInitRequest {
    pub workdir: String,
    pub verbose: Value,
    pub local: Value,
}

impl ProjectInitRequest {
    pub fn new(workdir: impl Into<String>, verbose: bool, local: bool) -> Self {
        Self {
            workdir: workdir.into(),
            verbose: Value::Bool(verbose),
            local: Value::Bool(local),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInitResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub workdir: String,
}

impl ProjectInitResponse {
    pub fn initialized(workdir: impl Into<String>) -> Self {
        Self {
            success: true,
            message: "Project initialized successfully".to_string(),
            workdir: workdir.into(),
        }
    }
}

/// Query string of `GET /api/projects`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectListQuery {
    #[serde(default)]
    pub parent_dir: Option<String>,
}

impl ProjectListQuery {
    /// Resolves the parent directory, falling back to `.` when absent or empty.
    pub fn parent_dir(&self) -> &str {
        match self.parent_dir.as_deref() {
            Some(dir) if !dir.is_empty() => dir,
            _ => DEFAULT_PARENT_DIR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectListResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub projects: Vec<String>,
}

impl ProjectListResponse {
    pub fn found(projects: Vec<String>) -> Self {
        Self {
            success: true,
            message: format!("Found {} InfraBot projects", projects.len()),
            projects,
        }
    }
}
