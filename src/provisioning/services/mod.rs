/// Stateless domain services
mod prompt_classifier;
mod request_validator;

pub use prompt_classifier::{ComponentTemplate, PromptClassifier};
pub use request_validator::RequestValidator;
