use crate::ports::outbound::InfraBackend;
use crate::provisioning::domain::{
    BackendMode, ComponentCreateRequest, ComponentCreateResponse, ProjectInitRequest,
    ProjectInitResponse, ProjectListResponse, RelayReply,
};
use crate::provisioning::services::{ComponentTemplate, PromptClassifier};
use crate::shared::RelayResult;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Project directories fabricated under the requested parent directory.
const SIMULATED_PROJECTS: [&str; 3] = ["production-infra", "staging-infra", "development-infra"];

const S3_BUCKET_CODE: &str = r#"resource "aws_s3_bucket" "example" {
  bucket = "my-example-bucket"
  tags = {
    Name = "My bucket"
    Environment = "Dev"
  }
}

resource "aws_s3_bucket_versioning" "versioning" {
  bucket = aws_s3_bucket.example.id
  versioning_configuration {
    status = "Enabled"
  }
}"#;

const EC2_INSTANCE_CODE: &str = r#"resource "aws_instance" "web" {
  ami           = "ami-0c55b159cbfafe1f0"
  instance_type = "t2.micro"
  tags = {
    Name = "WebServer"
  }
}

resource "aws_security_group" "web" {
  name        = "web-sg"
  description = "Allow web and SSH traffic"

  ingress {
    from_port   = 80
    to_port     = 80
    protocol    = "tcp"
    cidr_blocks = ["0.0.0.0/0"]
  }

  ingress {
    from_port   = 22
    to_port     = 22
    protocol    = "tcp"
    cidr_blocks = ["0.0.0.0/0"]
  }

  egress {
    from_port   = 0
    to_port     = 0
    protocol    = "-1"
    cidr_blocks = ["0.0.0.0/0"]
  }
}"#;

const TWO_RESOURCE_PLAN: &str = "2 resources to add, 0 to change, 0 to destroy";

/// SimulatedInfraBackend adapter answering without any network traffic
///
/// Used in mock mode for demos and tests. Component requests are answered
/// with canned artifacts picked by keyword; the canned content is a fixture,
/// not a contract.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedInfraBackend;

impl SimulatedInfraBackend {
    pub fn new() -> Self {
        Self
    }

    /// Builds the canned artifact for a component request
    pub fn component_for(request: &ComponentCreateRequest) -> ComponentCreateResponse {
        let name = request.component_name();
        match PromptClassifier::classify(&request.prompt) {
            ComponentTemplate::S3Bucket => canned(
                &name,
                S3_BUCKET_CODE.to_string(),
                r#"bucket_name = "my-example-bucket""#,
                TWO_RESOURCE_PLAN,
                &[
                    ("bucket_name", "my-example-bucket"),
                    ("bucket_arn", "arn:aws:s3:::my-example-bucket"),
                ],
            ),
            ComponentTemplate::Ec2Instance => canned(
                &name,
                EC2_INSTANCE_CODE.to_string(),
                "instance_type = \"t2.micro\"\nami_id = \"ami-0c55b159cbfafe1f0\"",
                TWO_RESOURCE_PLAN,
                &[
                    ("instance_id", "i-0123456789abcdef0"),
                    ("public_ip", "54.12.34.56"),
                ],
            ),
            ComponentTemplate::Placeholder => canned(
                &name,
                format!(
                    "# Terraform configuration for: {}\n# This is a placeholder, replace with actual implementation",
                    request.prompt
                ),
                "",
                "Resources to be determined",
                &[("status", "Component placeholder created")],
            ),
        }
    }

    /// Joins the parent directory with the fixed project suffixes
    pub fn projects_under(parent_dir: &str) -> Vec<String> {
        SIMULATED_PROJECTS
            .iter()
            .map(|suffix| format!("{}/{}", parent_dir, suffix))
            .collect()
    }
}

fn canned(
    name: &str,
    terraform_code: String,
    tfvars_code: &str,
    plan_summary: &str,
    outputs: &[(&str, &str)],
) -> ComponentCreateResponse {
    let outputs: Map<String, Value> = outputs
        .iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect();

    ComponentCreateResponse {
        success: true,
        error_message: Some(String::new()),
        component_name: name.to_string(),
        terraform_code,
        tfvars_code: Some(tfvars_code.to_string()),
        plan_summary: plan_summary.to_string(),
        outputs,
        formatted_outputs: None,
        self_healing_attempts: Some(0),
        fixed_errors: Some(Vec::new()),
        diagram: None,
    }
}

#[async_trait]
impl InfraBackend for SimulatedInfraBackend {
    async fn init_project(&self, request: &ProjectInitRequest) -> RelayResult<RelayReply> {
        RelayReply::from_response(&ProjectInitResponse::initialized(request.workdir.clone()))
    }

    async fn create_component(
        &self,
        request: &ComponentCreateRequest,
    ) -> RelayResult<RelayReply> {
        RelayReply::from_response(&Self::component_for(request))
    }

    async fn list_projects(&self, parent_dir: &str) -> RelayResult<RelayReply> {
        RelayReply::from_response(&ProjectListResponse::found(Self::projects_under(
            parent_dir,
        )))
    }

    fn mode(&self) -> BackendMode {
        BackendMode::Mock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_keys(response: &ComponentCreateResponse) -> Vec<&str> {
        response.outputs.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_bucket_prompt_yields_s3_artifact() {
        let request = ComponentCreateRequest::new("Create a Bucket for logs", "./p");
        let response = SimulatedInfraBackend::component_for(&request);

        assert!(response.success);
        assert_eq!(response.component_name, "main");
        assert!(response.terraform_code.contains("aws_s3_bucket"));
        assert_eq!(output_keys(&response), vec!["bucket_name", "bucket_arn"]);
    }

    #[test]
    fn test_instance_prompt_yields_ec2_artifact() {
        let request = ComponentCreateRequest::new("an INSTANCE for the web tier", "./p")
            .with_name("web");
        let response = SimulatedInfraBackend::component_for(&request);

        assert_eq!(response.component_name, "web");
        assert!(response.terraform_code.contains("aws_instance"));
        assert_eq!(output_keys(&response), vec!["instance_id", "public_ip"]);
    }

    #[test]
    fn test_unmatched_prompt_yields_placeholder() {
        let request = ComponentCreateRequest::new("a VPC with two private subnets", "./p");
        let response = SimulatedInfraBackend::component_for(&request);

        assert!(response
            .terraform_code
            .contains("a VPC with two private subnets"));
        assert_eq!(response.plan_summary, "Resources to be determined");
        assert_eq!(output_keys(&response), vec!["status"]);
    }

    #[test]
    fn test_projects_under_parent() {
        assert_eq!(
            SimulatedInfraBackend::projects_under("/data"),
            vec![
                "/data/production-infra",
                "/data/staging-infra",
                "/data/development-infra"
            ]
        );
    }

    #[tokio::test]
    async fn test_init_echoes_workdir() {
        let backend = SimulatedInfraBackend::new();
        let reply = backend
            .init_project(&ProjectInitRequest::new("./infra/demo", false, false))
            .await
            .unwrap();

        assert_eq!(reply.status, 200);
        assert_eq!(reply.body["success"], true);
        assert_eq!(reply.body["message"], "Project initialized successfully");
        assert_eq!(reply.body["workdir"], "./infra/demo");
    }

    #[tokio::test]
    async fn test_list_reply_message() {
        let reply = SimulatedInfraBackend::new()
            .list_projects(".")
            .await
            .unwrap();
        assert_eq!(reply.body["message"], "Found 3 InfraBot projects");
        assert_eq!(reply.body["projects"][0], "./production-infra");
    }
}
