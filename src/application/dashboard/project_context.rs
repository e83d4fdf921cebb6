use crate::ports::outbound::{InfrabotApi, Notice, Notifier};
use crate::provisioning::domain::{ProjectInitRequest, ProjectInitResponse};
use crate::shared::Result;
use anyhow::{anyhow, bail};
use std::sync::Arc;

/// Parent directory a fresh dashboard starts from.
pub const DEFAULT_DASHBOARD_PARENT_DIR: &str = "./";

/// ProjectContext - project selection state for one dashboard session
///
/// Holds the parent directory, the last fetched project list and the
/// selected project. Nothing is persisted; dropping the context forgets it.
pub struct ProjectContext<A, N> {
    api: Arc<A>,
    notifier: Arc<N>,
    parent_dir: String,
    projects: Vec<String>,
    current_project: Option<String>,
    is_loading: bool,
    is_initialized: bool,
    mounted: bool,
}

impl<A, N> ProjectContext<A, N>
where
    A: InfrabotApi,
    N: Notifier,
{
    pub fn new(api: Arc<A>, notifier: Arc<N>) -> Self {
        Self {
            api,
            notifier,
            parent_dir: DEFAULT_DASHBOARD_PARENT_DIR.to_string(),
            projects: Vec::new(),
            current_project: None,
            is_loading: false,
            is_initialized: false,
            mounted: false,
        }
    }

    /// Starts from `dir` instead of the default, without fetching.
    pub fn with_parent_dir(mut self, dir: impl Into<String>) -> Self {
        self.parent_dir = dir.into();
        self
    }

    pub fn parent_dir(&self) -> &str {
        &self.parent_dir
    }

    pub fn projects(&self) -> &[String] {
        &self.projects
    }

    pub fn current_project(&self) -> Option<&str> {
        self.current_project.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_initialized(&self) -> bool {
        self.is_initialized
    }

    pub fn set_current_project(&mut self, project: impl Into<String>) {
        self.current_project = Some(project.into());
    }

    /// Fetches the project list the first time the dashboard is shown.
    ///
    /// Later calls do nothing, even when the first fetch failed; refreshing
    /// after that is an explicit `fetch_projects` call.
    pub async fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        // Failures were already surfaced as a notice.
        let _ = self.fetch_projects().await;
    }

    /// Refreshes the project list from the relay.
    ///
    /// # Errors
    /// Returns an error if the relay call fails or reports `success: false`.
    /// The previous list is kept in that case.
    pub async fn fetch_projects(&mut self) -> Result<&[String]> {
        self.is_loading = true;
        let result = self.api.list_projects(&self.parent_dir).await;
        self.is_loading = false;

        let outcome = match result {
            Ok(response) if response.success => {
                self.projects = response.projects;
                self.is_initialized = true;
                Ok(())
            }
            Ok(response) => Err(anyhow!(response.message)),
            Err(e) => Err(e),
        };

        if let Err(e) = outcome {
            tracing::warn!(error = %e, "failed to fetch projects");
            self.notifier.notify(
                Notice::destructive("Failed to fetch projects")
                    .with_description("Please check the parent directory and try again"),
            );
            return Err(e);
        }

        Ok(&self.projects)
    }

    /// Points the dashboard at another parent directory and refetches.
    ///
    /// # Errors
    /// Returns an error for a blank directory (no fetch happens) or when the
    /// refetch fails.
    pub async fn set_parent_dir(&mut self, dir: &str) -> Result<()> {
        if dir.trim().is_empty() {
            self.notifier
                .notify(Notice::destructive("Please enter a valid directory path"));
            bail!("Parent directory is required");
        }

        self.parent_dir = dir.to_string();
        self.fetch_projects().await?;
        self.notifier.notify(
            Notice::info("Parent directory updated")
                .with_description(format!("Directory set to: {}", dir)),
        );
        Ok(())
    }

    /// Creates `<parent_dir>/<name>`, refreshes the list and selects it.
    ///
    /// # Errors
    /// Returns an error for a blank name (no network call happens), or when
    /// the relay call fails or reports `success: false`.
    pub async fn init_project(&mut self, name: &str) -> Result<ProjectInitResponse> {
        if name.trim().is_empty() {
            self.notifier
                .notify(Notice::destructive("Please enter a project name"));
            bail!("Project name is required");
        }

        let request = ProjectInitRequest::new(self.project_workdir(name), true, false);

        self.is_loading = true;
        let result = self.api.init_project(&request).await;
        self.is_loading = false;

        let response = match result {
            Ok(response) if response.success => response,
            Ok(response) => return Err(self.init_failed(anyhow!(response.message))),
            Err(e) => return Err(self.init_failed(e)),
        };

        self.notifier.notify(
            Notice::info("Project created")
                .with_description(format!("{} has been initialized successfully", name)),
        );

        // The new project is selected even if the refresh fails.
        let _ = self.fetch_projects().await;
        self.current_project = Some(response.workdir.clone());

        Ok(response)
    }

    fn project_workdir(&self, name: &str) -> String {
        format!("{}/{}", self.parent_dir.trim_end_matches('/'), name)
    }

    fn init_failed(&self, error: anyhow::Error) -> anyhow::Error {
        tracing::warn!(error = %error, "failed to initialize project");
        self.notifier.notify(
            Notice::destructive("Failed to create project")
                .with_description("Please try again with a different name"),
        );
        error
    }
}
