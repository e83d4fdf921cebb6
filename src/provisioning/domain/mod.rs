/// Request and response types exchanged with the InfraBot service
pub mod component;
pub mod mode;
pub mod project;
pub mod reply;

pub use component::{
    ComponentCreateRequest, ComponentCreateResponse, CreateComponentPayload, FixedError,
    DEFAULT_COMPONENT_NAME, DEFAULT_MAX_ATTEMPTS, DEFAULT_MODEL,
};
pub use mode::BackendMode;
pub use project::{
    InitProjectPayload, ProjectInitRequest, ProjectInitResponse, ProjectListQuery,
    ProjectListResponse, DEFAULT_PARENT_DIR,
};
pub use reply::RelayReply;
