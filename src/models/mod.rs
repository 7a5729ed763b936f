pub mod audit;
pub mod ocr_project;
pub mod permission;
pub mod project;
pub mod role;
pub mod tenant;
pub mod user;

pub use audit::AuditInfo;
pub use ocr_project::{NewOcrProject, OcrProject, OcrProjectType};
pub use permission::Permission;
pub use project::{Project, ProjectDetails};
pub use role::Role;
pub use tenant::Tenant;
pub use user::User;
