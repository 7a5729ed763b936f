//! Wire-facing representations and their mappings to and from the models.

pub mod audit;
pub mod ocr_project;
pub mod project;
pub mod user;

use serde::{Deserialize, Serialize};

pub use audit::AuditDto;
pub use ocr_project::OcrProjectDto;
pub use project::{CreateProjectDto, ProjectDto, ProjectListQuery, ProjectListRequest, UpdateProjectDto};
pub use user::{PermissionDto, RoleDto, TenantDto, UserDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    pub total_count: i64,
    pub items: Vec<T>,
}

/// One rejected request field, reported in the `details` of a validation error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}
