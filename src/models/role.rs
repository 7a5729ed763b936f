use super::audit::AuditInfo;

pub const ADMIN_ROLE_NAME: &str = "Admin";
pub const USER_ROLE_NAME: &str = "User";

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Role {
    pub id: i32,
    pub tenant_id: Option<i32>,
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub is_static: bool,
    pub is_default: bool,
    #[sqlx(flatten)]
    pub audit: AuditInfo,
}
