use super::audit::AuditInfo;

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Tenant {
    pub id: i32,
    pub tenancy_name: String,
    pub name: String,
    pub connection_string: String,
    pub is_active: bool,
    pub edition_id: Option<i32>,
    #[sqlx(flatten)]
    pub audit: AuditInfo,
}
