use chrono::{DateTime, Utc};

use super::audit::AuditInfo;

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub tenant_id: Option<i32>,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub surname: String,
    pub is_active: bool,
    pub email_confirmed: bool,
    pub phone_number: String,
    pub phone_number_confirmed: bool,
    pub lockout_enabled: bool,
    pub lockout_end_date: Option<DateTime<Utc>>,
    pub access_failed_count: i32,
    #[sqlx(flatten)]
    pub audit: AuditInfo,
}

impl User {
    pub fn full_name(&self) -> String {
        if self.surname.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, self.surname)
        }
    }
}
