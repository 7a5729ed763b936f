use chrono::{DateTime, Utc};

/// Creation, modification and deletion metadata shared by every audited row.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct AuditInfo {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub creator_user_id: Option<i32>,
    pub last_modifier_id: Option<i32>,
    pub deleter_user_id: Option<i32>,
    pub deletion_time: Option<DateTime<Utc>>,
    pub is_deleted: bool,
}

impl AuditInfo {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            created_at: now,
            updated_at: now,
            creator_user_id: None,
            last_modifier_id: None,
            deleter_user_id: None,
            deletion_time: None,
            is_deleted: false,
        }
    }

    /// Returns the audit state after a soft delete by `acting_user_id` at `now`.
    /// The receiver is left untouched.
    pub fn soft_deleted(&self, acting_user_id: i32, now: DateTime<Utc>) -> Self {
        Self {
            deleter_user_id: Some(acting_user_id),
            deletion_time: Some(now),
            is_deleted: true,
            ..self.clone()
        }
    }
}
