use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::AuditInfo;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditDto {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_user_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modifier_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleter_user_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletion_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_deleted: bool,
}

impl From<&AuditInfo> for AuditDto {
    fn from(audit: &AuditInfo) -> Self {
        Self {
            created_at: audit.created_at,
            updated_at: audit.updated_at,
            creator_user_id: audit.creator_user_id,
            last_modifier_id: audit.last_modifier_id,
            deleter_user_id: audit.deleter_user_id,
            deletion_time: audit.deletion_time,
            is_deleted: audit.is_deleted,
        }
    }
}

impl From<AuditDto> for AuditInfo {
    fn from(dto: AuditDto) -> Self {
        Self {
            created_at: dto.created_at,
            updated_at: dto.updated_at,
            creator_user_id: dto.creator_user_id,
            last_modifier_id: dto.last_modifier_id,
            deleter_user_id: dto.deleter_user_id,
            deletion_time: dto.deletion_time,
            is_deleted: dto.is_deleted,
        }
    }
}
