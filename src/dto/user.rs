//! Read shapes for the authorization scaffolding. Nothing serves these yet.

use serde::Serialize;

use super::audit::AuditDto;
use crate::models::{Permission, Role, Tenant, User};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionDto {
    pub id: i32,
    pub name: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl From<&Permission> for PermissionDto {
    fn from(p: &Permission) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            display_name: p.display_name.clone(),
            description: p.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDto {
    pub id: i32,
    #[serde(flatten)]
    pub audit: AuditDto,
    pub name: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub is_static: bool,
    pub is_default: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<PermissionDto>,
}

impl RoleDto {
    pub fn new(role: &Role, permissions: &[Permission]) -> Self {
        Self {
            id: role.id,
            audit: AuditDto::from(&role.audit),
            name: role.name.clone(),
            display_name: role.display_name.clone(),
            description: role.description.clone(),
            is_static: role.is_static,
            is_default: role.is_default,
            permissions: permissions.iter().map(PermissionDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    #[serde(flatten)]
    pub audit: AuditDto,
    pub username: String,
    pub email: String,
    pub name: String,
    pub surname: String,
    pub full_name: String,
    pub is_active: bool,
    pub email_confirmed: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone_number: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<RoleDto>,
}

impl UserDto {
    pub fn new(user: &User, roles: Vec<RoleDto>) -> Self {
        Self {
            id: user.id,
            audit: AuditDto::from(&user.audit),
            username: user.username.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            surname: user.surname.clone(),
            full_name: user.full_name(),
            is_active: user.is_active,
            email_confirmed: user.email_confirmed,
            phone_number: user.phone_number.clone(),
            roles,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantDto {
    pub id: i32,
    #[serde(flatten)]
    pub audit: AuditDto,
    pub tenancy_name: String,
    pub name: String,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition_id: Option<i32>,
}

impl From<&Tenant> for TenantDto {
    fn from(t: &Tenant) -> Self {
        Self {
            id: t.id,
            audit: AuditDto::from(&t.audit),
            tenancy_name: t.tenancy_name.clone(),
            name: t.name.clone(),
            is_active: t.is_active,
            edition_id: t.edition_id,
        }
    }
}
