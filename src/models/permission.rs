use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Permission {
    pub id: i32,
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub const PAGES_USERS: &str = "Pages.Users";
pub const PAGES_ROLES: &str = "Pages.Roles";
pub const PAGES_PROJECTS: &str = "Pages.Projects";
pub const PAGES_OCR_PROJECTS: &str = "Pages.OcrProjects";
pub const PAGES_TENANTS: &str = "Pages.Tenants";

pub const USERS_CREATE: &str = "Pages.Users.Create";
pub const USERS_EDIT: &str = "Pages.Users.Edit";
pub const USERS_DELETE: &str = "Pages.Users.Delete";

pub const ROLES_CREATE: &str = "Pages.Roles.Create";
pub const ROLES_EDIT: &str = "Pages.Roles.Edit";
pub const ROLES_DELETE: &str = "Pages.Roles.Delete";

pub const PROJECTS_CREATE: &str = "Pages.Projects.Create";
pub const PROJECTS_EDIT: &str = "Pages.Projects.Edit";
pub const PROJECTS_DELETE: &str = "Pages.Projects.Delete";

/// Built-in permissions as `(name, display name, description)`.
pub const BUILT_IN: [(&str, &str, &str); 14] = [
    (PAGES_USERS, "Users", "Access to users page"),
    (PAGES_ROLES, "Roles", "Access to roles page"),
    (PAGES_PROJECTS, "Projects", "Access to projects page"),
    (PAGES_OCR_PROJECTS, "OCR Projects", "Access to OCR projects page"),
    (PAGES_TENANTS, "Tenants", "Access to tenants page"),
    (USERS_CREATE, "Create User", "Can create users"),
    (USERS_EDIT, "Edit User", "Can edit users"),
    (USERS_DELETE, "Delete User", "Can delete users"),
    (ROLES_CREATE, "Create Role", "Can create roles"),
    (ROLES_EDIT, "Edit Role", "Can edit roles"),
    (ROLES_DELETE, "Delete Role", "Can delete roles"),
    (PROJECTS_CREATE, "Create Project", "Can create projects"),
    (PROJECTS_EDIT, "Edit Project", "Can edit projects"),
    (PROJECTS_DELETE, "Delete Project", "Can delete projects"),
];
