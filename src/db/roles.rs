use crate::models::Role;

/// Inserts the role unless one with the same name exists. Returns the new
/// row, or `None` if it was already there.
pub async fn insert_if_missing<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    name: &str,
    display_name: &str,
    description: &str,
    is_static: bool,
    is_default: bool,
) -> Result<Option<Role>, sqlx::Error> {
    sqlx::query_as::<_, Role>(
        "INSERT INTO roles (name, display_name, description, is_static, is_default)
         VALUES ($1, $2, $3, $4, $5)
         ON CONFLICT (name) DO NOTHING RETURNING *",
    )
    .bind(name)
    .bind(display_name)
    .bind(description)
    .bind(is_static)
    .bind(is_default)
    .fetch_optional(executor)
    .await
}

pub async fn grant_all_permissions<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    role_id: i32,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO role_permissions (role_id, permission_id)
         SELECT $1, id FROM permissions
         ON CONFLICT DO NOTHING",
    )
    .bind(role_id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}
