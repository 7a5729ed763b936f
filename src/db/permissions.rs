pub async fn insert_if_missing<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    name: &str,
    display_name: &str,
    description: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO permissions (name, display_name, description) VALUES ($1, $2, $3)
         ON CONFLICT (name) DO NOTHING",
    )
    .bind(name)
    .bind(display_name)
    .bind(description)
    .execute(executor)
    .await?;
    Ok(())
}
