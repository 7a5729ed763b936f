use sqlx::QueryBuilder;

use crate::models::{NewOcrProject, OcrProject};

pub async fn insert_many<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    children: &[NewOcrProject],
) -> Result<(), sqlx::Error> {
    if children.is_empty() {
        return Ok(());
    }

    let mut builder =
        QueryBuilder::new("INSERT INTO ocr_projects (project_id, type, project_name, project_code) ");
    builder.push_values(children, |mut row, child| {
        row.push_bind(child.project_id)
            .push_bind(child.kind)
            .push_bind(child.project_name.clone())
            .push_bind(child.project_code.clone());
    });

    builder.build().execute(executor).await?;
    Ok(())
}

/// Children of the given projects, grouped by project and in insertion order.
pub async fn list_for_projects<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    project_ids: &[i32],
) -> Result<Vec<OcrProject>, sqlx::Error> {
    sqlx::query_as::<_, OcrProject>(
        "SELECT * FROM ocr_projects WHERE project_id = ANY($1) ORDER BY project_id, id",
    )
    .bind(project_ids)
    .fetch_all(executor)
    .await
}
