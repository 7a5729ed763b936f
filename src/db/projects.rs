use std::collections::HashMap;

use chrono::Utc;
use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder};

use crate::db::ocr_projects;
use crate::models::{NewOcrProject, Project, ProjectDetails};

/// Optional, AND-composed predicates for the project listing. `None` and an
/// empty `id_list` leave that column unconstrained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectFilter {
    pub group_id: Option<i32>,
    pub bildirim_no: Option<String>,
    pub project_code: Option<String>,
    pub project_name: Option<String>,
    pub project_muellef: Option<String>,
    pub id_list: Vec<i32>,
}

/// Escapes LIKE wildcards so the term matches literally anywhere in the column.
pub fn contains_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, filter: &ProjectFilter) {
    if let Some(group_id) = filter.group_id {
        builder.push(" AND group_id = ").push_bind(group_id);
    }

    for (column, term) in [
        ("bildirim_no", &filter.bildirim_no),
        ("project_code", &filter.project_code),
        ("project_name", &filter.project_name),
        ("project_muellef", &filter.project_muellef),
    ] {
        if let Some(term) = term {
            builder
                .push(format!(" AND {column} LIKE "))
                .push_bind(contains_pattern(term));
        }
    }

    if !filter.id_list.is_empty() {
        builder
            .push(" AND id = ANY(")
            .push_bind(filter.id_list.clone())
            .push(")");
    }
}

/// Returns one page of matching projects (ascending id, children attached)
/// and the total number of matches. Both reads share one snapshot.
pub async fn list_filtered(
    pool: &PgPool,
    filter: &ProjectFilter,
    limit: i64,
    offset: i64,
) -> Result<(Vec<Project>, i64), sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
        .execute(&mut *tx)
        .await?;

    let mut count = QueryBuilder::new("SELECT COUNT(*) FROM projects WHERE TRUE");
    push_filters(&mut count, filter);
    let total = count
        .build_query_scalar::<i64>()
        .fetch_one(&mut *tx)
        .await?;

    let mut select = QueryBuilder::new("SELECT * FROM projects WHERE TRUE");
    push_filters(&mut select, filter);
    select
        .push(" ORDER BY id ASC LIMIT ")
        .push_bind(limit)
        .push(" OFFSET ")
        .push_bind(offset);
    let mut projects = select
        .build_query_as::<Project>()
        .fetch_all(&mut *tx)
        .await?;

    attach_ocr_projects(&mut *tx, &mut projects).await?;
    tx.commit().await?;

    Ok((projects, total))
}

async fn attach_ocr_projects(
    conn: &mut PgConnection,
    projects: &mut [Project],
) -> Result<(), sqlx::Error> {
    if projects.is_empty() {
        return Ok(());
    }

    let ids: Vec<i32> = projects.iter().map(|p| p.id).collect();
    let index: HashMap<i32, usize> = ids.iter().enumerate().map(|(i, id)| (*id, i)).collect();

    for child in ocr_projects::list_for_projects(&mut *conn, &ids).await? {
        if let Some(&i) = index.get(&child.project_id) {
            projects[i].ocr_projects.push(child);
        }
    }
    Ok(())
}

/// Looks a project up by id whatever its deletion state.
pub async fn find_by_id<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    id: i32,
) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
        .bind(id)
        .fetch_optional(executor)
        .await
}

pub async fn find_with_ocr_projects(pool: &PgPool, id: i32) -> Result<Option<Project>, sqlx::Error> {
    let mut conn = pool.acquire().await?;
    let Some(project) = find_by_id(&mut *conn, id).await? else {
        return Ok(None);
    };

    let mut projects = [project];
    attach_ocr_projects(&mut *conn, &mut projects).await?;
    let [project] = projects;
    Ok(Some(project))
}

/// Inserts the project and its four OCR children in one transaction and
/// returns the new project id. Nothing is persisted if any insert fails.
pub async fn create_with_ocr_projects(
    pool: &PgPool,
    details: &ProjectDetails,
    creator_user_id: Option<i32>,
) -> Result<i32, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let project_id: i32 = sqlx::query_scalar(
        "INSERT INTO projects (
            project_name, project_code, project_comment, project_muellef,
            ada, parsel, talep_gucu, kurulu_guc, bagimsiz_bs, blok_s, yapi_yuksekligi,
            ruhsat_gecerlilik_date, yapi_sahibi, adress, group_id, bildirim_no, creator_user_id
         ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
         RETURNING id",
    )
    .bind(&details.project_name)
    .bind(&details.project_code)
    .bind(&details.project_comment)
    .bind(&details.project_muellef)
    .bind(details.ada)
    .bind(details.parsel)
    .bind(details.talep_gucu)
    .bind(details.kurulu_guc)
    .bind(details.bagimsiz_bs)
    .bind(details.blok_s)
    .bind(details.yapi_yuksekligi)
    .bind(&details.ruhsat_gecerlilik_date)
    .bind(&details.yapi_sahibi)
    .bind(&details.adress)
    .bind(details.group_id)
    .bind(&details.bildirim_no)
    .bind(creator_user_id)
    .fetch_one(&mut *tx)
    .await?;

    let children = NewOcrProject::defaults_for(project_id, details);
    ocr_projects::insert_many(&mut *tx, &children).await?;

    tx.commit().await?;
    Ok(project_id)
}

/// Writes every column of `project` back by primary key and bumps `updated_at`.
/// The returned row carries no children.
pub async fn save<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    project: &Project,
) -> Result<Project, sqlx::Error> {
    let d = &project.details;
    let a = &project.audit;
    sqlx::query_as::<_, Project>(
        "UPDATE projects SET
            tenant_id = $2, project_name = $3, project_code = $4, project_comment = $5,
            project_muellef = $6, ada = $7, parsel = $8, talep_gucu = $9, kurulu_guc = $10,
            bagimsiz_bs = $11, blok_s = $12, yapi_yuksekligi = $13, ruhsat_gecerlilik_date = $14,
            yapi_sahibi = $15, adress = $16, group_id = $17, bildirim_no = $18,
            creator_user_id = $19, last_modifier_id = $20, deleter_user_id = $21,
            deletion_time = $22, is_deleted = $23, updated_at = now()
         WHERE id = $1 RETURNING *",
    )
    .bind(project.id)
    .bind(project.tenant_id)
    .bind(&d.project_name)
    .bind(&d.project_code)
    .bind(&d.project_comment)
    .bind(&d.project_muellef)
    .bind(d.ada)
    .bind(d.parsel)
    .bind(d.talep_gucu)
    .bind(d.kurulu_guc)
    .bind(d.bagimsiz_bs)
    .bind(d.blok_s)
    .bind(d.yapi_yuksekligi)
    .bind(&d.ruhsat_gecerlilik_date)
    .bind(&d.yapi_sahibi)
    .bind(&d.adress)
    .bind(d.group_id)
    .bind(&d.bildirim_no)
    .bind(a.creator_user_id)
    .bind(a.last_modifier_id)
    .bind(a.deleter_user_id)
    .bind(a.deletion_time)
    .bind(a.is_deleted)
    .fetch_one(executor)
    .await
}

/// Locks the row, marks it deleted by `user_id` and saves it, atomically.
/// `None` when no such project exists. Children are not touched.
pub async fn soft_delete(
    pool: &PgPool,
    id: i32,
    user_id: i32,
) -> Result<Option<Project>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let Some(mut project) =
        sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
    else {
        return Ok(None);
    };

    project.audit = project.audit.soft_deleted(user_id, Utc::now());
    let saved = save(&mut *tx, &project).await?;

    tx.commit().await?;
    Ok(Some(saved))
}
