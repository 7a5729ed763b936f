use sqlx::PgPool;

use crate::db;
use crate::db::projects::ProjectFilter;
use crate::dto::{PagedResult, ProjectDto, ProjectListRequest};
use crate::models::ProjectDetails;
use crate::services::ServiceError;

fn not_found(id: i32) -> ServiceError {
    ServiceError::NotFound {
        entity: "Project",
        id,
    }
}

/// Zero `group_id` and empty text filters are treated as absent, so a group
/// id of 0 cannot itself be searched for.
pub fn build_filter(req: &ProjectListRequest) -> ProjectFilter {
    let text = |s: &str| (!s.is_empty()).then(|| s.to_string());
    ProjectFilter {
        group_id: (req.group_id != 0).then_some(req.group_id),
        bildirim_no: text(&req.bildirim_no),
        project_code: text(&req.project_code),
        project_name: text(&req.project_name),
        project_muellef: text(&req.project_muellef),
        id_list: req.id_list.clone(),
    }
}

pub async fn list(
    pool: &PgPool,
    req: &ProjectListRequest,
) -> Result<PagedResult<ProjectDto>, ServiceError> {
    let filter = build_filter(req);
    let (projects, total_count) =
        db::projects::list_filtered(pool, &filter, req.page_size, req.offset())
            .await
            .map_err(ServiceError::storage("get projects"))?;

    Ok(PagedResult {
        total_count,
        items: projects.iter().map(ProjectDto::from).collect(),
    })
}

/// Soft-deleted projects are returned like any other.
pub async fn get(pool: &PgPool, id: i32) -> Result<ProjectDto, ServiceError> {
    let project = db::projects::find_with_ocr_projects(pool, id)
        .await
        .map_err(ServiceError::storage("get project"))?
        .ok_or_else(|| not_found(id))?;
    Ok(ProjectDto::from(&project))
}

/// Persists the project with its four OCR children, then returns the stored
/// state as read back from the database.
pub async fn create(
    pool: &PgPool,
    details: ProjectDetails,
    creator_user_id: Option<i32>,
) -> Result<ProjectDto, ServiceError> {
    let id = db::projects::create_with_ocr_projects(pool, &details, creator_user_id)
        .await
        .map_err(ServiceError::storage("create project"))?;

    tracing::info!(project_id = id, project_code = %details.project_code, "Project created");

    let project = db::projects::find_with_ocr_projects(pool, id)
        .await
        .map_err(ServiceError::storage("fetch created project"))?
        .ok_or_else(|| not_found(id))?;
    Ok(ProjectDto::from(&project))
}

/// Replaces every descriptive field with `details`; anything left out of the
/// input ends up empty. OCR children are carried over unchanged.
pub async fn update(
    pool: &PgPool,
    id: i32,
    details: ProjectDetails,
    modifier_user_id: Option<i32>,
) -> Result<ProjectDto, ServiceError> {
    let mut project = db::projects::find_with_ocr_projects(pool, id)
        .await
        .map_err(ServiceError::storage("get project"))?
        .ok_or_else(|| not_found(id))?;

    project.details = details;
    if modifier_user_id.is_some() {
        project.audit.last_modifier_id = modifier_user_id;
    }

    let mut saved = db::projects::save(pool, &project)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => not_found(id),
            e => ServiceError::storage("update project")(e),
        })?;
    saved.ocr_projects = project.ocr_projects;

    tracing::info!(project_id = id, "Project updated");
    Ok(ProjectDto::from(&saved))
}

/// Marks the project deleted by `acting_user_id`. Its OCR children stay as they are.
pub async fn delete(pool: &PgPool, id: i32, acting_user_id: i32) -> Result<(), ServiceError> {
    let deleted = db::projects::soft_delete(pool, id, acting_user_id)
        .await
        .map_err(ServiceError::storage("delete project"))?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(
        project_id = deleted.id,
        deleter_user_id = acting_user_id,
        "Project soft-deleted"
    );
    Ok(())
}
