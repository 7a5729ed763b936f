use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum_extra::extract::{Query, QueryRejection};

use crate::auth::extractor::ActingUser;
use crate::dto::{CreateProjectDto, PagedResult, ProjectDto, ProjectListQuery, UpdateProjectDto};
use crate::error::AppError;
use crate::response::ApiResponse;
use crate::services;
use crate::state::SharedState;

pub async fn list(
    State(state): State<SharedState>,
    query: Result<Query<ProjectListQuery>, QueryRejection>,
) -> Result<ApiResponse<PagedResult<ProjectDto>>, AppError> {
    let Query(query) = query?;
    let req = query.validate().map_err(AppError::Validation)?;

    let page = services::projects::list(&state.pool, &req).await?;
    Ok(ApiResponse::ok(page))
}

pub async fn get(
    State(state): State<SharedState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<ApiResponse<ProjectDto>, AppError> {
    let Path(id) = id?;

    let project = services::projects::get(&state.pool, id).await?;
    Ok(ApiResponse::ok(project))
}

pub async fn create(
    acting: ActingUser,
    State(state): State<SharedState>,
    body: Result<Json<CreateProjectDto>, JsonRejection>,
) -> Result<ApiResponse<ProjectDto>, AppError> {
    let Json(input) = body?;
    let details = input.validate().map_err(AppError::Validation)?;

    let project = services::projects::create(&state.pool, details, acting.user_id).await?;
    Ok(ApiResponse::created(project).with_message("Project created successfully"))
}

pub async fn update(
    acting: ActingUser,
    State(state): State<SharedState>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<UpdateProjectDto>, JsonRejection>,
) -> Result<ApiResponse<ProjectDto>, AppError> {
    let Path(id) = id?;
    let Json(input) = body?;
    let details = input.validate().map_err(AppError::Validation)?;

    let project = services::projects::update(&state.pool, id, details, acting.user_id).await?;
    Ok(ApiResponse::ok(project).with_message("Project updated successfully"))
}

pub async fn delete(
    acting: ActingUser,
    State(state): State<SharedState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<ApiResponse<()>, AppError> {
    let Path(id) = id?;

    services::projects::delete(&state.pool, id, acting.id_or_system()).await?;
    Ok(ApiResponse::message("Project deleted successfully"))
}
