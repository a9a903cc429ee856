use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    entities::project::{NewProjectRequest, ProjectCategory, ProjectStatus, UpdateProjectRequest},
    errors::AppError,
    query::ProjectFilters,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct ProjectListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub category: Option<ProjectCategory>,
    pub status: Option<ProjectStatus>,
    pub featured: Option<bool>,
    /// Comma-separated tag list, e.g. `technologies=React,MQTT`.
    pub technologies: Option<String>,
    pub search: Option<String>,
}

impl ProjectListQuery {
    fn filters(&self) -> ProjectFilters {
        ProjectFilters {
            category: self.category,
            status: self.status,
            featured: self.featured,
            technologies: self.technologies.as_ref().map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(String::from)
                    .collect()
            }),
            search: self.search.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FeaturedQuery {
    pub limit: Option<i64>,
}

#[instrument(skip(state, query))]
pub async fn get_all_projects(
    state: web::Data<AppState>,
    query: web::Query<ProjectListQuery>,
) -> Result<impl Responder, AppError> {
    let listing = state
        .project_handler
        .get_projects(&query.filters(), query.page, query.limit)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": listing.projects,
        "meta": listing.meta
    })))
}

#[instrument(skip(state, query))]
pub async fn get_featured_projects(
    state: web::Data<AppState>,
    query: web::Query<FeaturedQuery>,
) -> Result<impl Responder, AppError> {
    let projects = state
        .project_handler
        .get_featured_projects(query.limit)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": projects
    })))
}

#[instrument(skip(project_id, state))]
pub async fn get_project_by_id(
    project_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let project = state.project_handler.get_project_by_id(&project_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": project
    })))
}

#[instrument(skip(state, data))]
pub async fn create_project(
    state: web::Data<AppState>,
    data: web::Json<NewProjectRequest>,
) -> Result<impl Responder, AppError> {
    let project = state
        .project_handler
        .create_project(data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "success": true,
        "data": project
    })))
}

#[instrument(skip(project_id, state, data))]
pub async fn update_project(
    project_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateProjectRequest>,
) -> Result<impl Responder, AppError> {
    let project = state
        .project_handler
        .update_project(&project_id, &data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": project
    })))
}

#[instrument(skip(project_id, state))]
pub async fn delete_project(
    project_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.project_handler.delete_project(&project_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
