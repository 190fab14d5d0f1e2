//! API Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use formworks_core::application::dto::{
    CreateAccountCommand, CreateProjectCommand, LoginCommand, SignUpCommand,
    UpdateAccountCommand, UpdateProjectCommand,
};
use formworks_core::domain::modules::encode_form;
use formworks_core::domain::value_objects::EntityId;
use formworks_core::ports::inbound::UseCaseError;

use crate::error::ApiError;
use crate::models::*;
use crate::{auth, AppState};

pub async fn health() -> &'static str {
    "OK"
}

// Forms

pub async fn create_form(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let form = state.forms.create_form(body).await?;
    Ok((StatusCode::CREATED, Json(encode_form(&form))))
}

pub async fn get_form(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let form = state
        .forms
        .get_form(&EntityId::from_string(id))
        .await?
        .ok_or_else(|| UseCaseError::NotFound("Form not found".into()))?;
    Ok(Json(encode_form(&form)))
}

pub async fn update_form(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let form = state
        .forms
        .update_form(&EntityId::from_string(id), body)
        .await?;
    Ok(Json(encode_form(&form)))
}

// Projects

pub async fn create_project(
    State(state): State<AppState>,
    Json(command): Json<CreateProjectCommand>,
) -> Result<(StatusCode, Json<ProjectResponse>), ApiError> {
    let project = state.projects.create_project(command).await?;
    Ok((StatusCode::CREATED, Json(ProjectResponse::from(&project))))
}

pub async fn get_project(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let project = state
        .projects
        .get_project(&EntityId::from_string(id))
        .await?
        .ok_or_else(|| UseCaseError::NotFound("Project not found".into()))?;
    Ok(Json(ProjectResponse::from(&project)))
}

pub async fn update_project(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(body): Json<UpdateProjectBody>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let command = UpdateProjectCommand {
        project_id: id,
        account_id: body.account_id,
        name: body.name,
    };
    let project = state.projects.update_project(command).await?;
    Ok(Json(ProjectResponse::from(&project)))
}

// Accounts

pub async fn create_account(
    State(state): State<AppState>,
    Json(command): Json<CreateAccountCommand>,
) -> Result<(StatusCode, Json<AccountResponse>), ApiError> {
    let account = state.accounts.create_account(command).await?;
    Ok((StatusCode::CREATED, Json(AccountResponse::from(&account))))
}

pub async fn get_account(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<AccountResponse>, ApiError> {
    let account = state
        .accounts
        .get_account(&EntityId::from_string(id))
        .await?
        .ok_or_else(|| UseCaseError::NotFound("Account not found".into()))?;
    Ok(Json(AccountResponse::from(&account)))
}

pub async fn update_account(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(body): Json<UpdateAccountBody>,
) -> Result<Json<AccountResponse>, ApiError> {
    let command = UpdateAccountCommand {
        account_id: id,
        name: body.name,
    };
    let account = state.accounts.update_account(command).await?;
    Ok(Json(AccountResponse::from(&account)))
}

// Auth

pub async fn signup(
    State(state): State<AppState>,
    Json(command): Json<SignUpCommand>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let user = state.users.sign_up(command).await?;
    let token = auth::create_token(&user, state.jwt_secret.as_bytes())?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: UserResponse::from(&user),
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(command): Json<LoginCommand>,
) -> Result<Json<AuthResponse>, ApiError> {
    let user = state.users.login(command).await?;
    let token = auth::create_token(&user, state.jwt_secret.as_bytes())?;

    Ok(Json(AuthResponse {
        token,
        user: UserResponse::from(&user),
    }))
}
