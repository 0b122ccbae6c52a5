//! Registration handler.

use actix_web::{HttpResponse, web};

use devlink_core::domain::User;
use devlink_infra::avatar::avatar_url_for_email;
use devlink_shared::FieldError;
use devlink_shared::dto::{RegisterRequest, TokenResponse};

use super::validation::is_well_formed_email;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/users - register a new account and return a fresh token.
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let mut errors = Vec::new();
    if req.name.trim().is_empty() {
        errors.push(FieldError::for_field("name", "Name is required"));
    }
    if !is_well_formed_email(&req.email) {
        errors.push(FieldError::for_field("email", "Please include a valid email"));
    }
    if req.password.chars().count() < 6 {
        errors.push(FieldError::for_field(
            "password",
            "Please enter a password with 6 or more characters",
        ));
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    if state.users.find_by_email(&req.email).await?.is_some() {
        return Err(AppError::Conflict("User already exists".to_string()));
    }

    let avatar_url = avatar_url_for_email(&req.email);

    let password_hash = state
        .passwords
        .hash(&req.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let user = User::new(req.name, req.email, password_hash, avatar_url);
    let saved = state.users.save(user).await?;

    let token = state
        .tokens
        .issue(saved.id)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}
