//! Login and current-user handlers.

use actix_web::{HttpResponse, web};

use devlink_shared::FieldError;
use devlink_shared::dto::{LoginRequest, TokenResponse, UserEnvelope, UserResponse};

use super::validation::is_well_formed_email;
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/auth - exchange credentials for a token.
///
/// Unknown email and wrong password produce the identical response, so the
/// endpoint leaks nothing about which one was wrong.
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let mut errors = Vec::new();
    if !is_well_formed_email(&req.email) {
        errors.push(FieldError::for_field("email", "Please include a valid email"));
    }
    if req.password.is_empty() {
        errors.push(FieldError::for_field("password", "Password is required"));
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let user = state
        .users
        .find_by_email(&req.email)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

    let valid = state
        .passwords
        .verify(&req.password, &user.password_hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    if !valid {
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    let token = state
        .tokens
        .issue(user.id)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

/// GET /api/auth - the authenticated user, password hash excluded.
pub async fn current_user(
    state: web::Data<AppState>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    let user = state
        .users
        .find_by_id(identity.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(HttpResponse::Ok().json(UserEnvelope {
        user: UserResponse {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            avatar_url: user.avatar_url,
            created_at: user.created_at.to_rfc3339(),
        },
    }))
}
