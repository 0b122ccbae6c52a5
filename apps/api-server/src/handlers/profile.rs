//! Profile handlers: lookup, upsert, account deletion.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use devlink_core::domain::{Profile, ProfileUpdate};
use devlink_shared::FieldError;
use devlink_shared::dto::{MessageResponse, UpsertProfileRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/profile/me
pub async fn me(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let profile = state
        .profiles
        .find_by_user_id(identity.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("There is no profile for this user".to_string()))?;

    Ok(HttpResponse::Ok().json(profile))
}

/// GET /api/profile - all profiles, public.
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let profiles = state.profiles.find_all().await?;

    Ok(HttpResponse::Ok().json(profiles))
}

/// GET /api/profile/user/{user_id} - public lookup by owner id.
pub async fn by_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let user_id = Uuid::parse_str(&path)
        .map_err(|_| AppError::NotFound("Profile not found".to_string()))?;

    let profile = state
        .profiles
        .find_by_user_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

    Ok(HttpResponse::Ok().json(profile))
}

/// POST /api/profile - create or update the caller's profile.
///
/// On update, supplied fields overwrite and absent fields stay; on first
/// creation, `status` and `skills` are mandatory.
pub async fn upsert(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<UpsertProfileRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let skills = req.skills.as_deref().map(Profile::parse_skills);

    let update = ProfileUpdate {
        company: req.company,
        website: req.website,
        location: req.location,
        bio: req.bio,
        github_username: req.github_username,
        status: req.status,
        skills,
        youtube: req.youtube,
        twitter: req.twitter,
        facebook: req.facebook,
        linkedin: req.linkedin,
        instagram: req.instagram,
    };

    let profile = match state.profiles.find_by_user_id(identity.user_id).await? {
        Some(mut existing) => {
            existing.merge(update);
            existing
        }
        None => {
            let mut errors = Vec::new();
            if update.status.as_deref().is_none_or(|s| s.trim().is_empty()) {
                errors.push(FieldError::for_field("status", "Status is required"));
            }
            if update.skills.as_deref().is_none_or(|s| s.is_empty()) {
                errors.push(FieldError::for_field("skills", "Skills is required"));
            }
            if !errors.is_empty() {
                return Err(AppError::Validation(errors));
            }

            let status = update.status.clone().unwrap_or_default();
            let skills = update.skills.clone().unwrap_or_default();
            Profile::new(identity.user_id, status, skills, update)
        }
    };

    let saved = state.profiles.save(profile).await?;

    Ok(HttpResponse::Ok().json(saved))
}

/// DELETE /api/profile - remove the caller's profile and account.
// TODO: remove the user's posts as well when an account is deleted; today
// they stay in the feed under the snapshotted author name.
pub async fn delete_account(
    state: web::Data<AppState>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    state.profiles.delete_by_user_id(identity.user_id).await?;
    state.users.delete(identity.user_id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "User deleted".to_string(),
    }))
}
