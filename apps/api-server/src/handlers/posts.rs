//! Post handlers: feed, create, delete, like/unlike.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use devlink_core::domain::Post;
use devlink_shared::FieldError;
use devlink_shared::dto::{CreatePostRequest, MessageResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Ids arrive as opaque path strings; anything that does not parse is
/// indistinguishable from a missing post.
fn parse_post_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound("Post not found".to_string()))
}

/// GET /api/posts - all posts, newest first.
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all_recent().await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{post_id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let post_id = parse_post_id(&path)?;

    let post = state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts - create a post; author name and avatar are snapshotted
/// from the user record at creation time.
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.text.trim().is_empty() {
        return Err(AppError::Validation(vec![FieldError::for_field(
            "text",
            "Text is required",
        )]));
    }

    let author = state
        .users
        .find_by_id(identity.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let post = Post::new(author.id, req.text, author.name, author.avatar_url);
    let saved = state.posts.save(post).await?;

    Ok(HttpResponse::Ok().json(saved))
}

/// DELETE /api/posts/{post_id} - owner only.
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post_id = parse_post_id(&path)?;

    let post = state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

    if !post.is_owned_by(identity.user_id) {
        return Err(AppError::Forbidden("User not authorized".to_string()));
    }

    state.posts.delete(post_id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Post removed".to_string(),
    }))
}

/// PUT /api/posts/like/{post_id}
pub async fn like(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post_id = parse_post_id(&path)?;

    let likes = state.posts.like(post_id, identity.user_id).await?;

    Ok(HttpResponse::Ok().json(likes))
}

/// PUT /api/posts/unlike/{post_id}
pub async fn unlike(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post_id = parse_post_id(&path)?;

    let likes = state.posts.unlike(post_id, identity.user_id).await?;

    Ok(HttpResponse::Ok().json(likes))
}
