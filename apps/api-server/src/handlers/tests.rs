//! Handler tests against in-memory repositories.
//!
//! The HTTP surface is exercised end to end through the actix test service;
//! only the store is swapped for hashmap-backed implementations of the
//! repository ports.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test, web};
use async_trait::async_trait;
use serde_json::{Value, json};
use uuid::Uuid;

use devlink_core::domain::{Post, Profile, User};
use devlink_core::error::{LikeError, RepoError};
use devlink_core::ports::{
    BaseRepository, PostRepository, ProfileRepository, UserRepository,
};
use devlink_infra::auth::{Argon2PasswordService, JwtConfig, JwtTokenService};

use crate::state::AppState;

#[derive(Default)]
struct InMemoryUsers {
    rows: Mutex<HashMap<Uuid, User>>,
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryUsers {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn save(&self, user: User) -> Result<User, RepoError> {
        let mut rows = self.rows.lock().unwrap();
        // Emulate the unique index on email.
        if rows
            .values()
            .any(|u| u.email == user.email && u.id != user.id)
        {
            return Err(RepoError::Constraint("User already exists".to_string()));
        }
        rows.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        match self.rows.lock().unwrap().remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email == email)
            .cloned())
    }
}

#[derive(Default)]
struct InMemoryProfiles {
    rows: Mutex<HashMap<Uuid, Profile>>,
}

#[async_trait]
impl BaseRepository<Profile, Uuid> for InMemoryProfiles {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, RepoError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn save(&self, profile: Profile) -> Result<Profile, RepoError> {
        self.rows
            .lock()
            .unwrap()
            .insert(profile.id, profile.clone());
        Ok(profile)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        match self.rows.lock().unwrap().remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfiles {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Profile>, RepoError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|p| p.user_id == user_id)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Profile>, RepoError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn delete_by_user_id(&self, user_id: Uuid) -> Result<(), RepoError> {
        self.rows
            .lock()
            .unwrap()
            .retain(|_, p| p.user_id != user_id);
        Ok(())
    }
}

#[derive(Default)]
struct InMemoryPosts {
    rows: Mutex<HashMap<Uuid, Post>>,
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPosts {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        self.rows.lock().unwrap().insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        match self.rows.lock().unwrap().remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryPosts {
    async fn find_all_recent(&self) -> Result<Vec<Post>, RepoError> {
        let mut posts: Vec<Post> = self.rows.lock().unwrap().values().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn like(&self, post_id: Uuid, user_id: Uuid) -> Result<Vec<Uuid>, LikeError> {
        // Check and mutation under one lock, mirroring the store transaction.
        let mut rows = self.rows.lock().unwrap();
        let post = rows.get_mut(&post_id).ok_or(LikeError::PostNotFound)?;
        post.add_like(user_id)?;
        Ok(post.likes.clone())
    }

    async fn unlike(&self, post_id: Uuid, user_id: Uuid) -> Result<Vec<Uuid>, LikeError> {
        let mut rows = self.rows.lock().unwrap();
        let post = rows.get_mut(&post_id).ok_or(LikeError::PostNotFound)?;
        post.remove_like(user_id)?;
        Ok(post.likes.clone())
    }
}

fn test_state() -> AppState {
    AppState {
        users: Arc::new(InMemoryUsers::default()),
        profiles: Arc::new(InMemoryProfiles::default()),
        posts: Arc::new(InMemoryPosts::default()),
        tokens: Arc::new(JwtTokenService::new(JwtConfig::new("test-secret"))),
        passwords: Arc::new(Argon2PasswordService::new()),
    }
}

macro_rules! test_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(super::configure_routes),
        )
        .await
    };
}

async fn register<S, B>(app: &S, name: &str, email: &str, password: &str) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({ "name": name, "email": email, "password": password }))
        .to_request();
    test::call_service(app, req).await
}

async fn register_and_token<S, B>(app: &S, name: &str, email: &str) -> String
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let resp = register(app, name, email, "secret1").await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    body["token"].as_str().unwrap().to_string()
}

async fn create_post<S, B>(app: &S, token: &str, text: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(("x-auth-token", token))
        .set_json(json!({ "text": text }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert!(resp.status().is_success());
    test::read_body_json(resp).await
}

#[actix_web::test]
async fn register_returns_token_and_duplicate_email_conflicts() {
    let app = test_app!();

    let resp = register(&app, "A", "a@x.com", "secret1").await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert!(!body["token"].as_str().unwrap().is_empty());

    let resp = register(&app, "A again", "a@x.com", "secret2").await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"][0]["msg"], "User already exists");
}

#[actix_web::test]
async fn register_itemizes_validation_errors_per_field() {
    let app = test_app!();

    let resp = register(&app, "", "not-an-email", "short").await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 3);

    let params: Vec<&str> = errors
        .iter()
        .map(|e| e["param"].as_str().unwrap())
        .collect();
    assert_eq!(params, vec!["name", "email", "password"]);
}

#[actix_web::test]
async fn login_does_not_reveal_which_credential_was_wrong() {
    let app = test_app!();
    register_and_token(&app, "A", "a@x.com").await;

    let wrong_password = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth")
            .set_json(json!({ "email": "a@x.com", "password": "wrong-1" }))
            .to_request(),
    )
    .await;
    assert_eq!(wrong_password.status(), 401);
    let wrong_password_body: Value = test::read_body_json(wrong_password).await;

    let unknown_email = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth")
            .set_json(json!({ "email": "nobody@x.com", "password": "wrong-1" }))
            .to_request(),
    )
    .await;
    assert_eq!(unknown_email.status(), 401);
    let unknown_email_body: Value = test::read_body_json(unknown_email).await;

    assert_eq!(wrong_password_body, unknown_email_body);
    assert_eq!(wrong_password_body["errors"][0]["msg"], "Invalid credentials");
}

#[actix_web::test]
async fn login_with_correct_credentials_returns_token() {
    let app = test_app!();
    register_and_token(&app, "A", "a@x.com").await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth")
            .set_json(json!({ "email": "a@x.com", "password": "secret1" }))
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert!(!body["token"].as_str().unwrap().is_empty());
}

#[actix_web::test]
async fn current_user_requires_a_valid_token() {
    let app = test_app!();
    let token = register_and_token(&app, "A", "a@x.com").await;

    // Missing header
    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/auth").to_request(),
    )
    .await;
    assert_eq!(resp.status(), 401);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"][0]["msg"], "No token, authorization denied");

    // Tampered token
    let mut tampered = token.clone();
    let last = if tampered.ends_with('A') { 'B' } else { 'A' };
    tampered.pop();
    tampered.push(last);
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/auth")
            .insert_header(("x-auth-token", tampered))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 401);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"][0]["msg"], "Token is not valid");

    // Valid token resolves to the registered user, hash excluded
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/auth")
            .insert_header(("x-auth-token", token))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["user"]["email"], "a@x.com");
    assert!(body["user"].get("password_hash").is_none());
}

#[actix_web::test]
async fn like_is_idempotent_per_user_and_unlike_round_trips() {
    let app = test_app!();
    let author_token = register_and_token(&app, "Author", "author@x.com").await;
    let liker_token = register_and_token(&app, "Liker", "liker@x.com").await;

    let post = create_post(&app, &author_token, "hello feed").await;
    let post_id = post["id"].as_str().unwrap().to_string();

    let like_uri = format!("/api/posts/like/{post_id}");
    let unlike_uri = format!("/api/posts/unlike/{post_id}");

    // First like succeeds
    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&like_uri)
            .insert_header(("x-auth-token", liker_token.clone()))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let likes: Value = test::read_body_json(resp).await;
    assert_eq!(likes.as_array().unwrap().len(), 1);

    // Second like by the same user is rejected, set size unchanged
    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&like_uri)
            .insert_header(("x-auth-token", liker_token.clone()))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"][0]["msg"], "Post already liked");

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/posts/{post_id}"))
            .to_request(),
    )
    .await;
    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched["likes"].as_array().unwrap().len(), 1);

    // Unlike restores the pre-like state
    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&unlike_uri)
            .insert_header(("x-auth-token", liker_token.clone()))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let likes: Value = test::read_body_json(resp).await;
    assert!(likes.as_array().unwrap().is_empty());

    // Unlike again fails: the user no longer holds a like
    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&unlike_uri)
            .insert_header(("x-auth-token", liker_token))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"][0]["msg"], "Post has not yet been liked");
}

#[actix_web::test]
async fn only_the_owner_can_delete_a_post() {
    let app = test_app!();
    let owner_token = register_and_token(&app, "Owner", "owner@x.com").await;
    let other_token = register_and_token(&app, "Other", "other@x.com").await;

    let post = create_post(&app, &owner_token, "mine").await;
    let post_id = post["id"].as_str().unwrap().to_string();
    let uri = format!("/api/posts/{post_id}");

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&uri)
            .insert_header(("x-auth-token", other_token))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 403);

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&uri)
            .insert_header(("x-auth-token", owner_token))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    // Gone afterwards
    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri(&uri).to_request(),
    )
    .await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn post_creation_snapshots_author_name_and_avatar() {
    let app = test_app!();
    let token = register_and_token(&app, "Author", "author@x.com").await;

    let post = create_post(&app, &token, "snapshot me").await;

    assert_eq!(post["author_name"], "Author");
    assert!(
        post["author_avatar"]
            .as_str()
            .unwrap()
            .starts_with("https://www.gravatar.com/avatar/")
    );
}

#[actix_web::test]
async fn feed_lists_posts_newest_first() {
    let app = test_app!();
    let token = register_and_token(&app, "A", "a@x.com").await;

    create_post(&app, &token, "first").await;
    create_post(&app, &token, "second").await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/posts").to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let posts: Value = test::read_body_json(resp).await;
    let texts: Vec<&str> = posts
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, vec!["second", "first"]);
}

#[actix_web::test]
async fn profile_creation_requires_status_and_skills() {
    let app = test_app!();
    let token = register_and_token(&app, "A", "a@x.com").await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/profile")
            .insert_header(("x-auth-token", token))
            .set_json(json!({ "company": "Acme" }))
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    let params: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["param"].as_str().unwrap())
        .collect();
    assert_eq!(params, vec!["status", "skills"]);
}

#[actix_web::test]
async fn profile_upsert_creates_then_merges_partially() {
    let app = test_app!();
    let token = register_and_token(&app, "A", "a@x.com").await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/profile")
            .insert_header(("x-auth-token", token.clone()))
            .set_json(json!({
                "status": "Developer",
                "skills": " rust , actix,, sql ",
                "company": "Acme",
                "twitter": "@a"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(
        created["skills"],
        json!(["rust", "actix", "sql"]),
        "skills string is normalized into a trimmed list"
    );

    // Partial update: only location supplied, everything else untouched
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/profile")
            .insert_header(("x-auth-token", token.clone()))
            .set_json(json!({ "location": "Berlin" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["location"], "Berlin");
    assert_eq!(updated["company"], "Acme");
    assert_eq!(updated["status"], "Developer");
    assert_eq!(updated["social"]["twitter"], "@a");

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/profile/me")
            .insert_header(("x-auth-token", token))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
}

#[actix_web::test]
async fn profile_me_is_not_found_before_creation() {
    let app = test_app!();
    let token = register_and_token(&app, "A", "a@x.com").await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/profile/me")
            .insert_header(("x-auth-token", token))
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn account_deletion_removes_profile_and_user_but_keeps_posts() {
    let app = test_app!();
    let token = register_and_token(&app, "A", "a@x.com").await;

    create_post(&app, &token, "will outlive the account").await;
    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/profile")
            .insert_header(("x-auth-token", token.clone()))
            .set_json(json!({ "status": "Developer", "skills": "rust" }))
            .to_request(),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri("/api/profile")
            .insert_header(("x-auth-token", token.clone()))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    // The token still verifies (stateless auth), but the user is gone.
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/auth")
            .insert_header(("x-auth-token", token))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 404);

    // Posts survive under the snapshotted author name.
    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/posts").to_request(),
    )
    .await;
    let posts: Value = test::read_body_json(resp).await;
    assert_eq!(posts.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn unknown_post_ids_read_as_not_found() {
    let app = test_app!();
    let token = register_and_token(&app, "A", "a@x.com").await;

    // Well-formed but absent
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/posts/{}", Uuid::new_v4()))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 404);

    // Unparseable id is indistinguishable from an absent post
    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/api/posts/like/not-a-uuid")
            .insert_header(("x-auth-token", token))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 404);
}
