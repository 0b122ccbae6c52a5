use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, Profile, User};
use crate::error::{LikeError, RepoError};

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}

/// Profile repository. Profiles are keyed one-to-one to users.
#[async_trait]
pub trait ProfileRepository: BaseRepository<Profile, Uuid> {
    /// Find the profile owned by a user.
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Profile>, RepoError>;

    /// List all profiles.
    async fn find_all(&self) -> Result<Vec<Profile>, RepoError>;

    /// Delete the profile owned by a user, if any.
    async fn delete_by_user_id(&self, user_id: Uuid) -> Result<(), RepoError>;
}

/// Post repository.
///
/// `like` and `unlike` run their membership check and the mutation as one
/// atomic store operation, so two racing likes by the same user resolve to
/// exactly one success and one `AlreadyLiked`.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// List all posts, newest first.
    async fn find_all_recent(&self) -> Result<Vec<Post>, RepoError>;

    /// Add a like by `user_id`, returning the updated likes list.
    async fn like(&self, post_id: Uuid, user_id: Uuid) -> Result<Vec<Uuid>, LikeError>;

    /// Remove the like by `user_id`, returning the updated likes list.
    async fn unlike(&self, post_id: Uuid, user_id: Uuid) -> Result<Vec<Uuid>, LikeError>;
}
