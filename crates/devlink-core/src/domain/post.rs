use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::LikeError;

/// Post entity - a short text post on a user's feed.
///
/// Author name and avatar are copied from the user record at creation time.
/// That snapshot is deliberately stale: a later rename or avatar change does
/// not rewrite existing posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub author_name: String,
    pub author_avatar: String,
    /// Ids of users who liked this post, newest first, unique membership.
    pub likes: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post authored by `user_id`.
    pub fn new(user_id: Uuid, text: String, author_name: String, author_avatar: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            text,
            author_name,
            author_avatar,
            likes: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Record a like by `user_id`. Each user may like a post at most once.
    pub fn add_like(&mut self, user_id: Uuid) -> Result<(), LikeError> {
        if self.likes.contains(&user_id) {
            return Err(LikeError::AlreadyLiked);
        }
        self.likes.insert(0, user_id);
        Ok(())
    }

    /// Remove the like whose user id equals `user_id`.
    ///
    /// Removal keys off the id itself, never a computed index, so an
    /// unrelated entry can never be dropped by accident.
    pub fn remove_like(&mut self, user_id: Uuid) -> Result<(), LikeError> {
        let before = self.likes.len();
        self.likes.retain(|liker| *liker != user_id);
        if self.likes.len() == before {
            return Err(LikeError::NotLiked);
        }
        Ok(())
    }

    /// Whether `user_id` owns this post.
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}
