//! Post entity for SeaORM.
//!
//! The likes set is stored as a JSONB array of user ids on the post row, so
//! a like/unlike is a single-row update. There is deliberately no foreign
//! key from posts to users: posts outlive their author's account (account
//! deletion leaves posts in place).

use sea_orm::entity::prelude::*;
use sea_orm::{FromJsonQueryResult, Set};
use serde::{Deserialize, Serialize};

/// JSONB-backed list of user ids who liked a post, newest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct LikeList(pub Vec<Uuid>);

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub author_name: String,
    pub author_avatar: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub likes: LikeList,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for devlink_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            text: model.text,
            author_name: model.author_name,
            author_avatar: model.author_avatar,
            likes: model.likes.0,
            created_at: model.created_at.into(),
        }
    }
}

impl From<devlink_core::domain::Post> for ActiveModel {
    fn from(post: devlink_core::domain::Post) -> Self {
        Self {
            id: Set(post.id),
            user_id: Set(post.user_id),
            text: Set(post.text),
            author_name: Set(post.author_name),
            author_avatar: Set(post.author_avatar),
            likes: Set(LikeList(post.likes)),
            created_at: Set(post.created_at.into()),
        }
    }
}
