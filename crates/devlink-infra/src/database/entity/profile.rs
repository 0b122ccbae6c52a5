//! Profile entity for SeaORM.
//!
//! Skills and social links are schema-flexible and live in JSONB columns.

use sea_orm::entity::prelude::*;
use sea_orm::{FromJsonQueryResult, Set};
use serde::{Deserialize, Serialize};

use devlink_core::domain::SocialLinks;

/// JSONB-backed ordered list of skills.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct SkillList(pub Vec<String>);

/// JSONB-backed social links.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct SocialJson(pub SocialLinks);

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub status: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub skills: SkillList,
    #[sea_orm(column_type = "JsonBinary")]
    pub social: SocialJson,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for devlink_core::domain::Profile {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            company: model.company,
            website: model.website,
            location: model.location,
            bio: model.bio,
            github_username: model.github_username,
            status: model.status,
            skills: model.skills.0,
            social: model.social.0,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<devlink_core::domain::Profile> for ActiveModel {
    fn from(profile: devlink_core::domain::Profile) -> Self {
        Self {
            id: Set(profile.id),
            user_id: Set(profile.user_id),
            company: Set(profile.company),
            website: Set(profile.website),
            location: Set(profile.location),
            bio: Set(profile.bio),
            github_username: Set(profile.github_username),
            status: Set(profile.status),
            skills: Set(SkillList(profile.skills)),
            social: Set(SocialJson(profile.social)),
            created_at: Set(profile.created_at.into()),
            updated_at: Set(profile.updated_at.into()),
        }
    }
}
