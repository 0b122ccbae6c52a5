use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Social media links attached to a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

/// Profile entity - professional details, exactly one per user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub status: String,
    pub skills: Vec<String>,
    pub social: SocialLinks,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial set of profile fields supplied by the owner on upsert.
/// `None` means "leave unchanged" when merging into an existing profile.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub status: Option<String>,
    pub skills: Option<Vec<String>>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

impl Profile {
    /// Create a profile for `user_id`. `status` and `skills` are mandatory on
    /// creation; the caller validates that before getting here.
    pub fn new(user_id: Uuid, status: String, skills: Vec<String>, update: ProfileUpdate) -> Self {
        let now = Utc::now();
        let mut profile = Self {
            id: Uuid::new_v4(),
            user_id,
            company: None,
            website: None,
            location: None,
            bio: None,
            github_username: None,
            status,
            skills,
            social: SocialLinks::default(),
            created_at: now,
            updated_at: now,
        };
        profile.merge(update);
        profile
    }

    /// Merge supplied fields in place, leaving absent fields unchanged.
    pub fn merge(&mut self, update: ProfileUpdate) {
        if let Some(company) = update.company {
            self.company = Some(company);
        }
        if let Some(website) = update.website {
            self.website = Some(website);
        }
        if let Some(location) = update.location {
            self.location = Some(location);
        }
        if let Some(bio) = update.bio {
            self.bio = Some(bio);
        }
        if let Some(github_username) = update.github_username {
            self.github_username = Some(github_username);
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(skills) = update.skills {
            self.skills = skills;
        }
        if let Some(youtube) = update.youtube {
            self.social.youtube = Some(youtube);
        }
        if let Some(twitter) = update.twitter {
            self.social.twitter = Some(twitter);
        }
        if let Some(facebook) = update.facebook {
            self.social.facebook = Some(facebook);
        }
        if let Some(linkedin) = update.linkedin {
            self.social.linkedin = Some(linkedin);
        }
        if let Some(instagram) = update.instagram {
            self.social.instagram = Some(instagram);
        }
        self.updated_at = Utc::now();
    }

    /// Normalize a comma-separated skills string into a trimmed ordered list.
    /// Empty segments are dropped; order is preserved.
    pub fn parse_skills(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|skill| !skill.is_empty())
            .map(str::to_string)
            .collect()
    }
}
