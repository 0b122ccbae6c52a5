//! Domain entities - the core business objects.

mod post;
mod profile;
mod user;

pub use post::Post;
pub use profile::{Profile, ProfileUpdate, SocialLinks};
pub use user::User;
