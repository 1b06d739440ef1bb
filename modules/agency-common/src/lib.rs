pub mod config;
pub mod directory;
pub mod error;
pub mod slug;
pub mod types;

pub use config::Config;
pub use directory::{enumerate_slugs, resolve_by_slug, ClientDirectory, SlugCollision};
pub use error::AgencyError;
pub use slug::{is_slug, slugify};
pub use types::*;
