//! Entity structs for the Labnet domain.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`. Field names
//! follow the JSON contract of the search and profile endpoints.

mod profile;
mod research;
mod researcher;
mod user;

pub use profile::Profile;
pub use research::ResearchItem;
pub use researcher::{Paper, Researcher};
pub use user::AuthUser;
