pub mod auth;
pub mod profile;

pub use auth::AuthCommands;
pub use profile::ProfileCommands;
