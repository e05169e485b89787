pub mod pull;
pub mod save;
pub mod version;
