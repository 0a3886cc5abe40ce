pub mod config;
pub mod identity_provider;

pub use config::*;
pub use identity_provider::*;
