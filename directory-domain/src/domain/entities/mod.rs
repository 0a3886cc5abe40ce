pub mod account;
pub mod common;
pub mod identity;
pub mod profile;

pub use account::*;
pub use common::*;
pub use identity::*;
pub use profile::*;
