mod auth;
mod chain;
mod file_system;
mod gravatar;
mod strategy;

pub use auth::*;
pub use chain::*;
pub use file_system::*;
pub use gravatar::*;
pub use strategy::*;
