//! Avatar URL resolution for chat participants.
//!
//! A chat server hands over a client's session data and gets back a URL to
//! render, drawn from the identity provider, a local upload directory or
//! gravatar.com. Each source implements
//! [`AvatarResolver`](domain::ports::outbound::AvatarResolver); they can be
//! used alone or chained with [`TryAvatars`](adapters::outbound::TryAvatars).

pub mod adapters;
pub mod config;
pub mod domain;
pub mod factory;

pub use adapters::outbound::{
    AuthAvatar, AvatarStrategy, FileSystemAvatar, GravatarAvatar, TryAvatars,
};
pub use domain::{
    models::{AvatarKind, SessionData},
    ports::{inbound::AvatarService, outbound::AvatarResolver},
    services::AvatarServiceImpl,
    AvatarError,
};
