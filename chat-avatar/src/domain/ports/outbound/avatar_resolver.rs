use crate::domain::{models::SessionData, AvatarError};

/// Produces an avatar URL for one client, or [`AvatarError::NoAvatarUrl`].
///
/// Implementations are synchronous and hold no per-call state, so a single
/// instance can serve any number of concurrent callers.
pub trait AvatarResolver: Send + Sync + 'static {
    fn avatar_url(&self, session: &SessionData) -> Result<String, AvatarError>;
}
