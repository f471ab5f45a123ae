use crate::domain::{models::SessionData, ports::outbound::AvatarResolver, AvatarError};

/// Passes through the picture URL the identity provider stored at login.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthAvatar;

impl AvatarResolver for AuthAvatar {
    fn avatar_url(&self, session: &SessionData) -> Result<String, AvatarError> {
        Ok(session.avatar_url()?.to_string())
    }
}
