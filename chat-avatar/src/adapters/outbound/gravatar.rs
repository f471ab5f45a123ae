use std::fmt;

use crate::domain::{models::SessionData, ports::outbound::AvatarResolver, AvatarError};

/// Builds a gravatar.com URL from the session's user id.
///
/// Only the string is built here; the browser fetches the image, and
/// gravatar serves a default picture for unknown ids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GravatarAvatar;

/// Protocol-relative so the page's own scheme is reused.
struct GravatarUrl<'a>(&'a str);

impl fmt::Display for GravatarUrl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "//www.gravatar.com/avatar/{}", self.0)
    }
}

impl AvatarResolver for GravatarAvatar {
    fn avatar_url(&self, session: &SessionData) -> Result<String, AvatarError> {
        let user_id = session.user_id()?;
        Ok(GravatarUrl(user_id).to_string())
    }
}
