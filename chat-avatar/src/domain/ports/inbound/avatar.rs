use async_trait::async_trait;

use crate::domain::{models::SessionData, AvatarError};

#[async_trait]
pub trait AvatarService: Send + Sync + 'static {
    async fn avatar_url(&self, session: SessionData) -> Result<String, AvatarError>;

    /// Resolves the avatar, falling back to `placeholder` when none is found.
    async fn avatar_url_or(&self, session: SessionData, placeholder: &str) -> String {
        self.avatar_url(session)
            .await
            .unwrap_or_else(|_| placeholder.to_string())
    }
}
