use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, instrument};

use crate::domain::{
    models::SessionData,
    ports::{inbound::AvatarService, outbound::AvatarResolver},
    AvatarError,
};

pub struct AvatarServiceImpl<R> {
    resolver: Arc<R>,
}

impl<R> AvatarServiceImpl<R> {
    pub fn new(resolver: Arc<R>) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &Arc<R> {
        &self.resolver
    }
}

impl<R> Clone for AvatarServiceImpl<R> {
    fn clone(&self) -> Self {
        Self {
            resolver: Arc::clone(&self.resolver),
        }
    }
}

#[async_trait]
impl<R: AvatarResolver> AvatarService for AvatarServiceImpl<R> {
    #[instrument(skip_all)]
    async fn avatar_url(&self, session: SessionData) -> Result<String, AvatarError> {
        // Resolvers may hit the filesystem, keep them off the async workers.
        let resolver = Arc::clone(&self.resolver);
        tokio::task::spawn_blocking(move || resolver.avatar_url(&session))
            .await
            .map_err(|err| {
                error!("avatar resolution task failed: {err}");
                AvatarError::NoAvatarUrl
            })?
    }
}
