//! Composition root, the only place that wires concrete resolvers into services.

use std::sync::Arc;

use crate::{
    adapters::outbound::TryAvatars,
    config::{self, AvatarSettings},
    domain::services::AvatarServiceImpl,
};

/// Builds an avatar service that tries the configured chain in order.
pub fn avatar_service(settings: &AvatarSettings) -> AvatarServiceImpl<TryAvatars> {
    AvatarServiceImpl::new(Arc::new(TryAvatars::from_settings(settings)))
}

/// Reads settings from `./config` and builds the avatar service from them.
pub fn avatar_service_from_config(
) -> Result<AvatarServiceImpl<TryAvatars>, ::config::ConfigError> {
    let settings = config::read_config()?;
    tracing::info!(
        directory = %settings.avatar.directory.display(),
        chain = ?settings.avatar.chain,
        "avatar service configured"
    );
    Ok(avatar_service(&settings.avatar))
}
