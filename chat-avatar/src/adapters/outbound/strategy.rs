use crate::{
    config::AvatarSettings,
    domain::{
        models::{AvatarKind, SessionData},
        ports::outbound::AvatarResolver,
        AvatarError,
    },
};

use super::{AuthAvatar, FileSystemAvatar, GravatarAvatar};

/// One of the built-in avatar resolvers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarStrategy {
    Auth(AuthAvatar),
    Gravatar(GravatarAvatar),
    FileSystem(FileSystemAvatar),
}

impl AvatarStrategy {
    pub fn from_kind(kind: AvatarKind, settings: &AvatarSettings) -> Self {
        match kind {
            AvatarKind::Auth => Self::Auth(AuthAvatar),
            AvatarKind::Gravatar => Self::Gravatar(GravatarAvatar),
            AvatarKind::FileSystem => Self::FileSystem(FileSystemAvatar::new(
                settings.directory.clone(),
                settings.url_prefix.clone(),
            )),
        }
    }

    pub fn kind(&self) -> AvatarKind {
        match self {
            Self::Auth(_) => AvatarKind::Auth,
            Self::Gravatar(_) => AvatarKind::Gravatar,
            Self::FileSystem(_) => AvatarKind::FileSystem,
        }
    }
}

impl AvatarResolver for AvatarStrategy {
    fn avatar_url(&self, session: &SessionData) -> Result<String, AvatarError> {
        match self {
            Self::Auth(avatar) => avatar.avatar_url(session),
            Self::Gravatar(avatar) => avatar.avatar_url(session),
            Self::FileSystem(avatar) => avatar.avatar_url(session),
        }
    }
}

impl From<AuthAvatar> for AvatarStrategy {
    fn from(avatar: AuthAvatar) -> Self {
        Self::Auth(avatar)
    }
}

impl From<GravatarAvatar> for AvatarStrategy {
    fn from(avatar: GravatarAvatar) -> Self {
        Self::Gravatar(avatar)
    }
}

impl From<FileSystemAvatar> for AvatarStrategy {
    fn from(avatar: FileSystemAvatar) -> Self {
        Self::FileSystem(avatar)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn kind_round_trips_through_from_kind() {
        let settings = AvatarSettings::default();
        for kind in AvatarKind::DEFAULT_CHAIN {
            assert_eq!(AvatarStrategy::from_kind(kind, &settings).kind(), kind);
        }
    }

    #[test]
    fn file_system_strategy_uses_configured_directory() {
        let settings = AvatarSettings {
            directory: PathBuf::from("/srv/chat/avatars"),
            url_prefix: "/img".to_string(),
            chain: vec![AvatarKind::FileSystem],
        };
        assert_eq!(
            AvatarStrategy::from_kind(AvatarKind::FileSystem, &settings),
            AvatarStrategy::FileSystem(FileSystemAvatar::new("/srv/chat/avatars", "/img"))
        );
    }

    #[test]
    fn dispatches_to_the_wrapped_resolver() {
        let session = SessionData::new()
            .with("avatar_url", "http://x/y.png")
            .with("userid", "abc");
        assert_eq!(
            AvatarStrategy::from(AuthAvatar).avatar_url(&session),
            Ok("http://x/y.png".to_string())
        );
        assert_eq!(
            AvatarStrategy::from(GravatarAvatar).avatar_url(&session),
            Ok("//www.gravatar.com/avatar/abc".to_string())
        );
    }

    #[test]
    fn wrong_type_fails_like_missing_for_every_strategy() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("1.png"), b"img").unwrap();
        let strategies = [
            AvatarStrategy::from(AuthAvatar),
            AvatarStrategy::from(GravatarAvatar),
            AvatarStrategy::from(FileSystemAvatar::new(dir.path(), "/avatars")),
        ];
        let wrong_type = SessionData::new()
            .with("avatar_url", 1)
            .with("userid", 1);

        for strategy in &strategies {
            assert_eq!(
                strategy.avatar_url(&wrong_type),
                strategy.avatar_url(&SessionData::new()),
                "{}",
                strategy.kind()
            );
        }
    }
}
