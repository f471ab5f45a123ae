use tracing::{debug, instrument};

use crate::{
    config::AvatarSettings,
    domain::{models::SessionData, ports::outbound::AvatarResolver, AvatarError},
};

use super::AvatarStrategy;

/// Tries each strategy in order and returns the first URL found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TryAvatars {
    strategies: Vec<AvatarStrategy>,
}

impl TryAvatars {
    pub fn new(strategies: impl IntoIterator<Item = AvatarStrategy>) -> Self {
        Self {
            strategies: strategies.into_iter().collect(),
        }
    }

    pub fn from_settings(settings: &AvatarSettings) -> Self {
        Self::new(
            settings
                .chain
                .iter()
                .map(|kind| AvatarStrategy::from_kind(*kind, settings)),
        )
    }

    pub fn strategies(&self) -> &[AvatarStrategy] {
        &self.strategies
    }
}

impl AvatarResolver for TryAvatars {
    #[instrument(skip_all, level = "debug")]
    fn avatar_url(&self, session: &SessionData) -> Result<String, AvatarError> {
        for strategy in &self.strategies {
            match strategy.avatar_url(session) {
                Ok(url) => {
                    debug!(strategy = %strategy.kind(), "resolved avatar");
                    return Ok(url);
                }
                Err(err) => {
                    debug!(strategy = %strategy.kind(), %err, "strategy had no avatar");
                }
            }
        }

        debug!(
            avatar_url = ?session.avatar_url().err(),
            user_id = ?session.user_id().err(),
            "no strategy produced an avatar"
        );
        Err(AvatarError::NoAvatarUrl)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::{
        adapters::outbound::{AuthAvatar, FileSystemAvatar, GravatarAvatar},
        domain::models::AvatarKind,
    };

    use super::*;

    fn session() -> SessionData {
        SessionData::new().with("userid", "abc")
    }

    #[test]
    fn empty_chain_fails() {
        assert_eq!(
            TryAvatars::default().avatar_url(&session()),
            Err(AvatarError::NoAvatarUrl)
        );
    }

    #[test]
    fn first_success_wins() {
        let chain = TryAvatars::new([GravatarAvatar.into(), AuthAvatar.into()]);
        let session = session().with("avatar_url", "http://x/y.png");
        assert_eq!(
            chain.avatar_url(&session),
            Ok("//www.gravatar.com/avatar/abc".to_string())
        );
    }

    #[test]
    fn falls_through_to_later_strategies() {
        let dir = tempfile::tempdir().unwrap();
        let chain = TryAvatars::new([
            AuthAvatar.into(),
            FileSystemAvatar::new(dir.path(), "/avatars").into(),
            GravatarAvatar.into(),
        ]);
        assert_eq!(
            chain.avatar_url(&session()),
            Ok("//www.gravatar.com/avatar/abc".to_string())
        );

        fs::write(dir.path().join("abc.png"), b"img").unwrap();
        assert_eq!(
            chain.avatar_url(&session()),
            Ok("/avatars/abc.png".to_string())
        );
    }

    #[test]
    fn fails_when_every_strategy_fails() {
        let chain = TryAvatars::new([AuthAvatar.into(), GravatarAvatar.into()]);
        assert_eq!(
            chain.avatar_url(&SessionData::new().with("userid", 7)),
            Err(AvatarError::NoAvatarUrl)
        );
    }

    #[test]
    fn builds_chain_in_configured_order() {
        let settings = AvatarSettings {
            chain: vec![AvatarKind::Gravatar, AvatarKind::Auth],
            ..AvatarSettings::default()
        };
        let kinds = TryAvatars::from_settings(&settings)
            .strategies()
            .iter()
            .map(AvatarStrategy::kind)
            .collect::<Vec<_>>();
        assert_eq!(kinds, vec![AvatarKind::Gravatar, AvatarKind::Auth]);
    }
}
