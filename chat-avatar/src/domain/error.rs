use thiserror::Error;

/// The only failure an avatar lookup reports.
///
/// Every cause (missing session key, wrong value type, unreadable avatar
/// directory, no matching file) collapses into [`AvatarError::NoAvatarUrl`].
/// Callers either try the next resolver or render a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AvatarError {
    #[error("chat: unable to get an avatar URL")]
    NoAvatarUrl,
}
