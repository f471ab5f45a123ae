use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The avatar sources a chat server can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvatarKind {
    /// URL supplied by the identity provider at login.
    #[strum(ascii_case_insensitive, serialize = "auth")]
    Auth,
    /// URL derived from the user id on gravatar.com.
    #[strum(ascii_case_insensitive, serialize = "gravatar")]
    Gravatar,
    /// File uploaded into the local avatar directory.
    #[strum(ascii_case_insensitive, serialize = "file_system")]
    FileSystem,
}

impl AvatarKind {
    /// Order used when no chain is configured.
    pub const DEFAULT_CHAIN: [AvatarKind; 3] =
        [AvatarKind::Auth, AvatarKind::FileSystem, AvatarKind::Gravatar];
}
