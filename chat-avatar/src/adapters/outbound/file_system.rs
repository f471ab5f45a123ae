use std::{
    fs,
    path::{Path, PathBuf},
};

use glob::Pattern;

use crate::domain::{models::SessionData, ports::outbound::AvatarResolver, AvatarError};

pub const DEFAULT_AVATAR_DIR: &str = "avatars";
pub const DEFAULT_URL_PREFIX: &str = "/avatars";

/// Serves avatars uploaded into a local directory.
///
/// A file belongs to a user when its name starts with the user id, so
/// `abc.jpg` and `abc-large.png` both belong to `abc`. The directory is
/// listed on every call and the first match in listing order wins. Listing
/// order is whatever the filesystem returns, so a directory holding several
/// files with the same prefix does not resolve deterministically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSystemAvatar {
    directory: PathBuf,
    url_prefix: String,
}

impl FileSystemAvatar {
    pub fn new(directory: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            url_prefix: url_prefix.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn build_avatar_url(&self, file_name: &str) -> String {
        let prefix = self.url_prefix.trim_end_matches('/');
        format!("{prefix}/{file_name}")
    }

    fn find_match(&self, user_id: &str) -> Result<String, AvatarError> {
        let pattern = Pattern::new(&format!("{}*", Pattern::escape(user_id)))
            .map_err(|_| AvatarError::NoAvatarUrl)?;

        let entries = fs::read_dir(&self.directory).map_err(|_| AvatarError::NoAvatarUrl)?;
        for entry in entries {
            let entry = entry.map_err(|_| AvatarError::NoAvatarUrl)?;
            let file_type = entry.file_type().map_err(|_| AvatarError::NoAvatarUrl)?;
            if file_type.is_dir() {
                continue;
            }

            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };

            if pattern.matches(file_name) {
                return Ok(self.build_avatar_url(file_name));
            }
        }

        Err(AvatarError::NoAvatarUrl)
    }
}

impl Default for FileSystemAvatar {
    fn default() -> Self {
        Self::new(DEFAULT_AVATAR_DIR, DEFAULT_URL_PREFIX)
    }
}

impl AvatarResolver for FileSystemAvatar {
    fn avatar_url(&self, session: &SessionData) -> Result<String, AvatarError> {
        let user_id = session.user_id()?;
        self.find_match(user_id)
    }
}
