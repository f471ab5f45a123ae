use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr};
use strum::{Display, EnumString};

use crate::{
    adapters::outbound::{DEFAULT_AVATAR_DIR, DEFAULT_URL_PREFIX},
    domain::models::AvatarKind,
};

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub avatar: AvatarSettings,
}

#[serde_as]
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AvatarSettings {
    /// Directory scanned for uploaded avatar files.
    pub directory: PathBuf,
    /// Path under which the HTTP layer serves `directory`.
    pub url_prefix: String,
    /// Resolution order, first success wins. Names are case-insensitive.
    #[serde_as(as = "Vec<DisplayFromStr>")]
    pub chain: Vec<AvatarKind>,
}

impl Default for AvatarSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_AVATAR_DIR),
            url_prefix: DEFAULT_URL_PREFIX.to_string(),
            chain: AvatarKind::DEFAULT_CHAIN.to_vec(),
        }
    }
}

pub fn read_config() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("failed to determine the current directory: {e}"))
    })?;

    let environment = Environment::from_str(
        std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .as_str(),
    )
    .map_err(|e| config::ConfigError::Message(format!("failed to parse APP_ENVIRONMENT: {e}")))?;

    read_config_from(&base_path.join("config"), environment)
}

/// Layers built-in defaults, `base.yaml`, `<environment>.yaml` and
/// `CHAT_`-prefixed environment variables, in that order.
pub fn read_config_from(
    config_directory: &Path,
    environment: Environment,
) -> Result<Settings, config::ConfigError> {
    let defaults = AvatarSettings::default();
    let default_chain = defaults
        .chain
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();

    let environment_filename = format!("{}.yaml", environment);

    let settings = config::Config::builder()
        .set_default(
            "avatar.directory",
            defaults.directory.to_string_lossy().into_owned(),
        )?
        .set_default("avatar.url_prefix", defaults.url_prefix)?
        .set_default("avatar.chain", default_chain)?
        .add_source(config::File::from(config_directory.join("base.yaml")).required(false))
        .add_source(
            config::File::from(config_directory.join(environment_filename)).required(false),
        )
        .add_source(
            config::Environment::with_prefix("CHAT")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("avatar.chain")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub enum Environment {
    #[strum(ascii_case_insensitive, serialize = "local")]
    Local,
    #[strum(ascii_case_insensitive, serialize = "production")]
    Production,
}
