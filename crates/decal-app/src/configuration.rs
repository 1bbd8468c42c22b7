use anyhow::Context as _;
use decal_shared::const_config::client::{
    CLIENT_DEFAULT_SERVER_ADDRESS, CLIENT_DEFAULT_TOKEN_FILE,
};
use std::path::{Path, PathBuf};

#[derive(serde::Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Configuration {
    #[serde(default)]
    pub client: ClientSettings,
    #[serde(default)]
    pub auth: AuthSettings,
}

#[derive(serde::Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ClientSettings {
    pub server_address: String,
    /// Where the access and refresh tokens are kept between runs
    pub token_file: PathBuf,
}

#[derive(serde::Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthSettings {
    /// When set, an account whose role may not use the mobile app is logged
    /// out again straight after the login is rejected
    #[serde(default)]
    pub logout_on_rejected_role: bool,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            server_address: CLIENT_DEFAULT_SERVER_ADDRESS.to_string(),
            token_file: CLIENT_DEFAULT_TOKEN_FILE.into(),
        }
    }
}

pub fn get_configuration() -> anyhow::Result<Configuration> {
    let base_path = std::env::current_dir().context("failed to determine the current directory")?;

    // Note do not try to move configuration folder to root because it will make
    // it tricky for tests as they start at the crate root not the workspace root
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;
    get_configuration_from(&configuration_directory, environment)
}

/// Layers `base.toml`, then `<environment>.toml` from `configuration_directory`,
/// then `APP_` prefixed environment variables
pub fn get_configuration_from(
    configuration_directory: &Path,
    environment: Environment,
) -> anyhow::Result<Configuration> {
    let environment_filename = format!("{}.toml", environment.as_str());
    let settings = config::Config::builder()
        .add_source(config::File::from(
            configuration_directory.join("base.toml"),
        ))
        .add_source(
            config::File::from(configuration_directory.join(environment_filename)).required(false),
        )
        // Add in settings from environment variables (with a prefix of APP and '__' as separator)
        // E.g. `APP_CLIENT__SERVER_ADDRESS=http://10.0.2.2:8789` would set `Configuration.client.server_address`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .context("failed to load configuration")?;

    let configuration = settings
        .try_deserialize::<Configuration>()
        .context("configuration is invalid")?;
    anyhow::ensure!(
        configuration.client.server_address.starts_with("http"),
        "client.server_address must start with http but got {:?}",
        configuration.client.server_address
    );
    Ok(configuration)
}

/// The possible runtime environment for our application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}
