pub const DATABASE_PATH_VAR: &str = "DATABASE_PATH";

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub database_path: String,
    pub bind_address: [u8; 4],
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            database_path: "scorekeeper.db".to_string(),
            bind_address: [0, 0, 0, 0],
        }
    }
}

impl ServerSettings {
    /// Defaults, with the database path overridable through `DATABASE_PATH`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            database_path: std::env::var(DATABASE_PATH_VAR).unwrap_or(defaults.database_path),
            ..defaults
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            server: ServerSettings::from_env(),
        }
    }
}
