use serde::Deserialize;

/// Deployment environment, selects logging format and HSTS.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Runtime configuration, read from environment variables.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiConfig {
    pub database_url: String,
    pub jwt_secret: String,
    #[serde(default = "default_jwt_expiry_minutes")]
    pub jwt_expiry_minutes: i64,
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
    #[serde(default = "default_db_max_connections")]
    pub db_max_connections: u32,
    #[serde(default)]
    pub env: Environment,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Comma separated list; unset means permissive CORS
    pub allowed_origins: Option<String>,
    /// Check deck ownership when adding or updating cards
    #[serde(default)]
    pub enforce_card_ownership: bool,
}

fn default_jwt_expiry_minutes() -> i64 {
    30
}

fn default_bcrypt_cost() -> u32 {
    bcrypt::DEFAULT_COST
}

fn default_db_max_connections() -> u32 {
    10
}

fn default_port() -> u16 {
    3000
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    /// Allowed CORS origins, `None` when the variable is unset or blank.
    pub fn parsed_allowed_origins(&self) -> Option<Vec<String>> {
        let origins: Vec<String> = self
            .allowed_origins
            .as_deref()?
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        (!origins.is_empty()).then_some(origins)
    }
}
