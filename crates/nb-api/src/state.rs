use axum::extract::FromRef;
use sqlx::PgPool;

use crate::{ApiConfig, config::Environment};

/// Settings the auth component needs on every request.
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_expiry_minutes: i64,
    pub bcrypt_cost: u32,
}

// The signing secret never reaches logs
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("jwt_expiry_minutes", &self.jwt_expiry_minutes)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct ApiState {
    pub pool: PgPool,
    pub auth: AuthConfig,
    pub environment: Environment,
    pub enforce_card_ownership: bool,
}

impl ApiState {
    pub fn new(config: &ApiConfig, pool: PgPool) -> Self {
        if !config.enforce_card_ownership {
            tracing::warn!(
                "Card ownership checks are disabled: any authenticated user can add cards to or update cards of any deck"
            );
        }

        Self {
            pool,
            auth: AuthConfig {
                jwt_secret: config.jwt_secret.clone(),
                jwt_expiry_minutes: config.jwt_expiry_minutes,
                bcrypt_cost: config.bcrypt_cost,
            },
            environment: config.env.clone(),
            enforce_card_ownership: config.enforce_card_ownership,
        }
    }
}

impl FromRef<ApiState> for AuthConfig {
    fn from_ref(state: &ApiState) -> Self {
        state.auth.clone()
    }
}

impl FromRef<ApiState> for PgPool {
    fn from_ref(state: &ApiState) -> Self {
        state.pool.clone()
    }
}
