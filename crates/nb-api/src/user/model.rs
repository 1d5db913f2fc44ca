use nb_db::models::User;
use serde::{Deserialize, Serialize};

/// Registration payload for `POST /addUser/`
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    /// GDPR consent
    #[serde(default)]
    pub rgpd: bool,
}

/// Public view of a user, without the password hash
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub rgpd: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            firstname: user.firstname,
            lastname: user.lastname,
            email: user.email,
            rgpd: user.rgpd,
        }
    }
}
