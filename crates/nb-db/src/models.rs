use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User account, including the stored password hash.
///
/// Never serialize this directly to a client; the API layer maps it to a
/// response type without the hash.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    /// Unique user identifier
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    /// Login identity (unique)
    pub email: String,
    /// bcrypt hash of the password
    pub password_hash: String,
    /// GDPR consent flag
    pub rgpd: bool,
}

/// Deck model - a named collection of cards owned by one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Deck {
    /// Unique deck identifier
    pub id: i64,
    /// Deck name
    pub name: String,
    /// Free-form visibility label (e.g. "private", "public")
    pub visibility: String,
    /// Display color chosen by the owner
    pub color: String,
    /// Owning user, immutable after creation
    pub owner_id: i64,
}

/// Review state of a card, stored as the `card_state` enum type.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "card_state")]
pub enum CardState {
    #[default]
    #[serde(rename = "not memorized")]
    #[sqlx(rename = "not memorized")]
    NotMemorized,
    #[serde(rename = "memorized")]
    #[sqlx(rename = "memorized")]
    Memorized,
    #[serde(rename = "in progress")]
    #[sqlx(rename = "in progress")]
    InProgress,
}

impl CardState {
    /// The label used on the wire and in the database.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotMemorized => "not memorized",
            Self::Memorized => "memorized",
            Self::InProgress => "in progress",
        }
    }
}

impl std::fmt::Display for CardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Card model - front/back content with a review state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Card {
    /// Unique card identifier
    pub id: i64,
    pub front_content: String,
    pub back_content: String,
    pub state: CardState,
    /// Deck this card belongs to, immutable after creation
    pub deck_id: i64,
}

/// Per-(user, deck) progress counter, created alongside the deck
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct DeckProgress {
    pub id: i64,
    pub user_id: i64,
    pub deck_id: i64,
    pub progress: i32,
}
