use serde::Deserialize;

/// Payload for `POST /addDeck/`
#[derive(Debug, Clone, Deserialize)]
pub struct NewDeck {
    pub name: String,
    pub visibility: String,
    pub color: String,
}
