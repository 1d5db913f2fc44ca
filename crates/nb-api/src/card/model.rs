use nb_db::models::CardState;
use serde::Deserialize;

/// Payload for `POST /addCard/`
#[derive(Debug, Clone, Deserialize)]
pub struct NewCard {
    pub front_content: String,
    pub back_content: String,
}

/// `?deck_id=` on `POST /addCard/`
#[derive(Debug, Deserialize)]
pub struct AddCardQuery {
    pub deck_id: i64,
}

/// `?state=` on `PUT /updateCard/{id}`, `not memorized` when absent
#[derive(Debug, Deserialize)]
pub struct UpdateCardQuery {
    #[serde(default)]
    pub state: CardState,
}
