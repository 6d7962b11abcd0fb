use serde::{Deserialize, Serialize};

/// On-disk card catalog (`cards.json`). Cards keep their listed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub cards: Vec<CardEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardEntry {
    pub name: String,
    pub meaning: String,
}
