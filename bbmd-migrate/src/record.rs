use serde::{Deserialize, Serialize};

/// One stored text body, as the migration sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: i64,
    #[serde(default)]
    pub text: String,
}

impl ContentRecord {
    pub fn new(id: i64, text: impl Into<String>) -> Self {
        ContentRecord {
            id,
            text: text.into(),
        }
    }
}
