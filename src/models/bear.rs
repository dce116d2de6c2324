use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Bear {
    pub id: i64,
    pub name: Option<String>,
    pub height: Option<f64>,
}

/// Body for create and update. Missing fields deserialize to `None` and are
/// written as NULL.
#[derive(Debug, Default, Deserialize)]
pub struct BearPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub height: Option<f64>,
}
