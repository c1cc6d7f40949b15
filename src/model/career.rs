use serde::{Deserialize, Serialize};

/// A degree program students are enrolled in.
#[derive(Clone, Debug, Deserialize)]
pub struct Career {
    pub id: String,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub facultad: String,
}

/// Payload for creating or updating a career.
#[derive(Clone, Debug, Serialize)]
pub struct CareerInput {
    pub nombre: String,
    pub facultad: String,
}
