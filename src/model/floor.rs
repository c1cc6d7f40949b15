use serde::{Deserialize, Serialize};

/// One floor ("planta") of a residence building.
#[derive(Clone, Debug, Deserialize)]
pub struct Floor {
    pub id: String,
    #[serde(default)]
    pub numero_planta: i64,
}

/// Payload for creating or updating a floor.
#[derive(Clone, Debug, Serialize)]
pub struct FloorInput {
    pub numero_planta: i64,
}
