use serde::{Deserialize, Serialize};

/// A bedroom on one floor of a residence building.
#[derive(Clone, Debug, Deserialize)]
pub struct Room {
    pub id: String,
    #[serde(default)]
    pub numero: i64,
    #[serde(default)]
    pub id_planta: Option<String>,
    #[serde(default)]
    pub capacidad: i64,
    #[serde(default)]
    pub cantidad_estudiantes: i64,
}

/// Payload for creating or updating a room.
#[derive(Clone, Debug, Serialize)]
pub struct RoomInput {
    pub numero: i64,
    pub id_planta: String,
    pub capacidad: i64,
    pub cantidad_estudiantes: i64,
}
