use serde::{Deserialize, Serialize};

use super::fields;

/// A room-inspection duty ("cuartelería") record for one student.
#[derive(Clone, Debug, Deserialize)]
pub struct RoomInspection {
    pub id: String,
    #[serde(default)]
    pub id_estudiante: Option<String>,
    #[serde(default)]
    pub fecha: Option<String>,
    #[serde(default, deserialize_with = "fields::flag")]
    pub realizada: bool,
    #[serde(default, deserialize_with = "fields::flag")]
    pub especial: bool,
    #[serde(default)]
    pub justificacion: Option<String>,
}

/// Payload for creating or updating an inspection record.
#[derive(Clone, Debug, Serialize)]
pub struct InspectionInput {
    pub id_estudiante: String,
    pub fecha: String,
    pub realizada: bool,
    pub especial: bool,
    pub justificacion: String,
}
