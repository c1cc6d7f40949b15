use serde::{Deserialize, Serialize};

use super::fields;

/// A residence building block.
///
/// Older records stored the residence reference under `residencia`; newer
/// ones use `id_residencia`. [`Building::residence_id`] reads both.
#[derive(Clone, Debug, Deserialize)]
pub struct Building {
    pub id: String,
    #[serde(default)]
    pub numero_bloque: String,
    #[serde(default)]
    pub id_residencia: Option<String>,
    #[serde(default)]
    pub residencia: Option<String>,
}

impl Building {
    /// The linked residence id, whichever spelling the record was saved
    /// under.
    pub fn residence_id(&self) -> Option<&str> {
        fields::first_present(&self.id_residencia, &self.residencia)
    }
}

/// Payload for creating or updating a building.
#[derive(Clone, Debug, Serialize)]
pub struct BuildingInput {
    pub numero_bloque: String,
    pub id_residencia: String,
}
