use serde::{Deserialize, Serialize};

use super::fields;

/// A disciplinary sanction against a student.
///
/// The oldest records in this collection predate the lowercase field
/// convention, so every spelling that was ever written stays readable
/// here; new records are only written with the lowercase names.
#[derive(Clone, Debug, Deserialize)]
pub struct Sanction {
    pub id: String,
    #[serde(default)]
    pub id_estudiante: Option<String>,
    #[serde(default)]
    pub id_estudiantes: Option<String>,
    #[serde(default)]
    pub fecha: Option<String>,
    #[serde(default, rename = "Fecha")]
    pub fecha_legacy: Option<String>,
    #[serde(default)]
    pub motivo: Option<String>,
    #[serde(default, rename = "Motivo")]
    pub motivo_legacy: Option<String>,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default, rename = "Descripcion")]
    pub descripcion_legacy: Option<String>,
}

impl Sanction {
    /// The sanctioned student's id, trying the current spelling first.
    pub fn student_id(&self) -> Option<&str> {
        fields::first_present(&self.id_estudiante, &self.id_estudiantes)
    }

    pub fn date(&self) -> Option<&str> {
        fields::first_present(&self.fecha, &self.fecha_legacy)
    }

    pub fn reason(&self) -> Option<&str> {
        fields::first_present(&self.motivo, &self.motivo_legacy)
    }

    pub fn description(&self) -> Option<&str> {
        fields::first_present(&self.descripcion, &self.descripcion_legacy)
    }
}

/// Payload for creating or updating a sanction; writes the lowercase
/// field names only.
#[derive(Clone, Debug, Serialize)]
pub struct SanctionInput {
    pub id_estudiante: String,
    pub fecha: String,
    pub motivo: String,
    pub descripcion: String,
}
