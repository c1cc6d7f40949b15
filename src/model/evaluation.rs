use serde::{Deserialize, Serialize};

use super::fields;

/// A cleaning evaluation for one student.
///
/// The student reference was renamed between schema versions; records
/// exist under both `id_estudiante` and `id_estudiantes`.
#[derive(Clone, Debug, Deserialize)]
pub struct Evaluation {
    pub id: String,
    #[serde(default)]
    pub id_estudiante: Option<String>,
    #[serde(default)]
    pub id_estudiantes: Option<String>,
    #[serde(default)]
    pub fecha: Option<String>,
    #[serde(default, deserialize_with = "fields::flag")]
    pub calificacion: bool,
    #[serde(default)]
    pub semestre: Option<String>,
    #[serde(default)]
    pub observacion: Option<String>,
}

impl Evaluation {
    /// The evaluated student's id, trying the current spelling first.
    pub fn student_id(&self) -> Option<&str> {
        fields::first_present(&self.id_estudiante, &self.id_estudiantes)
    }
}

/// Payload for creating or updating an evaluation.
///
/// The live schema stores the student reference as `id_estudiantes`.
#[derive(Clone, Debug, Serialize)]
pub struct EvaluationInput {
    pub id_estudiantes: String,
    pub fecha: String,
    pub calificacion: bool,
    pub semestre: String,
    pub observacion: String,
}
