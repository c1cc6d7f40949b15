use serde::{Deserialize, Serialize};

/// A resident student.
#[derive(Clone, Debug, Deserialize)]
pub struct Student {
    pub id: String,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub apellidos: Option<String>,
    #[serde(default)]
    pub ci: String,
    #[serde(default)]
    pub sexo: String,
    #[serde(default)]
    pub id_carrera: Option<String>,
    #[serde(default)]
    pub id_cuarto: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub direccion: Option<String>,
}

impl Student {
    /// Name and surname joined for display and search; records saved
    /// without a surname render the bare name.
    pub fn full_name(&self) -> String {
        match self.apellidos.as_deref() {
            Some(apellidos) if !apellidos.is_empty() => {
                format!("{} {}", self.nombre, apellidos)
            }
            _ => self.nombre.clone(),
        }
    }
}

/// Payload for creating or updating a student.
#[derive(Clone, Debug, Serialize)]
pub struct StudentInput {
    pub nombre: String,
    pub apellidos: String,
    pub ci: String,
    pub sexo: String,
    pub id_carrera: String,
    /// `None` leaves the student without an assigned room.
    pub id_cuarto: Option<String>,
    pub telefono: String,
    pub direccion: String,
}

#[cfg(test)]
mod tests {
    use residencia_test_utils::prelude::*;

    use super::Student;

    /// Expect the surname to be appended only when present and non-empty
    #[test]
    fn full_name_tolerates_a_missing_surname() {
        let with_surname: Student =
            serde_json::from_value(factory::student("e1", "María", Some("González"), None, None))
                .unwrap();
        assert_eq!(with_surname.full_name(), "María González");

        let without_surname: Student =
            serde_json::from_value(factory::student("e2", "Pedro", None, None, None)).unwrap();
        assert_eq!(without_surname.full_name(), "Pedro");
    }
}
