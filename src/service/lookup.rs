//! Record-reference resolution against one snapshot.

use crate::model::{Building, Career, Floor, Residence, Room, Student};
use crate::store::Snapshot;

/// Resolves record references within one snapshot.
///
/// The store does not enforce referential integrity: a reference may be
/// absent, empty, or point at a record that was deleted. Every resolver
/// treats all three the same way and returns `None`; the label helpers
/// turn that into the placeholder text the tables show.
pub struct LookupService<'a> {
    snapshot: &'a Snapshot,
}

impl<'a> LookupService<'a> {
    /// Creates a new instance of [`LookupService`] over `snapshot`.
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self { snapshot }
    }

    pub fn career(&self, id: Option<&str>) -> Option<&'a Career> {
        let id = non_empty(id)?;
        self.snapshot.carreras.iter().find(|career| career.id == id)
    }

    pub fn student(&self, id: Option<&str>) -> Option<&'a Student> {
        let id = non_empty(id)?;
        self.snapshot
            .estudiantes
            .iter()
            .find(|student| student.id == id)
    }

    pub fn room(&self, id: Option<&str>) -> Option<&'a Room> {
        let id = non_empty(id)?;
        self.snapshot.cuartos.iter().find(|room| room.id == id)
    }

    pub fn floor(&self, id: Option<&str>) -> Option<&'a Floor> {
        let id = non_empty(id)?;
        self.snapshot.plantas.iter().find(|floor| floor.id == id)
    }

    pub fn building(&self, id: Option<&str>) -> Option<&'a Building> {
        let id = non_empty(id)?;
        self.snapshot
            .edificios
            .iter()
            .find(|building| building.id == id)
    }

    pub fn residence(&self, id: Option<&str>) -> Option<&'a Residence> {
        let id = non_empty(id)?;
        self.snapshot
            .residencias
            .iter()
            .find(|residence| residence.id == id)
    }

    /// Career name for a student row, `-` when unlinked.
    pub fn career_label(&self, id: Option<&str>) -> String {
        self.career(id)
            .map(|career| career.nombre.clone())
            .unwrap_or_else(|| "-".to_string())
    }

    /// `Cuarto {n}` for a linked room, `-` otherwise.
    pub fn room_label(&self, id: Option<&str>) -> String {
        self.room(id)
            .map(|room| format!("Cuarto {}", room.numero))
            .unwrap_or_else(|| "-".to_string())
    }

    /// Bare room number for the inventory table, `-` when unlinked.
    pub fn room_number_label(&self, id: Option<&str>) -> String {
        self.room(id)
            .map(|room| room.numero.to_string())
            .unwrap_or_else(|| "-".to_string())
    }

    /// `Planta {n}` for a linked floor, `Planta -` otherwise.
    pub fn floor_label(&self, id: Option<&str>) -> String {
        self.floor(id)
            .map(|floor| format!("Planta {}", floor.numero_planta))
            .unwrap_or_else(|| "Planta -".to_string())
    }

    /// Student display name, `No asignado` when the reference is dangling.
    pub fn student_label(&self, id: Option<&str>) -> String {
        self.student(id)
            .map(|student| student.nombre.clone())
            .unwrap_or_else(|| "No asignado".to_string())
    }

    /// Residence address for a building row. A reference that no longer
    /// resolves keeps the id visible so the broken link can be repaired;
    /// a missing reference renders as `-`.
    pub fn residence_label(&self, id: Option<&str>) -> String {
        match non_empty(id) {
            Some(id) => match self.residence(Some(id)) {
                Some(residence) => residence.direccion.clone(),
                None => format!("ID no vinculado ({id})"),
            },
            None => "-".to_string(),
        }
    }
}

fn non_empty(id: Option<&str>) -> Option<&str> {
    id.filter(|value| !value.is_empty())
}
