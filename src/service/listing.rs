//! Table rows for the entity screens, references resolved and dates
//! formatted.
//!
//! Careers, floors and residences render their records directly; every
//! other screen joins at least one other collection and gets a row type
//! here so the renderer receives finished strings.

use crate::model::ItemState;
use crate::service::lookup::LookupService;
use crate::store::Snapshot;
use crate::util::time::format_date;

/// One line of the students table.
#[derive(Clone, Debug)]
pub struct StudentRow {
    pub id: String,
    pub full_name: String,
    pub ci: String,
    pub career: String,
    pub room: String,
}

/// One line of the rooms table.
#[derive(Clone, Debug)]
pub struct RoomRow {
    pub id: String,
    pub numero: i64,
    pub floor: String,
    pub capacidad: i64,
    pub cantidad_estudiantes: i64,
}

/// One line of the buildings table.
#[derive(Clone, Debug)]
pub struct BuildingRow {
    pub id: String,
    pub numero_bloque: String,
    pub residence: String,
}

/// One line of the inspections table.
#[derive(Clone, Debug)]
pub struct InspectionRow {
    pub id: String,
    pub student: String,
    pub date: String,
    pub realizada: bool,
    pub especial: bool,
}

/// One line of the evaluations table.
#[derive(Clone, Debug)]
pub struct EvaluationRow {
    pub id: String,
    pub student: String,
    pub date: String,
    pub aprobado: bool,
    pub semestre: String,
}

/// One line of the inventory table.
#[derive(Clone, Debug)]
pub struct InventoryRow {
    pub id: String,
    pub numero_inventario: String,
    pub tipo: String,
    pub estado: ItemState,
    pub room: String,
}

/// One line of the sanctions table.
#[derive(Clone, Debug)]
pub struct SanctionRow {
    pub id: String,
    pub student: String,
    pub date: String,
    pub motivo: String,
}

/// Builds display rows for the listing screens.
pub struct ListingService<'a> {
    snapshot: &'a Snapshot,
    lookup: LookupService<'a>,
}

impl<'a> ListingService<'a> {
    /// Creates a new instance of [`ListingService`] over `snapshot`.
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self {
            snapshot,
            lookup: LookupService::new(snapshot),
        }
    }

    pub fn students(&self) -> Vec<StudentRow> {
        self.snapshot
            .estudiantes
            .iter()
            .map(|student| StudentRow {
                id: student.id.clone(),
                full_name: student.full_name(),
                ci: student.ci.clone(),
                career: self.lookup.career_label(student.id_carrera.as_deref()),
                room: self.lookup.room_label(student.id_cuarto.as_deref()),
            })
            .collect()
    }

    pub fn rooms(&self) -> Vec<RoomRow> {
        self.snapshot
            .cuartos
            .iter()
            .map(|room| RoomRow {
                id: room.id.clone(),
                numero: room.numero,
                floor: self.lookup.floor_label(room.id_planta.as_deref()),
                capacidad: room.capacidad,
                cantidad_estudiantes: room.cantidad_estudiantes,
            })
            .collect()
    }

    pub fn buildings(&self) -> Vec<BuildingRow> {
        self.snapshot
            .edificios
            .iter()
            .map(|building| BuildingRow {
                id: building.id.clone(),
                numero_bloque: building.numero_bloque.clone(),
                residence: self.lookup.residence_label(building.residence_id()),
            })
            .collect()
    }

    pub fn inspections(&self) -> Vec<InspectionRow> {
        self.snapshot
            .cuartelerias
            .iter()
            .map(|inspection| InspectionRow {
                id: inspection.id.clone(),
                student: self
                    .lookup
                    .student_label(inspection.id_estudiante.as_deref()),
                date: format_date(inspection.fecha.as_deref()),
                realizada: inspection.realizada,
                especial: inspection.especial,
            })
            .collect()
    }

    pub fn evaluations(&self) -> Vec<EvaluationRow> {
        self.snapshot
            .evaluaciones
            .iter()
            .map(|evaluation| EvaluationRow {
                id: evaluation.id.clone(),
                student: self.lookup.student_label(evaluation.student_id()),
                date: format_date(evaluation.fecha.as_deref()),
                aprobado: evaluation.calificacion,
                semestre: evaluation
                    .semestre
                    .clone()
                    .filter(|value| !value.is_empty())
                    .unwrap_or_else(|| "-".to_string()),
            })
            .collect()
    }

    pub fn inventory(&self) -> Vec<InventoryRow> {
        self.snapshot
            .medios
            .iter()
            .map(|item| InventoryRow {
                id: item.id.clone(),
                numero_inventario: item.numero_inventario.clone(),
                tipo: item.tipo.clone(),
                estado: item.estado,
                room: self.lookup.room_number_label(item.id_cuarto.as_deref()),
            })
            .collect()
    }

    pub fn sanctions(&self) -> Vec<SanctionRow> {
        self.snapshot
            .sanciones
            .iter()
            .map(|sanction| SanctionRow {
                id: sanction.id.clone(),
                student: self.lookup.student_label(sanction.student_id()),
                date: format_date(sanction.date()),
                motivo: sanction.reason().unwrap_or("-").to_string(),
            })
            .collect()
    }
}
