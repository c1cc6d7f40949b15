//! Derived indicators for the home dashboard.

use crate::model::ItemState;
use crate::store::Snapshot;

/// Aggregate figures for the home screen, recomputed on every render.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardStats {
    /// Performed inspections per registered student, one decimal.
    pub avg_inspections_per_student: f64,
    /// Occupied beds over total capacity as a percentage, one decimal.
    pub occupancy_percent: f64,
    pub occupied_beds: i64,
    pub total_capacity: i64,
    /// Passed evaluations over all evaluations as a percentage.
    pub evaluation_pass_percent: f64,
    /// Items in `Bueno` state over all items as a percentage.
    pub inventory_good_percent: f64,
    pub total_students: usize,
    pub total_rooms: usize,
    pub total_inspections: usize,
}

/// Computes the dashboard figures from one snapshot.
pub struct DashboardService<'a> {
    snapshot: &'a Snapshot,
}

impl<'a> DashboardService<'a> {
    /// Creates a new instance of [`DashboardService`] over `snapshot`.
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self { snapshot }
    }

    /// Every ratio is guarded against an empty denominator and reports 0
    /// instead.
    pub fn stats(&self) -> DashboardStats {
        let snapshot = self.snapshot;

        let performed = snapshot
            .cuartelerias
            .iter()
            .filter(|inspection| inspection.realizada)
            .count();
        let avg_inspections_per_student = if snapshot.estudiantes.is_empty() {
            0.0
        } else {
            round1(performed as f64 / snapshot.estudiantes.len() as f64)
        };

        let total_capacity: i64 = snapshot.cuartos.iter().map(|room| room.capacidad).sum();
        let occupied_beds: i64 = snapshot
            .cuartos
            .iter()
            .map(|room| room.cantidad_estudiantes)
            .sum();
        let occupancy_percent = if total_capacity > 0 {
            round1(occupied_beds as f64 / total_capacity as f64 * 100.0)
        } else {
            0.0
        };

        let passed = snapshot
            .evaluaciones
            .iter()
            .filter(|evaluation| evaluation.calificacion)
            .count();
        let evaluation_pass_percent = if snapshot.evaluaciones.is_empty() {
            0.0
        } else {
            round1(passed as f64 / snapshot.evaluaciones.len() as f64 * 100.0)
        };

        let good = snapshot
            .medios
            .iter()
            .filter(|item| item.estado == ItemState::Bueno)
            .count();
        let inventory_good_percent = if snapshot.medios.is_empty() {
            0.0
        } else {
            round1(good as f64 / snapshot.medios.len() as f64 * 100.0)
        };

        DashboardStats {
            avg_inspections_per_student,
            occupancy_percent,
            occupied_beds,
            total_capacity,
            evaluation_pass_percent,
            inventory_good_percent,
            total_students: snapshot.estudiantes.len(),
            total_rooms: snapshot.cuartos.len(),
            total_inspections: snapshot.cuartelerias.len(),
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
