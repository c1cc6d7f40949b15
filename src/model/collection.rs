use std::fmt;

/// The named record collections of the backing store.
///
/// The wire names must be preserved exactly for backend compatibility;
/// note the historical `evaluacions` spelling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    Carreras,
    Estudiantes,
    Cuartos,
    Plantas,
    Edificios,
    Cuartelerias,
    Evaluaciones,
    MediosBasicos,
    SancionDisciplinarias,
    Residencias,
}

impl Collection {
    /// Every collection, in the order a full reload fetches them.
    pub const ALL: [Collection; 10] = [
        Collection::Carreras,
        Collection::Estudiantes,
        Collection::Cuartos,
        Collection::Plantas,
        Collection::Edificios,
        Collection::Cuartelerias,
        Collection::Evaluaciones,
        Collection::MediosBasicos,
        Collection::SancionDisciplinarias,
        Collection::Residencias,
    ];

    /// Wire name used in record-store request paths.
    pub fn name(self) -> &'static str {
        match self {
            Collection::Carreras => "carreras",
            Collection::Estudiantes => "estudiantes",
            Collection::Cuartos => "cuartos",
            Collection::Plantas => "plantas",
            Collection::Edificios => "edificios",
            Collection::Cuartelerias => "cuartelerias",
            Collection::Evaluaciones => "evaluacions",
            Collection::MediosBasicos => "mediosbasicos",
            Collection::SancionDisciplinarias => "sancion_disciplinarias",
            Collection::Residencias => "residencias",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
