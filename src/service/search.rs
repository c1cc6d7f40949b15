//! Keyword search across students, sanctions and careers.

use crate::model::{Career, Sanction, Student};
use crate::store::Snapshot;

/// Matches for one query, grouped the way the results panel lists them.
///
/// Each group keeps the collection's own order; there is no scoring.
#[derive(Clone, Debug, Default)]
pub struct SearchResults<'a> {
    pub students: Vec<&'a Student>,
    pub sanctions: Vec<&'a Sanction>,
    pub careers: Vec<&'a Career>,
}

impl SearchResults<'_> {
    /// True when no group matched, the "no results for …" state.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty() && self.sanctions.is_empty() && self.careers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.students.len() + self.sanctions.len() + self.careers.len()
    }
}

/// Case-insensitive substring search over one snapshot.
pub struct SearchService<'a> {
    snapshot: &'a Snapshot,
}

impl<'a> SearchService<'a> {
    /// Creates a new instance of [`SearchService`] over `snapshot`.
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self { snapshot }
    }

    /// Matches the lowercased query against student full names, sanction
    /// reasons and career names.
    ///
    /// Callers gate the search box on non-empty input themselves; an
    /// empty query simply matches everything.
    pub fn search(&self, query: &str) -> SearchResults<'a> {
        let query = query.to_lowercase();

        let students = self
            .snapshot
            .estudiantes
            .iter()
            .filter(|student| student.full_name().to_lowercase().contains(&query))
            .collect();

        let sanctions = self
            .snapshot
            .sanciones
            .iter()
            .filter(|sanction| {
                sanction
                    .reason()
                    .unwrap_or("")
                    .to_lowercase()
                    .contains(&query)
            })
            .collect();

        let careers = self
            .snapshot
            .carreras
            .iter()
            .filter(|career| career.nombre.to_lowercase().contains(&query))
            .collect();

        SearchResults {
            students,
            sanctions,
            careers,
        }
    }
}

#[cfg(test)]
mod tests {
    use residencia_test_utils::prelude::*;

    use crate::model::{Career, Sanction, Student};
    use crate::store::Snapshot;

    use super::SearchService;

    fn snapshot() -> Snapshot {
        let students: Vec<Student> = vec![
            serde_json::from_value(factory::student(
                "e1",
                "María",
                Some("González"),
                None,
                None,
            ))
            .unwrap(),
            serde_json::from_value(factory::student("e2", "Pedro", Some("Ruiz"), None, None))
                .unwrap(),
        ];
        let sanctions: Vec<Sanction> = vec![
            serde_json::from_value(factory::sanction(
                "s1",
                Some("e2"),
                "2025-01-10",
                "Ausencia injustificada",
            ))
            .unwrap(),
            serde_json::from_value(factory::sanction_legacy(
                "s2",
                "e1",
                "2025-01-12",
                "Ruido en la madrugada",
            ))
            .unwrap(),
        ];
        let careers: Vec<Career> = vec![
            serde_json::from_value(factory::career("c1", "Informática", "FTI")).unwrap(),
            serde_json::from_value(factory::career("c2", "Telecomunicaciones", "FTE")).unwrap(),
        ];
        Snapshot {
            estudiantes: students,
            sanciones: sanctions,
            carreras: careers,
            ..Default::default()
        }
    }

    mod search {
        use super::*;

        /// Expect case-folded substring matching on student names
        #[test]
        fn matches_students_case_insensitively() {
            let snapshot = snapshot();
            let results = SearchService::new(&snapshot).search("mar");

            let names: Vec<String> = results
                .students
                .iter()
                .map(|student| student.full_name())
                .collect();
            assert_eq!(names, vec!["María González"]);
        }

        /// Expect the surname to be searchable through the full name
        #[test]
        fn matches_on_the_surname_too() {
            let snapshot = snapshot();
            let results = SearchService::new(&snapshot).search("ruiz");

            assert_eq!(results.students.len(), 1);
            assert_eq!(results.students[0].nombre, "Pedro");
        }

        /// Expect sanction reasons under the legacy spelling to match
        #[test]
        fn matches_legacy_sanction_reasons() {
            let snapshot = snapshot();
            let results = SearchService::new(&snapshot).search("madrugada");

            assert_eq!(results.sanctions.len(), 1);
            assert_eq!(results.sanctions[0].id, "s2");
        }

        /// Expect career names to match and order to be preserved
        #[test]
        fn matches_careers_in_collection_order() {
            let snapshot = snapshot();
            let results = SearchService::new(&snapshot).search("ca");

            let names: Vec<&str> = results
                .careers
                .iter()
                .map(|career| career.nombre.as_str())
                .collect();
            assert_eq!(names, vec!["Informática", "Telecomunicaciones"]);
        }

        /// Expect a miss on every group to report empty, not fail
        #[test]
        fn reports_empty_when_nothing_matches() {
            let snapshot = snapshot();
            let results = SearchService::new(&snapshot).search("zzzz");

            assert!(results.is_empty());
            assert_eq!(results.len(), 0);
        }
    }
}
