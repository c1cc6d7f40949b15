//! End-to-end flow over a mocked record store: load, render data for the
//! home screen, search, then mutate and observe the refreshed snapshot.

use residencia::model::{CareerInput, Collection};
use residencia::service::dashboard::DashboardService;
use residencia::service::listing::ListingService;
use residencia::service::records::RecordService;
use residencia::service::search::SearchService;
use residencia_test_utils::prelude::*;
use serde_json::json;

/// Expect one reload to feed the dashboard, the listings and the search
#[tokio::test]
async fn home_screen_renders_from_one_snapshot() {
    let mut test = TestSetup::new().await;
    let _careers = test.fixtures().with_list_endpoint(
        Collection::Carreras,
        vec![factory::career("c1", "Informática", "FTI")],
        1,
    );
    let _students = test.fixtures().with_list_endpoint(
        Collection::Estudiantes,
        vec![
            factory::student("e1", "María", Some("González"), Some("c1"), Some("r1")),
            factory::student("e2", "Pedro", Some("Ruiz"), Some("c1"), None),
        ],
        1,
    );
    let _rooms = test.fixtures().with_list_endpoint(
        Collection::Cuartos,
        vec![
            factory::room("r1", 101, Some("p1"), 2, 2),
            factory::room("r2", 102, Some("p1"), 2, 1),
            factory::room("r3", 103, Some("p1"), 4, 3),
        ],
        1,
    );
    let _floors = test.fixtures().with_list_endpoint(
        Collection::Plantas,
        vec![factory::floor("p1", 1)],
        1,
    );
    let _inspections = test.fixtures().with_list_endpoint(
        Collection::Cuartelerias,
        vec![
            factory::inspection("q1", Some("e1"), "2025-03-01", json!(true), json!(false)),
            factory::inspection("q2", Some("e2"), "2025-03-02", json!("true"), json!("false")),
        ],
        1,
    );
    let _sanctions = test.fixtures().with_list_endpoint(
        Collection::SancionDisciplinarias,
        vec![factory::sanction_legacy(
            "s1",
            "e1",
            "2025-01-10",
            "Ausencia injustificada",
        )],
        1,
    );
    let _rest = test.fixtures().with_empty_collections(&[
        Collection::Carreras,
        Collection::Estudiantes,
        Collection::Cuartos,
        Collection::Plantas,
        Collection::Cuartelerias,
        Collection::SancionDisciplinarias,
    ]);

    test.store.reload_all().await.unwrap();
    let snapshot = test.store.snapshot();

    let stats = DashboardService::new(&snapshot).stats();
    assert_eq!(stats.avg_inspections_per_student, 1.0);
    assert_eq!(stats.occupancy_percent, 75.0);
    assert_eq!(stats.total_students, 2);
    assert_eq!(stats.total_rooms, 3);
    assert_eq!(stats.total_inspections, 2);

    let rows = ListingService::new(&snapshot).students();
    assert_eq!(rows[0].career, "Informática");
    assert_eq!(rows[0].room, "Cuarto 101");
    assert_eq!(rows[1].room, "-");

    let results = SearchService::new(&snapshot).search("mar");
    assert_eq!(results.students.len(), 1);
    assert_eq!(results.sanctions.len(), 0);

    let sanction_hits = SearchService::new(&snapshot).search("ausencia");
    assert_eq!(sanction_hits.sanctions.len(), 1);
}

/// Expect a create to refresh the snapshot the next render reads
#[tokio::test]
async fn mutation_is_visible_after_the_awaited_reload() {
    let mut test = TestSetup::new().await;
    let _first = test.fixtures().with_empty_collections(&[]);
    test.store.reload_all().await.unwrap();
    assert!(test.store.snapshot().carreras.is_empty());

    let _create = test.fixtures().with_create_endpoint(
        Collection::Carreras,
        factory::career("c1", "Hidráulica", "FIC"),
        1,
    );
    let _careers = test.fixtures().with_list_endpoint(
        Collection::Carreras,
        vec![factory::career("c1", "Hidráulica", "FIC")],
        1,
    );
    let _rest = test
        .fixtures()
        .with_empty_collections(&[Collection::Carreras]);

    let service = RecordService::new(&test.store);
    let input = CareerInput {
        nombre: "Hidráulica".to_string(),
        facultad: "FIC".to_string(),
    };
    service.create(Collection::Carreras, &input).await.unwrap();

    let snapshot = test.store.snapshot();
    assert_eq!(snapshot.carreras.len(), 1);
    assert_eq!(snapshot.carreras[0].nombre, "Hidráulica");
}
