use super::*;

mod snapshot {
    use super::*;

    /// Expect an empty snapshot before anything has been loaded
    #[tokio::test]
    async fn is_empty_before_the_first_reload() {
        let test = TestSetup::new().await;

        let snapshot = test.store.snapshot();

        assert!(snapshot.carreras.is_empty());
        assert!(snapshot.estudiantes.is_empty());
        assert!(snapshot.residencias.is_empty());
    }

    /// Expect a handed-out snapshot to be unaffected by a later reload
    #[tokio::test]
    async fn handed_out_copies_survive_a_reload() -> Result<(), TestError> {
        let mut test = TestSetup::new().await;
        let _first = test.fixtures().with_empty_collections(&[]);

        test.store.reload_all().await?;
        let before = test.store.snapshot();

        let _career_round = test.fixtures().with_list_endpoint(
            Collection::Carreras,
            vec![factory::career("c1", "Informática", "FTI")],
            1,
        );
        let _rest = test
            .fixtures()
            .with_empty_collections(&[Collection::Carreras]);

        test.store.reload_all().await?;

        assert!(before.carreras.is_empty());
        assert_eq!(test.store.snapshot().carreras.len(), 1);

        Ok(())
    }
}
