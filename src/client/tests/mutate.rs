use super::*;

mod create {
    use super::*;

    /// Expect the created record to come back as stored
    #[tokio::test]
    async fn posts_fields_and_returns_the_record() {
        let mut test = TestSetup::new().await;
        let endpoint = test.fixtures().with_create_endpoint(
            Collection::Carreras,
            factory::career("c1", "Informática", "FTI"),
            1,
        );

        let input = CareerInput {
            nombre: "Informática".to_string(),
            facultad: "FTI".to_string(),
        };
        let created: Career = test
            .store
            .client()
            .create(Collection::Carreras, &input)
            .await
            .unwrap();

        assert_eq!(created.id, "c1");
        assert_eq!(created.facultad, "FTI");
        endpoint.assert();
    }

    /// Expect a validation failure to carry the store's message verbatim
    #[tokio::test]
    async fn surfaces_a_rejected_create() {
        let mut test = TestSetup::new().await;
        let _endpoint = test.fixtures().with_failed_create_endpoint(
            Collection::Carreras,
            400,
            "Failed to create record.",
        );

        let input = CareerInput {
            nombre: String::new(),
            facultad: String::new(),
        };
        let result: Result<Career, Error> =
            test.store.client().create(Collection::Carreras, &input).await;

        assert!(matches!(
            result,
            Err(Error::Rejected(message)) if message == "Failed to create record."
        ));
    }
}

mod update {
    use super::*;

    /// Expect the patch to land on the record's own path
    #[tokio::test]
    async fn patches_one_record() {
        let mut test = TestSetup::new().await;
        let endpoint = test.fixtures().with_update_endpoint(
            Collection::Carreras,
            "c1",
            factory::career("c1", "Automática", "FTI"),
            1,
        );

        let input = CareerInput {
            nombre: "Automática".to_string(),
            facultad: "FTI".to_string(),
        };
        let updated: Career = test
            .store
            .client()
            .update(Collection::Carreras, "c1", &input)
            .await
            .unwrap();

        assert_eq!(updated.nombre, "Automática");
        endpoint.assert();
    }
}

mod delete {
    use super::*;

    /// Expect a 204 with no body to succeed
    #[tokio::test]
    async fn deletes_one_record() {
        let mut test = TestSetup::new().await;
        let endpoint = test
            .fixtures()
            .with_delete_endpoint(Collection::Carreras, "c1", 1);

        test.store
            .client()
            .delete(Collection::Carreras, "c1")
            .await
            .unwrap();

        endpoint.assert();
    }
}
