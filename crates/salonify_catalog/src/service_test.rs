#[cfg(test)]
mod tests {
    use crate::service::mock::MockCatalogProvider;
    use crate::service::{WireCatalogItem, WireCatalogResponse};
    use salonify_common::models::Service;
    use salonify_common::services::CatalogProvider;

    #[test]
    fn wire_item_maps_into_the_shared_service_model() {
        let json = r#"{
            "id": "svc-color",
            "name": "Full Color",
            "category": "Color",
            "price": 14500,
            "duration_minutes": 90,
            "tier_prices": { "senior": 16500 }
        }"#;
        let item: WireCatalogItem = serde_json::from_str(json).unwrap();
        let service = Service::from(item);

        assert_eq!(service.id, "svc-color");
        assert_eq!(service.cost, 14500);
        assert_eq!(service.duration_minutes, 90);
        assert_eq!(service.resolved_cost(Some("senior")), 16500);
        assert_eq!(service.resolved_cost(None), 14500);
    }

    #[test]
    fn wire_item_defaults_optional_fields() {
        let json = r#"{ "id": "svc-cut", "name": "Cut", "price": 9500 }"#;
        let item: WireCatalogItem = serde_json::from_str(json).unwrap();
        let service = Service::from(item);

        assert_eq!(service.category, "Uncategorized");
        assert_eq!(service.duration_minutes, 0);
        assert!(service.tier_prices.is_none());
    }

    #[test]
    fn wire_response_tolerates_a_missing_service_list() {
        let body: WireCatalogResponse = serde_json::from_str("{}").unwrap();
        assert!(body.services.is_empty());
    }

    fn sample_service(id: &str) -> Service {
        Service {
            id: id.to_string(),
            name: format!("Service {}", id),
            category: "Hair".to_string(),
            cost: 9500,
            duration_minutes: 45,
            tier_prices: None,
        }
    }

    #[tokio::test]
    async fn mock_provider_lists_and_finds_services() {
        let provider = MockCatalogProvider::new(vec![
            sample_service("svc-cut"),
            sample_service("svc-color"),
        ]);

        let services = provider.list_services().await.unwrap();
        assert_eq!(services.len(), 2);

        let found = provider.get_service("svc-color").await.unwrap();
        assert_eq!(found.map(|s| s.id), Some("svc-color".to_string()));

        let missing = provider.get_service("svc-wax").await.unwrap();
        assert!(missing.is_none());
    }
}
