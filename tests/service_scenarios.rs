// End-to-end scenarios through the clustering service
use order_clustering::models::{BagType, OrderStatus};
use order_clustering::{
    ClusterError, ClusteringConfig, ClusteringService, Coordinates, InMemorySource,
    JsonSnapshotSource, PendingOrder, SourceError,
};
use std::io::Write;

// A single 1-litre bag type keeps quantities and litres the same number
fn litre_source(orders: &[(u64, f64, f64, u32)]) -> InMemorySource {
    let mut source = InMemorySource::default().with_bag_type(BagType::new(1, "Litre", 1));
    for &(id, latitude, longitude, litres) in orders {
        source.add_order(
            OrderStatus::Paid,
            PendingOrder::new(id, Coordinates::new(latitude, longitude)).with_bags(1, litres),
        );
    }
    source
}

#[test]
fn nearby_orders_share_a_cluster_and_far_order_stands_alone() {
    let source = litre_source(&[(1, 0.0, 0.0, 50), (2, 0.0, 0.001, 80), (3, 10.0, 10.0, 30)]);
    let service = ClusteringService::new(source, ClusteringConfig::default());

    let groups = service.get_clustered_coords(5.0, 150).unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].order_ids, vec![1, 2]);
    assert_eq!(groups[0].total_litres, 130);
    assert_eq!(groups[0].representative, Coordinates::new(0.0, 0.0));
    assert_eq!(groups[1].order_ids, vec![3]);
    assert_eq!(groups[1].total_litres, 30);
}

#[test]
fn oversized_single_order_forms_its_own_cluster() {
    let source = litre_source(&[(4, 46.48, 30.73, 500)]);
    let service = ClusteringService::new(source, ClusteringConfig::default());

    let groups = service.get_clustered_coords(5.0, 100).unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].order_ids, vec![4]);
    assert_eq!(groups[0].total_litres, 500);
}

#[test]
fn anchor_collects_nearby_order_and_rest_falls_through() {
    let source = litre_source(&[(5, 5.01, 5.01, 40), (6, 20.0, 20.0, 40)]);
    let config = ClusteringConfig {
        base_distance_km: 5.0,
        default_litre_target: 1000,
    };
    let service = ClusteringService::new(source, config);

    let groups = service
        .get_clustered_coords_along_with_specified(&[Coordinates::new(5.0, 5.0)], 100, 0.0)
        .unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].representative, Coordinates::new(5.0, 5.0));
    assert_eq!(groups[0].order_ids, vec![5]);
    assert_eq!(groups[0].centroid, Coordinates::new(5.01, 5.01));
    assert_eq!(groups[1].representative, Coordinates::new(20.0, 20.0));
    assert_eq!(groups[1].order_ids, vec![6]);
}

#[test]
fn empty_source_yields_empty_results() {
    let service = ClusteringService::new(litre_source(&[]), ClusteringConfig::default());

    assert!(service.get_clustered_coords(5.0, 100).unwrap().is_empty());
    assert!(service
        .get_clustered_coords_along_with_specified(&[Coordinates::new(1.0, 1.0)], 100, 1.0)
        .unwrap()
        .is_empty());
    assert!(service
        .get_all_undelivered_orders_with_litres()
        .unwrap()
        .is_empty());
}

#[test]
fn unknown_bag_type_is_surfaced() {
    let source = litre_source(&[(1, 0.0, 0.0, 10)]).with_order(
        OrderStatus::Paid,
        PendingOrder::new(2, Coordinates::new(1.0, 1.0)).with_bags(42, 1),
    );
    let service = ClusteringService::new(source, ClusteringConfig::default());

    let err = service.get_clustered_coords(5.0, 100).unwrap_err();
    assert!(matches!(
        err,
        ClusterError::UnknownBagType {
            order_id: 2,
            bag_type_id: 42
        }
    ));
    assert!(service.get_all_undelivered_orders_with_litres().is_err());
}

#[test]
fn litre_overflow_is_surfaced_instead_of_wrapping() {
    let source = InMemorySource::default()
        .with_bag_type(BagType::new(1, "Huge", u64::MAX / 2 + 1))
        .with_order(
            OrderStatus::Paid,
            PendingOrder::new(3, Coordinates::new(0.0, 0.0)).with_bags(1, 2),
        );
    let service = ClusteringService::new(source, ClusteringConfig::default());

    let err = service.get_clustered_coords(5.0, 100).unwrap_err();
    assert!(matches!(err, ClusterError::LitreOverflow { order_id: 3 }));
    assert!(matches!(
        service.get_undelivered_coords_within_capacity(100),
        Err(ClusterError::LitreOverflow { order_id: 3 })
    ));
}

#[test]
fn snapshot_file_drives_the_service() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "bag_types": [{{ "id": 1, "name": "120 L", "capacity": 120 }},
                          {{ "id": 2, "name": "20 L", "capacity": 20 }}],
            "orders": [
                {{ "id": 10, "status": "PAID",
                   "coordinates": {{ "latitude": 50.4501, "longitude": 30.5234 }},
                   "bags": {{ "1": 1 }} }},
                {{ "id": 11, "status": "PAID",
                   "coordinates": {{ "latitude": 50.4510, "longitude": 30.5240 }},
                   "bags": {{ "2": 3 }} }},
                {{ "id": 12, "status": "NEW",
                   "coordinates": {{ "latitude": 50.4510, "longitude": 30.5240 }},
                   "bags": {{ "1": 5 }} }},
                {{ "id": 13, "status": "PAID", "coordinates": null, "bags": {{ "1": 1 }} }}
            ]
        }}"#
    )
    .unwrap();

    let source = JsonSnapshotSource::open(file.path()).unwrap();
    let service = ClusteringService::new(source, ClusteringConfig::default());

    let groups = service.get_clustered_coords(1.0, 200).unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].order_ids, vec![10, 11]);
    assert_eq!(groups[0].total_litres, 180);

    let within = service.get_undelivered_coords_within_capacity(100).unwrap();
    assert_eq!(within, vec![Coordinates::new(50.4510, 30.5240)]);
}

#[test]
fn missing_snapshot_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = JsonSnapshotSource::open(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, SourceError::Io(_)));
}

#[test]
fn results_serialize_to_json() {
    let source = litre_source(&[(1, 0.0, 0.0, 50)]);
    let service = ClusteringService::new(source, ClusteringConfig::default());

    let groups = service.get_clustered_coords(5.0, 100).unwrap();
    let json = serde_json::to_value(&groups).unwrap();

    assert_eq!(json[0]["total_litres"], 50);
    assert_eq!(json[0]["order_ids"][0], 1);
    assert_eq!(json[0]["representative"]["latitude"], 0.0);
}
