//! Unit tests for route queries.

use super::*;
use crate::catalogue::{Catalogue, CatalogueBuilder};
use crate::domain::{Coordinates, RouteKind};

/// 1000 m takes 10 minutes; every boarding costs 5.
fn settings() -> RoutingSettings {
    RoutingSettings::new(5, 6.0)
}

fn wait(stop: &str, time: f64) -> ItineraryItem {
    ItineraryItem::Wait {
        stop_name: stop.to_string(),
        time,
    }
}

fn ride(bus: &str, span_count: usize, time: f64) -> ItineraryItem {
    ItineraryItem::Bus {
        bus: bus.to_string(),
        span_count,
        time,
    }
}

/// Stops laid out along the equator, one degree apart, in the given order.
fn builder_with_stops(names: &[&str]) -> CatalogueBuilder {
    let mut builder = CatalogueBuilder::new();
    for (i, name) in names.iter().enumerate() {
        builder
            .add_stop(name, Coordinates::new(0.0, i as f64))
            .unwrap();
    }
    builder
}

fn line_abc(kind: RouteKind) -> Catalogue {
    let mut builder = builder_with_stops(&["A", "B", "C"]);
    builder.add_distance("A", "B", 1000).unwrap();
    builder.add_distance("B", "C", 1000).unwrap();
    builder.add_bus("1", &["A", "B", "C"], kind).unwrap();
    builder.build()
}

#[test]
fn wait_then_ride_for_two_stops() {
    let catalogue = line_abc(RouteKind::Roundtrip);
    let router = TransportRouter::new(&catalogue, settings()).unwrap();

    let itinerary = router.find_route("A", "C").unwrap();

    assert_eq!(itinerary.items, vec![wait("A", 5.0), ride("1", 2, 20.0)]);
    assert_eq!(itinerary.total_time, 25.0);
}

#[test]
fn same_stop_is_empty_itinerary() {
    let catalogue = line_abc(RouteKind::Roundtrip);
    let router = TransportRouter::new(&catalogue, settings()).unwrap();

    let itinerary = router.find_route("B", "B").unwrap();

    assert!(itinerary.is_empty());
    assert_eq!(itinerary.total_time, 0.0);
}

#[test]
fn same_stop_without_buses_is_empty_itinerary() {
    let mut builder = builder_with_stops(&["A", "Lonely"]);
    builder.add_bus("1", &["A"], RouteKind::Roundtrip).unwrap();
    let catalogue = builder.build();
    let router = TransportRouter::new(&catalogue, settings()).unwrap();

    assert_eq!(router.find_route("Lonely", "Lonely"), Ok(Itinerary::empty()));
}

#[test]
fn unknown_stop_is_not_found() {
    let catalogue = line_abc(RouteKind::Roundtrip);
    let router = TransportRouter::new(&catalogue, settings()).unwrap();

    assert_eq!(
        router.find_route("A", "Z"),
        Err(RouteError::UnknownStop("Z".into()))
    );
    assert_eq!(
        router.find_route("Y", "A"),
        Err(RouteError::UnknownStop("Y".into()))
    );
}

#[test]
fn disconnected_stop_is_unreachable() {
    let mut builder = builder_with_stops(&["A", "B", "D"]);
    builder.add_distance("A", "B", 1000).unwrap();
    builder.add_bus("1", &["A", "B"], RouteKind::OutAndBack).unwrap();
    let catalogue = builder.build();
    let router = TransportRouter::new(&catalogue, settings()).unwrap();

    assert_eq!(
        router.find_route("A", "D"),
        Err(RouteError::Unreachable {
            from: "A".into(),
            to: "D".into()
        })
    );
}

#[test]
fn roundtrip_does_not_run_backwards() {
    let catalogue = line_abc(RouteKind::Roundtrip);
    let router = TransportRouter::new(&catalogue, settings()).unwrap();

    // The bus never drives C -> A or C -> B.
    assert!(matches!(
        router.find_route("C", "A"),
        Err(RouteError::Unreachable { .. })
    ));
}

#[test]
fn out_and_back_rides_home() {
    let catalogue = line_abc(RouteKind::OutAndBack);
    let router = TransportRouter::new(&catalogue, settings()).unwrap();

    let itinerary = router.find_route("C", "A").unwrap();

    assert_eq!(itinerary.items, vec![wait("C", 5.0), ride("1", 2, 20.0)]);
    assert_eq!(itinerary.total_time, 25.0);
}

#[test]
fn closed_loop_continues_through_start() {
    let mut builder = builder_with_stops(&["A", "B", "C"]);
    builder.add_distance("A", "B", 1000).unwrap();
    builder.add_distance("B", "C", 1000).unwrap();
    builder.add_distance("C", "A", 1000).unwrap();
    builder
        .add_bus("loop", &["A", "B", "C", "A"], RouteKind::Roundtrip)
        .unwrap();
    let catalogue = builder.build();
    let router = TransportRouter::new(&catalogue, settings()).unwrap();

    let itinerary = router.find_route("C", "A").unwrap();
    assert_eq!(itinerary.items, vec![wait("C", 5.0), ride("loop", 1, 10.0)]);

    // C -> B means riding C -> A, then changing onto the loop again.
    let itinerary = router.find_route("C", "B").unwrap();
    assert_eq!(
        itinerary.items,
        vec![
            wait("C", 5.0),
            ride("loop", 1, 10.0),
            wait("A", 5.0),
            ride("loop", 1, 10.0),
        ]
    );
    assert_eq!(itinerary.total_time, 30.0);
}

#[test]
fn directional_distances_change_travel_time() {
    let mut builder = builder_with_stops(&["A", "B"]);
    builder.add_distance("A", "B", 1000).unwrap();
    builder.add_distance("B", "A", 3000).unwrap();
    builder.add_bus("1", &["A", "B"], RouteKind::OutAndBack).unwrap();
    let catalogue = builder.build();
    let router = TransportRouter::new(&catalogue, settings()).unwrap();

    assert_eq!(router.find_route("A", "B").unwrap().total_time, 15.0);
    assert_eq!(router.find_route("B", "A").unwrap().total_time, 35.0);
}

#[test]
fn transfer_pays_second_wait() {
    let mut builder = builder_with_stops(&["A", "B", "C"]);
    builder.add_distance("A", "B", 1000).unwrap();
    builder.add_distance("B", "C", 500).unwrap();
    builder.add_bus("red", &["A", "B"], RouteKind::OutAndBack).unwrap();
    builder.add_bus("blue", &["B", "C"], RouteKind::OutAndBack).unwrap();
    let catalogue = builder.build();
    let router = TransportRouter::new(&catalogue, settings()).unwrap();

    let itinerary = router.find_route("A", "C").unwrap();

    assert_eq!(
        itinerary.items,
        vec![
            wait("A", 5.0),
            ride("red", 1, 10.0),
            wait("B", 5.0),
            ride("blue", 1, 5.0),
        ]
    );
    assert_eq!(itinerary.total_time, 25.0);
    assert_eq!(itinerary.ride_count(), 2);
}

#[test]
fn staying_on_board_beats_changing() {
    // Bus "slow" stops everywhere; changing at B to "express" costs an extra wait.
    let mut builder = builder_with_stops(&["A", "B", "C"]);
    builder.add_distance("A", "B", 1000).unwrap();
    builder.add_distance("B", "C", 1000).unwrap();
    builder
        .add_bus("slow", &["A", "B", "C"], RouteKind::OutAndBack)
        .unwrap();
    builder
        .add_bus("express", &["B", "C"], RouteKind::OutAndBack)
        .unwrap();
    let catalogue = builder.build();
    let router = TransportRouter::new(&catalogue, settings()).unwrap();

    let itinerary = router.find_route("A", "C").unwrap();
    assert_eq!(itinerary.items, vec![wait("A", 5.0), ride("slow", 2, 20.0)]);
}

#[test]
fn parallel_buses_pick_the_cheaper_edge() {
    let mut builder = builder_with_stops(&["A", "B", "C"]);
    builder.add_distance("A", "B", 1000).unwrap();
    builder.add_distance("B", "C", 1000).unwrap();
    builder.add_distance("A", "C", 4000).unwrap();
    // "direct" drives A -> C on a 4 km road; "via" drives 2 km through B.
    builder
        .add_bus("direct", &["A", "C"], RouteKind::OutAndBack)
        .unwrap();
    builder
        .add_bus("via", &["A", "B", "C"], RouteKind::OutAndBack)
        .unwrap();
    let catalogue = builder.build();
    let router = TransportRouter::new(&catalogue, settings()).unwrap();

    let itinerary = router.find_route("A", "C").unwrap();
    assert_eq!(itinerary.items, vec![wait("A", 5.0), ride("via", 2, 20.0)]);
}

#[test]
fn path_total_matches_itinerary() {
    let catalogue = line_abc(RouteKind::OutAndBack);
    let router = TransportRouter::new(&catalogue, settings()).unwrap();
    let a = catalogue.find_stop("A").unwrap().id();
    let c = catalogue.find_stop("C").unwrap().id();

    let path = router.find_path(a, c).unwrap();
    let itinerary = router.find_route_between(a, c).unwrap();

    assert_eq!(path.edges.len(), itinerary.items.len());
    assert_eq!(path.total_time, itinerary.total_time);

    let graph = router.graph().graph();
    let first = graph.edge(path.edges[0]).unwrap();
    assert_eq!(first.kind.span_count(), 0);
    assert_eq!(Some(first.from), router.graph().waiting_vertex(a));
}

#[test]
fn rejects_invalid_settings() {
    let catalogue = line_abc(RouteKind::Roundtrip);
    let err = TransportRouter::new(&catalogue, RoutingSettings::new(5, -1.0)).unwrap_err();
    assert_eq!(err, ConfigError::InvalidVelocity(-1.0));
}

#[test]
fn rebuild_gives_identical_answers() {
    let mut builder = builder_with_stops(&["A", "B", "C", "D"]);
    builder.add_distance("A", "B", 1200).unwrap();
    builder.add_distance("B", "C", 800).unwrap();
    builder.add_distance("C", "D", 2600).unwrap();
    builder.add_distance("D", "B", 900).unwrap();
    builder
        .add_bus("14", &["A", "B", "C"], RouteKind::OutAndBack)
        .unwrap();
    builder
        .add_bus("22", &["B", "D", "C", "B"], RouteKind::Roundtrip)
        .unwrap();
    let catalogue = builder.build();

    let first = TransportRouter::new(&catalogue, settings()).unwrap();
    let second = TransportRouter::new(&catalogue, settings()).unwrap();
    assert_eq!(first.graph(), second.graph());

    let names: Vec<&str> = catalogue.sorted_stops().map(|s| s.name()).collect();
    for from in &names {
        for to in &names {
            assert_eq!(first.find_route(from, to), second.find_route(from, to));
        }
    }
}

#[test]
fn router_is_shareable_across_threads() {
    fn assert_sync<T: Sync>() {}
    assert_sync::<TransportRouter<'static>>();

    let catalogue = line_abc(RouteKind::OutAndBack);
    let router = TransportRouter::new(&catalogue, settings()).unwrap();
    let expected = router.find_route("A", "C").unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| router.find_route("A", "C")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Ok(expected.clone()));
        }
    });
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    const NAMES: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

    /// Random networks over six stops: distances and up to four buses.
    fn network() -> impl Strategy<Value = Catalogue> {
        let distances = prop::collection::vec((0usize..6, 0usize..6, 100u32..5000), 0..20);
        let buses = prop::collection::vec(
            (prop::collection::vec(0usize..6, 1..6), any::<bool>()),
            0..4,
        );
        (distances, buses).prop_map(|(distances, buses)| {
            let mut builder = builder_with_stops(&NAMES);
            for (from, to, meters) in distances {
                builder.add_distance(NAMES[from], NAMES[to], meters).unwrap();
            }
            for (i, (stops, roundtrip)) in buses.into_iter().enumerate() {
                let stops: Vec<&str> = stops.into_iter().map(|s| NAMES[s]).collect();
                builder
                    .add_bus(
                        &format!("bus{i}"),
                        &stops,
                        RouteKind::from_roundtrip_flag(roundtrip),
                    )
                    .unwrap();
            }
            builder.build()
        })
    }

    proptest! {
        /// Itineraries alternate wait and ride, starting with a wait.
        #[test]
        fn itineraries_alternate(catalogue in network(), from in 0usize..6, to in 0usize..6) {
            let router = TransportRouter::new(&catalogue, settings()).unwrap();
            if let Ok(itinerary) = router.find_route(NAMES[from], NAMES[to]) {
                prop_assert_eq!(itinerary.items.len() % 2, 0);
                for (i, item) in itinerary.items.iter().enumerate() {
                    let is_wait = matches!(item, ItineraryItem::Wait { .. });
                    prop_assert_eq!(is_wait, i % 2 == 0);
                }
                let sum: f64 = itinerary.items.iter().map(ItineraryItem::time).sum();
                prop_assert!((sum - itinerary.total_time).abs() < 1e-9);
                prop_assert_eq!(itinerary.is_empty(), from == to);
            }
        }

        /// Two graphs built from the same catalogue answer identically.
        #[test]
        fn rebuild_is_idempotent(catalogue in network(), from in 0usize..6, to in 0usize..6) {
            let first = TransportRouter::new(&catalogue, settings()).unwrap();
            let second = TransportRouter::new(&catalogue, settings()).unwrap();
            prop_assert_eq!(first.graph(), second.graph());
            prop_assert_eq!(
                first.find_route(NAMES[from], NAMES[to]),
                second.find_route(NAMES[from], NAMES[to])
            );
        }
    }
}
