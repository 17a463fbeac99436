mod common;

use storemap_lib::{build_graph, Connection, SectionRegistry};

use common::{fixture_venue, section};

#[test]
fn fixture_graph_is_symmetric() {
    let venue = fixture_venue();
    let graph = venue.graph();

    for (id, _) in venue.registry().iter() {
        for edge in graph.neighbours(id) {
            assert_eq!(
                graph.weight(edge.target, id),
                Some(edge.weight),
                "edge {id} -> {} must be mirrored",
                edge.target
            );
        }
    }
}

#[test]
fn fixture_graph_has_entry_per_section() {
    let venue = fixture_venue();
    assert_eq!(venue.graph().section_count(), venue.registry().len());

    let garden = venue
        .registry()
        .section_id_by_name("garden centre")
        .expect("garden centre registered");
    assert!(venue.graph().neighbours(garden).is_empty());
}

#[test]
fn fixture_drops_connection_to_unknown_section() {
    let venue = fixture_venue();
    let dropped = venue.unresolved_connections();

    assert_eq!(dropped.len(), 1);
    assert_eq!(dropped[0].from, "Checkout");
    assert_eq!(dropped[0].missing, vec!["Pharmacy".to_string()]);
    assert_eq!(venue.graph().edge_count(), 10);
}

#[test]
fn connections_resolve_names_loosely() {
    let registry =
        SectionRegistry::load(vec![section("Aisle 1"), section("Checkout")]).expect("registry");
    let build = build_graph(&registry, &[Connection::new(" aisle 1", "CHECKOUT ", 3.0)])
        .expect("graph builds");

    assert!(build.unresolved.is_empty());
    assert_eq!(build.graph.weight(0, 1), Some(3.0));
}

#[test]
fn unresolved_both_endpoints_are_listed() {
    let registry = SectionRegistry::load(vec![section("A")]).expect("registry");
    let build = build_graph(&registry, &[Connection::new("X", "Y", 1.0)]).expect("graph builds");

    assert_eq!(
        build.unresolved[0].missing,
        vec!["X".to_string(), "Y".to_string()]
    );
}
