mod common;

use satroute_lib::{
    build_graph, build_graph_with_body, lat_lon_alt_to_xyz, Body, Constellation, Point3D,
    EARTH_RADIUS_KM, END, START,
};

use common::{fixture_path, load_fixture, single_relay_constellation};

fn targets(graph: &satroute_lib::Graph, node: &str) -> Vec<String> {
    graph
        .neighbours(node)
        .iter()
        .map(|edge| edge.target.clone())
        .collect()
}

#[test]
fn empty_constellation_builds_empty_graph() {
    let graph = build_graph(&Constellation::new());
    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn occluded_endpoints_link_only_through_relay() {
    let graph = build_graph(&single_relay_constellation());

    assert_eq!(graph.node_count(), 3);
    assert_eq!(targets(&graph, START), vec!["N1"]);
    assert_eq!(targets(&graph, END), vec!["N1"]);
    assert_eq!(targets(&graph, "N1"), vec![END, START]);
}

#[test]
fn edges_carry_euclidean_distance() {
    let constellation = single_relay_constellation();
    let graph = build_graph(&constellation);

    let edge = &graph.neighbours(START)[0];
    let expected = constellation
        .get(START)
        .unwrap()
        .distance_to(constellation.get("N1").unwrap());
    assert_eq!(edge.distance, expected);
}

#[test]
fn isolated_node_keeps_empty_neighbour_list() {
    let mut constellation = single_relay_constellation();
    // Far side of the planet, below every horizon.
    constellation.insert("LOW", lat_lon_alt_to_xyz(0.0, -120.0, 10.0));
    let graph = build_graph(&constellation);

    assert!(graph.contains("LOW"));
    assert!(graph.neighbours("LOW").is_empty());
}

#[test]
fn tangent_pair_is_linked_in_both_directions() {
    let constellation: Constellation = [
        ("A", Point3D::new(0.0, 0.0, EARTH_RADIUS_KM)),
        ("B", Point3D::new(0.0, 2000.0, EARTH_RADIUS_KM)),
    ]
    .into_iter()
    .collect();
    let graph = build_graph_with_body(&constellation, &Body::exact(EARTH_RADIUS_KM));

    assert_eq!(targets(&graph, "A"), vec!["B"]);
    assert_eq!(targets(&graph, "B"), vec!["A"]);
}

#[test]
fn segment_grazing_below_the_limb_is_not_linked() {
    let x = EARTH_RADIUS_KM - 5e-7;
    let constellation: Constellation = [
        ("A", Point3D::new(x, -3000.0, 0.0)),
        ("B", Point3D::new(x, 3000.0, 0.0)),
    ]
    .into_iter()
    .collect();

    let graph = build_graph(&constellation);
    assert_eq!(graph.edge_count(), 0);

    let relaxed = Body::default().with_limb_tolerance(1e-6);
    let graph = build_graph_with_body(&constellation, &relaxed);
    assert_eq!(targets(&graph, "A"), vec!["B"]);
}

#[test]
fn coincident_nodes_are_linked_when_above_surface() {
    let position = lat_lon_alt_to_xyz(10.0, 10.0, 500.0);
    let constellation: Constellation = [("SAT1", position), ("SAT2", position)]
        .into_iter()
        .collect();
    let graph = build_graph(&constellation);

    assert_eq!(targets(&graph, "SAT1"), vec!["SAT2"]);
    assert_eq!(graph.neighbours("SAT2")[0].distance, 0.0);
}

#[test]
fn fixture_graph_is_symmetric_without_self_loops() {
    let parsed = load_fixture(fixture_path());
    let graph = build_graph(&parsed.constellation);

    assert_eq!(graph.node_count(), 22);
    for node in graph.nodes() {
        for edge in graph.neighbours(node) {
            assert_ne!(edge.target, node, "self loop on {node}");
            assert!(graph.contains(&edge.target));
            assert!(
                graph
                    .neighbours(&edge.target)
                    .iter()
                    .any(|back| back.target == node),
                "{node} -> {} has no reverse edge",
                edge.target
            );
        }
    }
    assert_eq!(graph.edge_count() % 2, 0);
}
