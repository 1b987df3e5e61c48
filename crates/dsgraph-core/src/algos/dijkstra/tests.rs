use super::*;
use crate::algos::{path_to, total_weight};
use crate::error::GraphError;
use crate::graph::{new_graph, AdjacencyMapGraph, Backend, EdgeListGraph};

const CITIES: [&str; 5] = ["Raleigh", "Asheville", "Wilmington", "Durham", "Greenville"];

/// Complete graph on the five cities, weights 5..=50 in pair order
fn city_graph(backend: Backend) -> (Box<dyn Graph<VertexValue = &'static str, EdgeValue = u32>>, Vec<Vertex>) {
    let mut graph = new_graph(backend, false);
    let vs: Vec<Vertex> = CITIES.iter().map(|c| graph.insert_vertex(*c)).collect();
    let mut weight = 5;
    for i in 0..vs.len() {
        for j in i + 1..vs.len() {
            graph.insert_edge(vs[i], vs[j], weight).unwrap();
            weight += 5;
        }
    }
    (graph, vs)
}

#[test]
fn test_dijkstra_city_distances_on_every_backend() {
    for backend in Backend::ALL {
        let (graph, vs) = city_graph(backend);
        let distances = dijkstra(graph.as_ref(), vs[0]).unwrap();

        let expected = [0.0, 5.0, 10.0, 15.0, 20.0];
        assert_eq!(distances.len(), 5, "{backend}");
        for (v, want) in vs.iter().zip(expected) {
            assert_eq!(distances[v], want, "{backend}");
        }
    }
}

#[test]
fn test_shortest_path_tree_satisfies_edge_equation() {
    for backend in Backend::ALL {
        let (graph, vs) = city_graph(backend);
        let distances = dijkstra(graph.as_ref(), vs[0]).unwrap();
        let tree = shortest_path_tree(graph.as_ref(), vs[0], &distances).unwrap();

        assert_eq!(tree.len(), 4, "{backend}");
        assert!(!tree.contains_key(&vs[0]));
        for (v, edge) in &tree {
            let u = graph.opposite(*v, *edge).unwrap();
            let w = edge_weight(graph.as_ref(), *edge).unwrap();
            assert_eq!(distances[v], distances[&u] + w, "{backend}");
        }
    }
}

#[test]
fn test_dijkstra_prefers_cheaper_multi_hop_route() {
    let mut graph: AdjacencyMapGraph<&str, f64> = AdjacencyMapGraph::directed();
    let s = graph.insert_vertex("s");
    let a = graph.insert_vertex("a");
    let b = graph.insert_vertex("b");
    let t = graph.insert_vertex("t");
    graph.insert_edge(s, t, 10.0).unwrap();
    graph.insert_edge(s, a, 1.5).unwrap();
    graph.insert_edge(a, b, 2.25).unwrap();
    let bt = graph.insert_edge(b, t, 3.0).unwrap().unwrap();

    let distances = dijkstra(&graph, s).unwrap();
    assert_eq!(distances[&t], 6.75);

    let tree = shortest_path_tree(&graph, s, &distances).unwrap();
    assert_eq!(tree[&t], bt);
}

#[test]
fn test_dijkstra_leaves_out_unreachable_vertices() {
    let mut graph: EdgeListGraph<&str, u32> = EdgeListGraph::directed();
    let s = graph.insert_vertex("s");
    let a = graph.insert_vertex("a");
    let back = graph.insert_vertex("back");
    let island = graph.insert_vertex("island");
    graph.insert_edge(s, a, 4).unwrap();
    graph.insert_edge(back, s, 1).unwrap();

    let distances = dijkstra(&graph, s).unwrap();
    assert_eq!(distances.len(), 2);
    assert_eq!(distances[&s], 0.0);
    assert!(!distances.contains_key(&back));
    assert!(!distances.contains_key(&island));
    assert!(distances.values().all(|d| d.is_finite()));

    let tree = shortest_path_tree(&graph, s, &distances).unwrap();
    assert_eq!(tree.len(), 1);
    assert!(!tree.contains_key(&island));
}

#[test]
fn test_dijkstra_zero_weight_edges() {
    for backend in Backend::ALL {
        let mut graph = new_graph::<u8, u32>(backend, false);
        let a = graph.insert_vertex(0);
        let b = graph.insert_vertex(1);
        let c = graph.insert_vertex(2);
        graph.insert_edge(a, b, 0).unwrap();
        graph.insert_edge(b, c, 0).unwrap();

        let distances = dijkstra(&*graph, c).unwrap();
        assert_eq!(distances[&a], 0.0);

        let tree = shortest_path_tree(&*graph, c, &distances).unwrap();
        assert_eq!(tree.len(), 2, "{backend}");
        assert_eq!(tree[&b], graph.get_edge(b, c).unwrap().unwrap(), "{backend}");

        let path = path_to(&*graph, &tree, c, a).unwrap().expect("a is reachable");
        assert_eq!(path.len(), 2, "{backend}");
        assert_eq!(total_weight(&*graph, &path).unwrap(), distances[&a]);
    }
}

#[test]
fn test_shortest_path_tree_reaches_every_vertex_back_to_source() {
    // Zero-weight cycle hanging off a cheap spoke, plus a directed variant
    let edges = [(0, 1, 0), (1, 2, 0), (2, 3, 0), (3, 1, 0), (0, 4, 2), (4, 2, 0), (3, 5, 1)];
    for backend in Backend::ALL {
        for directed in [false, true] {
            let mut graph = new_graph::<u8, u32>(backend, directed);
            let vs: Vec<Vertex> = (0..6).map(|i| graph.insert_vertex(i)).collect();
            for (u, v, w) in edges {
                graph.insert_edge(vs[u], vs[v], w).unwrap();
            }

            let source = vs[0];
            let distances = dijkstra(&*graph, source).unwrap();
            let tree = shortest_path_tree(&*graph, source, &distances).unwrap();
            assert_eq!(tree.len(), distances.len() - 1, "{backend} directed={directed}");

            for (&v, &d) in &distances {
                let path = path_to(&*graph, &tree, source, v)
                    .unwrap()
                    .unwrap_or_else(|| panic!("{backend} directed={directed}: no path to {v}"));
                assert_eq!(total_weight(&*graph, &path).unwrap(), d);
            }
        }
    }
}

#[test]
fn test_dijkstra_rejects_negative_edge_into_settled_vertex() {
    let mut graph: AdjacencyMapGraph<u8, i32> = AdjacencyMapGraph::directed();
    let s = graph.insert_vertex(0);
    let a = graph.insert_vertex(1);
    graph.insert_edge(s, a, 1).unwrap();
    graph.insert_edge(a, s, -5).unwrap();

    let err = dijkstra(&graph, s).unwrap_err();
    assert!(matches!(err, GraphError::InvalidArgument { .. }));
}

#[test]
fn test_dijkstra_rejects_negative_weight() {
    let mut graph: AdjacencyMapGraph<u8, i32> = AdjacencyMapGraph::directed();
    let a = graph.insert_vertex(0);
    let b = graph.insert_vertex(1);
    graph.insert_edge(a, b, -2).unwrap();

    let err = dijkstra(&graph, a).unwrap_err();
    assert!(matches!(err, GraphError::InvalidArgument { .. }));
}

#[test]
fn test_dijkstra_single_vertex() {
    let mut graph: EdgeListGraph<u8, u32> = EdgeListGraph::undirected();
    let only = graph.insert_vertex(0);
    let distances = dijkstra(&graph, only).unwrap();
    assert_eq!(distances.len(), 1);
    assert_eq!(distances[&only], 0.0);
    assert!(shortest_path_tree(&graph, only, &distances)
        .unwrap()
        .is_empty());
}

#[test]
fn test_same_distance_tolerance() {
    assert!(same_distance(0.1 + 0.2, 0.3));
    assert!(same_distance(1e12, 1e12 + 1e-3));
    assert!(!same_distance(1.0, 1.001));
}
