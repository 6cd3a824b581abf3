use super::backtracking::PruningMemo;
use super::generate::{find_optimal_radius, GeometricGraph, RADIUS_TOLERANCE};
use super::io::{read_edge_list, write_edge_list, write_point_edge_list};
use super::logging::short_target;
use super::report::{evaluate, render_table, Report};
use super::utils::ceil_sqrt;
use super::*;
use dashmap::DashMap;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rustc_hash::FxHashMap;
use std::time::Duration;

fn path_graph(n: u32) -> Graph {
    let mut graph = Graph::new();
    for v in 1..n {
        graph.add_edge(v, v + 1);
    }
    graph
}

/// Path 1–2–…–n laid out on the x axis.
fn path_graph_with_points(n: u32) -> Graph {
    let mut graph = Graph::new();
    for v in 1..n {
        graph.add_edge_with_points(
            v,
            Point::new(v as f64, 0.0),
            v + 1,
            Point::new((v + 1) as f64, 0.0),
        );
    }
    graph
}

fn complete_graph(n: u32) -> Graph {
    let mut graph = Graph::new();
    for u in 1..=n {
        for v in (u + 1)..=n {
            graph.add_edge(u, v);
        }
    }
    graph
}

fn builder() -> Builder {
    Builder::default().set_seed(7)
}

fn assert_simple_path(graph: &Graph, estimate: &Estimate) {
    let Some(path) = &estimate.path else {
        return;
    };
    assert_eq!(path.len(), estimate.length + 1);
    let mut seen = path.clone();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), path.len(), "path repeats a vertex: {:?}", path);
    for pair in path.windows(2) {
        assert!(
            graph.neighbors(pair[0]).contains(&pair[1]),
            "{} and {} are not adjacent",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_add_edge_is_symmetric() {
    let mut graph = Graph::new();
    graph.add_edge(1, 2);
    assert_eq!(graph.neighbors(1), &[2]);
    assert_eq!(graph.neighbors(2), &[1]);

    graph.add_edge(1, 2);
    assert_eq!(graph.neighbors(1), &[2, 2]);
    assert_eq!(graph.neighbors(2), &[1, 1]);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.vertices(), &[1, 2]);
}

#[test]
fn test_unknown_vertex_has_no_neighbors() {
    let graph = path_graph(3);
    assert!(graph.neighbors(42).is_empty());
}

#[test]
fn test_first_point_wins() {
    let mut graph = Graph::new();
    graph.add_edge_with_points(1, Point::new(0.0, 0.0), 2, Point::new(1.0, 0.0));
    graph.add_edge_with_points(1, Point::new(9.0, 9.0), 3, Point::new(2.0, 0.0));
    assert_eq!(graph.point(1), Some(Point::new(0.0, 0.0)));
    assert_eq!(graph.neighbors(1), &[2, 3]);
}

#[test]
fn test_largest_component_picks_bigger_one() {
    let mut graph = Graph::new();
    // sizes 3 and 5
    graph.add_edge(1, 2);
    graph.add_edge(2, 3);
    graph.add_edge(10, 11);
    graph.add_edge(11, 12);
    graph.add_edge(12, 13);
    graph.add_edge(13, 14);

    let component = graph.largest_component();
    assert_eq!(component.len(), 5);
    for v in 10..=14 {
        assert!(component.contains(v));
    }
}

#[test]
fn test_largest_component_tie_goes_to_first_discovered() {
    let mut graph = Graph::new();
    graph.add_edge(5, 6);
    graph.add_edge(1, 2);

    let component = graph.largest_component();
    assert_eq!(component.len(), 2);
    assert!(component.contains(5));
    assert!(component.contains(6));
}

#[test]
fn test_largest_component_handles_long_paths() {
    let graph = path_graph(20_000);
    assert_eq!(graph.largest_component().len(), 20_000);
}

#[test]
fn test_largest_component_vertices_needs_points() {
    let graph = path_graph_with_points(4);
    let vertices = graph.largest_component_vertices().unwrap();
    assert_eq!(vertices.len(), 4);
    assert!(vertices.iter().all(|v| v.point.x == v.id as f64));

    let graph = path_graph(4);
    assert!(matches!(
        graph.largest_component_vertices(),
        Err(LspError::MissingCoordinates(_))
    ));
}

#[test]
fn test_degree_stats() {
    let mut graph = Graph::new();
    graph.add_edge(1, 2);
    graph.add_edge(1, 3);
    graph.add_edge(1, 4);

    let stats = graph.degree_stats(&graph.largest_component());
    assert_eq!(stats.max_degree, 3);
    assert_eq!(stats.average_degree, 1.5);

    assert_eq!(graph.degree_stats(&Component::default()), DegreeStats::default());
}

#[test]
fn test_ceil_sqrt() {
    assert_eq!(ceil_sqrt(0), 0);
    assert_eq!(ceil_sqrt(1), 1);
    assert_eq!(ceil_sqrt(2), 2);
    assert_eq!(ceil_sqrt(4), 2);
    assert_eq!(ceil_sqrt(5), 3);
    assert_eq!(ceil_sqrt(300), 18);
}

#[test]
fn test_builder_trials() {
    let builder = builder();
    assert_eq!(builder.trials_for(5), 3);
    assert_eq!(builder.clone().set_trials(11).trials_for(5), 11);
    assert_eq!(builder.set_trials(0).get_trials(), Some(1));
}

#[test]
fn test_sequence_sampler_cycles() {
    let mut sampler = SequenceSampler::new(vec![3, 1]);
    assert_eq!(sampler.pick_many(&[1, 2, 3], 3).unwrap(), vec![3, 1, 3]);
    assert!(matches!(sampler.pick(&[]), Err(LspError::EmptyDomain)));
}

#[test]
fn test_random_sampler_is_seeded() {
    let domain: Vec<VertexId> = (1..=100).collect();
    let a = RandomSampler::new(3).pick_many(&domain, 10).unwrap();
    let b = RandomSampler::new(3).pick_many(&domain, 10).unwrap();
    assert_eq!(a, b);
    assert!(a.iter().all(|v| domain.contains(v)));
    assert!(matches!(
        RandomSampler::new(3).pick(&[]),
        Err(LspError::EmptyDomain)
    ));
}

#[test]
fn test_double_sweep_from_middle_of_path() {
    let graph = path_graph(5);
    let component = graph.largest_component();
    let mut sampler = SequenceSampler::new(vec![3]);

    let estimate = builder()
        .double_sweep()
        .search_lsp(&graph, &component, &mut sampler)
        .unwrap();

    assert_eq!(estimate.length, 4);
    assert_simple_path(&graph, &estimate);
}

#[test]
fn test_find_deepest_node() {
    let graph = path_graph(5);
    let component = graph.largest_component();
    let sweep = builder().double_sweep();

    let first = sweep.find_deepest_node(&graph, &component, 3).unwrap();
    assert_eq!(first.depth, 2);
    assert!(first.vertex == 1 || first.vertex == 5);

    let second = sweep
        .find_deepest_node(&graph, &component, first.vertex)
        .unwrap();
    assert_eq!(second.depth, 4);
    assert_eq!(second.path.len(), 5);
}

#[test]
fn test_double_sweep_complete_graph_is_hamiltonian() {
    let graph = complete_graph(6);
    let component = graph.largest_component();
    let estimate = builder()
        .double_sweep()
        .search_lsp(&graph, &component, &mut builder().sampler())
        .unwrap();
    assert_eq!(estimate.length, 5);
    assert_simple_path(&graph, &estimate);
}

#[test]
fn test_farthest_first_from_path_end() {
    let graph = path_graph(5);
    let component = graph.largest_component();

    let estimate = builder()
        .farthest_first()
        .search_from(&graph, &component, 1)
        .unwrap();

    assert_eq!(estimate.length, 4);
    assert_eq!(estimate.path, Some(vec![1, 2, 3, 4, 5]));
}

#[test]
fn test_farthest_first_search_lsp_on_path() {
    let graph = path_graph(9);
    let component = graph.largest_component();
    let mut sampler = SequenceSampler::new(vec![1]);
    let estimate = builder()
        .farthest_first()
        .search_lsp(&graph, &component, &mut sampler)
        .unwrap();
    assert_eq!(estimate.length, 8);
}

#[test]
fn test_farthest_first_stays_inside_component() {
    // 3 is a neighbor of 2 but not part of the searched set.
    let graph = path_graph(5);
    let component = Component::new(vec![1, 2]);
    let estimate = builder()
        .farthest_first()
        .search_from(&graph, &component, 1)
        .unwrap();
    assert_eq!(estimate.path, Some(vec![1, 2]));
}

#[test]
fn test_farthest_first_rejects_unknown_start() {
    let graph = path_graph(5);
    let component = graph.largest_component();
    let result = builder()
        .farthest_first()
        .search_from(&graph, &component, 99);
    assert!(matches!(result, Err(LspError::UnknownVertex(99))));
}

#[test]
fn test_best_first_between_path_ends() {
    let graph = path_graph_with_points(5);
    let component = graph.largest_component();
    let mut sampler = SequenceSampler::new(vec![1, 5]);

    let estimate = builder()
        .best_first()
        .search_lsp(&graph, &component, &mut sampler)
        .unwrap();

    assert_eq!(estimate.length, 4);
    assert_simple_path(&graph, &estimate);
}

#[test]
fn test_best_first_same_source_and_target() {
    let graph = path_graph_with_points(5);
    let component = graph.largest_component();
    let mut sampler = SequenceSampler::new(vec![3]);
    let estimate = builder()
        .set_trials(1)
        .best_first()
        .search_lsp(&graph, &component, &mut sampler)
        .unwrap();
    assert_eq!(estimate.length, 0);
}

#[test]
fn test_best_first_unreachable_target_is_zero() {
    let mut graph = Graph::new();
    graph.add_edge_with_points(1, Point::new(0.0, 0.0), 2, Point::new(1.0, 0.0));
    graph.add_edge_with_points(10, Point::new(5.0, 5.0), 11, Point::new(6.0, 5.0));
    let component = Component::new(vec![1, 2, 10, 11]);
    let mut sampler = SequenceSampler::new(vec![1, 10]);

    let estimate = builder()
        .set_trials(1)
        .best_first()
        .search_lsp(&graph, &component, &mut sampler)
        .unwrap();
    assert_eq!(estimate.length, 0);
    assert_eq!(estimate.path, None);
}

#[test]
fn test_best_first_needs_points() {
    let graph = path_graph(5);
    let component = graph.largest_component();
    let result = builder()
        .best_first()
        .search_lsp(&graph, &component, &mut builder().sampler());
    assert!(matches!(result, Err(LspError::MissingCoordinates(_))));
}

#[test]
fn test_backtracking_from_path_end() {
    let graph = path_graph(5);
    let component = graph.largest_component();
    let mut sampler = SequenceSampler::new(vec![1]);

    let estimate = builder()
        .backtracking()
        .search_lsp(&graph, &component, &mut sampler)
        .unwrap();

    assert_eq!(estimate.length, 4);
    assert_eq!(estimate.path, Some(vec![1, 2, 3, 4, 5]));
}

#[test]
fn test_backtracking_complete_graph_is_hamiltonian() {
    let graph = complete_graph(7);
    let component = graph.largest_component();
    let estimate = builder()
        .backtracking()
        .search_lsp(&graph, &component, &mut builder().sampler())
        .unwrap();
    assert_eq!(estimate.length, 6);
    assert_simple_path(&graph, &estimate);
}

#[test]
fn test_backtracking_memo_prunes_dominated_branches() {
    // 1-2-3-4-5-6-1 with a chord 1-4. The branch through the chord reaches
    // 6 and 2 first at length 3, so the later branches 1-6 and 1-2 are cut.
    let mut graph = Graph::new();
    for v in 1..6 {
        graph.add_edge(v, v + 1);
    }
    graph.add_edge(6, 1);
    graph.add_edge(1, 4);
    let component = graph.largest_component();
    let mut sampler = SequenceSampler::new(vec![1]);
    let estimate = builder()
        .backtracking()
        .search_lsp(&graph, &component, &mut sampler)
        .unwrap();
    assert_eq!(estimate.length, 3);
    assert_eq!(estimate.path, Some(vec![1, 4, 5, 6]));

    // From 2 the first branch explored already covers every vertex.
    let mut sampler = SequenceSampler::new(vec![2]);
    let estimate = builder()
        .set_trials(1)
        .backtracking()
        .search_lsp(&graph, &component, &mut sampler)
        .unwrap();
    assert_eq!(estimate.length, 5);
    assert_simple_path(&graph, &estimate);
}

#[test]
fn test_parallel_backtracking_on_path() {
    let graph = path_graph(5);
    let component = graph.largest_component();
    let mut sampler = SequenceSampler::new(vec![1]);
    let estimate = builder()
        .set_parallel(true)
        .backtracking()
        .search_lsp(&graph, &component, &mut sampler)
        .unwrap();
    assert_eq!(estimate.length, 4);
}

#[test]
fn test_parallel_matches_sequential() {
    let mut rng = SmallRng::seed_from_u64(11);
    let graph = GeometricGraph::generate(120, 0.15, &mut rng).unwrap().graph;
    let component = graph.largest_component();

    for algorithm in [
        Algorithm::DoubleSweep,
        Algorithm::FarthestFirst,
        Algorithm::BestFirst,
    ] {
        let sequential = algorithm
            .estimator(builder())
            .search_lsp(&graph, &component, &mut builder().sampler())
            .unwrap();
        let parallel = algorithm
            .estimator(builder().set_parallel(true))
            .search_lsp(&graph, &component, &mut builder().sampler())
            .unwrap();
        assert_eq!(sequential, parallel, "{}", algorithm);
    }
}

#[test]
fn test_pruning_memo() {
    let mut memo: FxHashMap<usize, usize> = FxHashMap::default();
    assert!(memo.record_if_longer(0, 2));
    assert!(!memo.record_if_longer(0, 2));
    assert!(!memo.record_if_longer(0, 1));
    assert!(memo.record_if_longer(0, 3));
    assert_eq!(memo.get(&0), Some(&3));

    let shared: DashMap<usize, usize> = DashMap::new();
    let mut memo = &shared;
    assert!(memo.record_if_longer(4, 0));
    assert!(!memo.record_if_longer(4, 0));
    assert!(memo.record_if_longer(4, 5));
    assert_eq!(*shared.get(&4).unwrap(), 5);
}

#[test]
fn test_single_vertex_component_is_zero() {
    let mut graph = Graph::new();
    graph.set_point(7, Point::new(0.5, 0.5));
    let component = graph.largest_component();
    assert_eq!(component.len(), 1);

    for algorithm in Algorithm::ALL {
        let estimate = algorithm
            .estimator(builder())
            .search_lsp(&graph, &component, &mut builder().sampler())
            .unwrap();
        assert_eq!(estimate.length, 0, "{}", algorithm);
    }
}

#[test]
fn test_empty_component_is_rejected() {
    let graph = Graph::new();
    let component = graph.largest_component();
    for algorithm in Algorithm::ALL {
        let result = algorithm
            .estimator(builder())
            .search_lsp(&graph, &component, &mut builder().sampler());
        assert!(matches!(result, Err(LspError::EmptyDomain)), "{}", algorithm);
    }
}

#[test]
fn test_search_entry_point() {
    let graph = path_graph_with_points(6);
    for algorithm in Algorithm::ALL {
        let estimate = search(&graph, algorithm, builder()).unwrap();
        assert!(estimate.length <= 5);
        assert_simple_path(&graph, &estimate);
    }
}

#[test]
fn test_estimate_longer_keeps_first_on_tie() {
    let a = Estimate::with_path(vec![1, 2]);
    let b = Estimate::length_only(1);
    assert_eq!(a.clone().longer(b.clone()), a);
    assert_eq!(b.longer(Estimate::length_only(3)).length, 3);
}

#[test]
fn test_read_edge_list_formats() {
    let input = "% comment\n1 2\n\n2 0.5 0.25 3 0.75 1.0\n# trailing comment\n";
    let graph = read_edge_list(input.as_bytes()).unwrap();
    assert_eq!(graph.vertices(), &[1, 2, 3]);
    assert_eq!(graph.neighbors(2), &[1, 3]);
    assert_eq!(graph.point(3), Some(Point::new(0.75, 1.0)));
    assert_eq!(graph.point(1), None);
}

#[test]
fn test_read_edge_list_rejects_bad_lines() {
    match read_edge_list("1 2\n1 2 3\n".as_bytes()) {
        Err(LspError::Format { line, .. }) => assert_eq!(line, 2),
        other => panic!("unexpected {:?}", other),
    }
    match read_edge_list("1 x\n".as_bytes()) {
        Err(LspError::Format { line, reason }) => {
            assert_eq!(line, 1);
            assert!(reason.contains("vertex id"));
        }
        other => panic!("unexpected {:?}", other),
    }
    assert!(matches!(
        read_edge_list("1 0.0 zero 2 1.0 1.0\n".as_bytes()),
        Err(LspError::Format { line: 1, .. })
    ));
}

#[test]
fn test_write_edge_list_once_per_edge() {
    let mut graph = path_graph(3);
    graph.add_edge(4, 4);

    let mut out = Vec::new();
    write_edge_list(&graph, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "1 2\n2 3\n4 4\n");

    let mut out = Vec::new();
    assert!(matches!(
        write_point_edge_list(&graph, &mut out),
        Err(LspError::MissingCoordinates(_))
    ));
}

#[test]
fn test_point_edge_list_reads_back() {
    let mut rng = SmallRng::seed_from_u64(5);
    let generated = GeometricGraph::generate(40, 0.3, &mut rng).unwrap();
    let mut out = Vec::new();
    write_point_edge_list(&generated.graph, &mut out).unwrap();

    let graph = read_edge_list(out.as_slice()).unwrap();
    assert_eq!(graph.edge_count(), generated.graph.edge_count());
    for &v in graph.vertices() {
        assert_eq!(graph.point(v), generated.graph.point(v));
    }
}

#[test]
fn test_generate_extremes() {
    let mut rng = SmallRng::seed_from_u64(1);
    let sparse = GeometricGraph::generate(50, 0.0, &mut rng).unwrap();
    assert_eq!(sparse.graph.len(), 50);
    assert_eq!(sparse.graph.edge_count(), 0);
    assert_eq!(sparse.graph.largest_component().len(), 1);

    let dense = GeometricGraph::generate(20, 2.0, &mut rng).unwrap();
    assert_eq!(dense.graph.edge_count(), 190);
    assert!(dense.graph.vertices().iter().all(|&v| dense.graph.point(v).is_some()));

    assert!(matches!(
        GeometricGraph::generate(10, -1.0, &mut rng),
        Err(LspError::InvalidParameter(_))
    ));
}

#[test]
fn test_find_optimal_radius() {
    let mut rng = SmallRng::seed_from_u64(9);
    let radius = find_optimal_radius(100, 0.5, 0.9, &mut rng).unwrap();
    assert!(radius > 0.0 && radius < std::f64::consts::SQRT_2);
    assert!(RADIUS_TOLERANCE > 0.0);

    assert!(matches!(
        find_optimal_radius(100, 0.9, 0.5, &mut rng),
        Err(LspError::InvalidParameter(_))
    ));
    assert!(matches!(
        find_optimal_radius(0, 0.5, 0.9, &mut rng),
        Err(LspError::InvalidParameter(_))
    ));
}

#[test]
fn test_render_table() {
    let graph = path_graph(5);
    let component = graph.largest_component();
    let reports = vec![
        Report::new(
            Algorithm::DoubleSweep,
            &graph,
            &component,
            Some(0.125),
            Estimate::length_only(4),
            Duration::from_millis(3),
        ),
        Report::new(
            Algorithm::Backtracking,
            &graph,
            &component,
            None,
            Estimate::length_only(4),
            Duration::from_millis(1),
        ),
    ];
    let table = render_table(&reports);
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Algorithm"));
    assert!(lines[2].starts_with("double-sweep"));
    assert!(lines[2].contains("0.1250"));
    assert!(lines[3].starts_with("backtracking"));
    assert_eq!(reports[0].max_degree, 2);
    assert_eq!(reports[0].average_degree, 1.6);

    let json = serde_json::to_value(&reports[0]).unwrap();
    assert_eq!(json["algorithm"], "double-sweep");
    assert_eq!(json["length"], 4);
}

#[test]
fn test_estimators_on_deep_path() {
    let n = 30_000;
    let graph = path_graph_with_points(n);
    let component = graph.largest_component();
    for algorithm in Algorithm::ALL {
        let mut sampler = SequenceSampler::new(vec![1, n]);
        let estimate = algorithm
            .estimator(builder().set_trials(1))
            .search_lsp(&graph, &component, &mut sampler)
            .unwrap();
        assert_eq!(estimate.length, n as usize - 1, "{}", algorithm);
    }
}

#[test]
fn test_read_edge_list_rejects_invalid_utf8() {
    match read_edge_list(&b"1 2\n\xff\xfe 3\n"[..]) {
        Err(LspError::Format { line, reason }) => {
            assert_eq!(line, 2);
            assert!(reason.contains("UTF-8"));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_read_edge_list_accepts_crlf() {
    let graph = read_edge_list(&b"1 2\r\n2 3\r\n"[..]).unwrap();
    assert_eq!(graph.neighbors(2), &[1, 3]);
}

#[test]
fn test_evaluate_skips_best_first_on_mixed_formats() {
    let graph = read_edge_list("1 0.0 0.0 2 1.0 0.0\n2 3\n".as_bytes()).unwrap();
    let component = graph.largest_component();
    assert!(!graph.has_points_for(&component));

    let reports = evaluate(&graph, None, &Algorithm::ALL, &builder()).unwrap();
    let algorithms: Vec<Algorithm> = reports.iter().map(|report| report.algorithm).collect();
    assert_eq!(
        algorithms,
        vec![
            Algorithm::DoubleSweep,
            Algorithm::FarthestFirst,
            Algorithm::Backtracking
        ]
    );
    assert!(reports
        .iter()
        .all(|report| (1..=2).contains(&report.length)));
}

#[test]
fn test_evaluate_runs_best_first_with_points() {
    let graph = path_graph_with_points(5);
    let reports = evaluate(&graph, Some(1.0), &[Algorithm::BestFirst], &builder()).unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].radius, Some(1.0));
    assert_eq!(reports[0].component_size, 5);
}

#[test]
fn test_short_target() {
    assert_eq!(short_target("lsp_heuristics::best_first"), "best_first");
    assert_eq!(short_target("lsp"), "lsp");
}

mod proptests {
    use super::assert_simple_path;
    use crate::{Algorithm, Builder, Graph, Point};
    use proptest::prelude::*;

    fn arbitrary_graph() -> impl Strategy<Value = Graph> {
        (
            prop::collection::vec((0u32..10, 0u32..10), 1..20),
            prop::collection::vec((0.0f64..1.0, 0.0f64..1.0), 10),
        )
            .prop_map(|(edges, points)| {
                let mut graph = Graph::new();
                for (u, v) in edges {
                    graph.add_edge_with_points(
                        u,
                        Point::new(points[u as usize].0, points[u as usize].1),
                        v,
                        Point::new(points[v as usize].0, points[v as usize].1),
                    );
                }
                graph
            })
    }

    proptest! {
        /// Every estimate is a feasible simple path inside the component.
        #[test]
        fn prop_estimates_are_simple_paths(graph in arbitrary_graph(), seed in any::<u64>()) {
            let component = graph.largest_component();
            for algorithm in Algorithm::ALL {
                let builder = Builder::default().set_seed(seed);
                let estimate = algorithm
                    .estimator(builder.clone())
                    .search_lsp(&graph, &component, &mut builder.sampler())
                    .unwrap();
                prop_assert!(estimate.length < component.len());
                assert_simple_path(&graph, &estimate);
                if let Some(path) = &estimate.path {
                    prop_assert!(path.iter().all(|&v| component.contains(v)));
                }
            }
        }

        /// Same seed, same answer.
        #[test]
        fn prop_seeded_runs_repeat(graph in arbitrary_graph(), seed in any::<u64>()) {
            let component = graph.largest_component();
            for algorithm in Algorithm::ALL {
                let builder = Builder::default().set_seed(seed);
                let first = algorithm
                    .estimator(builder.clone())
                    .search_lsp(&graph, &component, &mut builder.sampler())
                    .unwrap();
                let second = algorithm
                    .estimator(builder.clone())
                    .search_lsp(&graph, &component, &mut builder.sampler())
                    .unwrap();
                prop_assert_eq!(first, second);
            }
        }
    }
}
