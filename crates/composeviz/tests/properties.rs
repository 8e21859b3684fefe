//! Property tests for classification and graph construction

use composeviz::compose::{parse_container_port, ComposeService, PortSpec, ServiceDefinition};
use composeviz::graph::ServiceGraph;
use composeviz::{classify, Database};
use proptest::prelude::*;
use std::collections::HashSet;

fn service_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,12}"
}

fn services() -> impl Strategy<Value = Vec<ComposeService>> {
    prop::collection::vec(
        (
            service_name(),
            prop::collection::vec(service_name(), 0..4),
            prop::collection::vec("[0-9a-z:./]{0,16}", 0..3),
        ),
        0..12,
    )
    .prop_map(|entries| {
        let mut seen = HashSet::new();
        entries
            .into_iter()
            .filter(|(name, _, _)| seen.insert(name.clone()))
            .map(|(name, depends_on, ports)| {
                let definition = ServiceDefinition {
                    ports: ports.into_iter().map(PortSpec::Short).collect(),
                    depends_on,
                    ..Default::default()
                };
                ComposeService::new(name, definition)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn classify_never_returns_empty(name in ".{0,24}", image in proptest::option::of(".{0,24}")) {
        let definition = ServiceDefinition { image, ..Default::default() };
        let role = classify(&name, &definition);
        prop_assert!(!role.is_empty());
    }

    #[test]
    fn unmatched_names_fall_back_to_other(name in "[qxz]{1,8}") {
        prop_assert_eq!(classify(&name, &ServiceDefinition::default()), format!("Other/{}", name));
    }

    #[test]
    fn port_parsing_never_panics(spec in ".{0,32}") {
        let _ = parse_container_port(&spec);
    }

    #[test]
    fn port_parsing_takes_last_segment(host in 1u16.., container in 1u16.., ip in "[0-9]{1,3}(\\.[0-9]{1,3}){3}") {
        let spec = format!("{}:{}:{}/tcp", ip, host, container);
        prop_assert_eq!(parse_container_port(&spec), Some(container));
        prop_assert_eq!(parse_container_port(&format!("{}:{}", host, container)), Some(container));
    }

    #[test]
    fn grouping_partitions_nodes(services in services()) {
        let graph = ServiceGraph::build(&services);
        let grouping = graph.grouping();

        let mut members = Vec::new();
        for group in &grouping {
            members.extend(group.members.iter().cloned());
        }
        let unique: HashSet<_> = members.iter().cloned().collect();
        let nodes: HashSet<_> = graph.nodes().map(|n| n.name.clone()).collect();

        prop_assert_eq!(members.len(), unique.len());
        prop_assert_eq!(unique, nodes);
    }

    #[test]
    fn edges_only_join_declared_services(services in services()) {
        let graph = ServiceGraph::build(&services);
        for edge in graph.edges() {
            prop_assert!(graph.has_node(&edge.from));
            prop_assert!(graph.has_node(&edge.to));
        }
    }

    #[test]
    fn rendering_is_deterministic(services in services()) {
        let first = composeviz::plugins::Orchestrator::new()
            .render(&ServiceGraph::build(&services))
            .unwrap();
        let second = composeviz::plugins::Orchestrator::new()
            .render(&ServiceGraph::build(&services))
            .unwrap();
        prop_assert_eq!(first, second);
    }
}
