//! Integration tests for the public API

use composeviz::prelude::*;
use composeviz::{parse, render};

#[test]
fn test_zookeeper_kafka_scenario() {
    let yaml = r#"
services:
  zookeeper: {}
  kafka:
    ports: ["9092:9092"]
    depends_on: [zookeeper]
"#;
    let graph = parse(yaml).unwrap();
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.dependencies_of("kafka"), vec!["zookeeper"]);
    assert_eq!(graph.get_node("zookeeper").unwrap().role, "Infra/ZooKeeper");
    assert_eq!(graph.get_node("kafka").unwrap().role, "Messaging/Kafka");

    let grouping = graph.grouping();
    assert_eq!(grouping.labels(), vec!["Infra", "Messaging"]);

    let diagrams = render(yaml).unwrap();
    assert!(diagrams.mermaid.lines().any(|l| l == "  zookeeper --> kafka"));
}

#[test]
fn test_port_tier_when_no_token_matches() {
    let graph = parse("services:\n  broker:\n    ports: [\"0.0.0.0:9092:9092/tcp\"]\n").unwrap();
    assert_eq!(graph.get_node("broker").unwrap().role, "Messaging/Kafka");
}

#[test]
fn test_keyword_tier() {
    let graph = parse("services:\n  myapp-api:\n    build: .\n").unwrap();
    assert_eq!(graph.get_node("myapp-api").unwrap().role, "Web/App");
}

#[test]
fn test_depends_on_mapping_equals_list() {
    let list = render(
        r#"
services:
  db:
    image: postgres
  api:
    depends_on: [db]
"#,
    )
    .unwrap();
    let map = render(
        r#"
services:
  db:
    image: postgres
  api:
    depends_on:
      db:
        condition: service_healthy
"#,
    )
    .unwrap();
    assert_eq!(list, map);
}

#[test]
fn test_malformed_service_fields_do_not_fail() {
    let yaml = r#"
services:
  odd:
    image: 42
    ports: [{published: 80}, "x:y", true]
    labels: "not a map"
    environment: [1, 2, 3]
    depends_on: 7
  bare:
"#;
    let graph = parse(yaml).unwrap();
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.get_node("odd").unwrap().role, "Other/odd");
    assert_eq!(graph.get_node("bare").unwrap().role, "Other/bare");
    assert!(render(yaml).is_ok());
}

#[test]
fn test_hadoop_stack() {
    let yaml = r#"
services:
  namenode:
    image: bde2020/hadoop-namenode:2.0.0-hadoop3.2.1-java8
    ports: ["9870:9870", "9000:9000"]
  datanode:
    image: bde2020/hadoop-datanode:2.0.0-hadoop3.2.1-java8
    depends_on: [namenode]
  resourcemanager:
    image: bde2020/hadoop-resourcemanager:2.0.0-hadoop3.2.1-java8
    depends_on: [namenode, datanode]
  hive-server:
    image: bde2020/hive:2.3.2-postgresql-metastore
    depends_on: [hive-metastore]
  hive-metastore:
    image: bde2020/hive:2.3.2-postgresql-metastore
    depends_on: [hive-metastore-postgresql]
  hive-metastore-postgresql:
    image: bde2020/hive-metastore-postgresql:2.3.0
"#;
    let graph = parse(yaml).unwrap();
    assert_eq!(graph.get_node("namenode").unwrap().role, "HDFS/NameNode");
    assert_eq!(graph.get_node("datanode").unwrap().role, "HDFS/DataNode");
    assert_eq!(
        graph.get_node("resourcemanager").unwrap().role,
        "YARN/ResourceManager"
    );
    assert_eq!(graph.get_node("hive-server").unwrap().role, "SQL/Hive");

    let grouping = graph.grouping();
    assert_eq!(grouping.labels(), vec!["HDFS", "YARN", "SQL"]);
    assert_eq!(
        grouping.get("SQL").unwrap().members,
        vec!["hive-metastore", "hive-metastore-postgresql", "hive-server"]
    );

    let edges: Vec<String> = graph
        .edges()
        .map(|e| format!("{} -> {}", e.from, e.to))
        .collect();
    assert_eq!(
        edges,
        vec![
            "namenode -> datanode",
            "namenode -> resourcemanager",
            "datanode -> resourcemanager",
            "hive-metastore -> hive-server",
            "hive-metastore-postgresql -> hive-metastore",
        ]
    );

    let diagrams = render(yaml).unwrap();
    assert!(diagrams
        .plantuml
        .contains("hive_metastore_postgresql --> hive_metastore"));
    assert!(diagrams
        .mermaid
        .contains("    namenode[\"namenode\\n(HDFS/NameNode)\\n9870:9870\\n9000:9000\"]"));
}

#[test]
fn test_orchestrator_with_explicit_renderers() {
    let document = ComposeLoader::parse_str("services:\n  cache:\n    image: redis\n").unwrap();
    let graph = ServiceGraph::from_document(&document);

    let orchestrator = Orchestrator::new();
    let diagrams = orchestrator.render(&graph).unwrap();
    assert_eq!(diagrams.mermaid, MermaidRenderer::new().render(&graph).unwrap());
    assert_eq!(diagrams.plantuml, PlantUmlRenderer::new().render(&graph).unwrap());
}
