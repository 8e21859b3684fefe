//! Static role hint tables
//!
//! Table order is the canonical order used when listing hints; lookups are
//! exact matches, so order never changes which role a key maps to.

/// Image, name, label and environment tokens mapped to roles
pub static TOKEN_HINTS: &[(&str, &str)] = &[
    // Databases
    ("postgres", "DB/PostgreSQL"),
    ("mysql", "DB/MySQL"),
    ("mariadb", "DB/MariaDB"),
    ("mongo", "DB/MongoDB"),
    ("redis", "Cache/Redis"),
    ("memcached", "Cache/Memcached"),
    ("cassandra", "DB/Cassandra"),
    ("clickhouse", "DB/ClickHouse"),
    ("influxdb", "DB/InfluxDB"),
    ("elasticsearch", "Search/Elasticsearch"),
    ("opensearch", "Search/OpenSearch"),
    ("solr", "Search/Solr"),
    ("neo4j", "DB/Neo4j"),
    ("timescaledb", "DB/PostgreSQL-Timescale"),
    ("minio", "Storage/MinIO"),
    // Messaging and streaming
    ("kafka", "Messaging/Kafka"),
    ("redpanda", "Messaging/Kafka"),
    ("pulsar", "Messaging/Pulsar"),
    ("rabbitmq", "Messaging/RabbitMQ"),
    ("zookeeper", "Infra/ZooKeeper"),
    ("nats", "Messaging/NATS"),
    ("mosquitto", "Messaging/MQTT"),
    // Big data and analytics
    ("hadoop", "BigData/Hadoop"),
    ("namenode", "HDFS/NameNode"),
    ("datanode", "HDFS/DataNode"),
    ("resourcemanager", "YARN/ResourceManager"),
    ("nodemanager", "YARN/NodeManager"),
    ("historyserver", "MapReduce/HistoryServer"),
    ("spark", "Compute/Spark"),
    ("hive", "SQL/Hive"),
    ("hiveserver", "SQL/HiveServer2"),
    ("trino", "SQL/Trino"),
    ("presto", "SQL/Presto"),
    ("flink", "Compute/Flink"),
    ("hue", "UI/Hue"),
    ("superset", "UI/Superset"),
    // Web and proxies
    ("nginx", "Web/Proxy"),
    ("httpd", "Web/HTTPD"),
    ("caddy", "Web/Caddy"),
    ("traefik", "Web/Traefik"),
    ("haproxy", "Web/HAProxy"),
    // Observability
    ("prometheus", "Monitoring/Prometheus"),
    ("grafana", "Monitoring/Grafana"),
    ("loki", "Observability/Loki"),
    ("tempo", "Observability/Tempo"),
    ("promtail", "Observability/Promtail"),
    ("jaeger", "Observability/Jaeger"),
    ("zipkin", "Observability/Zipkin"),
    // Orchestration and CI
    ("airflow", "Orchestration/Airflow"),
    ("jenkins", "CI/Jenkins"),
    ("gitlab", "CI/GitLab"),
    // Auth and security
    ("keycloak", "Auth/Keycloak"),
    ("vault", "Security/Vault"),
    // Dev tools
    ("jupyter", "Dev/Jupyter"),
    ("notebook", "Dev/Jupyter"),
    ("mlflow", "ML/MLflow"),
    // Short names common in Hadoop stacks
    ("nn", "HDFS/NameNode"),
    ("dn", "HDFS/DataNode"),
    ("zk", "Infra/ZooKeeper"),
    ("jobhistory", "MapReduce/HistoryServer"),
    ("hiveserver2", "SQL/HiveServer2"),
    ("hs2", "SQL/HiveServer2"),
    ("metastore", "SQL/Hive Metastore"),
];

/// Well-known container ports mapped to roles
pub static PORT_HINTS: &[(u16, &str)] = &[
    (22, "Infra/SSH"),
    (80, "Web/HTTP"),
    (443, "Web/HTTPS"),
    (3000, "UI/Grafana"),
    (4040, "Compute/Spark UI"),
    (5050, "Orchestration/Airflow UI"),
    (5432, "DB/PostgreSQL"),
    (5500, "Dev/LiveReload"),
    (5601, "UI/Kibana"),
    (5672, "Messaging/RabbitMQ"),
    (5900, "UI/VNC"),
    (6379, "Cache/Redis"),
    (6380, "Cache/Redis"),
    (7000, "DB/Cassandra"),
    (7077, "Compute/Spark Master"),
    (7199, "DB/Cassandra"),
    (8000, "Web/App"),
    (8001, "Web/App"),
    (8002, "Web/App"),
    (8020, "HDFS/Namenode RPC"),
    (8042, "YARN/NodeManager UI"),
    (8080, "Web/App"),
    (8081, "Web/App"),
    (8088, "YARN/ResourceManager UI"),
    (8089, "YARN/ResourceManager UI (host)"),
    (8188, "MapReduce/HistoryServer UI"),
    (8500, "Infra/Consul"),
    (8501, "ML/TF Serving UI"),
    (8529, "DB/ArangoDB"),
    (8530, "DB/ArangoDB"),
    (8649, "Monitoring/Ganglia"),
    (8761, "Web/Eureka"),
    (8888, "UI/Jupyter"),
    (9000, "Storage/MinIO Console"),
    (9001, "Storage/MinIO Console"),
    (9002, "Storage/MinIO API"),
    (9042, "DB/Cassandra"),
    (9090, "Monitoring/Prometheus"),
    (9091, "Monitoring/Prometheus Pushgateway"),
    (9092, "Messaging/Kafka"),
    (9093, "Monitoring/Alertmanager"),
    (9100, "Monitoring/Node Exporter"),
    (9200, "Search/Elasticsearch"),
    (9300, "Search/Elasticsearch Transport"),
    (9870, "HDFS/Namenode UI"),
    (9864, "HDFS/Datanode UI"),
    (9866, "YARN/NM Log"),
    (9868, "YARN/RM Log"),
    (10000, "Hive/HS2 Thrift"),
    (16010, "HBase/Master UI"),
    (2181, "Infra/ZooKeeper"),
    (3306, "DB/MySQL"),
    (3389, "UI/RDP"),
    (4242, "Observability/Vector"),
    (5600, "Observability/Tempo"),
    (4317, "Observability/OTLP"),
];

/// Substrings of a service name that mark a backend application
pub static APP_KEYWORDS: &[&str] = &["api", "app", "backend", "service", "server"];

/// Substrings of a service name that mark a frontend
pub static FRONTEND_KEYWORDS: &[&str] = &["frontend", "web", "ui"];

/// Role for a single token, if it is a known technology
pub fn token_role(token: &str) -> Option<&'static str> {
    TOKEN_HINTS
        .iter()
        .find(|(key, _)| *key == token)
        .map(|(_, role)| *role)
}

/// Role for a container port, if it is a well-known one
pub fn port_role(port: u16) -> Option<&'static str> {
    PORT_HINTS
        .iter()
        .find(|(key, _)| *key == port)
        .map(|(_, role)| *role)
}
