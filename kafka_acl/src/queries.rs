pub mod import_kafka_acl;
pub mod read_kafka_acl;
