pub mod create_kafka_acl;
pub mod delete_kafka_acl;
