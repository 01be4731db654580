use crate::acl::KafkaAcl;
use crate::client::Cluster;
use async_trait::async_trait;

/// Remote operations the Kafka ACL lifecycle depends on.
#[async_trait]
pub trait KafkaAclApiClient: Send + Sync {
    async fn read_cluster(&self, cluster_id: &str) -> Result<Cluster, anyhow::Error>;

    /// Exact-match search: every field of `filter` must match.
    async fn read_kafka_acls(
        &self,
        cluster_id: &str,
        filter: &KafkaAcl,
    ) -> Result<Vec<KafkaAcl>, anyhow::Error>;

    async fn create_kafka_acl(&self, cluster_id: &str, acl: &KafkaAcl) -> Result<(), anyhow::Error>;

    async fn delete_kafka_acl(&self, cluster_id: &str, acl: &KafkaAcl) -> Result<(), anyhow::Error>;
}
