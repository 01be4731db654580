use crate::client::KafkaAclApiClient;
use crate::error::AclError;

/// ACLs can only be inspected or changed on a RUNNING cluster.
pub(crate) async fn ensure_cluster_running<C: KafkaAclApiClient + ?Sized>(
    client: &C,
    cluster_id: &str,
) -> Result<(), AclError> {
    let cluster = client
        .read_cluster(cluster_id)
        .await
        .map_err(AclError::transport("Error in getting the status of the cluster"))?;

    if !cluster.is_running() {
        return Err(AclError::ClusterNotRunning {
            cluster_id: cluster_id.to_owned(),
            status: cluster.cluster_status,
        });
    }

    Ok(())
}
