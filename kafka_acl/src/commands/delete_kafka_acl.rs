use crate::client::KafkaAclApiClient;
use crate::error::AclError;
use crate::state::KafkaAclState;
use tracing::info;

/// Deletes the ACL and clears `state`. The cluster status isn't checked so
/// deletion is still attempted against a cluster that isn't RUNNING.
#[tracing::instrument(skip_all, fields(cluster_id = %state.cluster_id))]
pub async fn delete_kafka_acl<C: KafkaAclApiClient + ?Sized>(
    client: &C,
    state: &mut KafkaAclState,
) -> Result<(), AclError> {
    info!("Deleting Kafka ACL in {}", state.cluster_id);

    client
        .delete_kafka_acl(&state.cluster_id, &state.acl)
        .await
        .map_err(AclError::transport("Error deleting Kafka ACL"))?;

    let acl = std::mem::take(&mut state.acl);
    state.clear();

    info!("Kafka ACL ({acl}) has been deleted");
    Ok(())
}
