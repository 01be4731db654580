use crate::client::KafkaAclApiClient;
use crate::cluster_check::ensure_cluster_running;
use crate::error::AclError;
use crate::state::KafkaAclState;
use tracing::{info, warn};

/// Reconciles `state` with the remote cluster.
///
/// The search uses the stored fields themselves, so a match never changes
/// them. No match means the ACL was removed outside of this provider and the
/// state is cleared.
#[tracing::instrument(skip_all, fields(cluster_id = %state.cluster_id))]
pub async fn read_kafka_acl<C: KafkaAclApiClient + ?Sized>(
    client: &C,
    state: &mut KafkaAclState,
) -> Result<(), AclError> {
    info!("Reading Kafka ACL in {}", state.cluster_id);

    ensure_cluster_running(client, &state.cluster_id).await?;

    let remote_acls = client
        .read_kafka_acls(&state.cluster_id, &state.acl)
        .await
        .map_err(AclError::transport("Error reading kafka ACL"))?;

    if remote_acls.is_empty() {
        warn!("Kafka ACL ({}) wasn't found, removing it from state", state.acl);
        state.clear();
    }

    Ok(())
}
