use crate::client::KafkaAclApiClient;
use crate::cluster_check::ensure_cluster_running;
use crate::error::AclError;
use crate::state::KafkaAclState;
use tracing::info;

/// Creates the declared ACL and assigns the managed identifier to `state`.
///
/// An ACL matching every declared field must not exist yet, otherwise the
/// caller is pointed at import. Nothing is retried here.
#[tracing::instrument(skip_all, fields(cluster_id = %state.cluster_id))]
pub async fn create_kafka_acl<C: KafkaAclApiClient + ?Sized>(
    client: &C,
    state: &mut KafkaAclState,
) -> Result<(), AclError> {
    info!("Creating Kafka ACL in {}", state.cluster_id);

    ensure_cluster_running(client, &state.cluster_id).await?;

    let remote_acls = client
        .read_kafka_acls(&state.cluster_id, &state.acl)
        .await
        .map_err(AclError::transport("Error reading kafka ACL"))?;

    if !remote_acls.is_empty() {
        return Err(AclError::AlreadyExists {
            cluster_id: state.cluster_id.clone(),
        });
    }

    client
        .create_kafka_acl(&state.cluster_id, &state.acl)
        .await
        .map_err(AclError::transport("Error creating kafka ACL"))?;

    state.id = Some(state.resource_id().to_string());

    info!("Kafka ACL ({}) has been created", state.acl);
    Ok(())
}
