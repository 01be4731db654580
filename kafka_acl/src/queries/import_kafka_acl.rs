use crate::error::AclError;
use crate::resource_id::KafkaAclResourceId;
use crate::state::KafkaAclState;
use tracing::info;

/// Builds the state of an already existing ACL from its identifier without
/// contacting the cluster.
pub fn import_kafka_acl(id: &str) -> Result<KafkaAclState, AclError> {
    let resource_id = id.parse::<KafkaAclResourceId>()?;
    info!("Importing Kafka ACL ({}) in {}", resource_id.acl, resource_id.cluster_id);

    Ok(KafkaAclState::from(resource_id))
}
