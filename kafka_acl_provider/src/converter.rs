use crate::resource_data::ResourceData;
use crate::schema::{
    CLUSTER_ID, HOST, OPERATION, PATTERN_TYPE, PERMISSION_TYPE, PRINCIPAL, RESOURCE_NAME,
    RESOURCE_TYPE,
};
use anyhow::anyhow;
use kafka_acl::acl::KafkaAcl;
use kafka_acl::state::KafkaAclState;

pub fn resource_data_to_state(data: &impl ResourceData) -> Result<KafkaAclState, anyhow::Error> {
    let required = |key: &str| {
        data.get(key)
            .map(str::to_owned)
            .ok_or_else(|| anyhow!("Required attribute \"{key}\" is missing or isn't a string"))
    };

    let acl = KafkaAcl::new(
        required(PRINCIPAL)?,
        required(HOST)?,
        required(RESOURCE_TYPE)?,
        required(RESOURCE_NAME)?,
        required(OPERATION)?,
        required(PERMISSION_TYPE)?,
        required(PATTERN_TYPE)?,
    );

    Ok(KafkaAclState {
        id: data.id().map(str::to_owned),
        cluster_id: required(CLUSTER_ID)?,
        acl,
    })
}

pub fn state_to_resource_data(state: &KafkaAclState, data: &mut impl ResourceData) {
    let acl = &state.acl;

    data.set_id(state.id.clone());
    data.set(CLUSTER_ID, state.cluster_id.clone());
    data.set(PRINCIPAL, acl.principal().clone());
    data.set(HOST, acl.host().clone());
    data.set(RESOURCE_TYPE, acl.resource_type().clone());
    data.set(RESOURCE_NAME, acl.resource_name().clone());
    data.set(OPERATION, acl.operation().clone());
    data.set(PERMISSION_TYPE, acl.permission_type().clone());
    data.set(PATTERN_TYPE, acl.pattern_type().clone());
}
