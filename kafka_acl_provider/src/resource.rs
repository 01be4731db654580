use crate::converter::{resource_data_to_state, state_to_resource_data};
use crate::error::ApplicationError;
use crate::resource_data::ResourceData;
use anyhow::anyhow;
use kafka_acl::client::KafkaAclApiClient;
use kafka_acl::commands::create_kafka_acl::create_kafka_acl;
use kafka_acl::commands::delete_kafka_acl::delete_kafka_acl;
use kafka_acl::queries::import_kafka_acl::import_kafka_acl;
use kafka_acl::queries::read_kafka_acl::read_kafka_acl;

pub async fn resource_kafka_acl_create<C: KafkaAclApiClient + ?Sized>(
    data: &mut impl ResourceData,
    client: &C,
) -> Result<(), ApplicationError> {
    let mut state = resource_data_to_state(&*data).map_err(ApplicationError::InvalidArgument)?;

    create_kafka_acl(client, &mut state).await?;

    state_to_resource_data(&state, data);
    Ok(())
}

pub async fn resource_kafka_acl_read<C: KafkaAclApiClient + ?Sized>(
    data: &mut impl ResourceData,
    client: &C,
) -> Result<(), ApplicationError> {
    let mut state = resource_data_to_state(&*data).map_err(ApplicationError::InvalidArgument)?;

    read_kafka_acl(client, &mut state).await?;

    state_to_resource_data(&state, data);
    Ok(())
}

pub async fn resource_kafka_acl_delete<C: KafkaAclApiClient + ?Sized>(
    data: &mut impl ResourceData,
    client: &C,
) -> Result<(), ApplicationError> {
    let mut state = resource_data_to_state(&*data).map_err(ApplicationError::InvalidArgument)?;

    delete_kafka_acl(client, &mut state).await?;

    state_to_resource_data(&state, data);
    Ok(())
}

pub fn resource_kafka_acl_import(data: &mut impl ResourceData) -> Result<(), ApplicationError> {
    let Some(id) = data.id() else {
        return Err(ApplicationError::InvalidArgument(anyhow!(
            "Import requires a resource id"
        )));
    };

    let state = import_kafka_acl(id)?;

    state_to_resource_data(&state, data);
    Ok(())
}
