use crate::app_config::AppConfig;
use crate::error::ApplicationError;
use crate::resource::{
    resource_kafka_acl_create, resource_kafka_acl_delete, resource_kafka_acl_import,
    resource_kafka_acl_read,
};
use crate::resource_data::{JsonResourceData, ResourceData};
use crate::schema::kafka_acl_schema;
use anyhow::{anyhow, Context};
use clap::Subcommand;
use kafka_acl::client::{InstaclustrApiClient, KafkaAclApiClient};
use serde_json::Value;
use tokio::io::AsyncReadExt;
use tracing::debug;

#[derive(Debug, Clone, Subcommand)]
pub enum ProviderCommand {
    /// Print the instaclustr_kafka_acl resource schema
    Schema,
    /// Create the ACL described by the state read from stdin
    Create,
    /// Refresh the state read from stdin against the cluster
    Read,
    /// Delete the ACL described by the state read from stdin
    Delete,
    /// Build the state of an existing ACL from its identifier
    Import {
        #[arg(long)]
        id: String,
    },
}

pub async fn run_command(command: ProviderCommand) -> Result<Value, ApplicationError> {
    match command {
        ProviderCommand::Schema => serde_json::to_value(kafka_acl_schema())
            .context("While serializing schema")
            .map_err(ApplicationError::Internal),
        ProviderCommand::Import { id } => {
            let mut data = JsonResourceData::new();
            data.set_id(Some(id));
            resource_kafka_acl_import(&mut data)?;
            Ok(data.into_value())
        }
        command => {
            let config = AppConfig::build()
                .context("While building app config")
                .map_err(ApplicationError::Internal)?;
            let client = InstaclustrApiClient::create(&config.connection_settings())
                .context("While creating api client")
                .map_err(ApplicationError::Internal)?;

            let input = read_stdin()
                .await
                .map_err(ApplicationError::InvalidArgument)?;
            let mut data =
                JsonResourceData::from_json(&input).map_err(ApplicationError::InvalidArgument)?;
            debug!("Input state: {data:?}");

            apply_to_state(&command, &mut data, &client).await?;
            Ok(data.into_value())
        }
    }
}

pub async fn apply_to_state<C: KafkaAclApiClient + ?Sized>(
    command: &ProviderCommand,
    data: &mut JsonResourceData,
    client: &C,
) -> Result<(), ApplicationError> {
    match command {
        ProviderCommand::Create => resource_kafka_acl_create(data, client).await,
        ProviderCommand::Read => resource_kafka_acl_read(data, client).await,
        ProviderCommand::Delete => resource_kafka_acl_delete(data, client).await,
        ProviderCommand::Schema | ProviderCommand::Import { .. } => Err(
            ApplicationError::InvalidArgument(anyhow!("{command:?} doesn't operate on a resource state")),
        ),
    }
}

async fn read_stdin() -> Result<String, anyhow::Error> {
    let mut input = String::new();
    tokio::io::stdin()
        .read_to_string(&mut input)
        .await
        .context("While reading resource state from stdin")?;

    Ok(input)
}
