use crate::acl::KafkaAcl;
use crate::client::{Cluster, KafkaAclApiClient};
use crate::connection_settings::ConnectionSettings;
use anyhow::{bail, Context};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use tracing::debug;

/// Client for the Instaclustr provisioning API.
pub struct InstaclustrApiClient {
    client: Client,
    base_url: String,
    username: String,
    api_key: String,
}

impl InstaclustrApiClient {
    pub fn create(settings: &ConnectionSettings) -> Result<Self, anyhow::Error> {
        let base_url = settings.base_url()?.to_owned();

        let client = Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .context("While building http client")?;

        Ok(Self {
            client,
            base_url,
            username: settings.username.clone(),
            api_key: settings.api_key.clone(),
        })
    }

    fn cluster_url(&self, cluster_id: &str) -> String {
        format!("{}/provisioning/v1/{}", self.base_url, cluster_id)
    }

    fn acls_url(&self, cluster_id: &str) -> String {
        format!("{}/kafka/acls", self.cluster_url(cluster_id))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.basic_auth(&self.username, Some(&self.api_key))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, anyhow::Error> {
        let response = self
            .authorized(request)
            .send()
            .await
            .context("While sending request")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("Status code: {status}, message: {body}")
        }

        Ok(response)
    }
}

#[async_trait]
impl KafkaAclApiClient for InstaclustrApiClient {
    async fn read_cluster(&self, cluster_id: &str) -> Result<Cluster, anyhow::Error> {
        let url = self.cluster_url(cluster_id);
        debug!("Reading cluster {url}");

        let cluster = self
            .send(self.client.get(&url))
            .await
            .context("While reading cluster")?
            .json::<Cluster>()
            .await
            .context("While parsing cluster response")?;

        Ok(cluster)
    }

    async fn read_kafka_acls(
        &self,
        cluster_id: &str,
        filter: &KafkaAcl,
    ) -> Result<Vec<KafkaAcl>, anyhow::Error> {
        let url = format!("{}/searches", self.acls_url(cluster_id));
        debug!("Searching kafka ACLs {url}, filter: {filter}");

        let acls = self
            .send(self.client.post(&url).json(filter))
            .await
            .context("While searching kafka ACLs")?
            .json::<Vec<KafkaAcl>>()
            .await
            .context("While parsing kafka ACL search response")?;

        Ok(acls)
    }

    async fn create_kafka_acl(&self, cluster_id: &str, acl: &KafkaAcl) -> Result<(), anyhow::Error> {
        let url = self.acls_url(cluster_id);
        debug!("Creating kafka ACL {url}, acl: {acl}");

        self.send(self.client.post(&url).json(acl))
            .await
            .context("While creating kafka ACL")?;

        Ok(())
    }

    async fn delete_kafka_acl(&self, cluster_id: &str, acl: &KafkaAcl) -> Result<(), anyhow::Error> {
        let url = self.acls_url(cluster_id);
        debug!("Deleting kafka ACL {url}, acl: {acl}");

        self.send(self.client.delete(&url).json(acl))
            .await
            .context("While deleting kafka ACL")?;

        Ok(())
    }
}
