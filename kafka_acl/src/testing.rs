//! In-memory [`KafkaAclApiClient`] for exercising lifecycle code without an
//! Instaclustr account.

use crate::acl::KafkaAcl;
use crate::client::{Cluster, KafkaAclApiClient};
use anyhow::{anyhow, bail};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientOperation {
    ReadCluster,
    ReadKafkaAcls,
    CreateKafkaAcl,
    DeleteKafkaAcl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub operation: ClientOperation,
    pub cluster_id: String,
    pub acl: Option<KafkaAcl>,
}

#[derive(Debug, Default)]
struct InMemoryState {
    cluster_statuses: HashMap<String, String>,
    acls: HashMap<String, HashSet<KafkaAcl>>,
    failing: HashSet<ClientOperation>,
    calls: Vec<RecordedCall>,
}

#[derive(Debug, Default)]
pub struct InMemoryKafkaAclClient {
    state: Mutex<InMemoryState>,
}

impl InMemoryKafkaAclClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cluster(mut self, cluster_id: &str, status: &str) -> Self {
        self.state
            .get_mut()
            .cluster_statuses
            .insert(cluster_id.to_owned(), status.to_owned());
        self
    }

    pub fn with_acl(mut self, cluster_id: &str, acl: KafkaAcl) -> Self {
        self.state
            .get_mut()
            .acls
            .entry(cluster_id.to_owned())
            .or_default()
            .insert(acl);
        self
    }

    pub fn failing_on(mut self, operation: ClientOperation) -> Self {
        self.state.get_mut().failing.insert(operation);
        self
    }

    pub async fn set_cluster_status(&self, cluster_id: &str, status: &str) {
        self.state
            .lock()
            .await
            .cluster_statuses
            .insert(cluster_id.to_owned(), status.to_owned());
    }

    pub async fn remove_acl(&self, cluster_id: &str, acl: &KafkaAcl) -> bool {
        self.state
            .lock()
            .await
            .acls
            .get_mut(cluster_id)
            .is_some_and(|acls| acls.remove(acl))
    }

    pub async fn acls(&self, cluster_id: &str) -> Vec<KafkaAcl> {
        self.state
            .lock()
            .await
            .acls
            .get(cluster_id)
            .map(|acls| acls.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.state.lock().await.calls.clone()
    }

    pub async fn operations(&self) -> Vec<ClientOperation> {
        self.calls().await.into_iter().map(|x| x.operation).collect()
    }
}

impl InMemoryState {
    fn record(
        &mut self,
        operation: ClientOperation,
        cluster_id: &str,
        acl: Option<&KafkaAcl>,
    ) -> Result<(), anyhow::Error> {
        self.calls.push(RecordedCall {
            operation,
            cluster_id: cluster_id.to_owned(),
            acl: acl.cloned(),
        });

        if self.failing.contains(&operation) {
            bail!("Status code: 503, message: {operation:?} is unavailable")
        }

        Ok(())
    }
}

#[async_trait]
impl KafkaAclApiClient for InMemoryKafkaAclClient {
    async fn read_cluster(&self, cluster_id: &str) -> Result<Cluster, anyhow::Error> {
        let mut state = self.state.lock().await;
        state.record(ClientOperation::ReadCluster, cluster_id, None)?;

        let status = state
            .cluster_statuses
            .get(cluster_id)
            .ok_or_else(|| anyhow!("Status code: 404, message: cluster {cluster_id} not found"))?;

        Ok(Cluster {
            id: cluster_id.to_owned(),
            cluster_name: cluster_id.to_owned(),
            cluster_status: status.clone(),
        })
    }

    async fn read_kafka_acls(
        &self,
        cluster_id: &str,
        filter: &KafkaAcl,
    ) -> Result<Vec<KafkaAcl>, anyhow::Error> {
        let mut state = self.state.lock().await;
        state.record(ClientOperation::ReadKafkaAcls, cluster_id, Some(filter))?;

        let matching = state
            .acls
            .get(cluster_id)
            .map(|acls| acls.iter().filter(|x| *x == filter).cloned().collect())
            .unwrap_or_default();

        Ok(matching)
    }

    async fn create_kafka_acl(&self, cluster_id: &str, acl: &KafkaAcl) -> Result<(), anyhow::Error> {
        let mut state = self.state.lock().await;
        state.record(ClientOperation::CreateKafkaAcl, cluster_id, Some(acl))?;

        state
            .acls
            .entry(cluster_id.to_owned())
            .or_default()
            .insert(acl.clone());

        Ok(())
    }

    async fn delete_kafka_acl(&self, cluster_id: &str, acl: &KafkaAcl) -> Result<(), anyhow::Error> {
        let mut state = self.state.lock().await;
        state.record(ClientOperation::DeleteKafkaAcl, cluster_id, Some(acl))?;

        // Deleting an ACL that doesn't exist is not an error, same as Kafka's DeleteAcls.
        if let Some(acls) = state.acls.get_mut(cluster_id) {
            acls.remove(acl);
        }

        Ok(())
    }
}
