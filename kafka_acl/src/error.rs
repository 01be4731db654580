use thiserror::Error;

#[derive(Debug, Error)]
pub enum AclError {
    #[error("Cluster {cluster_id} is not RUNNING. Currently in {status} state")]
    ClusterNotRunning { cluster_id: String, status: String },

    #[error("{context}")]
    Transport {
        context: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error("Kafka ACL already exists in cluster {cluster_id}, use terraform import instead")]
    AlreadyExists { cluster_id: String },

    #[error("Unexpected format of ID ({id:?}), expected <CLUSTER-ID>&<PRINCIPAL>&<HOST>&<RESOURCE-TYPE>&<RESOURCE-NAME>&<OPERATION>&<PERMISSION-TYPE>&<PATTERN-TYPE>")]
    InvalidResourceId { id: String },
}

impl AclError {
    pub(crate) fn transport(context: &'static str) -> impl FnOnce(anyhow::Error) -> Self {
        move |source| AclError::Transport { context, source }
    }
}
