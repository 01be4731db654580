use serde::Deserialize;

pub const RUNNING_CLUSTER_STATUS: &str = "RUNNING";

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub cluster_name: String,
    pub cluster_status: String,
}

impl Cluster {
    pub fn is_running(&self) -> bool {
        self.cluster_status == RUNNING_CLUSTER_STATUS
    }
}
