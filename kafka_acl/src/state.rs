use crate::acl::KafkaAcl;
use crate::resource_id::KafkaAclResourceId;

/// Managed state of a single Kafka ACL resource: the declared fields plus the
/// identifier assigned once the ACL exists remotely.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KafkaAclState {
    pub id: Option<String>,
    pub cluster_id: String,
    pub acl: KafkaAcl,
}

impl KafkaAclState {
    pub fn declared(cluster_id: impl Into<String>, acl: KafkaAcl) -> Self {
        Self {
            id: None,
            cluster_id: cluster_id.into(),
            acl,
        }
    }

    pub fn resource_id(&self) -> KafkaAclResourceId {
        KafkaAclResourceId::new(self.cluster_id.clone(), self.acl.clone())
    }

    /// Drops the identifier and blanks every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_cleared(&self) -> bool {
        self.id.is_none() && self.cluster_id.is_empty() && self.acl.is_empty()
    }
}

impl From<KafkaAclResourceId> for KafkaAclState {
    fn from(value: KafkaAclResourceId) -> Self {
        let id = value.to_string();
        Self {
            id: Some(id),
            cluster_id: value.cluster_id,
            acl: value.acl,
        }
    }
}
