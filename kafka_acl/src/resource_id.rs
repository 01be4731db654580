use crate::acl::KafkaAcl;
use crate::error::AclError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const SEPARATOR: char = '&';

/// Composite identifier of a managed ACL:
/// `<cluster_id>&<principal>&<host>&<resource_type>&<resource_name>&<operation>&<permission_type>&<pattern_type>`.
///
/// Segments are not escaped, a field value containing `&` can't be decoded back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KafkaAclResourceId {
    pub cluster_id: String,
    pub acl: KafkaAcl,
}

impl KafkaAclResourceId {
    pub fn new(cluster_id: impl Into<String>, acl: KafkaAcl) -> Self {
        Self {
            cluster_id: cluster_id.into(),
            acl,
        }
    }
}

impl Display for KafkaAclResourceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let acl = &self.acl;
        write!(
            f,
            "{}&{}&{}&{}&{}&{}&{}&{}",
            self.cluster_id,
            acl.principal(),
            acl.host(),
            acl.resource_type(),
            acl.resource_name(),
            acl.operation(),
            acl.permission_type(),
            acl.pattern_type()
        )
    }
}

impl FromStr for KafkaAclResourceId {
    type Err = AclError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        let parts = id.split(SEPARATOR).collect::<Vec<_>>();

        let [cluster_id, principal, host, resource_type, resource_name, operation, permission_type, pattern_type] =
            parts[..]
        else {
            return Err(AclError::InvalidResourceId { id: id.to_owned() });
        };

        if parts.iter().any(|x| x.is_empty()) {
            return Err(AclError::InvalidResourceId { id: id.to_owned() });
        }

        Ok(Self {
            cluster_id: cluster_id.to_owned(),
            acl: KafkaAcl::new(
                principal,
                host,
                resource_type,
                resource_name,
                operation,
                permission_type,
                pattern_type,
            ),
        })
    }
}
