use getset::Getters;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One Kafka ACL rule. Every field is part of the rule's identity, so none of
/// them can change in place.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct KafkaAcl {
    principal: String,
    host: String,
    resource_type: String,
    resource_name: String,
    operation: String,
    permission_type: String,
    pattern_type: String,
}

impl KafkaAcl {
    pub fn new(
        principal: impl Into<String>,
        host: impl Into<String>,
        resource_type: impl Into<String>,
        resource_name: impl Into<String>,
        operation: impl Into<String>,
        permission_type: impl Into<String>,
        pattern_type: impl Into<String>,
    ) -> Self {
        Self {
            principal: principal.into(),
            host: host.into(),
            resource_type: resource_type.into(),
            resource_name: resource_name.into(),
            operation: operation.into(),
            permission_type: permission_type.into(),
            pattern_type: pattern_type.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Display for KafkaAcl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "principal={},host={},resourceType={},resourceName={},operation={},permissionType={},patternType={}",
            self.principal,
            self.host,
            self.resource_type,
            self.resource_name,
            self.operation,
            self.permission_type,
            self.pattern_type
        )
    }
}
