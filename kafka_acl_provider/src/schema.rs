use serde::Serialize;

pub const RESOURCE_TYPE_NAME: &str = "instaclustr_kafka_acl";

pub const CLUSTER_ID: &str = "cluster_id";
pub const PRINCIPAL: &str = "principal";
pub const HOST: &str = "host";
pub const RESOURCE_TYPE: &str = "resource_type";
pub const RESOURCE_NAME: &str = "resource_name";
pub const OPERATION: &str = "operation";
pub const PERMISSION_TYPE: &str = "permission_type";
pub const PATTERN_TYPE: &str = "pattern_type";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    String,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AttributeSchema {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
    pub required: bool,
    pub force_new: bool,
}

impl AttributeSchema {
    const fn required_force_new_string(name: &'static str) -> Self {
        Self {
            name,
            attribute_type: AttributeType::String,
            required: true,
            force_new: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourceSchema {
    pub name: &'static str,
    pub importable: bool,
    pub attributes: &'static [AttributeSchema],
}

/// Every attribute is part of the ACL identity, so there is no in-place update.
pub const KAFKA_ACL_ATTRIBUTES: [AttributeSchema; 8] = [
    AttributeSchema::required_force_new_string(CLUSTER_ID),
    AttributeSchema::required_force_new_string(PRINCIPAL),
    AttributeSchema::required_force_new_string(HOST),
    AttributeSchema::required_force_new_string(RESOURCE_TYPE),
    AttributeSchema::required_force_new_string(RESOURCE_NAME),
    AttributeSchema::required_force_new_string(OPERATION),
    AttributeSchema::required_force_new_string(PERMISSION_TYPE),
    AttributeSchema::required_force_new_string(PATTERN_TYPE),
];

pub fn kafka_acl_schema() -> ResourceSchema {
    ResourceSchema {
        name: RESOURCE_TYPE_NAME,
        importable: true,
        attributes: &KAFKA_ACL_ATTRIBUTES,
    }
}
