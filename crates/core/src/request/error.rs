use thiserror::Error;

use super::types::ALLOWED_REGIONS;

/// Why a table request was rejected.
///
/// Only the first failing rule is reported. Callers match on the rendered
/// message, so the texts below are part of the public contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name is required")]
    MissingName,
    #[error("name must be between 3 and 255 characters")]
    NameLength,
    #[error("name can only contain alphanumeric characters, dots, underscores, and hyphens")]
    NameCharset,

    #[error("region is required")]
    MissingRegion,
    #[error("region must be one of: {}", ALLOWED_REGIONS.join(", "))]
    RegionNotAllowed,

    #[error("attributeDefinitions is required and must have at least one attribute")]
    MissingAttributeDefinitions,
    #[error("each attributeDefinition must be an object")]
    AttributeNotObject,
    #[error("each attribute must have a name")]
    AttributeMissingName,
    #[error("attribute type must be S, N, or B, got {0}")]
    InvalidAttributeType(String),

    #[error("keySchema is required and must have at least one key")]
    MissingKeySchema,
    #[error("keySchema can have at most 2 keys (partition + sort)")]
    TooManyKeys,
    #[error("each key in keySchema must be an object")]
    KeyNotObject,
    #[error("each key must have an attributeName")]
    KeyMissingAttributeName,
    #[error("key attribute '{0}' must be defined in attributeDefinitions")]
    UndefinedKeyAttribute(String),
    #[error("keyType must be HASH or RANGE, got {0}")]
    InvalidKeyType(String),
    #[error("keySchema must have exactly one HASH (partition) key")]
    HashKeyCount,
    #[error("keySchema can have at most one RANGE (sort) key")]
    RangeKeyCount,

    #[error("billingMode must be PAY_PER_REQUEST or PROVISIONED, got {0}")]
    InvalidBillingMode(String),
    #[error("provisioned must be an object when billingMode is PROVISIONED")]
    ProvisionedNotObject,
    #[error("readCapacity must be an integer between 1 and 40000")]
    InvalidReadCapacity,
    #[error("writeCapacity must be an integer between 1 and 40000")]
    InvalidWriteCapacity,
}
