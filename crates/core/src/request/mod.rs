mod error;
mod types;
mod validation;

pub use error::ValidationError;
pub use types::{
    AttributeDefinition, AttributeType, Billing, BillingMode, KeyEntry, KeyType,
    ProvisionedCapacity, RequestMetadata, ResourceRequest, ALLOWED_REGIONS, DEFAULT_CAPACITY,
    MAX_CAPACITY, MAX_NAME_LEN, MIN_CAPACITY, MIN_NAME_LEN,
};
pub use validation::validate_request;
