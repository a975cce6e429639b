use serde::{Deserialize, Serialize};

/// Regions a table may be provisioned in, sorted.
pub const ALLOWED_REGIONS: [&str; 9] = [
    "ap-northeast-1",
    "ap-south-1",
    "ap-southeast-1",
    "eu-central-1",
    "eu-west-1",
    "us-east-1",
    "us-east-2",
    "us-west-1",
    "us-west-2",
];

/// Capacity units used when a provisioned table omits one.
pub const DEFAULT_CAPACITY: u32 = 5;

/// Smallest accepted read/write capacity.
pub const MIN_CAPACITY: u32 = 1;

/// Largest accepted read/write capacity.
pub const MAX_CAPACITY: u32 = 40_000;

pub const MIN_NAME_LEN: usize = 3;
pub const MAX_NAME_LEN: usize = 255;

/// A validated request for a DynamoDB table.
///
/// Only [`validate_request`](super::validate_request) builds these from user
/// input, so every instance obeys the request rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRequest {
    pub metadata: RequestMetadata,
    /// Table name, in the case the user wrote it.
    pub name: String,
    pub region: String,
    pub attribute_definitions: Vec<AttributeDefinition>,
    pub key_schema: Vec<KeyEntry>,
    pub billing: Billing,
}

/// Identity of the request object itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestMetadata {
    pub name: Option<String>,
    pub namespace: Option<String>,
}

/// An attribute that keys may refer to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDefinition {
    pub name: String,
    pub attribute_type: AttributeType,
}

/// DynamoDB scalar attribute types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeType {
    #[serde(rename = "S")]
    String,
    #[serde(rename = "N")]
    Number,
    #[serde(rename = "B")]
    Binary,
}

impl AttributeType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "S" => Some(AttributeType::String),
            "N" => Some(AttributeType::Number),
            "B" => Some(AttributeType::Binary),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeType::String => "S",
            AttributeType::Number => "N",
            AttributeType::Binary => "B",
        }
    }
}

/// One element of the table's primary key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyEntry {
    pub attribute_name: String,
    pub key_type: KeyType,
}

/// Role of a key attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum KeyType {
    /// Partition key.
    Hash,
    /// Sort key.
    Range,
}

impl KeyType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "HASH" => Some(KeyType::Hash),
            "RANGE" => Some(KeyType::Range),
            _ => None,
        }
    }
}

/// Billing mode literal as it appears in requests and manifests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingMode {
    PayPerRequest,
    Provisioned,
}

impl BillingMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PAY_PER_REQUEST" => Some(BillingMode::PayPerRequest),
            "PROVISIONED" => Some(BillingMode::Provisioned),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BillingMode::PayPerRequest => "PAY_PER_REQUEST",
            BillingMode::Provisioned => "PROVISIONED",
        }
    }
}

/// Billing configuration; capacity only exists for provisioned tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Billing {
    PayPerRequest,
    Provisioned(ProvisionedCapacity),
}

impl Billing {
    pub fn mode(&self) -> BillingMode {
        match self {
            Billing::PayPerRequest => BillingMode::PayPerRequest,
            Billing::Provisioned(_) => BillingMode::Provisioned,
        }
    }
}

/// Read/write capacity units, already defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProvisionedCapacity {
    pub read_capacity: u32,
    pub write_capacity: u32,
}

impl Default for ProvisionedCapacity {
    fn default() -> Self {
        Self {
            read_capacity: DEFAULT_CAPACITY,
            write_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl ResourceRequest {
    /// Namespace the manifest lands in.
    pub fn namespace(&self) -> &str {
        self.metadata.namespace.as_deref().unwrap_or("default")
    }

    pub fn hash_key(&self) -> Option<&KeyEntry> {
        self.key_schema
            .iter()
            .find(|key| key.key_type == KeyType::Hash)
    }

    pub fn range_key(&self) -> Option<&KeyEntry> {
        self.key_schema
            .iter()
            .find(|key| key.key_type == KeyType::Range)
    }
}
