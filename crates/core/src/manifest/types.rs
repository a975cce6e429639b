//! ACK `Table` resource, as consumed by the DynamoDB controller.
//!
//! Field order is declaration order, which keeps rendered output stable.

use serde::{Deserialize, Serialize};

use crate::request::{AttributeType, BillingMode, KeyEntry};

pub const API_VERSION: &str = "dynamodb.services.k8s.aws/v1alpha1";
pub const KIND: &str = "Table";

/// Value of the `kratix.io/promise` label.
pub const PROMISE_NAME: &str = "aws-dynamodb-kratix";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableManifest {
    pub api_version: String,
    pub kind: String,
    pub metadata: ManifestMetadata,
    pub spec: TableSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestMetadata {
    /// Lower-cased table name; Kubernetes object names must be lowercase.
    pub name: String,
    pub namespace: String,
    pub labels: ManifestLabels,
}

/// `kratix.io/request` points back at the request object; `kratix.io/promise`
/// names the workflow that issued the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestLabels {
    #[serde(rename = "kratix.io/request")]
    pub request: String,
    #[serde(rename = "kratix.io/promise")]
    pub promise: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSpec {
    pub table_name: String,
    pub attribute_definitions: Vec<ManifestAttribute>,
    pub key_schema: Vec<KeyEntry>,
    pub region: String,
    pub billing_mode: BillingMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput: Option<ProvisionedThroughput>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestAttribute {
    pub attribute_name: String,
    pub attribute_type: AttributeType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionedThroughput {
    pub read_capacity_units: u32,
    pub write_capacity_units: u32,
}
