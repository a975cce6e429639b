//! Pure mapping from a validated request to its manifest (Functional Core).

use super::types::{
    ManifestAttribute, ManifestLabels, ManifestMetadata, ProvisionedThroughput, TableManifest,
    TableSpec, API_VERSION, KIND, PROMISE_NAME,
};
use crate::request::{Billing, ResourceRequest};

/// Compiles the ACK `Table` manifest for a validated request.
///
/// Total over anything [`validate_request`](crate::validate_request) returns;
/// the request is not checked again.
pub fn compile_manifest(request: &ResourceRequest) -> TableManifest {
    let attribute_definitions = request
        .attribute_definitions
        .iter()
        .map(|attr| ManifestAttribute {
            attribute_name: attr.name.clone(),
            attribute_type: attr.attribute_type,
        })
        .collect();

    let provisioned_throughput = match request.billing {
        Billing::PayPerRequest => None,
        Billing::Provisioned(capacity) => Some(ProvisionedThroughput {
            read_capacity_units: capacity.read_capacity,
            write_capacity_units: capacity.write_capacity,
        }),
    };

    tracing::debug!(
        table = %request.name,
        namespace = request.namespace(),
        billing_mode = request.billing.mode().as_str(),
        "compiled table manifest"
    );

    TableManifest {
        api_version: API_VERSION.to_string(),
        kind: KIND.to_string(),
        metadata: ManifestMetadata {
            name: request.name.to_lowercase(),
            namespace: request.namespace().to_string(),
            labels: ManifestLabels {
                request: request.metadata.name.clone().unwrap_or_default(),
                promise: PROMISE_NAME.to_string(),
            },
        },
        spec: TableSpec {
            table_name: request.name.clone(),
            attribute_definitions,
            key_schema: request.key_schema.clone(),
            region: request.region.clone(),
            billing_mode: request.billing.mode(),
            provisioned_throughput,
        },
    }
}
