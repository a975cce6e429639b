//! Core for the tablewright DynamoDB promise.
//!
//! A raw table request goes through [`validate_request`], which either
//! rejects it with the first rule it breaks or returns a typed
//! [`ResourceRequest`]. [`compile_manifest`] turns that into the ACK `Table`
//! manifest the cluster reconciler applies. Both steps are pure.

pub mod manifest;
pub mod request;

pub use manifest::{compile_manifest, render_manifest, ManifestFormat, RenderError, TableManifest};
pub use request::{validate_request, ResourceRequest, ValidationError};

/// Validates a raw request document and compiles it on success.
pub fn generate(document: &serde_json::Value) -> Result<TableManifest, ValidationError> {
    validate_request(document).map(|request| compile_manifest(&request))
}
