mod compile;
mod render;
mod types;

pub use compile::compile_manifest;
pub use render::{render_manifest, ManifestFormat, RenderError};
pub use types::{
    ManifestAttribute, ManifestLabels, ManifestMetadata, ProvisionedThroughput, TableManifest,
    TableSpec, API_VERSION, KIND, PROMISE_NAME,
};
