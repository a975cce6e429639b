//! The resource.configure workflow: read, validate, compile, write.

use std::path::PathBuf;

use tablewright_core::{compile_manifest, render_manifest, validate_request, ManifestFormat};

use crate::{
    document::{read_request, write_manifest},
    error::{AppError, Result},
};

/// Resolved workflow settings.
#[derive(Debug, Clone)]
pub struct Config {
    pub request_path: Option<PathBuf>,
    pub state_dir: PathBuf,
    pub format: ManifestFormat,
    /// Print the manifest instead of writing it to `state_dir`.
    pub to_stdout: bool,
}

/// Where the manifest went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    File(PathBuf),
    Stdout(String),
}

/// A successful run.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub table_name: String,
    pub output: Output,
}

pub fn run(config: &Config) -> Result<Outcome> {
    let request_path = config
        .request_path
        .as_deref()
        .ok_or(AppError::MissingRequestPath)?;

    tracing::info!(request = %request_path.display(), "processing table request");

    let document = read_request(request_path)?;
    let request = validate_request(&document)?;
    let manifest = compile_manifest(&request);
    let rendered = render_manifest(&manifest, config.format)?;

    let output = if config.to_stdout {
        Output::Stdout(rendered)
    } else {
        let path = write_manifest(&config.state_dir, config.format.file_name(), &rendered)?;
        tracing::info!(
            table = %request.name,
            namespace = request.namespace(),
            partition_key = request.hash_key().map(|key| key.attribute_name.as_str()),
            sort_key = request.range_key().map(|key| key.attribute_name.as_str()),
            path = %path.display(),
            "generated table manifest"
        );
        Output::File(path)
    };

    Ok(Outcome {
        table_name: request.name,
        output,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tablewright_core::TableManifest;

    use super::*;
    use crate::error::ErrorClass;

    const VALID_REQUEST: &str = "\
apiVersion: marketplace.kratix.io/v1alpha1
kind: DynamoDB
metadata:
  name: orders-request
  namespace: team-orders
spec:
  name: Orders-Table
  region: us-west-2
  attributeDefinitions:
    - name: pk
      type: S
    - name: sk
      type: N
  keySchema:
    - attributeName: pk
      keyType: HASH
    - attributeName: sk
      keyType: RANGE
  billingMode: PROVISIONED
  provisioned:
    readCapacity: 10
    writeCapacity: 3
";

    fn config(dir: &tempfile::TempDir, request: Option<&str>) -> Config {
        let request_path = request.map(|contents| {
            let path = dir.path().join("request.yaml");
            fs::write(&path, contents).unwrap();
            path
        });
        Config {
            request_path,
            state_dir: dir.path().join("state"),
            format: ManifestFormat::Yaml,
            to_stdout: false,
        }
    }

    #[test]
    fn test_writes_manifest_to_state_dir() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = run(&config(&dir, Some(VALID_REQUEST))).unwrap();

        let path = dir.path().join("state").join("table-manifest.yaml");
        assert_eq!(outcome.table_name, "Orders-Table");
        assert_eq!(outcome.output, Output::File(path.clone()));

        let manifest: TableManifest =
            serde_yaml::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(manifest.metadata.name, "orders-table");
        assert_eq!(manifest.metadata.namespace, "team-orders");
        assert_eq!(manifest.metadata.labels.request, "orders-request");
        assert_eq!(manifest.spec.table_name, "Orders-Table");
        assert_eq!(
            manifest
                .spec
                .provisioned_throughput
                .map(|t| (t.read_capacity_units, t.write_capacity_units)),
            Some((10, 3))
        );
    }

    #[test]
    fn test_rerun_produces_identical_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir, Some(VALID_REQUEST));
        let path = dir.path().join("state").join("table-manifest.yaml");

        run(&config).unwrap();
        let first = fs::read(&path).unwrap();
        run(&config).unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_stdout_output_skips_state_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(&dir, Some(VALID_REQUEST));
        config.to_stdout = true;
        config.format = ManifestFormat::Json;

        let outcome = run(&config).unwrap();

        let Output::Stdout(rendered) = outcome.output else {
            panic!("expected stdout output");
        };
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["kind"], "Table");
        assert!(!dir.path().join("state").exists());
    }

    #[test]
    fn test_missing_request_path_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&config(&dir, None)).unwrap_err();

        assert_eq!(err.class(), ErrorClass::Configuration);
        assert_eq!(err.to_string(), "REQUEST_PATH environment variable not set");
    }

    #[test]
    fn test_invalid_request_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let request = VALID_REQUEST.replace("us-west-2", "mars-1");

        let err = run(&config(&dir, Some(request.as_str()))).unwrap_err();

        assert_eq!(err.class(), ErrorClass::Validation);
        assert!(err
            .to_string()
            .starts_with("Invalid request: region must be one of: "));
        assert!(!dir.path().join("state").exists());
    }

    #[test]
    fn test_empty_request_is_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&config(&dir, Some(""))).unwrap_err();

        assert_eq!(err.class(), ErrorClass::Input);
        assert_eq!(err.to_string(), "Request file is empty");
    }

    #[test]
    fn test_unwritable_state_dir_is_output_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(&dir, Some(VALID_REQUEST));
        fs::write(dir.path().join("blocker"), "file").unwrap();
        config.state_dir = dir.path().join("blocker").join("state");

        let err = run(&config).unwrap_err();

        assert_eq!(err.class(), ErrorClass::Output);
        assert!(err.to_string().starts_with("Failed to create state directory: "));
    }
}
