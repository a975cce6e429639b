//! Validation of raw table requests (Functional Core - no I/O).
//!
//! The rules run in a fixed order and the first failure wins. A request that
//! passes comes back as a typed [`ResourceRequest`], so nothing downstream has
//! to look at the untyped document again.

use std::collections::HashSet;

use serde_json::{Map, Value};

use super::error::ValidationError;
use super::types::{
    AttributeDefinition, AttributeType, Billing, BillingMode, KeyEntry, KeyType,
    ProvisionedCapacity, RequestMetadata, ResourceRequest, ALLOWED_REGIONS, DEFAULT_CAPACITY,
    MAX_CAPACITY, MAX_NAME_LEN, MIN_CAPACITY, MIN_NAME_LEN,
};

type Object = Map<String, Value>;

/// Validates a parsed request document.
///
/// Never panics: missing fields, wrong types and non-mapping documents all
/// resolve to a [`ValidationError`]. Unknown fields are ignored.
pub fn validate_request(document: &Value) -> Result<ResourceRequest, ValidationError> {
    let result = check_request(document);
    match &result {
        Ok(request) => tracing::debug!(name = %request.name, "table request accepted"),
        Err(err) => tracing::debug!(reason = %err, "table request rejected"),
    }
    result
}

fn check_request(document: &Value) -> Result<ResourceRequest, ValidationError> {
    let spec = document.get("spec").and_then(Value::as_object);

    let name = validate_name(field(spec, "name"))?;
    let region = validate_region(field(spec, "region"))?;
    let attribute_definitions =
        validate_attribute_definitions(field(spec, "attributeDefinitions"))?;
    let key_schema = validate_key_schema(field(spec, "keySchema"), &attribute_definitions)?;
    let billing = validate_billing(field(spec, "billingMode"), field(spec, "provisioned"))?;

    Ok(ResourceRequest {
        metadata: read_metadata(document),
        name: name.to_string(),
        region: region.to_string(),
        attribute_definitions,
        key_schema,
        billing,
    })
}

fn validate_name(value: Option<&Value>) -> Result<&str, ValidationError> {
    let name = trimmed(value).unwrap_or_default();
    if name.is_empty() {
        return Err(ValidationError::MissingName);
    }

    let len = name.chars().count();
    if !(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&len) {
        return Err(ValidationError::NameLength);
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    {
        return Err(ValidationError::NameCharset);
    }

    Ok(name)
}

fn validate_region(value: Option<&Value>) -> Result<&str, ValidationError> {
    let region = trimmed(value).unwrap_or_default();
    if region.is_empty() {
        return Err(ValidationError::MissingRegion);
    }
    if !ALLOWED_REGIONS.contains(&region) {
        return Err(ValidationError::RegionNotAllowed);
    }
    Ok(region)
}

fn validate_attribute_definitions(
    value: Option<&Value>,
) -> Result<Vec<AttributeDefinition>, ValidationError> {
    let entries = non_empty_array(value).ok_or(ValidationError::MissingAttributeDefinitions)?;

    let mut definitions = Vec::with_capacity(entries.len());
    for entry in entries {
        let entry = entry
            .as_object()
            .ok_or(ValidationError::AttributeNotObject)?;

        let name = trimmed(field(Some(entry), "name")).unwrap_or_default();
        let raw_type = field(Some(entry), "type");

        if name.is_empty() {
            return Err(ValidationError::AttributeMissingName);
        }
        let attribute_type = trimmed(raw_type)
            .and_then(AttributeType::parse)
            .ok_or_else(|| ValidationError::InvalidAttributeType(describe(raw_type)))?;

        definitions.push(AttributeDefinition {
            name: name.to_string(),
            attribute_type,
        });
    }

    Ok(definitions)
}

fn validate_key_schema(
    value: Option<&Value>,
    definitions: &[AttributeDefinition],
) -> Result<Vec<KeyEntry>, ValidationError> {
    let entries = non_empty_array(value).ok_or(ValidationError::MissingKeySchema)?;
    if entries.len() > 2 {
        return Err(ValidationError::TooManyKeys);
    }

    let known: HashSet<&str> = definitions.iter().map(|d| d.name.as_str()).collect();

    let mut keys = Vec::with_capacity(entries.len());
    let mut hash_keys = 0usize;
    let mut range_keys = 0usize;
    for entry in entries {
        let entry = entry.as_object().ok_or(ValidationError::KeyNotObject)?;

        let attribute_name = trimmed(field(Some(entry), "attributeName")).unwrap_or_default();
        let raw_key_type = field(Some(entry), "keyType");

        if attribute_name.is_empty() {
            return Err(ValidationError::KeyMissingAttributeName);
        }
        if !known.contains(attribute_name) {
            return Err(ValidationError::UndefinedKeyAttribute(
                attribute_name.to_string(),
            ));
        }
        let key_type = trimmed(raw_key_type)
            .and_then(KeyType::parse)
            .ok_or_else(|| ValidationError::InvalidKeyType(describe(raw_key_type)))?;

        match key_type {
            KeyType::Hash => hash_keys += 1,
            KeyType::Range => range_keys += 1,
        }
        keys.push(KeyEntry {
            attribute_name: attribute_name.to_string(),
            key_type,
        });
    }

    // Counted over the whole schema, after every entry has been checked.
    if hash_keys != 1 {
        return Err(ValidationError::HashKeyCount);
    }
    if range_keys > 1 {
        return Err(ValidationError::RangeKeyCount);
    }

    Ok(keys)
}

fn validate_billing(
    mode: Option<&Value>,
    provisioned: Option<&Value>,
) -> Result<Billing, ValidationError> {
    let mode = match mode {
        None => BillingMode::PayPerRequest,
        Some(_) => trimmed(mode)
            .and_then(BillingMode::parse)
            .ok_or_else(|| ValidationError::InvalidBillingMode(describe(mode)))?,
    };

    match mode {
        BillingMode::PayPerRequest => Ok(Billing::PayPerRequest),
        BillingMode::Provisioned => {
            let provisioned = match provisioned {
                None => None,
                Some(value) => Some(
                    value
                        .as_object()
                        .ok_or(ValidationError::ProvisionedNotObject)?,
                ),
            };

            let read_capacity = capacity(field(provisioned, "readCapacity"))
                .ok_or(ValidationError::InvalidReadCapacity)?;
            let write_capacity = capacity(field(provisioned, "writeCapacity"))
                .ok_or(ValidationError::InvalidWriteCapacity)?;

            Ok(Billing::Provisioned(ProvisionedCapacity {
                read_capacity,
                write_capacity,
            }))
        }
    }
}

fn read_metadata(document: &Value) -> RequestMetadata {
    let metadata = document.get("metadata").and_then(Value::as_object);
    let text = |key: &str| {
        field(metadata, key)
            .and_then(Value::as_str)
            .map(str::to_string)
    };

    RequestMetadata {
        name: text("name"),
        namespace: text("namespace"),
    }
}

/// Looks up `key`, treating an explicit null the same as an absent key.
fn field<'a>(object: Option<&'a Object>, key: &str) -> Option<&'a Value> {
    object
        .and_then(|object| object.get(key))
        .filter(|value| !value.is_null())
}

/// Trimmed string content, or `None` when the value is absent or not a string.
fn trimmed(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).map(str::trim)
}

fn non_empty_array(value: Option<&Value>) -> Option<&Vec<Value>> {
    value
        .and_then(Value::as_array)
        .filter(|entries| !entries.is_empty())
}

/// Absent capacities default; anything else must be an in-range integer.
fn capacity(value: Option<&Value>) -> Option<u32> {
    match value {
        None => Some(DEFAULT_CAPACITY),
        Some(value) => value
            .as_u64()
            .filter(|units| (u64::from(MIN_CAPACITY)..=u64::from(MAX_CAPACITY)).contains(units))
            .and_then(|units| u32::try_from(units).ok()),
    }
}

/// Renders an offending value for a rejection message.
fn describe(value: Option<&Value>) -> String {
    match value {
        None => String::new(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(other) => other.to_string(),
    }
}
