//! Input validation helpers
//!
//! Every check here runs before any registrar call.

use std::ops::RangeInclusive;

use crate::error::{CoreError, CoreResult};
use crate::types::{DnsRecordType, FlexibleId};

/// TTL range accepted by the registrar, in seconds.
pub const TTL_RANGE: RangeInclusive<i64> = 60..=604_800;
/// TTL used when the caller does not give one.
pub const DEFAULT_TTL: u32 = 3600;
/// Priority range for MX and SRV records.
pub const PRIORITY_RANGE: RangeInclusive<i64> = 0..=65_535;

/// Trim and check a domain name: non-empty, no whitespace or `/`, at least one dot.
pub fn domain_name(raw: &str) -> CoreResult<String> {
    let name = raw.trim().trim_end_matches('.');
    if name.is_empty() {
        return Err(CoreError::ValidationError(
            "domain_name must not be empty".to_string(),
        ));
    }
    if name.chars().any(|c| c.is_whitespace() || c == '/') || !name.contains('.') {
        return Err(CoreError::ValidationError(format!(
            "'{name}' is not a valid domain name"
        )));
    }
    Ok(name.to_ascii_lowercase())
}

/// Map a caller record name to the registrar's: `@` is the zone apex, sent as `""`.
pub fn record_name(raw: &str) -> String {
    let name = raw.trim();
    if name == "@" {
        String::new()
    } else {
        name.to_string()
    }
}

/// Parse a writable record type.
pub fn record_type(raw: &str) -> CoreResult<DnsRecordType> {
    raw.parse::<DnsRecordType>().map_err(|e| {
        let supported: Vec<&str> = DnsRecordType::ALL.iter().map(|t| t.as_str()).collect();
        CoreError::ValidationError(format!("{e}; expected one of {}", supported.join(", ")))
    })
}

/// Resolve the TTL, defaulting to [`DEFAULT_TTL`].
pub fn ttl(raw: Option<i64>) -> CoreResult<u32> {
    let Some(value) = raw else {
        return Ok(DEFAULT_TTL);
    };
    if !TTL_RANGE.contains(&value) {
        return Err(CoreError::ValidationError(format!(
            "ttl {value} is out of range ({}-{} seconds)",
            TTL_RANGE.start(),
            TTL_RANGE.end()
        )));
    }
    u32::try_from(value).map_err(|_| CoreError::ValidationError(format!("ttl {value} is too large")))
}

/// Resolve the priority: required for MX/SRV, dropped for every other type.
pub fn priority(record_type: DnsRecordType, raw: Option<i64>) -> CoreResult<Option<u32>> {
    if !record_type.uses_priority() {
        return Ok(None);
    }
    let value = raw.ok_or_else(|| {
        CoreError::ValidationError(format!("priority is required for {record_type} records"))
    })?;
    if !PRIORITY_RANGE.contains(&value) {
        return Err(CoreError::ValidationError(format!(
            "priority {value} is out of range ({}-{})",
            PRIORITY_RANGE.start(),
            PRIORITY_RANGE.end()
        )));
    }
    u32::try_from(value)
        .map(Some)
        .map_err(|_| CoreError::ValidationError(format!("priority {value} is out of range")))
}

/// Require a non-blank string field.
pub fn required(field: &str, raw: &str) -> CoreResult<String> {
    let value = raw.trim();
    if value.is_empty() {
        Err(CoreError::ValidationError(format!(
            "{field} must not be empty"
        )))
    } else {
        Ok(value.to_string())
    }
}

/// Reject a blank field but keep the value exactly as given.
pub fn non_blank(field: &str, raw: &str) -> CoreResult<String> {
    if raw.trim().is_empty() {
        Err(CoreError::ValidationError(format!(
            "{field} must not be empty"
        )))
    } else {
        Ok(raw.to_string())
    }
}

/// Require a positive integer id.
pub fn positive_id(field: &str, raw: &FlexibleId) -> CoreResult<u64> {
    raw.to_positive().ok_or_else(|| {
        CoreError::ValidationError(format!("{field} must be a positive integer, got '{raw}'"))
    })
}
