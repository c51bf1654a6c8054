use thiserror::Error;

use crate::field_selector::SUPPORTED_FIELDS;

/// Errors raised while building a filter from configuration
///
/// These only occur at construction time. Once a filter is built, matching is
/// a pure total function and cannot fail.
#[derive(Debug, Error)]
pub enum FilterError {
    /// Selector spec did not split into exactly `field:values`
    #[error("selector format error, selector: {selector:?} (expected field:value1|value2|...)")]
    MalformedSelector { selector: String },

    /// Selector named a field outside the supported set
    #[error("unsupported field {field:?}, supported fields: {}", SUPPORTED_FIELDS.join(", "))]
    UnsupportedField { field: String },
}
