use std::collections::HashMap;
use std::str::FromStr;

use k8s_openapi::api::core::v1::Event;
use tracing::{debug, warn};

use crate::error::FilterError;
use crate::filter::EventFilter;

/// Selector-syntax names of the fields a selector may reference
pub const SUPPORTED_FIELDS: [&str; 3] = [
    "reason",
    "involvedObject.kind",
    "involvedObject.namespace",
];

/// Event fields addressable by a field selector
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SelectorField {
    Reason,
    InvolvedObjectKind,
    InvolvedObjectNamespace,
}

impl SelectorField {
    /// Selector-syntax name of this field
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reason => "reason",
            Self::InvolvedObjectKind => "involvedObject.kind",
            Self::InvolvedObjectNamespace => "involvedObject.namespace",
        }
    }

    /// Read this field's value off an event, if present
    fn value_of<'a>(&self, event: &'a Event) -> Option<&'a str> {
        match self {
            Self::Reason => event.reason.as_deref(),
            Self::InvolvedObjectKind => event.involved_object.kind.as_deref(),
            Self::InvolvedObjectNamespace => event.involved_object.namespace.as_deref(),
        }
    }
}

impl FromStr for SelectorField {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reason" => Ok(Self::Reason),
            "involvedObject.kind" => Ok(Self::InvolvedObjectKind),
            "involvedObject.namespace" => Ok(Self::InvolvedObjectNamespace),
            _ => Err(FilterError::UnsupportedField {
                field: s.to_string(),
            }),
        }
    }
}

/// Field-selector filter over event fields
///
/// Built from specs of the form `field:value1|value2|...`. Accepts an event
/// when any configured field's value is one of that field's accepted literals:
/// OR across fields, OR across values within a field, exact case-sensitive
/// comparison. An event field that is absent never matches.
#[derive(Clone, Debug)]
pub struct EventFieldSelectorFilter {
    selectors: HashMap<SelectorField, Vec<String>>,
}

impl EventFieldSelectorFilter {
    /// Build a filter from selector specs
    ///
    /// Fails on a spec without exactly one `:` or one naming an unsupported
    /// field. Values are taken verbatim, with no trimming or escaping. A
    /// repeated field replaces the earlier entry (last write wins).
    pub fn new<I, S>(field_selectors: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selectors = HashMap::new();
        for spec in field_selectors {
            let spec = spec.as_ref();
            let parts: Vec<&str> = spec.split(':').collect();
            if parts.len() != 2 {
                return Err(FilterError::MalformedSelector {
                    selector: spec.to_string(),
                });
            }
            let field = SelectorField::from_str(parts[0])?;
            let values: Vec<String> = parts[1].split('|').map(String::from).collect();
            if let Some(previous) = selectors.insert(field, values) {
                warn!(
                    field = field.as_str(),
                    ?previous,
                    "field selector repeated, keeping only the last spec"
                );
            }
        }
        debug!(?selectors, "built field selector filter");
        Ok(Self { selectors })
    }

    /// The accepted values configured for a field, if any
    pub fn accepted_values(&self, field: SelectorField) -> Option<&[String]> {
        self.selectors.get(&field).map(Vec::as_slice)
    }
}

impl EventFilter for EventFieldSelectorFilter {
    fn filter(&self, event: &Event) -> bool {
        self.selectors.iter().any(|(field, accepted)| {
            field
                .value_of(event)
                .is_some_and(|value| accepted.iter().any(|a| a == value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::api::core::v1::ObjectReference;

    fn event_with_reason(reason: &str) -> Event {
        Event {
            reason: Some(reason.to_string()),
            ..Event::default()
        }
    }

    fn event_with_object(kind: &str, namespace: &str) -> Event {
        Event {
            involved_object: ObjectReference {
                kind: Some(kind.to_string()),
                namespace: Some(namespace.to_string()),
                ..ObjectReference::default()
            },
            ..Event::default()
        }
    }

    #[test]
    fn test_reason_values_or_combined() {
        let filter = EventFieldSelectorFilter::new(["reason:Failed|Killed"]).unwrap();
        assert!(filter.filter(&event_with_reason("Failed")));
        assert!(filter.filter(&event_with_reason("Killed")));
        assert!(!filter.filter(&event_with_reason("Created")));
    }

    #[test]
    fn test_kind_match_is_case_sensitive() {
        let filter = EventFieldSelectorFilter::new(["involvedObject.kind:Pod"]).unwrap();
        assert!(filter.filter(&event_with_object("Pod", "default")));
        assert!(!filter.filter(&event_with_object("pod", "default")));
    }

    #[test]
    fn test_fields_or_combined() {
        let filter = EventFieldSelectorFilter::new([
            "reason:Failed",
            "involvedObject.namespace:kube-system",
        ])
        .unwrap();

        let mut ev = event_with_object("Pod", "default");
        ev.reason = Some("Failed".to_string());
        assert!(filter.filter(&ev));

        let mut ev = event_with_object("Pod", "kube-system");
        ev.reason = Some("Created".to_string());
        assert!(filter.filter(&ev));

        let mut ev = event_with_object("Pod", "default");
        ev.reason = Some("Created".to_string());
        assert!(!filter.filter(&ev));
    }

    #[test]
    fn test_missing_separator_fails_construction() {
        let err = EventFieldSelectorFilter::new(["reasonFailed"]).unwrap_err();
        assert!(matches!(err, FilterError::MalformedSelector { selector } if selector == "reasonFailed"));
    }

    #[test]
    fn test_extra_separator_fails_construction() {
        let err = EventFieldSelectorFilter::new(["reason:Failed:Killed"]).unwrap_err();
        assert!(matches!(err, FilterError::MalformedSelector { .. }));
    }

    #[test]
    fn test_unsupported_field_fails_construction() {
        let err = EventFieldSelectorFilter::new(["status:Failed"]).unwrap_err();
        assert!(matches!(err, FilterError::UnsupportedField { field } if field == "status"));
    }

    #[test]
    fn test_empty_spec_list_rejects_all() {
        let filter = EventFieldSelectorFilter::new(Vec::<String>::new()).unwrap();
        assert!(!filter.filter(&event_with_reason("Failed")));
        assert!(!filter.filter(&Event::default()));
    }

    #[test]
    fn test_repeated_field_keeps_last_spec() {
        let filter = EventFieldSelectorFilter::new(["reason:Failed", "reason:Killed"]).unwrap();
        assert!(!filter.filter(&event_with_reason("Failed")));
        assert!(filter.filter(&event_with_reason("Killed")));
        assert_eq!(
            filter.accepted_values(SelectorField::Reason),
            Some(&["Killed".to_string()][..])
        );
    }

    #[test]
    fn test_absent_event_field_never_matches() {
        let filter = EventFieldSelectorFilter::new(["reason:Failed"]).unwrap();
        assert!(!filter.filter(&Event::default()));
    }

    #[test]
    fn test_empty_value_matches_only_empty_string() {
        let filter = EventFieldSelectorFilter::new(["reason:"]).unwrap();
        assert!(!filter.filter(&event_with_reason("Failed")));
        assert!(filter.filter(&event_with_reason("")));
    }

    #[test]
    fn test_field_name_parsing() {
        assert_eq!(
            "involvedObject.kind".parse::<SelectorField>().unwrap(),
            SelectorField::InvolvedObjectKind
        );
        assert!("Reason".parse::<SelectorField>().is_err());
        for field in SUPPORTED_FIELDS {
            assert_eq!(field.parse::<SelectorField>().unwrap().as_str(), field);
        }
    }
}
