use k8s_openapi::api::core::v1::Event;
use tracing::debug;

use crate::filter::EventFilter;

/// Allow-list filter on the event type
///
/// Accepts an event when its `type` equals any allowed type ignoring ASCII
/// letter case ("warning" matches an allow-list entry "Warning"). An empty
/// allow-list rejects every event, as does an event carrying no type.
#[derive(Clone, Debug)]
pub struct EventTypeFilter {
    allowed_types: Vec<String>,
}

impl EventTypeFilter {
    /// Build a filter from a sequence of allowed type strings
    pub fn new<I, S>(allowed_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed_types: Vec<String> = allowed_types.into_iter().map(Into::into).collect();
        debug!(?allowed_types, "built event type filter");
        Self { allowed_types }
    }

    /// The configured allow-list, in construction order
    pub fn allowed_types(&self) -> &[String] {
        &self.allowed_types
    }
}

impl EventFilter for EventTypeFilter {
    fn filter(&self, event: &Event) -> bool {
        let Some(event_type) = event.type_.as_deref() else {
            return false;
        };
        self.allowed_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(event_type))
    }
}
