//! Fire-and-forget analytics events.

use std::{fmt::Debug, rc::Rc};

use log::info;

/// Category and action of an event, without the per-app label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventDescriptor {
    pub category: &'static str,
    pub action: &'static str,
}

pub const SAFE_APPS_COPY_SHARE_URL: EventDescriptor = EventDescriptor {
    category: "safe-apps",
    action: "Copy share URL",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsEvent {
    pub category: String,
    pub action: String,
    pub label: Option<String>,
}

impl AnalyticsEvent {
    pub fn new(descriptor: EventDescriptor, label: Option<&str>) -> Self {
        Self {
            category: descriptor.category.to_string(),
            action: descriptor.action.to_string(),
            label: label.map(|label| label.to_string()),
        }
    }
}

pub trait AnalyticsSink {
    fn track(&self, event: &AnalyticsEvent);
}

/// Writes every event to the log.
#[derive(Debug, Default)]
pub struct LogSink;

impl AnalyticsSink for LogSink {
    fn track(&self, event: &AnalyticsEvent) {
        info!(
            "analytics category={:?} action={:?} label={:?}",
            event.category, event.action, event.label
        );
    }
}

/// Handle to the analytics sink, shared through component context.
#[derive(Clone)]
pub struct Analytics(Rc<dyn AnalyticsSink>);

impl Analytics {
    pub fn new<S: AnalyticsSink + 'static>(sink: S) -> Self {
        Self(Rc::new(sink))
    }

    pub fn track(&self, event: &AnalyticsEvent) {
        self.0.track(event)
    }

    pub fn track_safe_app_event(&self, descriptor: EventDescriptor, app_name: &str) {
        self.track(&AnalyticsEvent::new(descriptor, Some(app_name)))
    }
}

impl Default for Analytics {
    fn default() -> Self {
        Self::new(LogSink)
    }
}

impl Debug for Analytics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Analytics")
    }
}
