//! Captures formatted log messages emitted inside a closure

use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

#[derive(Clone, Default)]
pub struct LogCapture {
    messages: Arc<Mutex<Vec<String>>>,
}

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` with this capture installed as the thread's subscriber
    pub fn capture<R>(&self, f: impl FnOnce() -> R) -> R {
        let subscriber = tracing_subscriber::registry().with(self.clone());
        tracing::subscriber::with_default(subscriber, f)
    }

    /// Captured messages containing `pattern`, in emission order
    pub fn matching(&self, pattern: &str) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.contains(pattern))
            .cloned()
            .collect()
    }

    pub fn assert_contains(&self, pattern: &str) {
        let all = self.matching("");
        assert!(
            !self.matching(pattern).is_empty(),
            "No log message contains '{}'. Captured:\n{}",
            pattern,
            all.join("\n")
        );
    }
}

struct MessageField(String);

impl Visit for MessageField {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.0 = value.to_string();
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        // format_args! messages arrive here and print without quotes
        if field.name() == "message" {
            self.0 = format!("{:?}", value);
        }
    }
}

impl<S: Subscriber> Layer<S> for LogCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut field = MessageField(String::new());
        event.record(&mut field);
        self.messages.lock().unwrap().push(field.0);
    }
}
