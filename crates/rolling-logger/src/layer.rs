//! Rolling Layer
//!
//! `tracing_subscriber::Layer` that formats each event into a `LogLine`,
//! writes it to a sink and keeps it in the `LogBuffer`.

use std::fmt::{self, Write};

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::buffer::{LogBuffer, LogLine};
use crate::sink::Sink;

pub struct RollingLayer {
    buffer: LogBuffer,
    sink: Sink,
}

impl RollingLayer {
    pub fn new(buffer: LogBuffer, sink: Sink) -> Self {
        Self { buffer, sink }
    }
}

impl<S: Subscriber> Layer<S> for RollingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);
        let meta = event.metadata();

        let line = LogLine {
            timestamp: chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
            level: *meta.level(),
            // Records bridged from the `log` crate carry their real target as a field
            target: visitor.log_target.take().unwrap_or_else(|| meta.target().to_string()),
            message: visitor.finish(),
        };
        self.sink.write(&line);
        self.buffer.push(line);
    }
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
    log_target: Option<String>,
}

impl LineVisitor {
    fn push_field(&mut self, name: &str, value: fmt::Arguments<'_>) {
        if name == "log.target" {
            self.log_target = Some(value.to_string());
            return;
        }
        if name.starts_with("log.") {
            return;
        }
        let _ = write!(self.fields, " {}={}", name, value);
    }

    fn finish(self) -> String {
        let mut out = self.message;
        out.push_str(&self.fields);
        out.trim_start().to_string()
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.push_field(field.name(), format_args!("{}", value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.push_field(field.name(), format_args!("{:?}", value));
        }
    }
}
