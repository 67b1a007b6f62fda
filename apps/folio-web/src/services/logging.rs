//! Routes `tracing` events to the browser console.

use std::fmt::{self, Write};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

struct ConsoleLayer {
    max_level: Level,
}

#[derive(Default)]
struct EventFields {
    message: String,
    fields: String,
}

impl Visit for EventFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

fn render_line(target: &str, fields: &EventFields) -> String {
    format!("[{}] {}{}", target, fields.message, fields.fields)
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if *metadata.level() > self.max_level {
            return;
        }

        let mut fields = EventFields::default();
        event.record(&mut fields);
        write_console(*metadata.level(), &render_line(metadata.target(), &fields));
    }
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    use web_sys::console;

    match level {
        Level::ERROR => console::error_1(&line.into()),
        Level::WARN => console::warn_1(&line.into()),
        Level::INFO => console::info_1(&line.into()),
        _ => console::debug_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(level: Level, line: &str) {
    eprintln!("{:>5} {}", level, line);
}

/// Install the console subscriber. Debug builds also show `debug` events.
pub fn init() {
    let max_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = tracing_subscriber::registry().with(ConsoleLayer { max_level });
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        write_console(Level::WARN, "Logging already initialized");
    }
}
