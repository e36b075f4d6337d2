//! Logging utilities emitting JSON lines through the `log` facade.
//!
//! `init` installs `env_logger` with a formatter producing one JSON object per
//! line; `log_event` writes the event record (`ev`, `code`, `dur_ms`) that
//! dashboards key on.

use std::io::Write;

use serde_json::json;

use crate::common::time;

/// Install the global logger. Safe to call more than once; later calls are ignored.
pub fn init(level: &str) {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            let line = json!({
                "ts": time::now_ms() as u64,
                "level": record.level().as_str(),
                "mod": record.target(),
                "msg": record.args().to_string(),
            });
            writeln!(buf, "{line}")
        })
        .try_init();
}

/// Render the event record for a finished operation.
pub fn event_line(module: &str, event: &str, code: u32, dur_ms: u128) -> String {
    json!({
        "mod": module,
        "ev": event,
        "code": code,
        "dur_ms": dur_ms as u64,
    })
    .to_string()
}

/// Emit an event record at the given level.
pub fn log_event(level: log::Level, module: &str, event: &str, code: u32, dur_ms: u128) {
    log::log!(target: "retina_risk::event", level, "{}", event_line(module, event, code, dur_ms));
}
