use serde::Serialize;
use serde_json::{json, Value};

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputMode {
    /// Themed console output
    #[default]
    Human,
    /// One JSON object per invocation
    Json,
}

impl OutputMode {
    pub fn is_human(&self) -> bool {
        matches!(self, OutputMode::Human)
    }
}

pub fn envelope(ok: bool, command: &str, data: Value) -> Value {
    json!({
        "ok": ok,
        "command": command,
        "data": data,
    })
}

/// Print a success envelope; a no-op in human mode.
pub fn emit_success(mode: OutputMode, command: &str, data: impl Serialize) -> anyhow::Result<()> {
    if mode.is_human() {
        return Ok(());
    }
    let value = envelope(true, command, serde_json::to_value(data)?);
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// Print a failure envelope; a no-op in human mode.
pub fn emit_error(mode: OutputMode, command: &str, message: &str) {
    if mode.is_human() {
        return;
    }
    let value = envelope(false, command, json!({ "error": message }));
    println!("{}", value);
}
