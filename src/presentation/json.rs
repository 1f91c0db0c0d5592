use std::io::{self, Write};

use crate::error::ListTreeResult;

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> ListTreeResult<()> {
    serde_json::to_writer(&mut *out, event)?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> ListTreeResult<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}
