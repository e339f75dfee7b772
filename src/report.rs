use chrono::Local;
use itertools::Itertools;
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Point-in-time view of one language, as produced by `Registry::report`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageReport {
    pub code: String,
    pub speed: u32,
    pub total_symbols: u64,
    pub total_time: f64,
}

/// Render the per-language snapshot as the plain-text table the CLI prints.
pub fn render_table(reports: &[LanguageReport]) -> String {
    let rows = reports
        .iter()
        .map(|r| {
            format!(
                "{}: {} sym/min, {} syms, {:.1} min",
                r.code, r.speed, r.total_symbols, r.total_time
            )
        })
        .join("\n");
    format!("=== languages ===\n{rows}\n=================")
}

/// Append one row per language to the practice log.
///
/// The CSV header is emitted when the file is first created. The log is an
/// output artifact only; nothing reads it back.
pub fn append_session_log<P: AsRef<Path>>(
    path: P,
    reports: &[LanguageReport],
) -> io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let needs_header = !path.exists();

    let mut log_file = OpenOptions::new()
        .write(true)
        .append(true)
        .create(true)
        .open(path)?;

    if needs_header {
        writeln!(log_file, "date,code,speed,total_symbols,total_time")?;
    }

    for r in reports {
        writeln!(
            log_file,
            "{},{},{},{},{:.2}",
            Local::now().format("%c"),
            r.code,
            r.speed,
            r.total_symbols,
            r.total_time,
        )?;
    }

    Ok(())
}
