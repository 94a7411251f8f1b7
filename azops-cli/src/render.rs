//! Terminal rendering helpers: aligned tables, status badges and timestamp
//! formatting shared by the command handlers.

use chrono::{DateTime, Utc};
use monitor_core::aggregate::{self, ActivityStatus, Severity};
use tracing::info;

/// Render an aligned table through the logger. Column widths follow the
/// widest cell; an empty row set prints the given empty-state message.
pub fn table(headers: &[&str], rows: &[Vec<String>], empty_message: &str) {
    if rows.is_empty() {
        info!("   {empty_message}");
        return;
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let render_line = |cells: &[String]| {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ")
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    info!("   {}", render_line(&header_cells));
    info!(
        "   {}",
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  ")
    );
    for row in rows {
        info!("   {}", render_line(row));
    }
}

/// Backup status badge (Completed/Failed/InProgress/other)
pub fn status_badge(status: &str) -> String {
    match status.to_lowercase().as_str() {
        "completed" => format!("✅ {status}"),
        "failed" => format!("❌ {status}"),
        "inprogress" => format!("🔄 {status}"),
        _ => status.to_string(),
    }
}

/// Backup precheck badge (Healthy/Passed/Warning/ActionRequired/other)
pub fn precheck_badge(precheck: &str) -> String {
    match precheck.to_lowercase().as_str() {
        "healthy" | "passed" => format!("🟢 {precheck}"),
        "warning" => format!("🟡 {precheck}"),
        "critical" | "failed" | "actionrequired" => format!("🔴 {precheck}"),
        _ => precheck.to_string(),
    }
}

/// Severity marker for CPU and size badges
pub fn severity_badge(severity: Severity, label: &str) -> String {
    match severity {
        Severity::High => format!("🔴 {label}"),
        Severity::Elevated => format!("🟡 {label}"),
        Severity::Normal => format!("🟢 {label}"),
    }
}

/// Activity status marker for the recent-activity panel
pub fn activity_marker(status: ActivityStatus) -> &'static str {
    match status {
        ActivityStatus::Success => "✅",
        ActivityStatus::Warning => "⚠️ ",
        ActivityStatus::Error => "❌",
    }
}

/// Format a backend timestamp for display; unparseable input is shown
/// verbatim rather than dropped.
pub fn format_timestamp(raw: &str) -> String {
    match aggregate::parse_timestamp(raw) {
        Some(dt) => dt.format("%b %d, %Y %H:%M").to_string(),
        None if raw.is_empty() => "—".to_string(),
        None => raw.to_string(),
    }
}

/// Format an optional latest-capture time; `None` renders "unavailable".
pub fn format_latest(latest: Option<DateTime<Utc>>) -> String {
    match latest {
        Some(dt) => dt.format("%b %d, %Y %H:%M").to_string(),
        None => "unavailable".to_string(),
    }
}

/// Truncate long free text for table cells
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.is_empty() {
        return "—".to_string();
    }
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("SELECT 1", 40), "SELECT 1");
        assert_eq!(truncate("", 40), "—");
        let long = "x".repeat(50);
        let cut = truncate(&long, 40);
        assert_eq!(cut.chars().count(), 43);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn unparseable_timestamp_shown_verbatim() {
        assert_eq!(format_timestamp("not a date"), "not a date");
        assert_eq!(format_timestamp(""), "—");
    }

    #[test]
    fn latest_capture_unavailable_without_data() {
        assert_eq!(format_latest(None), "unavailable");
    }
}
