//! Self-contained HTML rendering
//!
//! The artifact is one file with inline styling and an embedded JSON data
//! island, so it can be attached to CI results or opened from a terminal
//! without any supporting assets.

use crate::console::count_line;
use crate::report::Report;
use std::fmt::Write as _;

/// Render the report as a standalone HTML page.
#[must_use]
pub fn render_html(report: &Report) -> String {
    let mut page = String::with_capacity(2048);
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str("<title>Instant execution report</title>\n<style>\n");
    page.push_str(
        "body{font-family:sans-serif;margin:2em;color:#222}\
         h1{font-size:1.4em}\
         ul{line-height:1.6}\
         code{background:#f4f4f4;padding:0 .3em}\
         .meta{color:#666;font-size:.9em}\n",
    );
    page.push_str("</style>\n</head>\n<body>\n<h1>Instant execution report</h1>\n");

    let _ = writeln!(
        page,
        "<p class=\"meta\">cache key <code>{}</code> &middot; version {} &middot; generated {}</p>",
        report.key(),
        escape(report.version()),
        report.generated_at().format("%Y-%m-%d %H:%M:%S UTC")
    );

    let _ = writeln!(page, "<p>{}</p>", escape(&count_line(report.violations().len())));
    page.push_str("<ul>\n");
    for violation in report.violations() {
        let _ = writeln!(
            page,
            "<li><code>field '{}.{}'</code>: {}</li>",
            escape(&violation.owner),
            escape(&violation.field),
            escape(&violation.reason)
        );
    }
    page.push_str("</ul>\n");

    if let Ok(data) = serde_json::to_string(report) {
        // `</` would terminate the script element early.
        let safe = data.replace("</", "<\\/");
        let _ = writeln!(
            page,
            "<script type=\"application/json\" id=\"report-data\">{safe}</script>"
        );
    }

    page.push_str("</body>\n</html>\n");
    page
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ix_check::{Violation, ViolationSink};
    use ix_state::CacheKey;

    fn report_with(violations: Vec<Violation>) -> Report {
        let sink = ViolationSink::new();
        sink.record(0, violations);
        Report::new(CacheKey::from_bytes([7; 32]), "8.0", sink.seal())
    }

    #[test]
    fn page_lists_every_finding_in_order() {
        let page = render_html(&report_with(vec![
            Violation::new("SomeTask", "first", "there's no serializer for type 'A'"),
            Violation::new("SomeBean", "second", "there's no serializer for type 'B'"),
        ]));

        let first = page.find("SomeTask.first").unwrap();
        let second = page.find("SomeBean.second").unwrap();
        assert!(first < second);
        assert!(page.contains("2 instant execution issues found:"));
    }

    #[test]
    fn markup_in_names_is_escaped() {
        let page = render_html(&report_with(vec![Violation::new(
            "Bad<script>",
            "f",
            "reason & more",
        )]));

        assert!(!page.contains("Bad<script>"));
        assert!(page.contains("Bad&lt;script&gt;"));
        assert!(page.contains("reason &amp; more"));
    }

    #[test]
    fn page_embeds_machine_readable_data() {
        let page = render_html(&report_with(vec![Violation::new("T", "f", "r")]));
        assert!(page.contains("id=\"report-data\""));
        assert!(page.contains("\"owner\":\"T\""));
    }

    #[test]
    fn data_island_cannot_break_out() {
        let page = render_html(&report_with(vec![Violation::new(
            "T",
            "f",
            "</script><b>x</b>",
        )]));
        let island = page.split("id=\"report-data\">").nth(1).unwrap();
        let island = island.split("</script>").next().unwrap();
        assert!(!island.contains("</b>"));
    }

    #[test]
    fn page_names_key_and_version() {
        let report = report_with(vec![Violation::new("T", "f", "r")]);
        let page = render_html(&report);
        assert!(page.contains(&report.key().to_string()));
        assert!(page.contains("version 8.0"));
    }
}
