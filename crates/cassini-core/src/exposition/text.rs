use std::fmt::Write;

use crate::metric::MetricFamily;

/// Content type of the text exposition format.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// Escape HELP text (quotes are left alone).
fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

fn format_value(v: f64) -> String {
    if v.is_nan() {
        "NaN".into()
    } else if v == f64::INFINITY {
        "+Inf".into()
    } else if v == f64::NEG_INFINITY {
        "-Inf".into()
    } else {
        v.to_string()
    }
}

/// Render families in Prometheus text exposition format.
///
/// Families without samples are skipped.
pub fn encode(families: &[MetricFamily]) -> String {
    let mut out = String::new();
    for fam in families.iter().filter(|f| !f.samples.is_empty()) {
        let name = &fam.desc.name;
        let _ = writeln!(out, "# HELP {} {}", name, escape_help(&fam.desc.help));
        let _ = writeln!(out, "# TYPE {} {}", name, fam.kind.as_str());
        for s in &fam.samples {
            if s.labels.is_empty() {
                let _ = writeln!(out, "{} {}", name, format_value(s.value));
                continue;
            }
            let label_str = s
                .labels
                .iter()
                .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                .collect::<Vec<_>>()
                .join(",");
            let _ = writeln!(out, "{}{{{}}} {}", name, label_str, format_value(s.value));
        }
    }
    out
}
