use std::io::{self, Write};

use comfy_table::{
    Cell, CellAlignment, ContentArrangement, Row as CRow, Table, presets::ASCII_MARKDOWN,
};

use ss_config::OutputFormat;

use crate::report::{ReportEntry, StatReport};

/// Text mode: a computed value goes to `out`, a failure to `err`.
pub fn write_text_entry<O: Write, E: Write>(
    out: &mut O,
    err: &mut E,
    entry: &ReportEntry,
    precision: usize,
) -> io::Result<()> {
    match (entry.display_value(precision), &entry.error) {
        (Some(value), _) => writeln!(out, "{}: {}", entry.label, value),
        (None, Some(msg)) => writeln!(err, "{}: {}", entry.label, msg),
        (None, None) => writeln!(err, "{}: no value", entry.label),
    }
}

/// Columns: Statistic | Value | Error
pub fn report_table(report: &StatReport) -> Table {
    let mut t = Table::new();
    t.load_preset(ASCII_MARKDOWN);
    t.set_content_arrangement(ContentArrangement::Dynamic);
    t.set_header(vec!["Statistic", "Value", "Error"]);
    for it in &report.entries {
        let value = it
            .display_value(report.precision)
            .unwrap_or_else(|| "-".to_string());
        let err = it.error.clone().unwrap_or_else(|| "-".to_string());

        let mut row = CRow::new();
        row.add_cell(Cell::new(it.label.clone()).set_alignment(CellAlignment::Left));
        row.add_cell(Cell::new(value).set_alignment(CellAlignment::Right));
        row.add_cell(Cell::new(err).set_alignment(CellAlignment::Left));
        t.add_row(row);
    }
    t
}

pub fn write_report_table<W: Write>(out: &mut W, report: &StatReport) -> io::Result<()> {
    writeln!(out, "{}", report_table(report))?;
    writeln!(out, "\nSample size: {}", report.sample_size)
}

pub fn write_report_json<W: Write>(out: &mut W, report: &StatReport) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}

/// Renders the finished report. Text entries are streamed while the session
/// runs, so text mode writes nothing here.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &StatReport,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => Ok(()),
        OutputFormat::Table => write_report_table(out, report),
        OutputFormat::Json => write_report_json(out, report),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::StatKey;
    use ss_stats::StatError;

    fn sample_report() -> StatReport {
        let mut rep = StatReport::new(3, 4);
        rep.record(StatKey::Mean, None, &Ok(4.0));
        rep.record(
            StatKey::MarginOfError,
            Some(0.80),
            &Err(StatError::UnsupportedConfidenceLevel(0.80)),
        );
        rep
    }

    #[test]
    fn text_entry_routes_by_outcome() {
        let rep = sample_report();
        let mut out = Vec::new();
        let mut err = Vec::new();
        for e in &rep.entries {
            write_text_entry(&mut out, &mut err, e, rep.precision).unwrap();
        }
        assert_eq!(String::from_utf8(out).unwrap(), "Sample Mean: 4.0000\n");
        let err = String::from_utf8(err).unwrap();
        assert!(err.starts_with("Margin of Error at 80.0000% confidence: unsupported"));
    }

    #[test]
    fn table_has_row_per_entry() {
        let rep = sample_report();
        let mut table = report_table(&rep);
        // 测试环境终端宽度不确定，关闭自动换行
        table.set_content_arrangement(ContentArrangement::Disabled);
        let rendered = table.to_string();
        assert!(rendered.contains("Statistic"));
        assert!(rendered.contains("Sample Mean"));
        assert!(rendered.contains("4.0000"));
        assert!(rendered.contains("unsupported confidence level"));
    }

    #[test]
    fn text_format_writes_nothing_at_the_end() {
        let mut out = Vec::new();
        write_report(&mut out, &sample_report(), OutputFormat::Text).unwrap();
        assert!(out.is_empty());
        write_report(&mut out, &sample_report(), OutputFormat::Table).unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with("\nSample size: 3\n"));
    }

    #[test]
    fn json_output_is_parseable() {
        let rep = sample_report();
        let mut out = Vec::new();
        write_report_json(&mut out, &rep).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["sample_size"], 3);
        assert_eq!(v["entries"][0]["key"], "mean");
        assert_eq!(v["entries"][0]["value"], 4.0);
        assert!(v["entries"][1]["value"].is_null());
        assert_eq!(v["entries"][1]["input"], 0.8);
        assert!(v.get("precision").is_none());
    }
}
