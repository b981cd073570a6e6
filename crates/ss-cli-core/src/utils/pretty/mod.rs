mod report;

pub use report::{report_table, write_report, write_report_json, write_report_table, write_text_entry};
