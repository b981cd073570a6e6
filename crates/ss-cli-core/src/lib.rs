pub mod input;
pub mod report;
pub mod utils;

pub use input::{InputError, InputResult, SampleInput, TokenReader};
pub use report::{ReportEntry, StatKey, StatReport};
pub use utils::pretty::{report_table, write_report, write_report_json, write_report_table, write_text_entry};
