use serde_derive::Serialize;
use ss_stats::StatResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKey {
    Mean,
    Variance,
    StandardDeviation,
    ZScore,
    MarginOfError,
    Probability,
}

impl StatKey {
    /// Probability is displayed as a percentage, everything else as-is.
    pub fn is_percentage(&self) -> bool {
        matches!(self, StatKey::Probability)
    }
}

/// One computed statistic; exactly one of `value`/`error` is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub key: StatKey,
    pub label: String,
    /// The prompted argument (z target, confidence level, probe value)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<f64>,
    pub value: Option<f64>,
    pub error: Option<String>,
}

impl ReportEntry {
    pub fn from_result(
        key: StatKey,
        input: Option<f64>,
        precision: usize,
        result: &StatResult<f64>,
    ) -> Self {
        let (value, error) = match result {
            Ok(v) => (Some(*v), None),
            Err(e) => (None, Some(e.to_string())),
        };
        Self {
            key,
            label: label_for(key, input, precision),
            input,
            value,
            error,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Value formatted with fixed decimals, `%`-suffixed for percentages.
    pub fn display_value(&self, precision: usize) -> Option<String> {
        self.value.map(|v| {
            if self.key.is_percentage() {
                format!("{:.*}%", precision, v * 100.0)
            } else {
                format!("{:.*}", precision, v)
            }
        })
    }
}

pub fn label_for(key: StatKey, input: Option<f64>, precision: usize) -> String {
    match (key, input) {
        (StatKey::Mean, _) => "Sample Mean".to_string(),
        (StatKey::Variance, _) => "Variance".to_string(),
        (StatKey::StandardDeviation, _) => "Standard Deviation".to_string(),
        (StatKey::ZScore, _) => "Z-Score for the last entered value".to_string(),
        (StatKey::MarginOfError, Some(level)) => {
            format!("Margin of Error at {:.*}% confidence", precision, level * 100.0)
        }
        (StatKey::MarginOfError, None) => "Margin of Error".to_string(),
        (StatKey::Probability, Some(probe)) => {
            format!("Probability of value {:.*}", precision, probe)
        }
        (StatKey::Probability, None) => "Probability".to_string(),
    }
}

/// All statistics of one session, in the order they were computed.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct StatReport {
    pub sample_size: usize,
    #[serde(skip)]
    pub precision: usize,
    pub entries: Vec<ReportEntry>,
}

impl StatReport {
    pub fn new(sample_size: usize, precision: usize) -> Self {
        Self {
            sample_size,
            precision,
            entries: Vec::new(),
        }
    }

    /// Records `result` and returns the stored entry.
    pub fn record(
        &mut self,
        key: StatKey,
        input: Option<f64>,
        result: &StatResult<f64>,
    ) -> &ReportEntry {
        let entry = ReportEntry::from_result(key, input, self.precision, result);
        match &entry.error {
            None => log::debug!("{}: {:?}", entry.label, entry.value),
            Some(err) => log::warn!("{}: {}", entry.label, err),
        }
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    pub fn get(&self, key: StatKey) -> Option<&ReportEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|e| !e.is_ok())
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}
