//! Prometheus text exposition builder.
//!
//! Each family is written as `# HELP`, `# TYPE`, then its samples; families
//! are separated by a single blank line. Labels keep the order the caller
//! passes them in.

use std::fmt::{self, Display, Write};

use crate::error::Result;

/// Metric family type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Counter,
    Gauge,
}

impl MetricKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Counter => "counter",
            MetricKind::Gauge => "gauge",
        }
    }
}

impl Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Helper to escape label values.
pub fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

#[derive(Debug, Default)]
pub struct Exposition {
    out: String,
}

impl Exposition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a family holding one sample.
    pub fn family(
        &mut self,
        name: &str,
        help: &str,
        kind: MetricKind,
        labels: &[(&str, &str)],
        value: impl Display,
    ) -> Result<&mut Self> {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        writeln!(self.out, "# HELP {name} {help}")?;
        writeln!(self.out, "# TYPE {name} {kind}")?;
        if labels.is_empty() {
            writeln!(self.out, "{name} {value}")?;
        } else {
            let label_str = labels
                .iter()
                .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                .collect::<Vec<_>>()
                .join(",");
            writeln!(self.out, "{name}{{{label_str}}} {value}")?;
        }
        Ok(self)
    }

    pub fn finish(self) -> String {
        self.out
    }
}
