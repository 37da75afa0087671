//! Output Rendering
//!
//! Renders command results as human-readable text or as a JSON document.

use chrono::SecondsFormat;
use serde::Serialize;

use crate::application::SeedSummary;
use crate::config::OutputFormat;
use crate::domain::entities::{Compensation, Employee, ReportingStructure};

/// Plain-text rendering of a command result
pub trait TextView {
    fn to_text(&self) -> String;
}

/// Render `value` in the requested format.
pub fn render<T>(value: &T, format: OutputFormat) -> serde_json::Result<String>
where
    T: Serialize + TextView + ?Sized,
{
    match format {
        OutputFormat::Text => Ok(value.to_text()),
        OutputFormat::Json => serde_json::to_string_pretty(value),
    }
}

fn label(name: &str, value: &str) -> String {
    let shown = if value.is_empty() { "-" } else { value };
    format!("  {:<12}{}\n", format!("{name}:"), shown)
}

impl TextView for Employee {
    fn to_text(&self) -> String {
        let mut out = String::new();
        let name = self.full_name();
        if name.is_empty() {
            out.push_str(&format!("{}\n", self.employee_id));
        } else {
            out.push_str(&format!("{}  {}\n", self.employee_id, name));
        }
        out.push_str(&label("Position", &self.position));
        out.push_str(&label("Department", &self.department));

        let reports: Vec<&str> = self
            .direct_reports
            .iter()
            .map(|r| r.employee_id.as_str())
            .collect();
        out.push_str(&label("Reports", &reports.join(", ")));
        out
    }
}

impl TextView for ReportingStructure {
    fn to_text(&self) -> String {
        let noun = if self.number_of_reports == 1 {
            "report"
        } else {
            "reports"
        };
        format!(
            "{}\n  {} distinct {} (direct and indirect)\n",
            self.employee.to_text(),
            self.number_of_reports,
            noun
        )
    }
}

impl TextView for Compensation {
    fn to_text(&self) -> String {
        format!(
            "{}  salary {}  effective {}\n",
            self.employee_id(),
            self.salary,
            self.effective_date
                .to_rfc3339_opts(SecondsFormat::Secs, true)
        )
    }
}

impl TextView for [Compensation] {
    fn to_text(&self) -> String {
        self.iter().map(Compensation::to_text).collect()
    }
}

impl TextView for SeedSummary {
    fn to_text(&self) -> String {
        format!(
            "Imported {} employees ({} new, {} replaced)\n",
            self.created + self.replaced,
            self.created,
            self.replaced
        )
    }
}
