// Human-readable stdout report: banner, the first few values of each array,
// and a one-line timing summary.

use colored::Colorize;
use std::time::Duration;

pub const BANNER: &str = "Adding arrays in parallel!";
pub const SEPARATOR: &str = " - ";

/// Significant digits used by `format_value`, same as a default C++ stream
const SIGNIFICANT_DIGITS: usize = 6;

/// Formats a value the way `printf("%g")` does: 6 significant digits,
/// trailing zeros dropped, scientific notation for very large or small
/// magnitudes. Hides f32 noise such as `8.150001`.
pub fn format_value(value: f32) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "inf" } else { "-inf" };
        return text.to_string();
    }
    if value == 0.0 {
        let text = if value.is_sign_negative() { "-0" } else { "0" };
        return text.to_string();
    }

    let value = f64::from(value);
    // Rounding to 6 digits first gives the exponent %g decides on
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exponent.abs())
    } else {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
        trim_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

pub fn format_values(values: &[f32]) -> String {
    values
        .iter()
        .map(|&v| format_value(v))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Summary: timing and verification of one run
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub len: usize,
    pub workers: usize,
    pub chunk_size: usize,
    pub elapsed: Duration,
    pub matches_reference: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Banner,
    Header,
    Values,
    Timing,
    Verified(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report<'a> {
    display_count: usize,
    arrays: Vec<(&'static str, &'a [f32])>,
    summary: Option<Summary>,
}

impl<'a> Report<'a> {
    pub fn new(display_count: usize) -> Self {
        Report {
            display_count,
            arrays: Vec::new(),
            summary: None,
        }
    }

    pub fn array(mut self, name: &'static str, values: &'a [f32]) -> Self {
        self.arrays.push((name, values));
        self
    }

    pub fn summary(mut self, summary: Summary) -> Self {
        self.summary = Some(summary);
        self
    }

    fn lines(&self) -> Vec<(LineKind, String)> {
        let mut lines = vec![(LineKind::Banner, BANNER.to_string())];

        for (name, values) in &self.arrays {
            let shown = &values[..self.display_count.min(values.len())];
            lines.push((
                LineKind::Header,
                format!("Printing the first {} values of array {}:", shown.len(), name),
            ));
            lines.push((LineKind::Values, format_values(shown)));
        }

        if let Some(summary) = &self.summary {
            lines.push((
                LineKind::Timing,
                format!(
                    "Summed {} elements with {} worker(s), chunk size {}, in {:?}",
                    summary.len, summary.workers, summary.chunk_size, summary.elapsed
                ),
            ));
            let verdict = if summary.matches_reference {
                "✓ Result matches the sequential reference"
            } else {
                "✗ Result differs from the sequential reference"
            };
            lines.push((
                LineKind::Verified(summary.matches_reference),
                verdict.to_string(),
            ));
        }

        lines
    }

    /// Plain text, one line per entry, newline terminated
    pub fn render(&self) -> String {
        self.lines()
            .into_iter()
            .map(|(_, text)| text + "\n")
            .collect()
    }

    pub fn print(&self) {
        for (kind, text) in self.lines() {
            match kind {
                LineKind::Banner => println!("{}", text.bold().green()),
                LineKind::Header => println!("{}", text.cyan()),
                LineKind::Values => println!("{}", text),
                LineKind::Timing => println!("{}", text.dimmed()),
                LineKind::Verified(true) => println!("{}", text.green()),
                LineKind::Verified(false) => println!("{}", text.red().bold()),
            }
        }
    }
}
