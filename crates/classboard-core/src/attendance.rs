//! Attendance counters and numeric input coercion.

use std::fmt;

/// Text shown when no percentage can be computed.
pub const NO_PERCENTAGE: &str = "—";

/// Which counter of an attendance record an input edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttendanceField {
    Present,
    Total,
}

impl AttendanceField {
    pub fn label(self) -> &'static str {
        match self {
            AttendanceField::Present => "Present",
            AttendanceField::Total => "Total",
        }
    }

    /// The other field (used for left/right navigation).
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            AttendanceField::Present => AttendanceField::Total,
            AttendanceField::Total => AttendanceField::Present,
        }
    }
}

impl fmt::Display for AttendanceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Present/total counters for one subject.
///
/// The two counters are independent: `present > total` and negative values
/// are kept as entered. The percentage is derived on read.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AttendanceRecord {
    pub present: f64,
    pub total: f64,
}

impl AttendanceRecord {
    /// Returns a copy with `field` set to `value`.
    #[must_use]
    pub fn with_field(self, field: AttendanceField, value: f64) -> Self {
        match field {
            AttendanceField::Present => Self {
                present: value,
                ..self
            },
            AttendanceField::Total => Self {
                total: value,
                ..self
            },
        }
    }

    pub fn get(&self, field: AttendanceField) -> f64 {
        match field {
            AttendanceField::Present => self.present,
            AttendanceField::Total => self.total,
        }
    }

    /// Attendance percentage rounded to one decimal, `None` unless `total > 0`.
    pub fn percentage(&self) -> Option<f64> {
        (self.total > 0.0).then(|| round1(self.present / self.total * 100.0))
    }

    /// Percentage formatted for display: `80.0%`, or a dash when undefined.
    pub fn display_percentage(&self) -> String {
        self.percentage()
            .map_or_else(|| NO_PERCENTAGE.to_string(), |p| format!("{p:.1}%"))
    }
}

/// Coerces raw numeric-input text to a number.
///
/// Surrounding whitespace is ignored. Empty, unparsable, and non-finite
/// input all become `0`. Negative and fractional values pass through.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Rounds to one decimal place.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
