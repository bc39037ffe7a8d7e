use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::core::FieldValue;
use crate::error::{PcpError, PcpResult};

/// Continuous scale mapping a numeric domain onto an inverted pixel range.
///
/// The range is `[height, 0]`: the domain minimum lands at the bottom of the
/// plot and the maximum at the top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64, height: f64) -> PcpResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() {
            return Err(PcpError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(PcpError::InvalidData(
                "scale height must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start: height,
            range_end: 0.0,
        })
    }

    /// Builds the scale over `[min, max]` of `values`, defaulting to `[0, 1]`.
    pub fn from_values(values: impl IntoIterator<Item = f64>, height: f64) -> PcpResult<Self> {
        let extent = values
            .into_iter()
            .filter(|value| value.is_finite())
            .fold(None, |extent: Option<(f64, f64)>, value| match extent {
                Some((min, max)) => Some((min.min(value), max.max(value))),
                None => Some((value, value)),
            });
        let (min, max) = extent.unwrap_or((0.0, 1.0));
        Self::new(min, max, height)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// Maps a domain value to a plot-local y coordinate.
    ///
    /// A degenerate domain (`min == max`) maps every value to the range midpoint.
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        if span == 0.0 {
            return (self.range_start + self.range_end) / 2.0;
        }
        let normalized = (value - self.domain_start) / span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Round-number ticks (1, 2 or 5 times a power of ten) covering the domain.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        let (start, stop) = (self.domain_start, self.domain_end);
        if start == stop {
            return vec![start];
        }
        let Some(step) = tick_step(start, stop, count) else {
            return Vec::new();
        };
        let first = (start / step).ceil() as i64;
        let last = (stop / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    }

    /// Formats a tick with just enough decimals for the tick step.
    #[must_use]
    pub fn format_tick(self, value: f64, count: usize) -> String {
        let step = tick_step(self.domain_start, self.domain_end, count).unwrap_or(1.0);
        let decimals = (-step.log10().floor()).max(0.0) as usize;
        format!("{value:.decimals$}")
    }
}

fn tick_step(start: f64, stop: f64, count: usize) -> Option<f64> {
    if count == 0 || stop <= start {
        return None;
    }
    let raw = (stop - start) / count as f64;
    let power = raw.log10().floor();
    let base = 10f64.powf(power);
    let error = raw / base;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    Some(factor * base)
}

/// Ordinal scale placing each distinct category at an evenly spaced point.
///
/// The domain keeps first-seen order. The first category sits nearest the
/// bottom of the plot, and `padding` (a fraction of the point step) keeps the
/// outermost categories away from the axis extremes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointScale {
    domain: IndexSet<String>,
    height: f64,
    padding: f64,
}

impl PointScale {
    pub fn new(domain: IndexSet<String>, height: f64, padding: f64) -> PcpResult<Self> {
        if !height.is_finite() || height <= 0.0 {
            return Err(PcpError::InvalidData(
                "scale height must be finite and > 0".to_owned(),
            ));
        }
        if !padding.is_finite() || padding <= 0.0 {
            return Err(PcpError::InvalidData(
                "point scale padding must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self {
            domain,
            height,
            padding,
        })
    }

    /// Collects distinct categories in the order they are first encountered.
    pub fn from_values<'a>(
        values: impl IntoIterator<Item = &'a str>,
        height: f64,
        padding: f64,
    ) -> PcpResult<Self> {
        let domain = values.into_iter().map(str::to_owned).collect();
        Self::new(domain, height, padding)
    }

    #[must_use]
    pub fn domain(&self) -> &IndexSet<String> {
        &self.domain
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        let n = self.domain.len() as f64;
        self.height / (n - 1.0 + self.padding * 2.0).max(1.0)
    }

    #[must_use]
    pub fn position(&self, category: &str) -> Option<f64> {
        let index = self.domain.get_index_of(category)?;
        Some(self.position_at(index))
    }

    fn position_at(&self, index: usize) -> f64 {
        let n = self.domain.len();
        let step = self.step();
        let top = (self.height - step * (n as f64 - 1.0)) / 2.0;
        top + step * (n - 1 - index) as f64
    }
}

/// Scale attached to one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AxisScale {
    Linear(LinearScale),
    Point(PointScale),
}

impl AxisScale {
    /// Plot-local y for a record value; `None` when undefined or of the wrong kind.
    #[must_use]
    pub fn scale(&self, value: Option<FieldValue<'_>>) -> Option<f64> {
        match (self, value?) {
            (Self::Linear(scale), FieldValue::Numeric(value)) if value.is_finite() => {
                Some(scale.map(value))
            }
            (Self::Point(scale), FieldValue::Categorical(value)) => scale.position(value),
            (Self::Point(scale), FieldValue::Numeric(value)) => scale.position(&format!("{value}")),
            _ => None,
        }
    }
}
