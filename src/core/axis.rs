use serde::{Deserialize, Serialize};

use crate::core::{AxisScale, Field, FieldValue, LinearScale, PlotArea, PointScale, Record};
use crate::error::{PcpError, PcpResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AxisKind {
    Numeric,
    Categorical,
}

/// Static description of one plotted dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub field: Field,
    pub kind: AxisKind,
    pub label: String,
}

impl AxisSpec {
    #[must_use]
    pub fn new(field: Field, kind: AxisKind, label: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            label: label.into(),
        }
    }
}

/// Dimensions plotted by the DNF dashboard, categorical first.
#[must_use]
pub fn default_dnf_axes() -> Vec<AxisSpec> {
    vec![
        AxisSpec::new(Field::CircuitType, AxisKind::Categorical, "Circuit Type"),
        AxisSpec::new(Field::ReasonRetired, AxisKind::Categorical, "Reason Retired"),
        AxisSpec::new(Field::Constructor, AxisKind::Categorical, "Constructor"),
        AxisSpec::new(Field::Engine, AxisKind::Categorical, "Engine"),
        AxisSpec::new(Field::Tyre, AxisKind::Categorical, "Tyre"),
        AxisSpec::new(Field::Country, AxisKind::Categorical, "Country"),
        AxisSpec::new(Field::Year, AxisKind::Numeric, "Year"),
        AxisSpec::new(Field::Grid, AxisKind::Numeric, "Grid Position"),
        AxisSpec::new(Field::Laps, AxisKind::Numeric, "Number of Laps"),
    ]
}

pub fn validate_axis_specs(specs: &[AxisSpec]) -> PcpResult<()> {
    if specs.is_empty() {
        return Err(PcpError::InvalidData(
            "at least one axis must be configured".to_owned(),
        ));
    }
    for (index, spec) in specs.iter().enumerate() {
        if specs[..index].iter().any(|other| other.field == spec.field) {
            return Err(PcpError::InvalidData(format!(
                "axis field `{}` is configured more than once",
                spec.field.key()
            )));
        }
        if spec.field == Field::Status {
            return Err(PcpError::InvalidData(
                "`status` is display-only and cannot be plotted".to_owned(),
            ));
        }
        // Numeric fields may be plotted as categories; text never maps onto a linear scale.
        if spec.kind == AxisKind::Numeric && spec.field.kind() != AxisKind::Numeric {
            return Err(PcpError::InvalidData(format!(
                "axis field `{}` holds text and cannot use a numeric scale",
                spec.field.key()
            )));
        }
    }
    Ok(())
}

/// Screen-space brush interval in plot-local y coordinates, `y0 < y1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushInterval {
    pub y0: f64,
    pub y1: f64,
}

impl BrushInterval {
    #[must_use]
    pub fn contains(self, y: f64) -> bool {
        y >= self.y0 && y <= self.y1
    }
}

/// Live axis: scale plus the mutable interaction state.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub spec: AxisSpec,
    pub scale: AxisScale,
    pub order: usize,
    pub screen_x: f64,
    pub brush: Option<BrushInterval>,
}

impl Axis {
    #[must_use]
    pub fn field(&self) -> Field {
        self.spec.field
    }

    /// Plot-local y of `record` on this axis, `None` when undefined.
    #[must_use]
    pub fn sample(&self, record: &Record) -> Option<f64> {
        self.scale.scale(record.value(self.spec.field))
    }

    /// Brush constraint check; unbrushed axes accept everything.
    #[must_use]
    pub fn accepts(&self, record: &Record) -> bool {
        match self.brush {
            None => true,
            Some(brush) => self.sample(record).is_some_and(|y| brush.contains(y)),
        }
    }
}

/// Builds axes in configured order with domains fixed over all `records`.
pub fn build_axes(
    specs: &[AxisSpec],
    records: &[Record],
    area: PlotArea,
    category_padding: f64,
) -> PcpResult<Vec<Axis>> {
    let count = specs.len();
    specs
        .iter()
        .enumerate()
        .map(|(order, spec)| {
            let scale = build_scale(spec, records, area.height, category_padding)?;
            Ok(Axis {
                spec: spec.clone(),
                scale,
                order,
                screen_x: area.slot_x(order, count),
                brush: None,
            })
        })
        .collect()
}

fn build_scale(
    spec: &AxisSpec,
    records: &[Record],
    height: f64,
    category_padding: f64,
) -> PcpResult<AxisScale> {
    let values = records.iter().filter_map(|record| record.value(spec.field));
    match spec.kind {
        AxisKind::Numeric => {
            let numbers = values.filter_map(|value| match value {
                FieldValue::Numeric(number) => Some(number),
                FieldValue::Categorical(_) => None,
            });
            Ok(AxisScale::Linear(LinearScale::from_values(numbers, height)?))
        }
        AxisKind::Categorical => {
            let categories = values.map(|value| match value {
                FieldValue::Categorical(text) => text.to_owned(),
                FieldValue::Numeric(number) => format!("{number}"),
            });
            Ok(AxisScale::Point(PointScale::new(
                categories.collect(),
                height,
                category_padding,
            )?))
        }
    }
}
