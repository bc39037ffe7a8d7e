pub mod axis;
pub mod curve;
pub mod record;
pub mod scale;
pub mod types;

pub use axis::{
    Axis, AxisKind, AxisSpec, BrushInterval, build_axes, default_dnf_axes, validate_axis_specs,
};
pub use curve::{PathCommand, Sample, cardinal_path, defined_runs, distance_to_samples};
pub use record::{Field, FieldValue, Record};
pub use scale::{AxisScale, LinearScale, PointScale};
pub use types::{PlotArea, PlotMargins, Viewport};
