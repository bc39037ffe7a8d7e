use smallvec::SmallVec;

use crate::core::{Axis, Record, Sample};
use crate::interaction::axes_in_order;

/// Inline capacity covering the dashboard's nine axes without allocating.
pub type SampleVec = SmallVec<[Sample; 12]>;

/// Samples `record` on `axes` visited in `ordered` sequence, at each axis's
/// current screen x.
#[must_use]
pub fn project_samples(record: &Record, axes: &[Axis], ordered: &[usize]) -> SampleVec {
    ordered
        .iter()
        .map(|&index| {
            let axis = &axes[index];
            Sample::new(axis.screen_x, axis.sample(record))
        })
        .collect()
}

/// Projects every record into axis-order samples.
#[must_use]
pub fn project_polylines(records: &[Record], axes: &[Axis]) -> Vec<SampleVec> {
    let ordered = axes_in_order(axes);
    project_all(records, axes, &ordered)
}

#[cfg(not(feature = "parallel-projection"))]
fn project_all(records: &[Record], axes: &[Axis], ordered: &[usize]) -> Vec<SampleVec> {
    records
        .iter()
        .map(|record| project_samples(record, axes, ordered))
        .collect()
}

#[cfg(feature = "parallel-projection")]
fn project_all(records: &[Record], axes: &[Axis], ordered: &[usize]) -> Vec<SampleVec> {
    use rayon::prelude::*;

    records
        .par_iter()
        .map(|record| project_samples(record, axes, ordered))
        .collect()
}
