use serde::{Deserialize, Serialize};

/// Point sampled on one axis; `y` is `None` when the record is undefined there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: Option<f64>,
}

impl Sample {
    #[must_use]
    pub const fn new(x: f64, y: Option<f64>) -> Self {
        Self { x, y }
    }
}

/// Drawing command in plot-local pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    CubicTo {
        c1x: f64,
        c1y: f64,
        c2x: f64,
        c2y: f64,
        x: f64,
        y: f64,
    },
}

impl PathCommand {
    #[must_use]
    pub fn end_point(self) -> (f64, f64) {
        match self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } | Self::CubicTo { x, y, .. } => (x, y),
        }
    }

    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        match self {
            Self::MoveTo { x, y } => Self::MoveTo {
                x: x + dx,
                y: y + dy,
            },
            Self::LineTo { x, y } => Self::LineTo {
                x: x + dx,
                y: y + dy,
            },
            Self::CubicTo {
                c1x,
                c1y,
                c2x,
                c2y,
                x,
                y,
            } => Self::CubicTo {
                c1x: c1x + dx,
                c1y: c1y + dy,
                c2x: c2x + dx,
                c2y: c2y + dy,
                x: x + dx,
                y: y + dy,
            },
        }
    }
}

/// Splits samples into maximal runs of defined points.
#[must_use]
pub fn defined_runs(samples: &[Sample]) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for sample in samples {
        match sample.y {
            Some(y) if y.is_finite() && sample.x.is_finite() => current.push((sample.x, y)),
            _ => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// Cardinal spline through the defined samples.
///
/// Undefined samples break the path: each run of defined points starts with
/// a `MoveTo`. A run of one point is a bare `MoveTo`, two points a straight
/// `LineTo`, and longer runs become cubic segments whose end tangents are
/// flat. `tension` in `[0, 1]`; `1` degenerates to straight segments.
#[must_use]
pub fn cardinal_path(samples: &[Sample], tension: f64) -> Vec<PathCommand> {
    let k = (1.0 - tension) / 6.0;
    let mut commands = Vec::with_capacity(samples.len());
    for run in defined_runs(samples) {
        let (x0, y0) = run[0];
        commands.push(PathCommand::MoveTo { x: x0, y: y0 });
        match run.len() {
            1 => {}
            2 => {
                let (x, y) = run[1];
                commands.push(PathCommand::LineTo { x, y });
            }
            len => {
                for i in 0..len - 1 {
                    let p1 = run[i];
                    let p2 = run[i + 1];
                    let (t1x, t1y) = if i == 0 {
                        (0.0, 0.0)
                    } else {
                        (p2.0 - run[i - 1].0, p2.1 - run[i - 1].1)
                    };
                    let (t2x, t2y) = if i + 2 >= len {
                        (0.0, 0.0)
                    } else {
                        (run[i + 2].0 - p1.0, run[i + 2].1 - p1.1)
                    };
                    commands.push(PathCommand::CubicTo {
                        c1x: p1.0 + k * t1x,
                        c1y: p1.1 + k * t1y,
                        c2x: p2.0 - k * t2x,
                        c2y: p2.1 - k * t2y,
                        x: p2.0,
                        y: p2.1,
                    });
                }
            }
        }
    }
    commands
}

/// Shortest distance from `(px, py)` to the straight segments joining
/// consecutive defined samples.
#[must_use]
pub fn distance_to_samples(samples: &[Sample], px: f64, py: f64) -> Option<f64> {
    defined_runs(samples)
        .iter()
        .flat_map(|run| {
            let segments = run.windows(2).map(move |pair| {
                segment_distance(pair[0], pair[1], (px, py))
            });
            let single = (run.len() == 1).then(|| segment_distance(run[0], run[0], (px, py)));
            segments.chain(single)
        })
        .min_by(f64::total_cmp)
}

fn segment_distance(a: (f64, f64), b: (f64, f64), p: (f64, f64)) -> f64 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let length_sq = dx * dx + dy * dy;
    let t = if length_sq == 0.0 {
        0.0
    } else {
        (((p.0 - a.0) * dx + (p.1 - a.1) * dy) / length_sq).clamp(0.0, 1.0)
    };
    let (cx, cy) = (a.0 + t * dx, a.1 + t * dy);
    ((p.0 - cx).powi(2) + (p.1 - cy).powi(2)).sqrt()
}
