//! Sampling of membership curves over a model's scope.
//!
//! Chart renderers draw the three category curves of each input from these
//! samples; inference never uses them.

use serde::Serialize;

use crate::error::{CoreError, Result};
use crate::membership::MembershipModel;

/// Raw (unrounded) degrees of the three categories at one abscissa.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub x: f64,
    pub small: f64,
    pub medium: f64,
    pub big: f64,
}

/// Largest number of samples one call may produce.
pub const MAX_POINTS: usize = 100_000;

/// Tolerance for deciding whether the scope end falls on the step grid.
const GRID_EPSILON: f64 = 1e-9;

/// Sample `model` from its scope start to its scope end, inclusive, every
/// `step` units.
///
/// Abscissae are computed as `start + i·step` so that long scopes do not
/// accumulate drift. The end is included whenever it falls on the grid.
pub fn sample_curve(model: &dyn MembershipModel, step: f64) -> Result<Vec<CurvePoint>> {
    if !step.is_finite() || step <= 0.0 {
        return Err(CoreError::InvalidStep { step });
    }

    let scope = model.scope();
    let intervals = (scope.width() / step + GRID_EPSILON).floor();
    if intervals >= MAX_POINTS as f64 {
        return Err(CoreError::InvalidStep { step });
    }
    let intervals = intervals as usize;

    let points = (0..=intervals)
        .map(|i| {
            let x = (scope.start() + step * i as f64).min(scope.end());
            CurvePoint {
                x,
                small: model.degree_small(x),
                medium: model.degree_medium(x),
                big: model.degree_big(x),
            }
        })
        .collect();
    Ok(points)
}
