//! Discrete-event search: coarse scan + bisection on a step function of time.
//!
//! A predicate maps an instant to a small integer (a boolean, a phase
//! quarter, ...). The interval is scanned at a fixed step; every step whose
//! endpoints disagree is bisected until the bracket is narrower than
//! [`DISCRETE_CONVERGENCE_DAYS`]. The reported instant is the later edge of
//! the final bracket, so the predicate already holds its new value there.

use panchang_time::Moment;
use serde::Serialize;

use crate::error::EphemerisError;

/// Bisection stops once the bracket is narrower than this (~9 ms).
pub const DISCRETE_CONVERGENCE_DAYS: f64 = 1e-7;

/// Hard cap on bisection steps per transition.
const MAX_BISECTIONS: usize = 64;

/// Hard cap on coarse scan steps per search.
const MAX_SCAN_STEPS: f64 = 1_000_000.0;

/// A change of the predicate's value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiscreteEvent {
    /// First instant (to convergence tolerance) with the new value.
    pub at: Moment,
    /// Predicate value after the change.
    pub value: u8,
}

/// Find every change of `predicate` inside `[start, end]`.
///
/// Errors from the predicate abort the search and are returned unchanged.
pub fn find_discrete(
    start: Moment,
    end: Moment,
    step_days: f64,
    predicate: &dyn Fn(Moment) -> Result<u8, EphemerisError>,
) -> Result<Vec<DiscreteEvent>, EphemerisError> {
    if !start.jd_utc().is_finite() || !end.jd_utc().is_finite() {
        return Err(EphemerisError::InvalidInterval("bounds must be finite"));
    }
    if end < start {
        return Err(EphemerisError::InvalidInterval("end precedes start"));
    }
    if !step_days.is_finite() || step_days <= 0.0 {
        return Err(EphemerisError::InvalidInterval("step must be positive"));
    }
    let span = end.days_since(start);
    let steps = (span / step_days).ceil().max(1.0);
    if steps > MAX_SCAN_STEPS {
        return Err(EphemerisError::InvalidInterval("too many scan steps"));
    }
    let steps = steps as usize;

    let mut events = Vec::new();
    let mut t_prev = start;
    let mut v_prev = predicate(start)?;

    for i in 1..=steps {
        let t_curr = if i == steps {
            end
        } else {
            start.add_days(i as f64 * step_days)
        };
        let v_curr = predicate(t_curr)?;
        if v_curr != v_prev {
            events.push(bisect_transition(t_prev, v_prev, t_curr, v_curr, predicate)?);
        }
        t_prev = t_curr;
        v_prev = v_curr;
    }

    tracing::trace!(steps, found = events.len(), "discrete scan finished");
    Ok(events)
}

/// Narrow `[t_a, t_b]` around the first change away from `v_a`.
fn bisect_transition(
    mut t_a: Moment,
    v_a: u8,
    mut t_b: Moment,
    mut v_b: u8,
    predicate: &dyn Fn(Moment) -> Result<u8, EphemerisError>,
) -> Result<DiscreteEvent, EphemerisError> {
    for _ in 0..MAX_BISECTIONS {
        let width = t_b.days_since(t_a);
        if width < DISCRETE_CONVERGENCE_DAYS {
            break;
        }
        let t_mid = t_a.add_days(0.5 * width);
        let v_mid = predicate(t_mid)?;
        if v_mid == v_a {
            t_a = t_mid;
        } else {
            t_b = t_mid;
            v_b = v_mid;
        }
    }
    Ok(DiscreteEvent { at: t_b, value: v_b })
}
