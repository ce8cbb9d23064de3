// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

const NICE_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Pick the smallest 1/2/2.5/5 x 10^k step that yields at most `max_ticks`
/// ticks inside `[min, max]`, and return `(ticks, step)`.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> (Vec<f64>, f64) {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let span = hi - lo;
    if !span.is_finite() || span <= 0.0 || max_ticks < 2 {
        return (vec![lo], 1.0);
    }
    let raw = span / (max_ticks - 1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let mut step = mag * 10.0;
    for m in NICE_STEPS {
        let candidate = m * mag;
        if ticks_in(lo, hi, candidate).len() <= max_ticks {
            step = candidate;
            break;
        }
    }
    (ticks_in(lo, hi, step), step)
}

fn ticks_in(lo: f64, hi: f64, step: f64) -> Vec<f64> {
    let first = (lo / step - 1e-9).ceil() as i64;
    let last = (hi / step + 1e-9).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

/// Format a tick value with just enough decimals to distinguish `step` multiples.
pub fn format_tick(value: f64, step: f64) -> String {
    let mut decimals = (-step.log10().floor()).max(0.0) as usize;
    let scaled = step * 10f64.powi(decimals as i32);
    if (scaled - scaled.round()).abs() > 1e-6 {
        decimals += 1;
    }
    let v = if value.abs() < step * 1e-6 { 0.0 } else { value };
    format!("{v:.decimals$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_range_with_margins_uses_fifths() {
        let (ticks, step) = nice_ticks(-0.05, 1.05, 9);
        assert!((step - 0.2).abs() < 1e-12);
        assert_eq!(ticks.len(), 6);
        assert_eq!(ticks[0], 0.0);
        assert!((ticks[5] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn large_values_pick_round_steps() {
        let (ticks, step) = nice_ticks(0.0, 126.0, 9);
        assert_eq!(step, 20.0);
        assert_eq!(ticks, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0, 120.0]);
    }

    #[test]
    fn tick_labels_track_step_precision() {
        assert_eq!(format_tick(0.4, 0.2), "0.4");
        assert_eq!(format_tick(100.0, 20.0), "100");
        assert_eq!(format_tick(1.25, 0.25), "1.25");
        assert_eq!(format_tick(-1e-17, 0.2), "0.0");
    }

    #[test]
    fn degenerate_range_yields_single_tick() {
        let (ticks, _) = nice_ticks(2.0, 2.0, 9);
        assert_eq!(ticks, vec![2.0]);
    }
}
