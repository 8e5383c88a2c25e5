// File: crates/barchart-core/src/grid.rs
// Summary: Tick layout and tick label formatting helpers.

/// Round a raw step to a 1/2/5 * 10^k "nice" value.
pub fn nice_step(range: f64, target_steps: usize) -> f64 {
    if !(range > 0.0) {
        return 1.0;
    }
    let raw = range / target_steps.max(1) as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Nice tick values covering [min, max].
pub fn ticks(min: f64, max: f64, target_steps: usize) -> Vec<f64> {
    if !(max > min) {
        return vec![min];
    }
    let step = nice_step(max - min, target_steps);
    let eps = step * 1e-6;
    let mut out = Vec::new();
    let mut i = (min / step).ceil();
    loop {
        let v = i * step;
        if v > max + eps {
            break;
        }
        out.push(v);
        i += 1.0;
    }
    out
}

/// Tick label text. Scientific notation outside [1e-3, 1e4) keeps
/// stencil-error magnitudes like 1e-15 readable on a linear axis.
pub fn format_tick(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let a = v.abs();
    if (1e-3..1e4).contains(&a) {
        let s = format!("{v:.3}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        format!("{v:.1e}")
    }
}
