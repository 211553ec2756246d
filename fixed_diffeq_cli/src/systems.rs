//! Built-in right-hand sides used by the subcommands.

/// `dy/dt = cos(t) + sin(y)`
pub fn first_order(t: f64, y: f64) -> f64 {
    t.cos() + y.sin()
}

/// `dy/dt = sin(t) + cos(y) + v`, `dv/dt = cos(v)`, reported as `y` against `t`.
pub fn second_order() -> (fn(f64, f64, f64) -> f64, fn(f64, f64, f64) -> f64) {
    (|t, y, v| t.sin() + y.cos() + v, |_t, _y, v| v.cos())
}

/// `dy/dt = sin(t) + cos(y)`, `dv/dt = sin(v)`, viewed in the `(y, v)` plane.
pub fn phase_plane() -> (fn(f64, f64, f64) -> f64, fn(f64, f64, f64) -> f64) {
    (|t, y, _v| t.sin() + y.cos(), |_t, _y, v| v.sin())
}
