//! Landmark ratios and distances, all measured in log space so that a 2× miss
//! and a 0.5× miss are the same distance.

/// Integer `n >= 1` nearest to `x` in log space.
///
/// Between `n` and `n + 1` the boundary is their geometric mean; a value sitting
/// exactly on it goes to `n`.
pub fn nearest_integer(x: f64) -> f64 {
    let n = x.floor().max(1.0);
    let upper = n + 1.0;
    if x > n.sqrt() * upper.sqrt() {
        upper
    } else {
        n
    }
}

/// `|ln(ratio / landmark)|`.
pub fn log_distance(ratio: f64, landmark: f64) -> f64 {
    (ratio / landmark).ln().abs()
}

/// Nearest whole multiple of two or more.
pub fn multiple_landmark(ratio: f64) -> f64 {
    if ratio >= 1.0 {
        nearest_integer(ratio).max(2.0)
    } else {
        2.0
    }
}

/// Nearest unit fraction of one half or less.
pub fn fraction_landmark(ratio: f64) -> f64 {
    if ratio < 1.0 {
        1.0 / nearest_integer(1.0 / ratio).max(2.0)
    } else {
        0.5
    }
}

/// Accuracy of stating `ratio` as `landmark`: `min(r/l, l/r)`.
pub fn accuracy(ratio: f64, landmark: f64) -> f64 {
    (-log_distance(ratio, landmark)).exp()
}
