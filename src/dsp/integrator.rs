//! Integration of an impulse response into a step response.

use log::debug;

/// Cumulative sum starting at minus the total sum of `x`.
///
/// The result starts at `x[0] - sum(x)` and ends at exactly zero: a step from
/// a negative plateau to zero, whatever the gain of `x`.
///
/// Each output is the running prefix sum minus the total. The total is
/// accumulated in the same order as the prefix, so the last difference is
/// bit-exact zero.
pub fn integrate(x: &[f64]) -> Vec<f64> {
    let total = x.iter().fold(0.0, |acc, &sample| acc + sample);
    debug!("integrating {} samples, total {}", x.len(), total);

    x.iter()
        .scan(0.0, |prefix, &sample| {
            *prefix += sample;
            Some(*prefix - total)
        })
        .collect()
}
