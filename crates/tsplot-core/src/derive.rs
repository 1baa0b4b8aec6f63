// File: crates/tsplot-core/src/derive.rs
// Summary: Sequence helpers that derive one series from another.

/// Pairwise step over a sequence.
///
/// Element `i` of the output is `step(samples[i - 1], samples[i])`; the first
/// element pairs `head` with `samples[0]`. The output has the input's length.
pub fn derive<T: Copy, U>(samples: &[T], head: T, step: impl Fn(T, T) -> U) -> Vec<U> {
    let mut prev = head;
    samples
        .iter()
        .map(|&cur| {
            let out = step(prev, cur);
            prev = cur;
            out
        })
        .collect()
}

/// Absolute change between consecutive samples, starting from `head`.
pub fn abs_diff(samples: &[f64], head: f64) -> Vec<f64> {
    derive(samples, head, |a, b| (b - a).abs())
}
