//! Aggregation primitives over columns with missing values

/// Geometric mean of the present values.
///
/// Missing and NaN values are skipped. Edge cases:
/// - No values: [`None`]
/// - A zero among the values: `0.0`
/// - A positive infinity among the values: [`f64::INFINITY`]
/// - Both a zero and an infinity, or any negative value: [`None`]
///
/// The mean is computed through the sum of logarithms, so long columns of large
/// values do not overflow.
pub fn geometric_mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let mut log_sum = 0.0;
    let mut count = 0usize;
    let mut has_zero = false;
    let mut has_infinity = false;

    for value in values.into_iter().flatten() {
        if value.is_nan() {
            continue;
        }
        if value < 0.0 {
            return None;
        }

        if value == 0.0 {
            has_zero = true;
        } else if value.is_infinite() {
            has_infinity = true;
        } else {
            log_sum += value.ln();
        }
        count += 1;
    }

    match (count, has_zero, has_infinity) {
        (0, _, _) => None,
        (_, true, true) => None,
        (_, true, false) => Some(0.0),
        (_, false, true) => Some(f64::INFINITY),
        (_, false, false) => Some((log_sum / count as f64).exp()),
    }
}

/// Arithmetic mean of the present, non-NaN values. [`None`] if there are none.
pub fn arithmetic_mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, count) = values
        .into_iter()
        .flatten()
        .filter(|value| !value.is_nan())
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
