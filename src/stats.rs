use crate::{Numeric, SummaryError};

/// Position and value of the smallest or largest element of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum {
    pub value: f64,
    pub index: usize,
}

/// Mean of every element that parses as a number. Other elements are skipped
/// and don't count towards the divisor.
pub fn calculate_mean<T: Numeric>(series: &[T]) -> Result<f64, SummaryError> {
    if series.is_empty() {
        return Err(SummaryError::EmptyInput);
    }

    let (sum, count) = series
        .iter()
        .filter_map(Numeric::to_f64)
        .fold((0.0, 0_usize), |(sum, count), value| (sum + value, count + 1));

    if count == 0 {
        return Err(SummaryError::NoValidData);
    }

    Ok(sum / count as f64)
}

/// Smallest value of the series and the index of its *last* occurrence.
///
/// Returns `Ok(None)` for an empty series and [`SummaryError::NoValidData`]
/// when none of its elements is a number.
pub fn find_min<T: Numeric>(series: &[T]) -> Result<Option<Extremum>, SummaryError> {
    scan(series, f64::INFINITY, |value, best| value < best)
}

/// Largest value of the series and the index of its *last* occurrence.
///
/// Same outcomes as [`find_min`].
pub fn find_max<T: Numeric>(series: &[T]) -> Result<Option<Extremum>, SummaryError> {
    scan(series, f64::NEG_INFINITY, |value, best| value > best)
}

fn scan<T: Numeric>(
    series: &[T],
    start: f64,
    beats: fn(f64, f64) -> bool,
) -> Result<Option<Extremum>, SummaryError> {
    if series.is_empty() {
        return Ok(None);
    }

    let mut best = start;
    let mut best_index = None;

    let values = series
        .iter()
        .enumerate()
        .filter_map(|(index, value)| Some((index, value.to_f64()?)));
    for (index, value) in values {
        // ties move the index forward
        if beats(value, best) || value == best {
            best = value;
            best_index = Some(index);
        }
    }

    match best_index {
        Some(index) => Ok(Some(Extremum { value: best, index })),
        None => Err(SummaryError::NoValidData),
    }
}
