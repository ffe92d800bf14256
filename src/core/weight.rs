/// Grams in one avoirdupois pound
pub const GRAMS_PER_POUND: f64 = 453.59237;

/// Convert a weight in pounds to grams
#[inline]
pub fn pounds_to_grams(pounds: f64) -> f64 {
    pounds * GRAMS_PER_POUND
}

/// Absolute weight difference between two competitors, in grams
///
/// # Arguments
/// * `a_lb` - Weight of the first competitor in pounds
/// * `b_lb` - Weight of the second competitor in pounds
#[inline]
pub fn difference_grams(a_lb: f64, b_lb: f64) -> f64 {
    (pounds_to_grams(a_lb) - pounds_to_grams(b_lb)).abs()
}

/// Weight difference rounded to the nearest whole gram, as reported on a duel
#[inline]
pub fn rounded_difference_grams(a_lb: f64, b_lb: f64) -> u64 {
    difference_grams(a_lb, b_lb).round() as u64
}
