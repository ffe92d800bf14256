use crate::models::{Competitor, PairingConfig};

/// Normalise a group or front label: trimmed, lowercased, inner whitespace collapsed
pub fn normalize_label(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Compare two labels under the same rules as [`normalize_label`]
#[inline]
pub fn same_label(a: &str, b: &str) -> bool {
    a.split_whitespace()
        .map(str::to_lowercase)
        .eq(b.split_whitespace().map(str::to_lowercase))
}

/// Check whether two competitors belong to the same group (pen)
#[inline]
pub fn same_group(a: &Competitor, b: &Competitor) -> bool {
    same_label(&a.group_id, &b.group_id)
}

/// Check whether a weight gap respects the configured cap
///
/// A cap of zero means weights are unconstrained. The epsilon absorbs
/// floating-point noise right at the boundary.
#[inline]
pub fn within_tolerance(a_lb: f64, b_lb: f64, config: &PairingConfig) -> bool {
    if !config.is_weight_capped() {
        return true;
    }

    (a_lb - b_lb).abs() <= config.max_weight_diff_lb + config.epsilon
}

/// Decide whether two competitors may be paired
///
/// Hard constraints: different groups, weight gap within tolerance.
#[inline]
pub fn can_fight(a: &Competitor, b: &Competitor, config: &PairingConfig) -> bool {
    if same_group(a, b) {
        return false;
    }

    within_tolerance(a.weight_lb, b.weight_lb, config)
}
