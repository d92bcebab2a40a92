// src/chemistry/stoichiometry.rs

/// Cation atoms per formula unit: the digits right after `element` at the
/// start of `oxide` ("Al" in "Al2O3" -> 2). Defaults to 1 when there are no
/// digits or `oxide` does not start with `element`.
pub fn cation_coefficient(oxide: &str, element: &str) -> u32 {
    oxide
        .strip_prefix(element)
        .and_then(leading_count)
        .unwrap_or(1)
}

/// Oxygen atoms per formula unit: the digits after the first "O" that has
/// any ("B2O3" -> 3). Defaults to 1 when no "O" is followed by a digit.
pub fn oxygen_coefficient(oxide: &str) -> u32 {
    oxide
        .match_indices('O')
        .find_map(|(i, _)| leading_count(&oxide[i + 1..]))
        .unwrap_or(1)
}

/// Parses the run of ASCII digits at the start of `s`.
/// `None` when there is no digit, or the count does not fit.
fn leading_count(s: &str) -> Option<u32> {
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(s.len(), |(i, _)| i);
    if end == 0 {
        return None;
    }
    s[..end].parse().ok()
}
