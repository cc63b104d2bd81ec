//! Entropy of a uniformly drawn password and its display forms.

/// `length * log2(charset_size)`; zero for an empty set.
pub fn calculate(length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    length as f64 * (charset_size as f64).log2()
}

/// Fewer decimals as the value grows: 2 below 70 bits, 1 below 200.
pub fn format(bits: f64) -> String {
    if bits < 70.0 {
        format!("{bits:.2}")
    } else if bits < 200.0 {
        format!("{bits:.1}")
    } else {
        format!("{bits:.0}")
    }
}

pub fn strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}
