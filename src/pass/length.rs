//! Resolves the configured length or entropy target into a character count.

use crate::settings::{Config, LengthMode};
use crate::{Error, Result};

/// Longest password that will be generated.
pub const MAX_LENGTH: usize = 10_000;

/// Number of characters to draw from a set of `charset_size` symbols.
///
/// In entropy mode this is the smallest count whose entropy reaches the
/// target, `ceil(bits / log2(charset_size))`. This can be one shorter than
/// `ceil(bits * ln 2 / ln charset_size)`, whose rounding error overshoots.
pub fn resolve(config: &Config, charset_size: usize) -> Result<usize> {
    let length = match config.length_mode {
        LengthMode::FixedLength => config.length_value.trunc(),
        LengthMode::TargetEntropy => {
            match charset_size {
                0 => return Err(Error::EmptyCharset),
                1 => return Err(Error::DegenerateCharset),
                _ => {}
            }
            (config.length_value / (charset_size as f64).log2()).ceil()
        }
    };

    // NaN fails both comparisons, so check the accepted range directly
    if !(0.0..=MAX_LENGTH as f64).contains(&length) {
        return Err(Error::InvalidLength(length));
    }
    Ok(length as usize)
}
