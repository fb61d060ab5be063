use std::num::ParseFloatError;

use crate::errors::{Error, Result};

/// Return the shortest string which round-trips to the given number.
///
/// Integral values have no trailing `.0`, and negative zero is written as `0`.
pub fn fstr(x: f64) -> String {
    if x == 0. {
        // covers -0.0 as well
        return "0".to_string();
    }
    x.to_string()
}

/// Parse a string to an f64
pub fn strp(s: &str) -> Result<f64> {
    s.trim()
        .parse()
        .map_err(|e: ParseFloatError| Error::InvalidValue("number".to_string(), e.to_string()))
}
