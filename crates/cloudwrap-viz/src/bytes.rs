use crate::error::VizError;

/// Format a byte count into a human-readable string.
///
/// Walks bytes, KB, MB, GB (in steps of 1024) and falls back to TB, always
/// printing two decimal places.
///
/// # Errors
///
/// If `num` is negative, an error is returned.
///
/// Example:
///
/// ```
/// use cloudwrap_viz::print_bytes;
///
/// assert_eq!(print_bytes(12345).unwrap(), "12.06 KB");
/// assert_eq!(print_bytes(123456789).unwrap(), "117.74 MB");
/// ```
pub fn print_bytes(num: i64) -> Result<String, VizError> {
    if num < 0 {
        return Err(VizError::NegativeBytes(num));
    }
    let mut value = num as f64;
    for unit in ["bytes", "KB", "MB", "GB"] {
        if value < 1024.0 {
            return Ok(format!("{value:.2} {unit}"));
        }
        value /= 1024.0;
    }
    Ok(format!("{value:.2} TB"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_bytes_zero() {
        assert_eq!(print_bytes(0).unwrap(), "0.00 bytes");
    }

    #[test]
    fn test_print_bytes_units() {
        assert_eq!(print_bytes(1023).unwrap(), "1023.00 bytes");
        assert_eq!(print_bytes(12345).unwrap(), "12.06 KB");
        assert_eq!(print_bytes(123456789).unwrap(), "117.74 MB");
        assert_eq!(print_bytes(5 * 1024 * 1024 * 1024).unwrap(), "5.00 GB");
        assert_eq!(print_bytes(3 * 1024 * 1024 * 1024 * 1024).unwrap(), "3.00 TB");
    }

    #[test]
    fn test_print_bytes_negative() {
        assert!(matches!(print_bytes(-1), Err(VizError::NegativeBytes(-1))));
    }
}
