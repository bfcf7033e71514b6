//! Geopunt elevation responses.

use tracing::warn;

/// Extracts the elevation [m] from a plain-text GetFeatureInfo response.
///
/// The value is the third `;`-separated field, e.g.
/// `"@DHMVII_DTM_1m Stretched value;Pixel Value; 32.360001;32.360001;"`.
/// Returns `None` when the field is absent or not a finite number.
pub fn parse_elevation_response(content: &str) -> Option<f64> {
    let field = content.trim().split(';').nth(2)?.trim();
    match field.parse::<f64>() {
        Ok(elevation) if elevation.is_finite() => Some(elevation),
        Ok(_) => {
            warn!(field, "non-finite elevation value");
            None
        }
        Err(e) => {
            warn!(field, error = %e, "unparseable elevation value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn parses_third_field() {
        let text = "@DHMVII_DTM_1m Stretched value;Pixel Value; 32.360001;32.360001;";
        assert_relative_eq!(parse_elevation_response(text).unwrap(), 32.360001);
    }

    #[test]
    fn surrounding_whitespace() {
        assert_eq!(parse_elevation_response("\n a;b; -1.5 \n"), Some(-1.5));
    }

    #[test]
    fn too_few_fields() {
        assert_eq!(parse_elevation_response("a;b"), None);
        assert_eq!(parse_elevation_response(""), None);
    }

    #[test]
    fn non_finite_values_rejected() {
        assert_eq!(parse_elevation_response("a;b;NaN;"), None);
        assert_eq!(parse_elevation_response("a;b;inf;"), None);
        assert_eq!(parse_elevation_response("a;b;-infinity;"), None);
    }

    #[test]
    fn not_a_number() {
        assert_eq!(parse_elevation_response("a;b;nodata;"), None);
    }
}
