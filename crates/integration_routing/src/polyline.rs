//! Encoded polyline decoding
//!
//! Decodes the compact polyline encoding used by openrouteservice and
//! Google: each coordinate is a zig-zag encoded delta from the previous one,
//! split into 5-bit chunks offset by 63.

use domain::GeoLocation;

/// Precision used by openrouteservice directions (1e-5 degrees)
pub const DEFAULT_PRECISION: u32 = 5;

/// Decode `encoded` into latitude/longitude pairs
///
/// # Errors
///
/// Returns a description of the problem when the input is truncated,
/// contains characters outside the encoding alphabet, or decodes to
/// out-of-range coordinates.
pub fn decode(encoded: &str, precision: u32) -> Result<Vec<GeoLocation>, String> {
    let factor = 10_f64.powi(i32::try_from(precision).map_err(|e| e.to_string())?);
    let bytes = encoded.as_bytes();
    let mut index = 0;
    let mut latitude: i64 = 0;
    let mut longitude: i64 = 0;
    let mut points = Vec::new();

    while index < bytes.len() {
        latitude += next_value(bytes, &mut index)?;
        longitude += next_value(bytes, &mut index)?;
        #[allow(clippy::cast_precision_loss)]
        let point = GeoLocation::new(latitude as f64 / factor, longitude as f64 / factor)
            .map_err(|e| e.to_string())?;
        points.push(point);
    }

    Ok(points)
}

fn next_value(bytes: &[u8], index: &mut usize) -> Result<i64, String> {
    let mut result: i64 = 0;
    let mut shift = 0;

    loop {
        let byte = *bytes
            .get(*index)
            .ok_or_else(|| "truncated polyline".to_string())?;
        *index += 1;

        let chunk = i64::from(byte) - 63;
        if !(0..64).contains(&chunk) {
            return Err(format!("invalid polyline character {:?}", char::from(byte)));
        }
        if shift > 55 {
            return Err("polyline value overflow".to_string());
        }

        result |= (chunk & 0x1f) << shift;
        shift += 5;
        if chunk < 0x20 {
            break;
        }
    }

    Ok(if result & 1 == 0 {
        result >> 1
    } else {
        !(result >> 1)
    })
}
