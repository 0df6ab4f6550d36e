//! Power → decibel conversion referenced to the maximum

use ndarray::Array2;

fn power_db(value: f32, amin: f32) -> f32 {
    10.0 * value.max(amin).log10()
}

/// Convert a power array to dB relative to its own maximum.
///
/// `db = 10·log10(max(amin, S)) − 10·log10(max(amin, max(S)))`, then every
/// value is floored at `max(db) − top_db`. The largest bin is exactly 0 dB;
/// NaN input bins collapse to the `amin` floor.
pub fn power_to_db(power: &Array2<f32>, amin: f32, top_db: Option<f32>) -> Array2<f32> {
    let reference = power.iter().fold(0.0f32, |acc, &v| acc.max(v));
    let reference_db = power_db(reference, amin);

    let mut db = power.mapv(|v| power_db(v, amin) - reference_db);

    if let Some(top_db) = top_db {
        let peak = db.iter().fold(f32::NEG_INFINITY, |acc, &v| acc.max(v));
        let floor = peak - top_db;
        db.mapv_inplace(|v| v.max(floor));
    }

    db
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_max_is_zero_and_rest_negative() {
        let power = array![[1.0f32, 0.5, 0.01], [4.0, 2.0, 1e-3]];
        let db = power_to_db(&power, 1e-10, Some(80.0));

        assert_eq!(db[[1, 0]], 0.0);
        assert!(db.iter().all(|&v| v <= 0.0 && v.is_finite()));
        assert!((db[[0, 0]] - 10.0 * (0.25f32).log10()).abs() < 1e-5);
    }

    #[test]
    fn test_top_db_floor() {
        let power = array![[1.0f32, 1e-12]];
        let db = power_to_db(&power, 1e-10, Some(80.0));
        assert_eq!(db[[0, 0]], 0.0);
        assert!((db[[0, 1]] + 80.0).abs() < 1e-4);

        let unclipped = power_to_db(&power, 1e-10, None);
        assert!((unclipped[[0, 1]] + 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_silence_is_all_zero() {
        let power = Array2::<f32>::zeros((4, 3));
        let db = power_to_db(&power, 1e-10, Some(80.0));
        assert!(db.iter().all(|&v| v == 0.0));
    }
}
