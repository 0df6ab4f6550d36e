//! Continuous colour scale for spectrogram pixels

/// Viridis control points, evenly spaced over [0, 1]
const VIRIDIS: [[u8; 3]; 10] = [
    [0x44, 0x01, 0x54],
    [0x48, 0x28, 0x78],
    [0x3E, 0x4A, 0x89],
    [0x31, 0x68, 0x8E],
    [0x26, 0x82, 0x8E],
    [0x1F, 0x9E, 0x89],
    [0x35, 0xB7, 0x79],
    [0x6D, 0xCD, 0x59],
    [0xB4, 0xDE, 0x2C],
    [0xFD, 0xE7, 0x25],
];

/// 256-entry lookup table built from piecewise-linear control points
#[derive(Debug, Clone)]
pub struct Colormap {
    lut: Vec<[u8; 3]>,
}

impl Colormap {
    /// The viridis scale (dark purple → yellow)
    pub fn viridis() -> Self {
        Self::from_control_points(&VIRIDIS)
    }

    fn from_control_points(points: &[[u8; 3]]) -> Self {
        let segments = (points.len() - 1) as f32;
        let lut = (0..256)
            .map(|i| {
                let pos = i as f32 / 255.0 * segments;
                let idx = (pos.floor() as usize).min(points.len() - 2);
                let frac = pos - idx as f32;
                let (a, b) = (points[idx], points[idx + 1]);
                let mut rgb = [0u8; 3];
                for c in 0..3 {
                    let v = a[c] as f32 + (b[c] as f32 - a[c] as f32) * frac;
                    rgb[c] = v.round().clamp(0.0, 255.0) as u8;
                }
                rgb
            })
            .collect();

        Self { lut }
    }

    /// Colour for a normalised value; out-of-range input is clamped, NaN maps to 0
    pub fn map(&self, t: f32) -> [u8; 3] {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        self.lut[(t * 255.0).round() as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let cmap = Colormap::viridis();
        assert_eq!(cmap.map(0.0), [0x44, 0x01, 0x54]);
        assert_eq!(cmap.map(1.0), [0xFD, 0xE7, 0x25]);
        assert_eq!(cmap.map(-3.0), cmap.map(0.0));
        assert_eq!(cmap.map(7.0), cmap.map(1.0));
        assert_eq!(cmap.map(f32::NAN), cmap.map(0.0));
    }

    #[test]
    fn test_green_channel_is_monotonic() {
        let cmap = Colormap::viridis();
        let greens: Vec<u8> = (0..=100).map(|i| cmap.map(i as f32 / 100.0)[1]).collect();
        assert!(greens.windows(2).all(|w| w[0] <= w[1]));
    }
}
