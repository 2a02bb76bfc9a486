use eframe::egui::Color32;
use palette::{LinSrgb, Mix, Srgb};

/// Fill for the salary histogram bars.
pub const HISTOGRAM_FILL: Color32 = Color32::from_rgb(135, 206, 235);

/// Colour of the density curve drawn over the histogram.
pub const DENSITY_LINE: Color32 = Color32::from_rgb(31, 119, 180);

// Anchor points of the viridis colour map, dark to light.
const VIRIDIS_STOPS: [(u8, u8, u8); 5] = [
    (0x44, 0x01, 0x54),
    (0x3b, 0x52, 0x8b),
    (0x21, 0x91, 0x8c),
    (0x5e, 0xc9, 0x62),
    (0xfd, 0xe7, 0x25),
];

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// `n` colours sampled evenly along viridis, blended in linear RGB.
pub fn viridis(n: usize) -> Vec<Color32> {
    let stops: Vec<LinSrgb> = VIRIDIS_STOPS
        .iter()
        .map(|&(r, g, b)| Srgb::new(r, g, b).into_format::<f32>().into_linear())
        .collect();
    let segments = (stops.len() - 1) as f32;

    (0..n)
        .map(|i| {
            let t = if n > 1 { i as f32 / (n - 1) as f32 } else { 0.0 };
            let pos = t * segments;
            let seg = (pos.floor() as usize).min(stops.len() - 2);
            let mixed = stops[seg].mix(stops[seg + 1], pos - seg as f32);
            let rgb: Srgb<u8> = Srgb::from_linear(mixed);
            Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
        })
        .collect()
}
