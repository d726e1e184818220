use egui::Color32;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Color and rotation drawn for one tool activation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolStyle {
    pub color: Color32,
    /// Radians
    pub rotation: f32,
}

/// Samples a hue uniformly over the color wheel at fixed saturation and lightness, and a
/// rotation uniformly within `-max_rotation..=max_rotation`.
#[derive(Debug, Clone)]
pub struct StyleSampler {
    rng: StdRng,
    saturation: f32,
    lightness: f32,
    max_rotation: f32,
}

impl StyleSampler {
    pub fn new(rng: StdRng, saturation: f32, lightness: f32, max_rotation: f32) -> Self {
        Self {
            rng,
            saturation: saturation.clamp(0.0, 1.0),
            lightness: lightness.clamp(0.0, 1.0),
            max_rotation: max_rotation.abs(),
        }
    }

    pub fn from_os_rng(saturation: f32, lightness: f32, max_rotation: f32) -> Self {
        Self::new(StdRng::from_os_rng(), saturation, lightness, max_rotation)
    }

    pub fn seeded(seed: u64, saturation: f32, lightness: f32, max_rotation: f32) -> Self {
        Self::new(StdRng::seed_from_u64(seed), saturation, lightness, max_rotation)
    }

    pub fn sample(&mut self) -> ToolStyle {
        let hue = self.rng.random_range(0.0..360.0);
        let rotation = self
            .rng
            .random_range(-self.max_rotation..=self.max_rotation);
        ToolStyle {
            color: hsl_to_color32(hue, self.saturation, self.lightness),
            rotation,
        }
    }
}

/// Convert HSL (hue in degrees, saturation and lightness in 0..=1) to an opaque color.
pub fn hsl_to_color32(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let h = hue.rem_euclid(360.0) / 60.0;
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    let channel = |v: f32| ((v + m).clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgb(channel(r), channel(g), channel(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsl_primaries() {
        assert_eq!(hsl_to_color32(0.0, 1.0, 0.5), Color32::from_rgb(255, 0, 0));
        assert_eq!(hsl_to_color32(120.0, 1.0, 0.5), Color32::from_rgb(0, 255, 0));
        assert_eq!(hsl_to_color32(240.0, 1.0, 0.5), Color32::from_rgb(0, 0, 255));
        assert_eq!(hsl_to_color32(360.0, 1.0, 0.5), Color32::from_rgb(255, 0, 0));
        assert_eq!(hsl_to_color32(42.0, 0.0, 1.0), Color32::WHITE);
    }

    #[test]
    fn rotation_stays_in_range() {
        let max = std::f32::consts::FRAC_PI_6;
        let mut sampler = StyleSampler::seeded(1, 1.0, 0.5, max);
        for _ in 0..500 {
            let style = sampler.sample();
            assert!(style.rotation.abs() <= max);
            assert_eq!(style.color.a(), 255);
        }
    }

    #[test]
    fn zero_range_never_rotates() {
        let mut sampler = StyleSampler::seeded(3, 1.0, 0.5, 0.0);
        assert_eq!(sampler.sample().rotation, 0.0);
    }

    #[test]
    fn same_seed_same_styles() {
        let mut a = StyleSampler::seeded(9, 1.0, 0.5, 0.5);
        let mut b = StyleSampler::seeded(9, 1.0, 0.5, 0.5);
        for _ in 0..10 {
            assert_eq!(a.sample(), b.sample());
        }
    }
}
