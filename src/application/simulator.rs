// Synthetic cone corridor used to exercise the track finder without a camera
use crate::domains::centerline::{Marker, Point, Side};
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct CorridorSettings {
    /// Distance between the two cone rows.
    pub width: f64,
    /// Arc-length spacing of cones along each row.
    pub cone_spacing: f64,
    pub length: f64,
    /// Lateral sway of the centerline, `amplitude * sin(s / wavelength)`.
    pub amplitude: f64,
    pub wavelength: f64,
    /// Maximum positional noise added to each cone.
    pub jitter: f64,
}

impl Default for CorridorSettings {
    fn default() -> Self {
        Self {
            width: 6.0,
            cone_spacing: 4.0,
            length: 200.0,
            amplitude: 8.0,
            wavelength: 25.0,
            jitter: 0.2,
        }
    }
}

/// A gently curving corridor running along +y, left cones on side A.
#[derive(Debug, Clone)]
pub struct Corridor {
    settings: CorridorSettings,
    markers: Vec<Marker>,
}

impl Corridor {
    pub fn generate<R: Rng>(settings: CorridorSettings, rng: &mut R) -> Self {
        let mut markers = Vec::new();
        let half = settings.width / 2.0;
        let steps = (settings.length / settings.cone_spacing).floor() as usize;

        for k in 0..=steps {
            let s = k as f64 * settings.cone_spacing;
            let center = Self::center_at(&settings, s);
            for (offset, side) in [(-half, Side::A), (half, Side::B)] {
                let (jx, jy) = if settings.jitter > 0.0 {
                    (
                        rng.gen_range(-settings.jitter..settings.jitter),
                        rng.gen_range(-settings.jitter..settings.jitter),
                    )
                } else {
                    (0.0, 0.0)
                };
                markers.push(Marker::new(center.x + offset + jx, center.y + jy, side));
            }
        }

        Self { settings, markers }
    }

    fn center_at(settings: &CorridorSettings, s: f64) -> Point {
        Point::new(settings.amplitude * (s / settings.wavelength).sin(), s)
    }

    pub fn center(&self, s: f64) -> Point {
        Self::center_at(&self.settings, s)
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Cones within `range` of the vehicle, in generation order.
    pub fn visible_from(&self, vehicle: Point, range: f64) -> Vec<Marker> {
        self.markers
            .iter()
            .filter(|m| m.position.distance(&vehicle) <= range)
            .copied()
            .collect()
    }
}
