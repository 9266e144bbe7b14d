//! Gravitational field heat-map
//!
//! Grid sampling and the colour ramp used by the viewer's background layer.
//! Nothing here touches Bevy, so it builds without the `viewer` feature.

use crate::error::{SimError, SimResult};
use crate::simulation::params::Parameters;
use crate::simulation::states::System;
use crate::simulation::vector::NVec2;

/// Cell corners covering `[min, max)` with the given spacing, column by column
pub fn grid_points(min: NVec2, max: NVec2, spacing: f64) -> SimResult<Vec<NVec2>> {
    if !(spacing.is_finite() && spacing > 0.0) {
        return Err(SimError::invalid("spacing", spacing));
    }
    let columns = ((max.x - min.x) / spacing).ceil().max(0.0) as usize;
    let rows = ((max.y - min.y) / spacing).ceil().max(0.0) as usize;

    let mut points = Vec::with_capacity(columns * rows);
    for i in 0..columns {
        for j in 0..rows {
            points.push(min + NVec2::new(i as f64, j as f64) * spacing);
        }
    }
    Ok(points)
}

/// RGB in `[0, 1]` for a field strength: red is always full, green rises
/// with the square root of `|field| / G`, blue rises linearly but ten times slower.
pub fn heat_color(strength: f64, params: &Parameters) -> [f32; 3] {
    let scaled = if params.g > 0.0 { strength / params.g } else { 0.0 };
    let green = ((scaled * 100.0).min(1000.0) / 1000.0).sqrt();
    let blue = (scaled * 10.0).min(1000.0) / 1000.0;
    [1.0, green as f32, blue as f32]
}

impl System {
    /// `|field|` from every body at each point, paired with its colour
    pub fn field_heat_map(&self, points: &[NVec2]) -> Vec<(NVec2, [f32; 3])> {
        points
            .iter()
            .map(|&p| {
                let strength = self.field_at(p, None).norm();
                (p, heat_color(strength, &self.params))
            })
            .collect()
    }
}
