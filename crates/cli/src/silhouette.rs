//! Stand-in home coordinates for headless runs.
//!
//! Real deployments sample home coordinates from rasterized glyph pixels,
//! an external collaborator. For headless renders without a `--homes` file,
//! this module lays out four horizontal bars in the text zone, roughly where
//! the headline lines would sit, sampled on a regular grid.

use glam::DVec2;
use glyphdust_core::bounds::Bounds;

/// Left margin as a fraction of the canvas width.
const LEFT_MARGIN: f64 = 0.08;
/// Bar width as a fraction of the canvas width.
const BAR_WIDTH: f64 = 0.47;
/// Top of the first bar as a fraction of the canvas height.
const FIRST_BAR_TOP: f64 = 0.12;
/// Vertical pitch between bars as a fraction of the canvas height.
const BAR_PITCH: f64 = 0.12;
/// Bar thickness as a fraction of the canvas height.
const BAR_THICKNESS: f64 = 0.07;
/// Number of bars, one per headline line.
const BAR_COUNT: usize = 4;

/// Generates grid-sampled home coordinates along four text-zone bars.
///
/// `gap` is the grid pitch in logical units; smaller gaps produce denser
/// silhouettes. The caller validates `gap > 0`.
pub fn banded_homes(bounds: &Bounds, gap: f64) -> Vec<DVec2> {
    let left = bounds.width() * LEFT_MARGIN;
    let right = left + bounds.width() * BAR_WIDTH;
    let mut homes = Vec::new();
    for bar in 0..BAR_COUNT {
        let top = bounds.height() * (FIRST_BAR_TOP + bar as f64 * BAR_PITCH);
        let bottom = top + bounds.height() * BAR_THICKNESS;
        let mut y = top;
        while y < bottom {
            let mut x = left;
            while x < right {
                homes.push(DVec2::new(x, y));
                x += gap;
            }
            y += gap;
        }
    }
    homes
}
