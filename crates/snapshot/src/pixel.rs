//! Pure-computation pixel buffer conversion from a [`Frame`].
//!
//! Sprites are composited as filled white circles over an opaque black
//! background, source-over in sprite order, matching the canvas draw
//! convention `rgba(255, 255, 255, alpha)`.

use glyphdust_core::bounds::Bounds;
use glyphdust_sim::{Frame, Sprite};

/// Rasterizes a frame into an RGBA8 buffer of `ceil(width) x ceil(height)`
/// pixels. Sprites outside the bounds are clipped; the alpha byte of the
/// output is always 255.
pub fn frame_to_rgba(frame: &Frame, bounds: &Bounds) -> Vec<u8> {
    let width = bounds.width().ceil() as usize;
    let height = bounds.height().ceil() as usize;
    let mut buffer = vec![0u8; width * height * 4];
    // Opaque background.
    for pixel in buffer.chunks_exact_mut(4) {
        pixel[3] = 255;
    }
    for sprite in &frame.sprites {
        plot_circle(&mut buffer, width, height, sprite);
    }
    buffer
}

/// Pixel dimensions of the buffer produced for these bounds.
pub fn raster_size(bounds: &Bounds) -> (usize, usize) {
    (
        bounds.width().ceil() as usize,
        bounds.height().ceil() as usize,
    )
}

/// Composites one filled circle, source-over with white at the sprite's
/// alpha.
fn plot_circle(buffer: &mut [u8], width: usize, height: usize, sprite: &Sprite) {
    let alpha = sprite.alpha.clamp(0.0, 1.0);
    if alpha == 0.0 {
        return;
    }
    let cx = sprite.position.x;
    let cy = sprite.position.y;
    let r = sprite.radius.max(0.0);

    let x0 = ((cx - r).floor().max(0.0)) as usize;
    let y0 = ((cy - r).floor().max(0.0)) as usize;
    let x1 = ((cx + r).ceil().min(width as f64 - 1.0)).max(0.0) as usize;
    let y1 = ((cy + r).ceil().min(height as f64 - 1.0)).max(0.0) as usize;
    if x0 > x1 || y0 > y1 || cx + r < 0.0 || cy + r < 0.0 {
        return;
    }

    let r2 = r * r;
    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f64 + 0.5 - cx;
            let dy = y as f64 + 0.5 - cy;
            if dx * dx + dy * dy > r2 {
                continue;
            }
            let idx = (y * width + x) * 4;
            for channel in &mut buffer[idx..idx + 3] {
                let old = f64::from(*channel);
                *channel = (old + (255.0 - old) * alpha).round() as u8;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    fn frame_with(sprites: Vec<Sprite>) -> Frame {
        Frame { sprites }
    }

    fn pixel(buffer: &[u8], width: usize, x: usize, y: usize) -> [u8; 4] {
        let idx = (y * width + x) * 4;
        [buffer[idx], buffer[idx + 1], buffer[idx + 2], buffer[idx + 3]]
    }

    #[test]
    fn buffer_has_ceil_dimensions_and_opaque_alpha() {
        let bounds = Bounds::new(8.5, 4.2).unwrap();
        let buffer = frame_to_rgba(&frame_with(vec![]), &bounds);
        assert_eq!(raster_size(&bounds), (9, 5));
        assert_eq!(buffer.len(), 9 * 5 * 4);
        for (i, &byte) in buffer.iter().enumerate() {
            match i % 4 {
                3 => assert_eq!(byte, 255, "alpha at pixel {}", i / 4),
                _ => assert_eq!(byte, 0, "background channel at byte {i}"),
            }
        }
    }

    #[test]
    fn opaque_sprite_paints_white_at_its_center() {
        let bounds = Bounds::new(16.0, 16.0).unwrap();
        let sprite = Sprite {
            position: DVec2::new(8.0, 8.0),
            radius: 3.0,
            alpha: 1.0,
        };
        let buffer = frame_to_rgba(&frame_with(vec![sprite]), &bounds);
        assert_eq!(pixel(&buffer, 16, 8, 8), [255, 255, 255, 255]);
        // Far corner stays black.
        assert_eq!(pixel(&buffer, 16, 0, 0), [0, 0, 0, 255]);
    }

    #[test]
    fn translucent_sprite_blends_toward_white() {
        let bounds = Bounds::new(16.0, 16.0).unwrap();
        let sprite = Sprite {
            position: DVec2::new(8.0, 8.0),
            radius: 2.0,
            alpha: 0.4,
        };
        let buffer = frame_to_rgba(&frame_with(vec![sprite]), &bounds);
        let [r, g, b, _] = pixel(&buffer, 16, 8, 8);
        assert_eq!((r, g, b), (102, 102, 102));
    }

    #[test]
    fn overlapping_sprites_accumulate() {
        let bounds = Bounds::new(16.0, 16.0).unwrap();
        let sprite = Sprite {
            position: DVec2::new(8.0, 8.0),
            radius: 2.0,
            alpha: 0.4,
        };
        let buffer = frame_to_rgba(&frame_with(vec![sprite, sprite]), &bounds);
        let [r, _, _, _] = pixel(&buffer, 16, 8, 8);
        // 0.4 over 0.4: 102 + (255 - 102) * 0.4 = 163
        assert_eq!(r, 163);
    }

    #[test]
    fn sprites_outside_the_bounds_are_clipped() {
        let bounds = Bounds::new(16.0, 16.0).unwrap();
        let off_canvas = Sprite {
            position: DVec2::new(-50.0, -50.0),
            radius: 3.0,
            alpha: 1.0,
        };
        let overhanging = Sprite {
            position: DVec2::new(15.5, 8.0),
            radius: 4.0,
            alpha: 1.0,
        };
        let buffer = frame_to_rgba(&frame_with(vec![off_canvas, overhanging]), &bounds);
        // Off-canvas sprite painted nothing.
        assert_eq!(pixel(&buffer, 16, 0, 0), [0, 0, 0, 255]);
        // Overhanging sprite painted its in-bounds part.
        assert_eq!(pixel(&buffer, 16, 15, 8), [255, 255, 255, 255]);
    }

    #[test]
    fn zero_alpha_sprite_paints_nothing() {
        let bounds = Bounds::new(8.0, 8.0).unwrap();
        let sprite = Sprite {
            position: DVec2::new(4.0, 4.0),
            radius: 2.0,
            alpha: 0.0,
        };
        let buffer = frame_to_rgba(&frame_with(vec![sprite]), &bounds);
        assert!(buffer
            .chunks_exact(4)
            .all(|p| p[0] == 0 && p[1] == 0 && p[2] == 0));
    }
}
