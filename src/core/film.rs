use std::io::Write;

use crate::core::color::Color;

pub struct Film {
    width: u32,
    height: u32,
    // Raster order, top row first.
    pixels: Vec<[u8; 3]>,
}

impl Film {
    /// Reassembles per-worker pixel buffers into one image. Worker `t` owns the
    /// `t`-th block of rows counted from the bottom of the image and writes its
    /// rows top-down, so emitting the blocks in reverse worker order yields the
    /// whole image top-down.
    pub fn from_worker_blocks(width: u32, height: u32, blocks: Vec<Vec<[u8; 3]>>) -> Self {
        let mut pixels = Vec::with_capacity((width * height) as usize);
        for block in blocks.into_iter().rev() {
            pixels.extend(block);
        }
        debug_assert_eq!(pixels.len(), (width * height) as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[allow(dead_code)]
    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.pixels
    }

    pub fn write_ppm<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "P3")?;
        writeln!(writer, "{} {}", self.width, self.height)?;
        writeln!(writer, "255")?;
        for &[r, g, b] in &self.pixels {
            writeln!(writer, "{} {} {}", r, g, b)?;
        }
        Ok(())
    }
}

/// Gamma-2 quantization of an averaged radiance value.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let r = (255.99 * color.r.clamp(0.0, 1.0).sqrt()) as u8;
    let g = (255.99 * color.g.clamp(0.0, 1.0).sqrt()) as u8;
    let b = (255.99 * color.b.clamp(0.0, 1.0).sqrt()) as u8;
    [r, g, b]
}
