use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::Context;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, ImageFormat, Rgba, RgbaImage};
use spatial_dilemma::{Board, History, Strategy};

pub const COOPERATE_COLOR: Rgba<u8> = Rgba([0, 0, 255, 255]);
pub const DEFECT_COLOR: Rgba<u8> = Rgba([255, 0, 0, 255]);

pub fn strategy_color(strategy: Strategy) -> Rgba<u8> {
    match strategy {
        Strategy::Cooperate => COOPERATE_COLOR,
        Strategy::Defect => DEFECT_COLOR,
    }
}

/// Draws every cell as a square of `cell_size` x `cell_size` pixels.
///
/// Fails if `cell_size` is zero or the image would be too large.
pub fn draw_board(board: &Board, cell_size: u32) -> anyhow::Result<RgbaImage> {
    if cell_size == 0 {
        anyhow::bail!("Cells must be at least one pixel wide");
    }
    let too_large = || {
        format!(
            "A {} x {} board with cells of {} pixels is too large for an image",
            board.rows(),
            board.cols(),
            cell_size
        )
    };
    let width = u32::try_from(board.cols())
        .ok()
        .and_then(|cols| cols.checked_mul(cell_size))
        .with_context(too_large)?;
    let height = u32::try_from(board.rows())
        .ok()
        .and_then(|rows| rows.checked_mul(cell_size))
        .with_context(too_large)?;
    // Four bytes per pixel
    u64::from(width)
        .checked_mul(u64::from(height))
        .and_then(|pixels| pixels.checked_mul(4))
        .and_then(|bytes| usize::try_from(bytes).ok())
        .with_context(too_large)?;

    // Every coordinate below is less than width or height
    let mut image = RgbaImage::new(width, height);
    for (r, c, cell) in board.cells() {
        let color = strategy_color(cell.strategy);
        let (x0, y0) = (c as u32 * cell_size, r as u32 * cell_size);
        for y in y0..y0 + cell_size {
            for x in x0..x0 + cell_size {
                image.put_pixel(x, y, color);
            }
        }
    }
    Ok(image)
}

/// One image per generation.
pub fn draw_history(history: &History, cell_size: u32) -> anyhow::Result<Vec<RgbaImage>> {
    history
        .iter()
        .map(|board| draw_board(board, cell_size))
        .collect()
}

/// Encodes the images as an animated GIF that loops forever.
pub fn write_gif(images: Vec<RgbaImage>, path: &Path, frame_delay_ms: u32) -> anyhow::Result<()> {
    let file =
        File::create(path).with_context(|| format!("Could not create '{}'", path.display()))?;
    let mut encoder = GifEncoder::new(BufWriter::new(file));
    encoder.set_repeat(Repeat::Infinite)?;
    let delay = Delay::from_numer_denom_ms(frame_delay_ms, 1);
    encoder
        .encode_frames(
            images
                .into_iter()
                .map(|image| Frame::from_parts(image, 0, 0, delay)),
        )
        .with_context(|| format!("Could not encode '{}'", path.display()))?;
    Ok(())
}

pub fn write_png(image: &RgbaImage, path: &Path) -> anyhow::Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Could not write '{}'", path.display()))
}
