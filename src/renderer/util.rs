#[derive(Copy, Clone)]
pub struct BlockRange {
    pub from: u32,
    pub to: u32,
}

/// Splits the image into one contiguous block of rows per worker. Row indices
/// count from the bottom of the image and `to` is exclusive. The caller has
/// already checked that `workers` divides `height`.
pub fn block_ranges(workers: u32, height: u32) -> Vec<BlockRange> {
    let rows_per_worker = height / workers;
    let mut ranges = Vec::with_capacity(workers as usize);
    for t in 0..workers {
        ranges.push(BlockRange {
            from: t * rows_per_worker,
            to: (t + 1) * rows_per_worker,
        });
    }
    ranges
}

pub fn render_progress_bar(width: u32, height: u32) -> indicatif::ProgressBar {
    let progress_bar = indicatif::ProgressBar::new(width as u64 * height as u64);
    progress_bar.set_style(
        indicatif::ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} (eta: {eta})")
            .progress_chars("#>-"),
    );
    progress_bar
}
