/// White RGBA canvas of side `size`.
pub fn blank_rgba(size: usize) -> Vec<u8> {
    assert!(size > 0, "canvas size must be positive");
    vec![255u8; size * size * 4]
}

/// White RGBA canvas with a black `side × side` square centred on
/// (`row`, `col`). For odd `side` the square spans `row - side/2 ..= row + side/2`.
pub fn square_rgba(size: usize, row: usize, col: usize, side: usize) -> Vec<u8> {
    let mut img = blank_rgba(size);
    let half = side / 2;
    for y in row - half..row - half + side {
        for x in col - half..col - half + side {
            let i = (y * size + x) * 4;
            img[i..i + 3].fill(0);
        }
    }
    img
}

/// Fully black RGB canvas: every cell saturates at intensity 1.
pub fn black_rgb(size: usize) -> Vec<u8> {
    vec![0u8; size * size * 3]
}

/// High-frequency checkerboard of 1-pixel black/white cells (RGB).
pub fn checkerboard_rgb(size: usize) -> Vec<u8> {
    let mut img = vec![0u8; size * size * 3];
    for y in 0..size {
        for x in 0..size {
            let v = if (x + y) & 1 == 0 { 0u8 } else { 255u8 };
            let i = (y * size + x) * 3;
            img[i..i + 3].fill(v);
        }
    }
    img
}
