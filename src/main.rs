use digit_prep::image::io::render_ascii;
use digit_prep::image::PixelBuffer;
use digit_prep::{PrepParams, Preprocessor, CANVAS_SIZE};

fn main() {
    env_logger::init();

    // Demo stub: paints a "7" onto a white RGBA canvas and normalizes it.
    let mut rgba = vec![255u8; CANVAS_SIZE * CANVAS_SIZE * 4];
    stroke(&mut rgba, (60.0, 50.0), (200.0, 50.0), 9.0);
    stroke(&mut rgba, (200.0, 50.0), (110.0, 230.0), 9.0);
    let canvas = PixelBuffer::packed(CANVAS_SIZE, CANVAS_SIZE, 4, &rgba);

    let prep = match Preprocessor::new(PrepParams::default()) {
        Ok(prep) => prep,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };
    match prep.process(&canvas) {
        Ok(report) => {
            print!("{}", render_ascii(&report.grid));
            if let (Some(c), Some(s)) = (report.centroid, report.shift) {
                println!(
                    "centroid=({:.2}, {:.2}) shift=({}, {}) total_ms={:.3}",
                    c.row, c.col, s.d_row, s.d_col, report.timings.total_ms
                );
            }
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}

/// Stamp black discs of `radius` along the segment `a -> b` (x, y).
fn stroke(rgba: &mut [u8], a: (f32, f32), b: (f32, f32), radius: f32) {
    let len = (b.0 - a.0).hypot(b.1 - a.1);
    let steps = len.ceil().max(1.0) as usize;
    for s in 0..=steps {
        let t = s as f32 / steps as f32;
        let (cx, cy) = (a.0 + (b.0 - a.0) * t, a.1 + (b.1 - a.1) * t);
        let x0 = (cx - radius).floor().max(0.0) as usize;
        let y0 = (cy - radius).floor().max(0.0) as usize;
        let x1 = ((cx + radius).ceil() as usize).min(CANVAS_SIZE - 1);
        let y1 = ((cy + radius).ceil() as usize).min(CANVAS_SIZE - 1);
        for y in y0..=y1 {
            for x in x0..=x1 {
                if (x as f32 - cx).hypot(y as f32 - cy) <= radius {
                    let i = (y * CANVAS_SIZE + x) * 4;
                    rgba[i..i + 3].fill(0);
                }
            }
        }
    }
}
