use digit_prep::config::prep_digit::load_config;
use digit_prep::image::io::{load_rgba_image, render_ascii, save_field_png, write_json_file};
use digit_prep::Preprocessor;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let canvas = load_rgba_image(&config.input)?;
    let prep = Preprocessor::new(config.params.clone()).map_err(|e| e.to_string())?;
    println!(
        "Loaded {} ({}x{}), canvas {} -> grid {}, kernel {} sigma {:.3}",
        config.input.display(),
        canvas.width(),
        canvas.height(),
        prep.params().canvas_size(),
        prep.params().image_size,
        prep.kernel().size(),
        prep.kernel().sigma()
    );
    let report = prep
        .process(&canvas.as_view())
        .map_err(|e| format!("Failed to process {}: {e}", config.input.display()))?;

    save_field_png(&report.grid, config.output.upscale, &config.output.grid_image)?;
    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report)?;
        println!("Saved report to {}", path.display());
    }

    print!("{}", render_ascii(&report.grid));
    println!(
        "Saved {}x{} grid to {} (mode {:?}, zero_mass={}, {:.3} ms)",
        report.grid.w,
        report.grid.h,
        config.output.grid_image.display(),
        report.mode,
        report.zero_mass,
        report.timings.total_ms
    );
    Ok(())
}

fn usage() -> String {
    "Usage: prep_digit <config.json>".to_string()
}
