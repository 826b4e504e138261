use favicon_enhancer::config::enhance as config;
use favicon_enhancer::diagnostics::EnhanceReport;
use favicon_enhancer::image::io::{load_rgba_image, save_rgba_png, write_json_file};
use favicon_enhancer::FaviconEnhancer;
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
    let config = config::load_config(Path::new(&config_path))?;

    let src = load_rgba_image(&config.input)?;
    let enhancer = FaviconEnhancer::new(config.enhance);
    let report = enhancer.process_with_diagnostics(src);

    save_rgba_png(&report.favicon, &config.output.favicon)?;
    println!(
        "Saved {}x{} favicon to {}",
        report.result.width,
        report.result.height,
        config.output.favicon.display()
    );

    print_text_summary(&report);

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report)?;
        println!("JSON report written to {}", path.display());
    }

    Ok(())
}

fn print_text_summary(report: &EnhanceReport) {
    let trace = &report.trace;
    println!(
        "Input {}x{}, {} green pixels recolored",
        trace.input.width, trace.input.height, trace.recolor.matched_pixels
    );
    match &trace.crop {
        Some(crop) => {
            println!(
                "Cropped to {}x{} (fallback box: {})",
                crop.applied_box.width(),
                crop.applied_box.height(),
                crop.used_fallback_box
            );
        }
        None => println!("No opaque content found, crop skipped"),
    }
    for stage in &trace.timings.stages {
        println!("  {:>18} {:8.3} ms", stage.label, stage.elapsed_ms);
    }
    println!("  {:>18} {:8.3} ms", "total", trace.timings.total_ms);
}

fn usage() -> String {
    "Usage: enhance_demo <config.json>".to_string()
}
