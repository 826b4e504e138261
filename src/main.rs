use favicon_enhancer::image::io::{load_rgba_image, save_rgba_png};
use favicon_enhancer::{EnhanceOptions, FaviconEnhancer};
use std::path::Path;

const INPUT_PATH: &str = "assets/icon-source.png";
const OUTPUT_PATH: &str = "public/favicon.png";

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let src = load_rgba_image(Path::new(INPUT_PATH))?;

    let enhancer = FaviconEnhancer::new(EnhanceOptions::default());
    let enhanced = enhancer.process(src);

    save_rgba_png(&enhanced.favicon, Path::new(OUTPUT_PATH))?;

    println!("Enhanced favicon written to {OUTPUT_PATH}");
    println!("  - green line art recolored to burgundy");
    println!("  - lines thickened and content cropped");
    println!(
        "  - sharpened {}x{} output",
        enhanced.result.width, enhanced.result.height
    );

    Ok(())
}
