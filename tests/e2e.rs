mod common;

use common::synthetic_image::green_ring;
use favicon_enhancer::image::RgbaBuffer;
use favicon_enhancer::{EnhanceOptions, FaviconEnhancer};

fn is_green_dominant(px: [u8; 4]) -> bool {
    px[3] > 0
        && px[1] > 100
        && f32::from(px[1]) > 1.2 * f32::from(px[0])
        && f32::from(px[1]) > 1.2 * f32::from(px[2])
}

#[test]
fn green_line_art_becomes_burgundy_favicon() {
    let src = green_ring(200, 160, 6);

    let enhancer = FaviconEnhancer::new(EnhanceOptions::default());
    let enhanced = enhancer.process(src);

    assert_eq!(
        (enhanced.favicon.w, enhanced.favicon.h),
        (256, 256),
        "favicon must be exactly 256x256"
    );
    assert!(
        enhanced.result.cropped,
        "opaque content must take the crop path"
    );
    assert!(
        enhanced.result.recolored_pixels > 0,
        "the ring is green-dominant and must be recolored"
    );

    let mut burgundy_pixels = 0usize;
    for y in 0..enhanced.favicon.h {
        for x in 0..enhanced.favicon.w {
            let px = enhanced.favicon.get(x, y);
            assert!(
                !is_green_dominant(px),
                "no green-dominant pixel may survive, found {px:?} at ({x}, {y})"
            );
            if px[3] > 0 && px[0] > px[1] {
                burgundy_pixels += 1;
            }
        }
    }
    assert!(
        burgundy_pixels > 0,
        "expected red-leaning opaque pixels in the output"
    );
}

#[test]
fn transparent_input_is_resized_directly() {
    let src = RgbaBuffer::new(64, 48);

    let enhancer = FaviconEnhancer::new(EnhanceOptions::default());
    let report = enhancer.process_with_diagnostics(src);

    assert_eq!(
        (report.favicon.w, report.favicon.h),
        (256, 256),
        "fallback path still produces the favicon resolution"
    );
    assert!(!report.result.cropped, "crop path must be skipped");
    assert!(report.result.content_box.is_none());
    assert!(
        report.favicon.data.iter().all(|&b| b == 0),
        "resizing a transparent image must stay transparent"
    );
}

#[test]
fn diagnostics_trace_covers_the_executed_stages() {
    let src = green_ring(120, 120, 4);

    let enhancer = FaviconEnhancer::new(EnhanceOptions::default());
    let report = enhancer.process_with_diagnostics(src);

    let labels: Vec<&str> = report
        .trace
        .timings
        .stages
        .iter()
        .map(|s| s.label.as_str())
        .collect();
    for expected in ["recolor", "thicken", "crop", "canvas", "resize", "sharpen"] {
        assert!(
            labels.contains(&expected),
            "missing stage timing {expected:?}, got {labels:?}"
        );
    }
    assert!(report.trace.output.sharpened);

    let json = serde_json::to_string_pretty(&report).expect("report serializes");
    assert!(
        json.contains("matchedPixels"),
        "trace must serialize in camelCase"
    );
}

#[test]
fn tiny_content_survives_the_zoom_crop() {
    let mut src = RgbaBuffer::new(50, 50);
    src.set(25, 25, [0, 180, 10, 255]);

    let enhancer = FaviconEnhancer::new(EnhanceOptions::default());
    let enhanced = enhancer.process(src);

    assert_eq!((enhanced.favicon.w, enhanced.favicon.h), (256, 256));
    assert!(
        enhanced.result.cropped,
        "a single opaque pixel still yields a content box"
    );
}
