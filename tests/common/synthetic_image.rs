use favicon_enhancer::image::RgbaBuffer;

/// Generates a transparent canvas with an opaque green rectangular ring,
/// mimicking green line art on a transparent background.
pub fn green_ring(width: usize, height: usize, border: usize) -> RgbaBuffer {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(
        border * 2 < width && border * 2 < height,
        "border must leave a hollow interior"
    );

    let mut img = RgbaBuffer::new(width, height);
    let inset = width.min(height) / 4;
    for y in inset..height - inset {
        for x in inset..width - inset {
            let on_ring = x < inset + border
                || x >= width - inset - border
                || y < inset + border
                || y >= height - inset - border;
            if on_ring {
                img.set(x, y, [20, 190, 40, 255]);
            }
        }
    }
    img
}
