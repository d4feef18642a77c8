/// Encode a linear channel value as an 8-bit sRGB value
pub fn linear_to_srgb8(linear: f32) -> u8 {
    let c = linear.clamp(0.0, 1.0);
    let encoded = if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    };
    (encoded * 255.0).round() as u8
}

/// Encode a linear RGBA color; alpha stays linear
pub fn rgba_to_srgb8(color: [f32; 4]) -> [u8; 4] {
    [
        linear_to_srgb8(color[0]),
        linear_to_srgb8(color[1]),
        linear_to_srgb8(color[2]),
        (color[3].clamp(0.0, 1.0) * 255.0).round() as u8,
    ]
}
