use pixelproof_core::fingerprint::{Category, Color, Fingerprint};

/// A text node fingerprint with the given size and weight
#[allow(dead_code)]
pub fn typography(font_size: f64, font_weight: f64) -> Fingerprint {
    Fingerprint::new()
        .with(Category::Typography, "fontSize", font_size)
        .with(Category::Typography, "fontWeight", font_weight)
}

/// A button-like fingerprint touching every category
#[allow(dead_code)]
pub fn button_design() -> Fingerprint {
    Fingerprint::new()
        .with(Category::Spacing, "paddingTop", 8.0)
        .with(Category::Spacing, "paddingRight", 16.0)
        .with(Category::Spacing, "paddingBottom", 8.0)
        .with(Category::Spacing, "paddingLeft", 16.0)
        .with(Category::Typography, "fontSize", 14.0)
        .with(Category::Typography, "fontWeight", 600.0)
        .with(Category::Typography, "lineHeight", 20.0)
        .with(Category::Colors, "background", Color::new(59, 130, 246))
        .with(Category::Border, "radius", 6.0)
}
