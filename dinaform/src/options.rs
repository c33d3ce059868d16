/// Options for a render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Width of the host viewport in pixels.
    pub viewport_width: u32,
    /// Fraction of the viewport width given to header images.
    pub image_width_ratio: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self {
            viewport_width: 1080,
            image_width_ratio: 0.5,
        }
    }

    /// Set the viewport width.
    pub fn with_viewport_width(mut self, width: u32) -> Self {
        self.viewport_width = width;
        self
    }

    /// Set the image width ratio, clamped to `0.0..=1.0`.
    pub fn with_image_width_ratio(mut self, ratio: f64) -> Self {
        self.image_width_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Target width in pixels for header images.
    pub fn image_width(&self) -> u32 {
        (f64::from(self.viewport_width) * self.image_width_ratio) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_of_viewport_by_default() {
        assert_eq!(RenderOptions::default().image_width(), 540);
        assert_eq!(RenderOptions::new().with_viewport_width(721).image_width(), 360);
    }

    #[test]
    fn options_chaining() {
        let options = RenderOptions::new()
            .with_viewport_width(400)
            .with_image_width_ratio(1.5);
        assert_eq!(options.viewport_width, 400);
        assert_eq!(options.image_width_ratio, 1.0);
        assert_eq!(options.image_width(), 400);
    }
}
