//! Chart viewport in device-independent pixels.

/// Current size of the chart canvas, re-measured on resize.
///
/// A zero width means the surface has not been measured yet (or is hidden);
/// drawing and capacity computation skip their work until a valid
/// measurement arrives.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True once a usable measurement is available.
    #[inline]
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}
