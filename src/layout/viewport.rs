use crate::foundation::core::{Point, Rect};

/// Width below which the page switches to the stacked mobile layout.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Host viewport size in CSS-like pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    pub fn is_mobile(self) -> bool {
        self.width < MOBILE_BREAKPOINT
    }

    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Radius of the question ring for this width.
    pub fn ring_radius(self) -> f64 {
        if self.width < 640.0 {
            280.0
        } else if self.width < 768.0 {
            350.0
        } else if self.width < 1024.0 {
            420.0
        } else {
            550.0
        }
    }

    /// Height of the visualizer container at this width.
    pub fn container_height(self) -> f64 {
        if self.width < 640.0 {
            600.0
        } else if self.width < 768.0 {
            700.0
        } else if self.width < 1024.0 {
            800.0
        } else {
            900.0
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 900.0)
    }
}

fn sanitize(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}
