//! Easing curves and motion presets shared by the deck and its chrome.
//!
//! Curves are CSS-style cubic Beziers anchored at (0, 0) and (1, 1).

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

/// Section rotation curve.
pub const SMOOTH: CubicBezier = CubicBezier::new(0.25, 0.1, 0.25, 1.0);
/// Nav dot and button curve.
pub const SNAPPY: CubicBezier = CubicBezier::new(0.4, 0.0, 0.2, 1.0);

// --- Durations (seconds) ---
pub const FAST: f32 = 0.3;
pub const NORMAL: f32 = 0.6;
pub const PROGRESS: f32 = 0.5;

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample(a1: f32, a2: f32, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
    }

    fn slope(a1: f32, a2: f32, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * a1 + 6.0 * u * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    /// Maps linear progress `x` in `0..=1` onto the curve.
    pub fn ease(&self, x: f32) -> f32 {
        let x = x.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }

        // Newton-Raphson on x(t), falling back to bisection on flat slopes.
        let mut t = x;
        for _ in 0..8 {
            let err = Self::sample(self.x1, self.x2, t) - x;
            if err.abs() < 1e-5 {
                return Self::sample(self.y1, self.y2, t);
            }
            let d = Self::slope(self.x1, self.x2, t);
            if d.abs() < 1e-6 {
                break;
            }
            t = (t - err / d).clamp(0.0, 1.0);
        }

        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        t = x;
        for _ in 0..32 {
            let sx = Self::sample(self.x1, self.x2, t);
            if (sx - x).abs() < 1e-5 {
                break;
            }
            if sx < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) * 0.5;
        }
        Self::sample(self.y1, self.y2, t)
    }
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
