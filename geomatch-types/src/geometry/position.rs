use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

/// A position in 2 or 3 dimensional cartesian coordinate space.
///
/// Positions are plain values: two positions are equal when all their coordinates are equal.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectPosition {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Optional Z coordinate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl DirectPosition {
    /// Creates a new 2d position.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    /// Creates a new 3d position.
    pub const fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }

    /// Number of coordinates of the position.
    pub fn dimension(&self) -> usize {
        if self.z.is_some() {
            3
        } else {
            2
        }
    }

    /// Copy of the position without the z coordinate.
    pub fn to_2d(&self) -> Self {
        Self::new(self.x, self.y)
    }

    /// Whether x and y of both positions are exactly equal. Z is ignored.
    pub fn equals_2d(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Squared planar distance between two positions.
    pub fn distance_2d_sq(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Planar distance between two positions. Z is ignored.
    pub fn distance_2d(&self, other: &Self) -> f64 {
        self.distance_2d_sq(other).sqrt()
    }

    /// Planar affine blend `self + t * (other - self)`.
    ///
    /// The result is always 2d: z is not interpolated.
    pub fn lerp_2d(&self, other: &Self, t: f64) -> Self {
        Self::new(
            self.x + t * (other.x - self.x),
            self.y + t * (other.y - self.y),
        )
    }

    /// Point on the segment `self`-`other` at the given fraction of its length. Z is interpolated only if both
    /// ends of the segment have it.
    pub(crate) fn interpolate(&self, other: &Self, fraction: f64) -> Self {
        let mut result = self.lerp_2d(other, fraction);
        if let (Some(z1), Some(z2)) = (self.z, other.z) {
            result.z = Some(z1 + fraction * (z2 - z1));
        }

        result
    }
}

impl From<(f64, f64)> for DirectPosition {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64, f64)> for DirectPosition {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new_3d(x, y, z)
    }
}

impl AbsDiffEq for DirectPosition {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        let z_eq = match (self.z, other.z) {
            (Some(a), Some(b)) => a.abs_diff_eq(&b, epsilon),
            (None, None) => true,
            _ => false,
        };

        z_eq && self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for DirectPosition {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        let z_eq = match (self.z, other.z) {
            (Some(a), Some(b)) => a.relative_eq(&b, epsilon, max_relative),
            (None, None) => true,
            _ => false,
        };

        z_eq && self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}
