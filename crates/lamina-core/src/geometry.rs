//! Core geometry types - kernel-agnostic

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// Number of decimal places coordinates are rounded to.
///
/// Rounded coordinates compare bit-exactly, which is what makes
/// endpoint-equality chaining of cross-section segments work.
pub const COORD_DECIMALS: i32 = 5;

/// Round a scalar to [`COORD_DECIMALS`] decimal places.
pub fn round_coord(v: f64) -> f64 {
    let scale = 10f64.powi(COORD_DECIMALS);
    (v * scale).round() / scale
}

/// 3D point/vector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// 3D Euclidean distance to another point.
    pub fn distance_to(&self, other: &Self) -> f64 {
        (*other - *self).magnitude()
    }

    pub fn cross(&self, other: &Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Z component of the cross product of the xy-projections.
    ///
    /// Zero iff the two vectors are parallel when viewed from above.
    pub fn cross_2d(&self, other: &Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Round every coordinate to [`COORD_DECIMALS`] decimal places.
    pub fn round5(&self) -> Self {
        Self {
            x: round_coord(self.x),
            y: round_coord(self.y),
            z: round_coord(self.z),
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, s: f64) -> Point {
        Point::new(self.x * s, self.y * s, self.z * s)
    }
}

/// Parametric line segment: the set {origin + t * dir, t in [0, 1]}
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub origin: Point,
    pub dir: Point,
}

impl Line {
    pub fn new(origin: Point, dir: Point) -> Self {
        Self { origin, dir }
    }

    /// Construct the segment running from one endpoint to another.
    pub fn between(from: Point, to: Point) -> Self {
        Self {
            origin: from,
            dir: to - from,
        }
    }

    /// The far endpoint, origin + dir.
    pub fn end(&self) -> Point {
        self.origin + self.dir
    }

    pub fn length(&self) -> f64 {
        self.dir.magnitude()
    }

    /// Same segment traversed in the opposite direction.
    pub fn flip(&self) -> Self {
        Self {
            origin: self.end(),
            dir: -self.dir,
        }
    }

    /// Pull both endpoints inward by `amount` millimetres.
    ///
    /// Degenerate segments are returned unchanged; callers trimming more
    /// than the segment length must filter the result themselves.
    pub fn shorten_by(&self, amount: f64) -> Self {
        let len = self.length();
        if len == 0.0 {
            return *self;
        }
        let t = amount / len;
        Self {
            origin: self.origin + self.dir * t,
            dir: self.dir * (1.0 - 2.0 * t),
        }
    }

    /// Solve for the parameter hitting `v` on one axis.
    ///
    /// An axis-parallel direction yields no parameter rather than a
    /// division fault.
    fn param_at(v: f64, origin: f64, dir: f64) -> Option<f64> {
        if dir == 0.0 {
            return None;
        }
        let t = (v - origin) / dir;
        (0.0..=1.0).contains(&t).then_some(t)
    }

    /// The point on the segment with the given x coordinate, if any.
    pub fn point_at_x(&self, x: f64) -> Option<Point> {
        Self::param_at(x, self.origin.x, self.dir.x).map(|t| self.origin + self.dir * t)
    }

    /// The point on the segment with the given y coordinate, if any.
    pub fn point_at_y(&self, y: f64) -> Option<Point> {
        Self::param_at(y, self.origin.y, self.dir.y).map(|t| self.origin + self.dir * t)
    }

    /// The point on the segment with the given z coordinate, if any.
    pub fn point_at_z(&self, z: f64) -> Option<Point> {
        Self::param_at(z, self.origin.z, self.dir.z).map(|t| self.origin + self.dir * t)
    }

    /// 2D intersection of two segments, ignoring z.
    ///
    /// Parallel and collinear segments uniformly yield no intersection.
    /// Endpoint touches count (inclusive parameter bounds).
    pub fn intersect_2d(&self, other: &Self) -> Option<Point> {
        let denom = self.dir.cross_2d(&other.dir);
        if denom == 0.0 {
            return None;
        }
        let offset = other.origin - self.origin;
        let t = offset.cross_2d(&other.dir) / denom;
        let u = offset.cross_2d(&self.dir) / denom;
        if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
            Some(self.origin + self.dir * t)
        } else {
            None
        }
    }
}

/// One triangle of a surface mesh
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Facet {
    pub vertices: [Point; 3],
}

impl Facet {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// The three directed edges of the triangle.
    pub fn edges(&self) -> [Line; 3] {
        let [a, b, c] = self.vertices;
        [
            Line::between(a, b),
            Line::between(b, c),
            Line::between(c, a),
        ]
    }

    pub fn translate(&self, offset: Point) -> Self {
        Self {
            vertices: [
                self.vertices[0] + offset,
                self.vertices[1] + offset,
                self.vertices[2] + offset,
            ],
        }
    }
}

/// Closed polygonal cross-section at a fixed z
///
/// The path closes implicitly from the last point back to the first;
/// no trailing duplicate is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contour {
    pub points: Vec<Point>,
}

impl Contour {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// All edges of the polygon, including the closing edge.
    pub fn edges(&self) -> Vec<Line> {
        let n = self.points.len();
        if n < 2 {
            return Vec::new();
        }
        (0..n)
            .map(|i| Line::between(self.points[i], self.points[(i + 1) % n]))
            .collect()
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Smallest box containing all the given points. `None` when empty.
    pub fn from_points<I: IntoIterator<Item = Point>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bbox = Self::new(first, first);
        for p in iter {
            bbox.min.x = bbox.min.x.min(p.x);
            bbox.min.y = bbox.min.y.min(p.y);
            bbox.min.z = bbox.min.z.min(p.z);
            bbox.max.x = bbox.max.x.max(p.x);
            bbox.max.y = bbox.max.y.max(p.y);
            bbox.max.z = bbox.max.z.max(p.z);
        }
        Some(bbox)
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
            (self.min.z + self.max.z) / 2.0,
        )
    }

    pub fn size(&self) -> Point {
        self.max - self.min
    }
}
