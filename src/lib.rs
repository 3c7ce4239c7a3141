pub mod library {
    use std::f32::consts::PI;
    use std::fmt;

    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct Vector {
        pub x: f32,
        pub y: f32,
    }

    impl Vector {
        pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

        pub const fn new(x: f32, y: f32) -> Vector {
            Vector { x, y }
        }
    }

    /// Prints as `(x, y)` with two decimals.
    impl fmt::Display for Vector {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "({}, {})", fixed(self.x), fixed(self.y))
        }
    }

    /// Two-decimal rendering used for every number the calculator prints.
    /// Anything that rounds to zero prints as `0.00`, never `-0.00`.
    pub fn fixed(value: f32) -> String {
        let text = format!("{:.2}", value);
        if text == "-0.00" {
            return String::from("0.00");
        }
        text
    }

    pub fn add(a: Vector, b: Vector) -> Vector {
        Vector::new(a.x + b.x, a.y + b.y)
    }

    pub fn sub(a: Vector, b: Vector) -> Vector {
        Vector::new(a.x - b.x, a.y - b.y)
    }

    pub fn scale(vec: Vector, k: f32) -> Vector {
        Vector::new(vec.x * k, vec.y * k)
    }

    pub fn linear_combination(a: Vector, ka: f32, b: Vector, kb: f32) -> Vector {
        Vector::new(ka * a.x + kb * b.x, ka * a.y + kb * b.y)
    }

    pub fn dot(a: Vector, b: Vector) -> f32 {
        a.x * b.x + a.y * b.y
    }

    pub fn norm(vec: Vector) -> f32 {
        vec.x.hypot(vec.y)
    }

    /// Divides by the largest component magnitude so later products stay in
    /// range. The zero vector is returned unchanged.
    fn rescale(vec: Vector) -> Vector {
        let largest = vec.x.abs().max(vec.y.abs());
        if largest == 0.0 {
            return vec;
        }
        Vector::new(vec.x / largest, vec.y / largest)
    }

    pub fn normalize(vec: Vector) -> Vector {
        let vec = rescale(vec);
        let mag = norm(vec);
        if mag == 0.0 {
            return Vector::ZERO;
        }
        Vector::new(vec.x / mag, vec.y / mag)
    }

    /// Angle between `a` and `b` in degrees, in `[0, 180]`.
    ///
    /// NaN when either vector has zero length; see [`checked_angle_between`].
    /// Computed from `atan2` of the rescaled operands so large components
    /// neither overflow nor land outside the `acos` domain.
    pub fn angle_between(a: Vector, b: Vector) -> f32 {
        if a == Vector::ZERO || b == Vector::ZERO {
            return f32::NAN;
        }
        let (a, b) = (rescale(a), rescale(b));
        cross(a, b).abs().atan2(dot(a, b)) * (180.0 / PI)
    }

    pub fn checked_angle_between(a: Vector, b: Vector) -> Option<f32> {
        let angle = angle_between(a, b);
        if angle.is_finite() { Some(angle) } else { None }
    }

    /// Scalar 2D cross product. Positive when `b` lies counter-clockwise
    /// of `a`, negative when clockwise, zero when collinear.
    pub fn cross(a: Vector, b: Vector) -> f32 {
        a.x * b.y - a.y * b.x
    }

    /// Orthogonal projection of `a` onto `b`. Projecting onto the zero
    /// vector gives the zero vector.
    pub fn project(a: Vector, b: Vector) -> Vector {
        let norm_sq = dot(b, b);
        if norm_sq == 0.0 {
            return Vector::ZERO;
        }
        scale(b, dot(a, b) / norm_sq)
    }

    /// Counter-clockwise rotation by `degrees`.
    pub fn rotate(vec: Vector, degrees: f32) -> Vector {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Vector::new(vec.x * cos - vec.y * sin, vec.x * sin + vec.y * cos)
    }

    pub fn distance(a: Vector, b: Vector) -> f32 {
        norm(sub(a, b))
    }
}
