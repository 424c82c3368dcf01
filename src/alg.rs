use std;

// Length below which the angle queries treat a vector as degenerate
const ANGLE_EPSILON: f32 = 1e-8;

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub fn new(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3 { x, y, z }
    }

    #[inline]
    pub fn right() -> Vec3 {
        Vec3::new(1., 0., 0.)
    }

    #[inline]
    pub fn up() -> Vec3 {
        Vec3::new(0., 1., 0.)
    }

    #[inline]
    pub fn fwd() -> Vec3 {
        Vec3::new(0., 0., 1.)
    }

    #[inline]
    pub fn zero() -> Vec3 {
        Vec3::new(0., 0., 0.,)
    }

    #[inline]
    pub fn one() -> Vec3 {
        Vec3::new(1., 1., 1.)
    }

    pub fn set(&mut self, x: f32, y: f32, z: f32) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Unit vector in the same direction.
    /// A zero vector has no direction; the result is NaN.
    pub fn norm(self) -> Vec3 {
        let len = self.mag();

        Vec3::new(
            self.x / len,
            self.y / len,
            self.z / len,
        )
    }

    pub fn mag_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn mag(self) -> f32 {
        self.mag_squared().sqrt()
    }

    pub fn scale(self, scalar: f32) -> Vec3 {
        self * scalar
    }

    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Arithmetic mean (center) of a set of vectors.
    /// The slice must not be empty; an empty slice yields NaN.
    pub fn average(vecs: &[Vec3]) -> Vec3 {
        let sum = vecs.iter().fold(
            Vec3::zero(),
            |sum, &vec| sum + vec,
        );

        sum * (1. / vecs.len() as f32)
    }

    /// Elevation above the XZ plane, in radians.
    pub fn vertical_angle(self) -> f32 {
        let len = self.mag();
        if len < ANGLE_EPSILON { return 0.; }

        (self.y / len).asin()
    }

    /// Heading in the XZ plane, in radians, measured from +X.
    /// Positive angles turn towards -Z.
    pub fn horizontal_angle(self) -> f32 {
        let len = Vec3::new(self.x, 0., self.z).mag();
        if len < ANGLE_EPSILON { return 0.; }

        let angle = (self.x / len).acos();

        if self.z >= 0. {
            -angle
        } else {
            angle
        }
    }

    // Not a spherical conversion: the XZ components are not scaled by
    // cos(vertical) before normalizing
    pub fn from_angles(vertical: f32, horizontal: f32) -> Vec3 {
        Vec3::new(
            horizontal.cos(),
            vertical.sin(),
            -horizontal.sin(),
        ).norm()
    }
}

impl std::ops::Add for Vec3 {
    type Output = Vec3;

    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
        )
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
        )
    }
}

impl std::ops::Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, scalar: f32) -> Vec3 {
        Vec3::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
        )
    }
}

impl std::ops::Div<f32> for Vec3 {
    type Output = Vec3;

    fn div(self, scalar: f32) -> Vec3 {
        Vec3::new(
            self.x / scalar,
            self.y / scalar,
            self.z / scalar,
        )
    }
}

impl std::fmt::Display for Vec3 {
    fn fmt(&self, out: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            out,
            "( {}, {}, {} )",
            self.x, self.y, self.z,
        )
    }
}

// Determinant of a 3x3 block (rule of Sarrus)
#[inline]
fn det3(m: [[f32; 3]; 3]) -> f32 {
      m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
    - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
    + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct Mat {
    // Indexed [row][column]
    m: [[f32; 4]; 4],
}

impl Mat {
    pub fn new(
        m00: f32, m01: f32, m02: f32, m03: f32,
        m10: f32, m11: f32, m12: f32, m13: f32,
        m20: f32, m21: f32, m22: f32, m23: f32,
        m30: f32, m31: f32, m32: f32, m33: f32,
    ) -> Mat {
        Mat {
            m: [
                [m00, m01, m02, m03],
                [m10, m11, m12, m13],
                [m20, m21, m22, m23],
                [m30, m31, m32, m33],
            ],
        }
    }

    pub fn from_rows(rows: [[f32; 4]; 4]) -> Mat {
        Mat { m: rows }
    }

    /// Every entry set to `value`.
    pub fn filled(value: f32) -> Mat {
        Mat { m: [[value; 4]; 4] }
    }

    #[inline]
    pub fn rows(&self) -> [[f32; 4]; 4] {
        self.m
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        debug_assert!(row < 4 && col < 4);
        self.m[row][col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        debug_assert!(row < 4 && col < 4);
        self.m[row][col] = value;
    }

    #[inline]
    pub fn identity() -> Mat {
        Mat::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    pub fn translation(x: f32, y: f32, z: f32) -> Mat {
        Mat::new(
            1.0, 0.0, 0.0,   x,
            0.0, 1.0, 0.0,   y,
            0.0, 0.0, 1.0,   z,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    pub fn translation_vec(translation: Vec3) -> Mat {
        Mat::translation(translation.x, translation.y, translation.z)
    }

    pub fn rotation_x(rad: f32) -> Mat {
        Mat::new(
            1.0,       0.0,        0.0, 0.0,
            0.0, rad.cos(), -rad.sin(), 0.0,
            0.0, rad.sin(),  rad.cos(), 0.0,
            0.0,       0.0,        0.0, 1.0,
        )
    }

    pub fn rotation_y(rad: f32) -> Mat {
        Mat::new(
             rad.cos(), 0.0, rad.sin(), 0.0,
                   0.0, 1.0,       0.0, 0.0,
            -rad.sin(), 0.0, rad.cos(), 0.0,
                   0.0, 0.0,       0.0, 1.0,
        )
    }

    pub fn rotation_z(rad: f32) -> Mat {
        Mat::new(
            rad.cos(), -rad.sin(), 0.0, 0.0,
            rad.sin(),  rad.cos(), 0.0, 0.0,
                  0.0,        0.0, 1.0, 0.0,
                  0.0,        0.0, 0.0, 1.0,
        )
    }

    /// Rotation by `rad` about `axis` (Rodrigues).
    /// `axis` is used as given and must already be unit length.
    pub fn rotation_axis(axis: Vec3, rad: f32) -> Mat {
        let (sin, cos) = rad.sin_cos();
        let inv = 1. - cos;
        let (nx, ny, nz) = (axis.x, axis.y, axis.z);

        Mat::new(
            cos + nx * nx * inv, nx * ny * inv - nz * sin, nx * nz * inv + ny * sin, 0.0,
            ny * nx * inv + nz * sin, cos + ny * ny * inv, ny * nz * inv - nx * sin, 0.0,
            nz * nx * inv - ny * sin, nz * ny * inv + nx * sin, cos + nz * nz * inv, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    pub fn scale(x: f32, y: f32, z: f32) -> Mat {
        Mat::new(
              x, 0.0, 0.0, 0.0,
            0.0,   y, 0.0, 0.0,
            0.0, 0.0,   z, 0.0,
            0.0, 0.0, 0.0, 1.0
        )
    }

    pub fn scale_vec(scale: Vec3) -> Mat {
        Mat::scale(scale.x, scale.y, scale.z)
    }

    // Fixed 4x4 magic square (rows, columns and diagonals sum to 34)
    pub fn magic_square() -> Mat {
        Mat::new(
            16.,  2.,  3., 13.,
             5., 11., 10.,  8.,
             9.,  7.,  6., 12.,
             4., 14., 15.,  1.,
        )
    }

    pub fn transpose(self) -> Mat {
        let mut result = Mat::default();

        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = self.m[j][i];
            }
        }

        result
    }

    pub fn multiply(self, other: Mat) -> Mat {
        self * other
    }

    // 3x3 block left after removing `row` and `col`
    fn minor(&self, row: usize, col: usize) -> [[f32; 3]; 3] {
        let mut result = [[0.; 3]; 3];

        let mut r = 0;
        for i in (0..4).filter(|&i| i != row) {
            let mut c = 0;
            for j in (0..4).filter(|&j| j != col) {
                result[r][c] = self.m[i][j];
                c += 1;
            }

            r += 1;
        }

        result
    }

    fn cofactor(&self, row: usize, col: usize) -> f32 {
        let sign = if (row + col) % 2 == 0 { 1. } else { -1. };
        sign * det3(self.minor(row, col))
    }

    /// Cofactor expansion along the first row.
    pub fn determinant(&self) -> f32 {
          self.m[0][0] * self.cofactor(0, 0)
        + self.m[0][1] * self.cofactor(0, 1)
        + self.m[0][2] * self.cofactor(0, 2)
        + self.m[0][3] * self.cofactor(0, 3)
    }

    /// Adjugate divided by the determinant.
    ///
    /// Singular matrices are not detected: their inverse is filled with
    /// NaN or infinite entries. Check `determinant()` first if that matters.
    pub fn inverse(&self) -> Mat {
        let inverse_det = 1. / self.determinant();
        let mut result = Mat::default();

        // Adjugate is the transposed cofactor matrix
        for i in 0..4 {
            for j in 0..4 {
                result.m[j][i] = self.cofactor(i, j) * inverse_det;
            }
        }

        result
    }

    /// Transforms `point` as (x, y, z, 1); translation applies.
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.transform_extended([point.x, point.y, point.z, 1.])
    }

    /// Transforms `dir` as (x, y, z, 0); translation is ignored.
    pub fn transform_direction(&self, dir: Vec3) -> Vec3 {
        self.transform_extended([dir.x, dir.y, dir.z, 0.])
    }

    // The w row is dropped (affine matrices only, no perspective divide)
    fn transform_extended(&self, ext: [f32; 4]) -> Vec3 {
        let row = |i: usize| {
              self.m[i][0] * ext[0]
            + self.m[i][1] * ext[1]
            + self.m[i][2] * ext[2]
            + self.m[i][3] * ext[3]
        };

        Vec3::new(row(0), row(1), row(2))
    }
}

impl std::ops::Mul for Mat {
    type Output = Mat;

    // Naive matrix multiply
    fn mul(self, other: Mat) -> Mat {
        let mut result = Mat::default();

        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = (0..4).fold(
                    0.,
                    |sum, k| sum + self.m[i][k] * other.m[k][j],
                );
            }
        }

        result
    }
}

impl std::ops::Mul<Vec3> for Mat {
    type Output = Vec3;

    fn mul(self, vec: Vec3) -> Vec3 {
        self.transform_point(vec)
    }
}

impl std::fmt::Display for Mat {
    fn fmt(&self, out: &mut std::fmt::Formatter) -> std::fmt::Result {
        let m = &self.m;

        write!(
            out,
            "[ {}, {}, {}, {} ]\n[ {}, {}, {}, {} ]\n\
            [ {}, {}, {}, {} ]\n[ {}, {}, {}, {} ]",
            m[0][0], m[0][1], m[0][2], m[0][3],
            m[1][0], m[1][1], m[1][2], m[1][3],
            m[2][0], m[2][1], m[2][2], m[2][3],
            m[3][0], m[3][1], m[3][2], m[3][3],
        )
    }
}
