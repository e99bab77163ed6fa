use std::{
    fmt,
    ops::{Index, IndexMut, Mul, MulAssign},
};

use crate::math::{Vector3, Vector4};

/// Degrees to radians, to six significant digits rather than `PI / 180`.
const DEGREES_TO_RADIANS: f32 = 0.0174533;

/// A column-major 3x3 matrix.
///
/// Element `i` lives in column `i / 3`, row `i % 3`.
#[repr(C)]
#[derive(Copy, Clone, Default, Debug, PartialEq)]
pub struct Matrix3(pub [f32; 9]);

/// A column-major 4x4 matrix.
///
/// Element `i` lives in column `i / 4`, row `i % 4`.
#[repr(C)]
#[derive(Copy, Clone, Default, Debug, PartialEq)]
pub struct Matrix4(pub [f32; 16]);

macro_rules! mat_common {
    ($mat_type:ident, $vec_type:ident, $dim:literal, $len:literal, [$($diag:literal),+]) => {
        impl $mat_type {
            #[inline]
            pub const fn zero() -> Self {
                Self([0.0; $len])
            }

            /// A zero matrix with `f` on the main diagonal.
            #[inline]
            pub const fn diagonal(f: f32) -> Self {
                let mut elements = [0.0; $len];
                $(elements[$diag] = f;)+
                Self(elements)
            }

            #[inline]
            pub const fn identity() -> Self {
                Self::diagonal(1.0)
            }

            #[inline]
            pub const fn elements(&self) -> &[f32; $len] {
                &self.0
            }

            #[inline]
            pub fn elements_mut(&mut self) -> &mut [f32; $len] {
                &mut self.0
            }

            /// The columns, viewing the same storage as [`Self::elements`].
            #[inline]
            pub fn columns(&self) -> &[$vec_type; $dim] {
                bytemuck::cast_ref(&self.0)
            }

            #[inline]
            pub fn columns_mut(&mut self) -> &mut [$vec_type; $dim] {
                bytemuck::cast_mut(&mut self.0)
            }

            #[inline]
            pub fn column(&self, index: usize) -> $vec_type {
                self.columns()[index]
            }

            #[inline]
            pub fn set_column(&mut self, index: usize, column: $vec_type) {
                self.columns_mut()[index] = column;
            }

            /// Replaces `self` with `self * other`, returning `self` for chaining.
            ///
            /// Column vectors sit on the right, so the product applies `other` first.
            pub fn multiply(&mut self, other: &Self) -> &mut Self {
                let mut data = [0.0; $len];
                for col in 0..$dim {
                    for row in 0..$dim {
                        let mut sum = 0.0;
                        for i in 0..$dim {
                            sum += self.0[i * $dim + row] * other.0[i + col * $dim];
                        }
                        data[row + col * $dim] = sum;
                    }
                }
                self.0 = data;
                self
            }
        }

        impl MulAssign<$mat_type> for $mat_type {
            #[inline]
            fn mul_assign(&mut self, rhs: $mat_type) {
                self.multiply(&rhs);
            }
        }

        impl MulAssign<&$mat_type> for $mat_type {
            #[inline]
            fn mul_assign(&mut self, rhs: &$mat_type) {
                self.multiply(rhs);
            }
        }

        impl Mul<$vec_type> for $mat_type {
            type Output = $vec_type;

            #[inline]
            fn mul(self, rhs: $vec_type) -> $vec_type {
                &self * rhs
            }
        }

        impl Mul<$vec_type> for &$mat_type {
            type Output = $vec_type;

            fn mul(self, rhs: $vec_type) -> $vec_type {
                let mut ret = $vec_type::default();
                for row in 0..$dim {
                    let mut sum = 0.0;
                    for i in 0..$dim {
                        sum += self.0[i * $dim + row] * rhs.0[i];
                    }
                    ret.0[row] = sum;
                }
                ret
            }
        }

        impl Index<usize> for $mat_type {
            type Output = f32;

            #[inline]
            fn index(&self, index: usize) -> &f32 {
                &self.0[index]
            }
        }

        impl IndexMut<usize> for $mat_type {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut f32 {
                &mut self.0[index]
            }
        }

        impl From<[f32; $len]> for $mat_type {
            #[inline]
            fn from(value: [f32; $len]) -> Self {
                Self(value)
            }
        }

        impl From<[$vec_type; $dim]> for $mat_type {
            #[inline]
            fn from(value: [$vec_type; $dim]) -> Self {
                Self(bytemuck::cast(value))
            }
        }

        impl AsRef<[f32]> for $mat_type {
            #[inline]
            fn as_ref(&self) -> &[f32] {
                &self.0
            }
        }

        /// Debug printout: elements in storage order, tab separated, one column per line.
        ///
        /// Elements use `f32`'s shortest round-trip formatting (`0.33333334`), not a
        /// fixed six significant digits.
        impl fmt::Display for $mat_type {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                for (i, element) in self.0.iter().enumerate() {
                    write!(f, "{element}\t")?;
                    if i % $dim == $dim - 1 {
                        writeln!(f)?;
                    }
                }
                Ok(())
            }
        }
    };
}

macro_rules! mat_mul {
    ($self_type:ty, $mat_type:ty, $out_type:ident) => {
        impl Mul<$mat_type> for $self_type {
            type Output = $out_type;

            #[inline]
            fn mul(self, rhs: $mat_type) -> $out_type {
                let mut ret = $out_type::clone(&self);
                ret.multiply(&rhs);
                ret
            }
        }
    };
}

mat_common!(Matrix3, Vector3, 3, 9, [0, 4, 8]);
mat_mul!(Matrix3, Matrix3, Matrix3);
mat_mul!(&Matrix3, Matrix3, Matrix3);
mat_mul!(Matrix3, &Matrix3, Matrix3);
mat_mul!(&Matrix3, &Matrix3, Matrix3);

mat_common!(Matrix4, Vector4, 4, 16, [0, 5, 10, 15]);
mat_mul!(Matrix4, Matrix4, Matrix4);
mat_mul!(&Matrix4, Matrix4, Matrix4);
mat_mul!(Matrix4, &Matrix4, Matrix4);
mat_mul!(&Matrix4, &Matrix4, Matrix4);

impl Matrix3 {
    #[inline]
    #[rustfmt::skip]
    pub const fn from_columns(x: Vector3, y: Vector3, z: Vector3) -> Self {
        Self([
            x.0[0], x.0[1], x.0[2],
            y.0[0], y.0[1], y.0[2],
            z.0[0], z.0[1], z.0[2],
        ])
    }

    #[inline]
    #[rustfmt::skip]
    pub const fn transposed(&self) -> Self {
        let m = &self.0;
        Self([
            m[0], m[3], m[6],
            m[1], m[4], m[7],
            m[2], m[5], m[8],
        ])
    }

    /// Cofactor expansion along the first row.
    #[inline]
    pub fn determinant(&self) -> f32 {
        let m = &self.0;
        let a = m[0] * (m[4] * m[8] - m[5] * m[7]);
        let b = m[1] * (m[3] * m[8] - m[5] * m[6]);
        let c = m[2] * (m[3] * m[7] - m[4] * m[6]);
        a - b + c
    }

    /// The adjugate scaled by `1 / det`.
    ///
    /// A singular matrix has no inverse: every element of the result is NaN or
    /// infinite, and nothing here tries to detect or repair that.
    pub fn inversed(&self) -> Self {
        let m = &self.0;
        let cofactors = Self([
            m[4] * m[8] - m[5] * m[7],
            -(m[3] * m[8] - m[5] * m[6]),
            m[3] * m[7] - m[4] * m[6],
            -(m[1] * m[8] - m[2] * m[7]),
            m[0] * m[8] - m[2] * m[6],
            -(m[0] * m[7] - m[1] * m[6]),
            m[1] * m[5] - m[2] * m[4],
            -(m[0] * m[5] - m[2] * m[3]),
            m[0] * m[4] - m[1] * m[3],
        ]);

        let det = self.determinant();
        if det == 0.0 {
            log::debug!("Inverting a singular matrix, the result will not be finite");
        }

        cofactors.transposed() * Self::diagonal(1.0 / det)
    }
}

impl From<Matrix4> for Matrix3 {
    /// Keeps the upper-left 3x3 block. The dropped row and column are not inspected.
    #[inline]
    fn from(m: Matrix4) -> Self {
        m.narrowed()
    }
}

impl Matrix4 {
    #[inline]
    #[rustfmt::skip]
    pub const fn from_columns(x: Vector4, y: Vector4, z: Vector4, w: Vector4) -> Self {
        Self([
            x.0[0], x.0[1], x.0[2], x.0[3],
            y.0[0], y.0[1], y.0[2], y.0[3],
            z.0[0], z.0[1], z.0[2], z.0[3],
            w.0[0], w.0[1], w.0[2], w.0[3],
        ])
    }

    #[inline]
    #[rustfmt::skip]
    pub const fn translation(v: Vector3) -> Self {
        Self([
            1.0,    0.0,    0.0,    0.0,
            0.0,    1.0,    0.0,    0.0,
            0.0,    0.0,    1.0,    0.0,
            v.0[0], v.0[1], v.0[2], 1.0,
        ])
    }

    #[inline]
    #[rustfmt::skip]
    pub const fn scale(v: Vector3) -> Self {
        Self([
            v.0[0], 0.0,    0.0,    0.0,
            0.0,    v.0[1], 0.0,    0.0,
            0.0,    0.0,    v.0[2], 0.0,
            0.0,    0.0,    0.0,    1.0,
        ])
    }

    /// Rotation of `angle` degrees about `axis`. The axis doesn't need to be normalized.
    #[rustfmt::skip]
    pub fn rotation<Axis: Into<Vector3>>(angle: f32, axis: Axis) -> Self {
        let radians = angle * DEGREES_TO_RADIANS;
        let c = radians.cos();
        let s = radians.sin();
        let omc = 1.0 - c;
        let axis = axis.into().normalized();
        let (x, y, z) = (axis.0[0], axis.0[1], axis.0[2]);
        Self([
            c + x * x * omc,     y * x * omc + z * s, z * x * omc - y * s, 0.0,
            x * y * omc - z * s, c + y * y * omc,     z * y * omc + x * s, 0.0,
            x * z * omc + y * s, y * z * omc - x * s, c + z * z * omc,     0.0,
            0.0,                 0.0,                 0.0,                 1.0,
        ])
    }

    /// A right-handed view matrix for a camera at `eye` looking towards `center`.
    ///
    /// If the view direction and `up` are parallel there is no well defined basis and
    /// the result is NaN.
    #[rustfmt::skip]
    pub fn look_at<Eye, Center, Up>(eye: Eye, center: Center, up: Up) -> Self
    where
        Eye: Into<Vector3>,
        Center: Into<Vector3>,
        Up: Into<Vector3>,
    {
        let eye = eye.into();
        let f = (center.into() - eye).normalized();
        let r = f.cross(up).normalized();
        let u = r.cross(f).normalized();
        Self([
            r.0[0],       u.0[0],       -f.0[0],    0.0,
            r.0[1],       u.0[1],       -f.0[1],    0.0,
            r.0[2],       u.0[2],       -f.0[2],    0.0,
            -r.dot(eye),  -u.dot(eye),  f.dot(eye), 1.0,
        ])
    }

    /// [`Self::look_at`] with `+Y` up.
    #[inline]
    pub fn look_at_y_up<Eye, Center>(eye: Eye, center: Center) -> Self
    where
        Eye: Into<Vector3>,
        Center: Into<Vector3>,
    {
        Self::look_at(eye, center, Vector3::up())
    }

    /// A symmetric OpenGL-style projection (clip-space depth in `-1..1`).
    ///
    /// `fov` is the vertical field of view in degrees.
    #[rustfmt::skip]
    pub fn perspective(fov: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        let half_fov = 0.5 * f64::from(fov) * f64::from(DEGREES_TO_RADIANS);
        let t = near * half_fov.tan() as f32;
        let r = t * aspect_ratio;
        let depth = far - near;
        Self([
            near / r, 0.0,      0.0,                        0.0,
            0.0,      near / t, 0.0,                        0.0,
            0.0,      0.0,      -(far + near) / depth,      -1.0,
            0.0,      0.0,      (-2.0 * far * near) / depth, 0.0,
        ])
    }

    #[inline]
    #[rustfmt::skip]
    pub const fn transposed(&self) -> Self {
        let m = &self.0;
        Self([
            m[0], m[4], m[8],  m[12],
            m[1], m[5], m[9],  m[13],
            m[2], m[6], m[10], m[14],
            m[3], m[7], m[11], m[15],
        ])
    }

    #[inline]
    pub fn narrowed(&self) -> Matrix3 {
        Matrix3::from_columns(
            self.column(0).narrowed(),
            self.column(1).narrowed(),
            self.column(2).narrowed(),
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() <= 1e-5
    }

    fn assert_close<const N: usize>(actual: &[f32; N], expected: &[f32; N]) {
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            assert!(close(*a, *e), "element {i}: {a} != {e}\n{actual:?}");
        }
    }

    #[rustfmt::skip]
    fn sample3() -> Matrix3 {
        Matrix3([
            4.0, 3.0, 0.0,
            3.0, 5.0, 1.0,
            2.0, 0.0, 6.0,
        ])
    }

    fn sample4() -> Matrix4 {
        let mut m = Matrix4::zero();
        for (i, e) in m.elements_mut().iter_mut().enumerate() {
            *e = (i as f32) * 0.5 - 3.0;
        }
        m
    }

    #[test]
    fn constructors() {
        assert!(Matrix3::default().elements().iter().all(|&e| e == 0.0));
        assert_eq!(Matrix3::zero(), Matrix3::diagonal(0.0));

        let d = Matrix3::diagonal(7.0);
        for (i, &e) in d.elements().iter().enumerate() {
            assert_eq!(e, if i % 4 == 0 { 7.0 } else { 0.0 });
        }

        let d = Matrix4::identity();
        for (i, &e) in d.elements().iter().enumerate() {
            assert_eq!(e, if i % 5 == 0 { 1.0 } else { 0.0 });
        }
    }

    #[test]
    fn columns_alias_elements() {
        let mut m = sample4();
        for i in 0..16 {
            assert_eq!(m[i], m.column(i / 4)[i % 4]);
        }

        m.set_column(2, Vector4::new(9.0, 8.0, 7.0, 6.0));
        assert_eq!(&m.elements()[8..12], &[9.0, 8.0, 7.0, 6.0]);

        m.columns_mut()[3].set_w(-1.0);
        assert_eq!(m[15], -1.0);

        let m3 = Matrix3::from_columns(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(4.0, 5.0, 6.0),
            Vector3::new(7.0, 8.0, 9.0),
        );
        for i in 0..9 {
            assert_eq!(m3[i], (i + 1) as f32);
            assert_eq!(m3[i], m3.columns()[i / 3][i % 3]);
        }
        assert_eq!(m3, Matrix3::from(*m3.columns()));
    }

    #[test]
    fn truncate_matrix4() {
        let m = sample4();
        let m3 = Matrix3::from(m);
        assert_eq!(m3.column(0), m.column(0).narrowed());
        assert_eq!(m3.column(1), m.column(1).narrowed());
        assert_eq!(m3.column(2), m.column(2).narrowed());
        assert_eq!(Matrix3::from(Matrix4::identity()), Matrix3::identity());
    }

    #[test]
    fn identity_is_neutral() {
        let m = sample3();
        assert_eq!(m * Matrix3::identity(), m);
        assert_eq!(Matrix3::identity() * m, m);

        let m = sample4();
        assert_eq!(m * Matrix4::identity(), m);
        assert_eq!(Matrix4::identity() * m, m);
    }

    #[test]
    fn multiply_is_column_major() {
        // Translating after scaling keeps the translation unscaled.
        let m = Matrix4::translation(Vector3::new(1.0, 2.0, 3.0))
            * Matrix4::scale(Vector3::new(2.0, 2.0, 2.0));
        let p = m * Vector4::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(p, Vector4::new(3.0, 4.0, 5.0, 1.0));

        let mut a = Matrix3::from_columns(
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(5.0, 6.0, 1.0),
        );
        let b = Matrix3::diagonal(2.0);
        a.multiply(&b).multiply(&Matrix3::identity());
        assert_eq!(a.column(0), Vector3::new(2.0, 0.0, 0.0));
        assert_eq!(a.column(2), Vector3::new(10.0, 12.0, 2.0));

        let mut c = sample3();
        c *= Matrix3::identity();
        assert_eq!(c, sample3());
    }

    #[test]
    fn transpose_swaps_off_diagonal() {
        let m = Matrix3::from([0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        let t = m.transposed();
        assert_eq!(t.elements(), &[0.0, 3.0, 6.0, 1.0, 4.0, 7.0, 2.0, 5.0, 8.0]);
        assert_eq!(t.transposed(), m);

        let m = sample4();
        for i in 0..16 {
            assert_eq!(m.transposed()[(i % 4) * 4 + i / 4], m[i]);
        }
    }

    #[test]
    fn inverse() {
        let m = sample3();
        assert_eq!(m.determinant(), 72.0);
        assert_close((m * m.inversed()).elements(), Matrix3::identity().elements());
        assert_close((m.inversed() * m).elements(), Matrix3::identity().elements());

        assert_eq!(Matrix3::diagonal(2.0).inversed(), Matrix3::diagonal(0.5));
    }

    #[test]
    fn inverse_of_singular_is_not_finite() {
        let inv = Matrix3::zero().inversed();
        assert!(inv.elements().iter().all(|e| !e.is_finite()));

        let singular = Matrix3::from_columns(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(2.0, 4.0, 6.0),
            Vector3::new(0.0, 1.0, 0.0),
        );
        assert_eq!(singular.determinant(), 0.0);
        assert!(singular.inversed().elements().iter().all(|e| !e.is_finite()));
    }

    #[test]
    fn singular_inverse_follows_adjugate_signs() {
        let singular = Matrix3::from_columns(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(2.0, 4.0, 6.0),
            Vector3::new(0.0, 1.0, 0.0),
        );
        // Adjugate is [-6, 3, 0, -0, 0, -0, 2, -1, 0]: zero entries become NaN.
        let inv = singular.inversed();
        assert_eq!(inv[0], f32::NEG_INFINITY);
        assert_eq!(inv[1], f32::INFINITY);
        assert_eq!(inv[6], f32::INFINITY);
        assert_eq!(inv[7], f32::NEG_INFINITY);
        for i in [2, 3, 4, 5, 8] {
            assert!(inv[i].is_nan(), "element {i} is {}", inv[i]);
        }

        assert!(Matrix3::zero().inversed().elements().iter().all(|e| e.is_nan()));
    }

    #[test]
    fn translation() {
        let t = Matrix4::translation(Vector3::new(1.0, 2.0, 3.0)) * Matrix4::identity();
        let mut expected = Matrix4::identity();
        expected[12] = 1.0;
        expected[13] = 2.0;
        expected[14] = 3.0;
        assert_eq!(t, expected);
        assert_eq!(t.column(3), Vector4::new(1.0, 2.0, 3.0, 1.0));
    }

    #[test]
    fn scale() {
        let s = Matrix4::scale(Vector3::splat(2.0));
        assert_eq!(s * Vector4::splat(1.0), Vector4::new(2.0, 2.0, 2.0, 1.0));
        assert_eq!(s[0], 2.0);
        assert_eq!(s[5], 2.0);
        assert_eq!(s[10], 2.0);
        assert_eq!(s[15], 1.0);
    }

    #[test]
    fn rotation() {
        let r = Matrix4::rotation(90.0, Vector3::forward());
        let p = r * Vector4::new(1.0, 0.0, 0.0, 1.0);
        assert_close(&p.to_array(), &[0.0, 1.0, 0.0, 1.0]);

        let r = Matrix4::rotation(90.0, Vector3::up());
        let p = r * Vector4::new(1.0, 0.0, 0.0, 1.0);
        assert_close(&p.to_array(), &[0.0, 0.0, -1.0, 1.0]);

        // The axis is normalized before use.
        assert_eq!(
            Matrix4::rotation(30.0, (0.0, 0.0, 5.0)),
            Matrix4::rotation(30.0, (0.0, 0.0, 1.0))
        );

        assert_close(Matrix4::rotation(0.0, Vector3::right()).elements(), Matrix4::identity().elements());
    }

    #[test]
    fn rotation_uses_six_digit_degrees() {
        let r = Matrix4::rotation(90.0, Vector3::forward());
        assert_eq!(r[0], (90.0_f32 * 0.0174533).cos());
        assert_eq!(r[1], (90.0_f32 * 0.0174533).sin());
        assert_ne!(r[0], 90.0_f32.to_radians().cos());
    }

    #[test]
    fn look_at() {
        let eye = Vector3::new(0.0, 0.0, 5.0);
        let view = Matrix4::look_at_y_up(eye, Vector3::default());
        assert_eq!(view, Matrix4::translation(Vector3::new(0.0, 0.0, -5.0)));
        assert_eq!(view * eye.widened(1.0), Vector4::new(0.0, 0.0, 0.0, 1.0));

        let view = Matrix4::look_at((3.0, 4.0, 5.0), (0.0, 0.0, 0.0), Vector3::up());
        let origin = view * Vector4::new(3.0, 4.0, 5.0, 1.0);
        assert_close(&origin.to_array(), &[0.0, 0.0, 0.0, 1.0]);

        // The upper-left block is orthonormal.
        let basis = view.narrowed();
        assert_close(
            (basis * basis.transposed()).elements(),
            Matrix3::identity().elements(),
        );
    }

    #[test]
    fn look_at_along_up_is_nan() {
        let view = Matrix4::look_at_y_up(Vector3::default(), Vector3::new(0.0, 5.0, 0.0));
        // The right axis is the first row of the basis block.
        assert!(view[0].is_nan());
        assert!(view[4].is_nan());
        assert!(view[8].is_nan());
    }

    #[test]
    fn perspective() {
        let (near, far) = (1.0, 100.0);
        let p = Matrix4::perspective(90.0, 2.0, near, far);
        assert!(close(p[0], 0.5));
        assert!(close(p[5], 1.0));
        assert!(close(p[10], -101.0 / 99.0));
        assert_eq!(p[11], -1.0);
        assert!(close(p[14], -200.0 / 99.0));
        assert_eq!(p[15], 0.0);

        let clip = p * Vector4::new(0.0, 0.0, -near, 1.0);
        assert!(close(clip.z() / clip.w(), -1.0));
        let clip = p * Vector4::new(0.0, 0.0, -far, 1.0);
        assert!(close(clip.z() / clip.w(), 1.0));
    }

    #[test]
    fn perspective_tangent_in_double_precision() {
        let half_tan = |fov: f64| (0.5 * fov * f64::from(0.0174533_f32)).tan() as f32;

        let p = Matrix4::perspective(60.0, 1.0, 1.0, 10.0);
        assert_eq!(p[5], 1.0 / half_tan(60.0));
        assert_eq!(p[0], 1.0 / half_tan(60.0));

        // Wide enough that the single-precision angle lands several ulps away.
        let p = Matrix4::perspective(170.0, 1.0, 1.0, 10.0);
        assert_eq!(p[5], 1.0 / half_tan(170.0));
        assert_ne!(half_tan(170.0), (85.0_f32 * 0.0174533).tan());
    }

    #[test]
    fn display() {
        assert_eq!(
            Matrix3::identity().to_string(),
            "1\t0\t0\t\n0\t1\t0\t\n0\t0\t1\t\n"
        );
        let text = Matrix4::translation(Vector3::new(1.0, 2.0, 3.0)).to_string();
        assert_eq!(text.lines().last(), Some("1\t2\t3\t1\t"));
        assert_eq!(text.lines().count(), 4);

        let third = Matrix3::diagonal(1.0 / 3.0).to_string();
        assert_eq!(third.lines().next(), Some("0.33333334\t0\t0\t"));
    }
}
