use std::{
    fmt,
    ops::{
        Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
    },
};

#[repr(C)]
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Vector2(pub [f32; 2]);

#[repr(C)]
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Vector3(pub [f32; 3]);

#[repr(C)]
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Vector4(pub [f32; 4]);

/// Component-wise binary operators, in both the compound-assignment form and the
/// copying form. The copying form always copies the left operand and then applies
/// the compound-assignment form to the copy.
macro_rules! vec_binop {
    ($vec_type:ident, $op_trait:ident, $op_name:ident, $assign_trait:ident, $assign_name:ident, [$($i:literal),+]) => {
        impl $assign_trait<$vec_type> for $vec_type {
            #[inline]
            fn $assign_name(&mut self, rhs: $vec_type) {
                $(self.0[$i].$assign_name(rhs.0[$i]);)+
            }
        }

        impl $assign_trait<&$vec_type> for $vec_type {
            #[inline]
            fn $assign_name(&mut self, rhs: &$vec_type) {
                $(self.0[$i].$assign_name(rhs.0[$i]);)+
            }
        }

        impl $assign_trait<f32> for $vec_type {
            #[inline]
            fn $assign_name(&mut self, rhs: f32) {
                $(self.0[$i].$assign_name(rhs);)+
            }
        }

        impl $op_trait<$vec_type> for $vec_type {
            type Output = Self;

            #[inline]
            fn $op_name(mut self, rhs: $vec_type) -> Self::Output {
                self.$assign_name(rhs);
                self
            }
        }

        impl $op_trait<$vec_type> for &$vec_type {
            type Output = $vec_type;

            #[inline]
            fn $op_name(self, rhs: $vec_type) -> Self::Output {
                let mut lhs = *self;
                lhs.$assign_name(rhs);
                lhs
            }
        }

        impl $op_trait<&$vec_type> for $vec_type {
            type Output = Self;

            #[inline]
            fn $op_name(mut self, rhs: &$vec_type) -> Self::Output {
                self.$assign_name(rhs);
                self
            }
        }

        impl $op_trait<&$vec_type> for &$vec_type {
            type Output = $vec_type;

            #[inline]
            fn $op_name(self, rhs: &$vec_type) -> Self::Output {
                let mut lhs = *self;
                lhs.$assign_name(rhs);
                lhs
            }
        }

        impl $op_trait<f32> for $vec_type {
            type Output = Self;

            #[inline]
            fn $op_name(mut self, rhs: f32) -> Self::Output {
                self.$assign_name(rhs);
                self
            }
        }

        impl $op_trait<f32> for &$vec_type {
            type Output = $vec_type;

            #[inline]
            fn $op_name(self, rhs: f32) -> Self::Output {
                let mut lhs = *self;
                lhs.$assign_name(rhs);
                lhs
            }
        }
    };
}

/// Everything the three vector types share that doesn't depend on the dimension.
macro_rules! vec_misc {
    ($vec_type:ident, $len:literal, [$($i:literal),+]) => {
        impl $vec_type {
            #[inline]
            pub const fn splat(f: f32) -> Self {
                Self([f; $len])
            }

            /// Adds a vector or a scalar in place, returning `self` for chaining.
            #[inline]
            pub fn add_mut<Rhs>(&mut self, rhs: Rhs) -> &mut Self
            where
                Self: AddAssign<Rhs>,
            {
                *self += rhs;
                self
            }

            /// Subtracts a vector or a scalar in place, returning `self` for chaining.
            #[inline]
            pub fn sub_mut<Rhs>(&mut self, rhs: Rhs) -> &mut Self
            where
                Self: SubAssign<Rhs>,
            {
                *self -= rhs;
                self
            }

            /// Multiplies by a vector (component-wise) or a scalar in place,
            /// returning `self` for chaining.
            #[inline]
            pub fn mul_mut<Rhs>(&mut self, rhs: Rhs) -> &mut Self
            where
                Self: MulAssign<Rhs>,
            {
                *self *= rhs;
                self
            }

            /// Divides by a vector (component-wise) or a scalar in place,
            /// returning `self` for chaining.
            #[inline]
            pub fn div_mut<Rhs>(&mut self, rhs: Rhs) -> &mut Self
            where
                Self: DivAssign<Rhs>,
            {
                *self /= rhs;
                self
            }

            #[inline]
            pub fn magnitude_squared(&self) -> f32 {
                self.dot(*self)
            }

            /// Euclidean length.
            #[inline]
            pub fn magnitude(&self) -> f32 {
                self.magnitude_squared().sqrt()
            }

            /// Divides every component by the magnitude.
            ///
            /// A zero vector has no direction, so every component of the result is NaN.
            #[inline]
            pub fn normalized(&self) -> Self {
                self / self.magnitude()
            }

            #[inline]
            pub const fn to_array(self) -> [f32; $len] {
                self.0
            }
        }

        vec_binop!($vec_type, Add, add, AddAssign, add_assign, [$($i),+]);
        vec_binop!($vec_type, Sub, sub, SubAssign, sub_assign, [$($i),+]);
        vec_binop!($vec_type, Mul, mul, MulAssign, mul_assign, [$($i),+]);
        vec_binop!($vec_type, Div, div, DivAssign, div_assign, [$($i),+]);

        impl Neg for $vec_type {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self::Output {
                Self([$(-self.0[$i]),+])
            }
        }

        impl Neg for &$vec_type {
            type Output = $vec_type;

            #[inline]
            fn neg(self) -> Self::Output {
                $vec_type([$(-self.0[$i]),+])
            }
        }

        impl Index<usize> for $vec_type {
            type Output = f32;

            #[inline]
            fn index(&self, index: usize) -> &f32 {
                &self.0[index]
            }
        }

        impl IndexMut<usize> for $vec_type {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut f32 {
                &mut self.0[index]
            }
        }

        impl AsRef<[f32]> for $vec_type {
            #[inline]
            fn as_ref(&self) -> &[f32] {
                &self.0
            }
        }

        impl From<[f32; $len]> for $vec_type {
            #[inline]
            fn from(value: [f32; $len]) -> Self {
                Self(value)
            }
        }

        impl From<$vec_type> for [f32; $len] {
            #[inline]
            fn from(value: $vec_type) -> Self {
                value.0
            }
        }

        impl fmt::Display for $vec_type {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "(")?;
                for (i, c) in self.0.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{c}")?;
                }
                write!(f, ")")
            }
        }
    };
}

impl Vector2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self([x, y])
    }

    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub fn set_x(&mut self, f: f32) {
        self.0[0] = f;
    }

    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }

    #[inline]
    pub fn set_y(&mut self, f: f32) {
        self.0[1] = f;
    }

    #[inline]
    pub fn dot<Rhs: Into<Self>>(&self, rhs: Rhs) -> f32 {
        let rhs = rhs.into();
        (self.0[0] * rhs.0[0]) + (self.0[1] * rhs.0[1])
    }

    #[inline]
    pub fn widened(&self, f: f32) -> Vector3 {
        Vector3([self.0[0], self.0[1], f])
    }
}

vec_misc!(Vector2, 2, [0, 1]);

impl From<(f32, f32)> for Vector2 {
    #[inline]
    fn from(value: (f32, f32)) -> Self {
        Self([value.0, value.1])
    }
}

impl From<Vector2> for (f32, f32) {
    #[inline]
    fn from(value: Vector2) -> Self {
        (value.0[0], value.0[1])
    }
}

impl Vector3 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self([x, y, z])
    }

    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub fn set_x(&mut self, f: f32) {
        self.0[0] = f;
    }

    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }

    #[inline]
    pub fn set_y(&mut self, f: f32) {
        self.0[1] = f;
    }

    #[inline]
    pub const fn z(&self) -> f32 {
        self.0[2]
    }

    #[inline]
    pub fn set_z(&mut self, f: f32) {
        self.0[2] = f;
    }

    /// Right-handed cross product.
    #[inline]
    pub fn cross<Rhs: Into<Self>>(&self, rhs: Rhs) -> Self {
        let rhs = rhs.into();
        Self([
            self.0[1] * rhs.0[2] - self.0[2] * rhs.0[1],
            self.0[2] * rhs.0[0] - self.0[0] * rhs.0[2],
            self.0[0] * rhs.0[1] - self.0[1] * rhs.0[0],
        ])
    }

    #[inline]
    pub fn dot<Rhs: Into<Self>>(&self, rhs: Rhs) -> f32 {
        let rhs = rhs.into();
        (self.0[0] * rhs.0[0]) + (self.0[1] * rhs.0[1]) + (self.0[2] * rhs.0[2])
    }

    #[inline]
    pub fn widened(&self, f: f32) -> Vector4 {
        Vector4([self.0[0], self.0[1], self.0[2], f])
    }

    #[inline]
    pub const fn up() -> Self {
        Self([0.0, 1.0, 0.0])
    }

    #[inline]
    pub const fn down() -> Self {
        Self([0.0, -1.0, 0.0])
    }

    #[inline]
    pub const fn right() -> Self {
        Self([1.0, 0.0, 0.0])
    }

    #[inline]
    pub const fn left() -> Self {
        Self([-1.0, 0.0, 0.0])
    }

    #[inline]
    pub const fn forward() -> Self {
        Self([0.0, 0.0, 1.0])
    }

    #[inline]
    pub const fn backward() -> Self {
        Self([0.0, 0.0, -1.0])
    }
}

vec_misc!(Vector3, 3, [0, 1, 2]);

impl From<(f32, f32, f32)> for Vector3 {
    #[inline]
    fn from(value: (f32, f32, f32)) -> Self {
        Self([value.0, value.1, value.2])
    }
}

impl From<Vector3> for (f32, f32, f32) {
    #[inline]
    fn from(value: Vector3) -> Self {
        (value.0[0], value.0[1], value.0[2])
    }
}

impl Vector4 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self([x, y, z, w])
    }

    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub fn set_x(&mut self, f: f32) {
        self.0[0] = f;
    }

    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }

    #[inline]
    pub fn set_y(&mut self, f: f32) {
        self.0[1] = f;
    }

    #[inline]
    pub const fn z(&self) -> f32 {
        self.0[2]
    }

    #[inline]
    pub fn set_z(&mut self, f: f32) {
        self.0[2] = f;
    }

    #[inline]
    pub const fn w(&self) -> f32 {
        self.0[3]
    }

    #[inline]
    pub fn set_w(&mut self, f: f32) {
        self.0[3] = f;
    }

    #[inline]
    pub fn dot<Rhs: Into<Self>>(&self, rhs: Rhs) -> f32 {
        let rhs = rhs.into();
        (self.0[0] * rhs.0[0])
            + (self.0[1] * rhs.0[1])
            + (self.0[2] * rhs.0[2])
            + (self.0[3] * rhs.0[3])
    }

    /// The 3D cross product of the `xyz` parts, extended back out with `w = 1.0`.
    ///
    /// The incoming `w` components are ignored and the result `w` is always `1.0`,
    /// whatever the inputs represent.
    #[inline]
    pub fn cross<Rhs: Into<Self>>(&self, rhs: Rhs) -> Self {
        let rhs = rhs.into();
        self.narrowed().cross(rhs.narrowed()).widened(1.0)
    }

    #[inline]
    pub fn narrowed(&self) -> Vector3 {
        Vector3([self.0[0], self.0[1], self.0[2]])
    }
}

vec_misc!(Vector4, 4, [0, 1, 2, 3]);

impl From<(f32, f32, f32, f32)> for Vector4 {
    #[inline]
    fn from(value: (f32, f32, f32, f32)) -> Self {
        Self([value.0, value.1, value.2, value.3])
    }
}

impl From<(Vector3, f32)> for Vector4 {
    #[inline]
    fn from(value: (Vector3, f32)) -> Self {
        value.0.widened(value.1)
    }
}

impl From<Vector4> for (f32, f32, f32, f32) {
    #[inline]
    fn from(value: Vector4) -> Self {
        (value.0[0], value.0[1], value.0[2], value.0[3])
    }
}
