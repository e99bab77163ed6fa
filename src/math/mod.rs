use bytemuck::{Pod, Zeroable};
use static_assertions::{assert_eq_align, assert_eq_size};

mod matrix;
mod parse;
mod vector;

pub use matrix::*;
pub use parse::*;
pub use vector::*;

unsafe impl Zeroable for Vector2 {}
unsafe impl Pod for Vector2 {}

unsafe impl Zeroable for Vector3 {}
unsafe impl Pod for Vector3 {}

unsafe impl Zeroable for Vector4 {}
unsafe impl Pod for Vector4 {}

unsafe impl Zeroable for Matrix3 {}
unsafe impl Pod for Matrix3 {}

unsafe impl Zeroable for Matrix4 {}
unsafe impl Pod for Matrix4 {}

// The flat element storage and the column view of a matrix are the same bytes.
assert_eq_size!(Vector2, [f32; 2]);
assert_eq_size!(Vector3, [f32; 3]);
assert_eq_size!(Vector4, [f32; 4]);
assert_eq_size!(Matrix3, [f32; 9], [Vector3; 3]);
assert_eq_size!(Matrix4, [f32; 16], [Vector4; 4]);
assert_eq_align!(Matrix3, Vector3, f32);
assert_eq_align!(Matrix4, Vector4, f32);
