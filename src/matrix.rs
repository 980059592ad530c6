//! Homogeneous 4x4 transform matrices.

use crate::angle::Radians;
use anyhow::{Result, bail};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::{f32::consts::PI, ops::Mul};

/// A 4x4 homogeneous transform matrix.
///
/// The 16 `f32` elements are stored contiguously in column-major order: the
/// element at column `c` and row `r` has linear index `c * 4 + r`. This is the
/// layout graphics APIs expect for uniform buffer upload, and it is exposed
/// directly through [`Self::elements`].
///
/// The type has plain value semantics. An independent duplicate is an ordinary
/// copy; mutating the duplicate never affects the original. Callers needing
/// the same transform on multiple threads should give each thread its own
/// copy.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Matrix4 {
    column_1: [f32; 4],
    column_2: [f32; 4],
    column_3: [f32; 4],
    column_4: [f32; 4],
}

impl Matrix4 {
    /// The number of `f32` elements in the matrix.
    pub const ELEMENT_COUNT: usize = 16;

    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::from_columns(
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        )
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::from_columns([0.0; 4], [0.0; 4], [0.0; 4], [0.0; 4])
    }

    /// Creates a matrix with the given columns.
    #[inline]
    pub const fn from_columns(
        column_1: [f32; 4],
        column_2: [f32; 4],
        column_3: [f32; 4],
        column_4: [f32; 4],
    ) -> Self {
        Self {
            column_1,
            column_2,
            column_3,
            column_4,
        }
    }

    /// Creates a right-handed perspective projection matrix with the given
    /// full vertical field of view, width-to-height aspect ratio and distances
    /// to the near and far clip planes.
    ///
    /// The projection follows the OpenGL convention: the view looks along
    /// negative z, and after the perspective divide the near plane maps to a
    /// clip-space z of -1 and the far plane to +1.
    ///
    /// # Errors
    /// Returns an error if the field of view is not in (0, pi), if the aspect
    /// ratio is not positive, if either clip distance is not positive, or if
    /// the near distance does not lie strictly in front of the far distance.
    pub fn perspective(
        fovy: Radians,
        aspect_ratio: f32,
        near_z: f32,
        far_z: f32,
    ) -> Result<Self> {
        if !(fovy.0 > 0.0 && fovy.0 < PI) {
            bail!(
                "Vertical field of view must be in (0, pi) radians, got {}",
                fovy.0
            );
        }
        if !(aspect_ratio > 0.0) {
            bail!("Aspect ratio must be positive, got {aspect_ratio}");
        }
        if !(near_z > 0.0 && far_z > 0.0) {
            bail!("Clip plane distances must be positive, got near {near_z} and far {far_z}");
        }
        if near_z >= far_z {
            bail!(
                "Near clip plane must be strictly closer than far clip plane, got near {near_z} and far {far_z}"
            );
        }

        let f = 1.0 / (0.5 * fovy.0).tan();
        let depth_scale = (far_z + near_z) / (near_z - far_z);
        let depth_offset = (2.0 * far_z * near_z) / (near_z - far_z);

        Ok(Self::from_columns(
            [f / aspect_ratio, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [0.0, 0.0, depth_scale, -1.0],
            [0.0, 0.0, depth_offset, 0.0],
        ))
    }

    /// Returns the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element(&self, i: usize, j: usize) -> f32 {
        match j {
            0 => self.column_1[i],
            1 => self.column_2[i],
            2 => self.column_3[i],
            3 => self.column_4[i],
            _ => panic!("index out of bounds"),
        }
    }

    /// Returns a mutable reference to the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element_mut(&mut self, i: usize, j: usize) -> &mut f32 {
        match j {
            0 => &mut self.column_1[i],
            1 => &mut self.column_2[i],
            2 => &mut self.column_3[i],
            3 => &mut self.column_4[i],
            _ => panic!("index out of bounds"),
        }
    }

    /// Returns the 16 elements of the matrix as a contiguous column-major
    /// array, suitable for copying into a uniform or constant buffer.
    #[inline]
    pub fn elements(&self) -> &[f32; 16] {
        bytemuck::cast_ref(self)
    }

    /// Incorporates a scaling by the given per-axis factors, applied to
    /// object-local coordinates before this matrix's existing transform
    /// (right-multiplication by `diag(x, y, z, 1)`).
    #[inline]
    pub fn scale(&mut self, x: f32, y: f32, z: f32) {
        for element in &mut self.column_1 {
            *element *= x;
        }
        for element in &mut self.column_2 {
            *element *= y;
        }
        for element in &mut self.column_3 {
            *element *= z;
        }
    }

    /// Incorporates rotations by the given angles about the x-, y- and z-axis,
    /// applied to object-local coordinates before this matrix's existing
    /// transform.
    ///
    /// The combined rotation is composed with extrinsic factor order
    /// `Rx * Ry * Rz` and right-multiplied onto this matrix, so acting on a
    /// column vector the z-axis rotation applies first and the x-axis rotation
    /// last. This matches composing the three elementary rotations one after
    /// the other, x-axis first.
    #[inline]
    pub fn rotate(&mut self, x_angle: Radians, y_angle: Radians, z_angle: Radians) {
        let rotation =
            Self::rotation_x(x_angle) * Self::rotation_y(y_angle) * Self::rotation_z(z_angle);
        *self = *self * rotation;
    }

    /// Incorporates a translation by the given offsets, applied to
    /// object-local coordinates before this matrix's existing transform
    /// (right-multiplication by a translation matrix).
    #[inline]
    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        let mut column_4 = [0.0; 4];
        for i in 0..4 {
            column_4[i] = self.column_1[i] * x
                + self.column_2[i] * y
                + self.column_3[i] * z
                + self.column_4[i];
        }
        self.column_4 = column_4;
    }

    /// Replaces this matrix with `other * self`, so that `other`'s transform
    /// applies after this matrix's existing transform in the combined mapping.
    ///
    /// This is the sole left-multiplying operation; all other mutators
    /// right-multiply. The asymmetry is what lets callers build hierarchical
    /// transforms, e.g. `child.multiply_left(&parent)`.
    #[inline]
    pub fn multiply_left(&mut self, other: &Self) {
        *self = *other * *self;
    }

    /// Transposes the matrix in place, swapping the element at row `i` and
    /// column `j` with the element at row `j` and column `i`.
    #[inline]
    pub fn transpose(&mut self) {
        let m = *self;
        *self = Self::from_columns(
            [m.column_1[0], m.column_2[0], m.column_3[0], m.column_4[0]],
            [m.column_1[1], m.column_2[1], m.column_3[1], m.column_4[1]],
            [m.column_1[2], m.column_2[2], m.column_3[2], m.column_4[2]],
            [m.column_1[3], m.column_2[3], m.column_3[3], m.column_4[3]],
        );
    }

    /// Applies the matrix to the given homogeneous column vector.
    #[inline]
    pub fn transform(&self, vector: [f32; 4]) -> [f32; 4] {
        let [x, y, z, w] = vector;
        let mut result = [0.0; 4];
        for i in 0..4 {
            result[i] = self.column_1[i] * x
                + self.column_2[i] * y
                + self.column_3[i] * z
                + self.column_4[i] * w;
        }
        result
    }

    /// Assuming this matrix represents a projection, projects the given point
    /// by applying the matrix and performing the perspective divide.
    #[inline]
    pub fn project_point(&self, point: [f32; 3]) -> [f32; 3] {
        let [x, y, z, w] = self.transform([point[0], point[1], point[2], 1.0]);
        let recip_w = w.recip();
        [x * recip_w, y * recip_w, z * recip_w]
    }

    fn rotation_x(angle: Radians) -> Self {
        let (sin, cos) = angle.0.sin_cos();
        Self::from_columns(
            [1.0, 0.0, 0.0, 0.0],
            [0.0, cos, sin, 0.0],
            [0.0, -sin, cos, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        )
    }

    fn rotation_y(angle: Radians) -> Self {
        let (sin, cos) = angle.0.sin_cos();
        Self::from_columns(
            [cos, 0.0, -sin, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [sin, 0.0, cos, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        )
    }

    fn rotation_z(angle: Radians) -> Self {
        let (sin, cos) = angle.0.sin_cos();
        Self::from_columns(
            [cos, sin, 0.0, 0.0],
            [-sin, cos, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        )
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Matrix4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_columns(
            self.transform(rhs.column_1),
            self.transform(rhs.column_2),
            self.transform(rhs.column_3),
            self.transform(rhs.column_4),
        )
    }
}

impl Mul for &Matrix4 {
    type Output = Matrix4;

    #[inline]
    fn mul(self, rhs: Self) -> Matrix4 {
        *self * *rhs
    }
}

impl AbsDiffEq for Matrix4 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.elements()
            .iter()
            .zip(other.elements())
            .all(|(a, b)| f32::abs_diff_eq(a, b, epsilon))
    }
}

impl RelativeEq for Matrix4 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.elements()
            .iter()
            .zip(other.elements())
            .all(|(a, b)| f32::relative_eq(a, b, epsilon, max_relative))
    }
}
