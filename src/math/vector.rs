use num_traits::Float;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// Default tolerance used by [`Vector::near_default`]
pub const DEFAULT_EPSILON: f64 = 1e-5;

/// Fixed-size vector of `N` float components
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<T, const N: usize> {
    data: [T; N],
}

pub type Vec2f = Vector<f32, 2>;
pub type Vec2d = Vector<f64, 2>;
pub type Vec3f = Vector<f32, 3>;
pub type Vec3d = Vector<f64, 3>;

impl<T: Float, const N: usize> Vector<T, N> {
    pub const fn from_array(data: [T; N]) -> Self {
        Self { data }
    }

    /// All components zero
    pub fn zero() -> Self {
        Self { data: [T::zero(); N] }
    }

    pub fn as_array(&self) -> &[T; N] {
        &self.data
    }

    pub fn into_array(self) -> [T; N] {
        self.data
    }

    fn zip_with(self, other: Self, f: impl Fn(T, T) -> T) -> Self {
        Self { data: std::array::from_fn(|i| f(self.data[i], other.data[i])) }
    }

    fn map(self, f: impl Fn(T) -> T) -> Self {
        Self { data: self.data.map(f) }
    }

    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Euclidean norm
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    pub fn dot(&self, other: &Self) -> T {
        self.data
            .iter()
            .zip(other.data.iter())
            .fold(T::zero(), |sum, (&a, &b)| sum + a * b)
    }

    /// Unit vector in the same direction, or the zero vector if the length is exactly zero
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len == T::zero() {
            return Self::zero();
        }
        *self / len
    }

    /// True when the squared distance to `other` is at most `epsilon²`
    pub fn near(&self, other: &Self, epsilon: T) -> bool {
        (*other - *self).length_squared() <= epsilon * epsilon
    }

    pub fn near_default(&self, other: &Self) -> bool {
        let epsilon = T::from(DEFAULT_EPSILON).unwrap_or_else(T::epsilon);
        self.near(other, epsilon)
    }
}

impl<T: Float> Vector<T, 2> {
    pub const fn new(x: T, y: T) -> Self {
        Self { data: [x, y] }
    }
}

impl<T: Float> Vector<T, 3> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { data: [x, y, z] }
    }

    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }
}

impl<T: Float, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Float, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(data: [T; N]) -> Self {
        Self { data }
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: Float, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<T: Float, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<T: Float, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        self.map(|a| a * scalar)
    }
}

impl<T: Float, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    fn div(self, scalar: T) -> Self {
        self.map(|a| a / scalar)
    }
}

impl<T: Float, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

impl<T: Float, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Float, const N: usize> SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Float, const N: usize> MulAssign<T> for Vector<T, N> {
    fn mul_assign(&mut self, scalar: T) {
        *self = *self * scalar;
    }
}

impl<T: Float, const N: usize> DivAssign<T> for Vector<T, N> {
    fn div_assign(&mut self, scalar: T) {
        *self = *self / scalar;
    }
}

impl<T: Float, const N: usize> Sum for Vector<T, N> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, v| acc + v)
    }
}

// scalar * vector, for the concrete float types
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),+) => {
        $(
            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                fn mul(self, v: Vector<$t, N>) -> Vector<$t, N> {
                    v * self
                }
            }
        )+
    }
}

impl_scalar_lhs_mul!(f32, f64);
