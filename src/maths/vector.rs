use super::errors::VectorError;
use derive_more::IntoIterator;
use log::trace;
use num_traits::{Float, Zero};
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign};

/// A vector of `SIZE` numeric elements.
///
/// The size is part of the type, so vectors of different sizes cannot be combined. Every arithmetic operator works
/// elementwise: `*` is the Hadamard product, see [`Vector::dot`] for the scalar product.
#[derive(Copy, Clone, Debug, PartialEq, Eq, IntoIterator)]
#[into_iterator(owned, ref)]
pub struct Vector<T, const SIZE: usize>([T; SIZE]);

pub type Vector3f = Vector<f32, 3>;
pub type Vector3D = Vector<f64, 3>;

impl<T, const SIZE: usize> Vector<T, SIZE>
{
    pub fn new(values: [T; SIZE]) -> Self { Vector(values) }

    pub fn as_array(&self) -> &[T; SIZE] { &self.0 }

    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.0.iter() }
}

impl<T: Copy, const SIZE: usize> Vector<T, SIZE>
{
    /// Builds a vector from a sequence only known at runtime
    pub fn from_slice(values: &[T]) -> Result<Self, VectorError>
    {
        let array: [T; SIZE] = values
            .try_into()
            .map_err(|_| VectorError::SizeMismatch { expected: SIZE, found: values.len() })?;
        Ok(Vector(array))
    }

    pub fn get(&self, index: usize) -> Result<T, VectorError>
    {
        self.0
            .get(index)
            .copied()
            .ok_or(VectorError::IndexOutOfRange { index, size: SIZE })
    }

    pub fn map(self, f: impl Fn(T) -> T) -> Self { Vector(self.0.map(f)) }

    fn zip_with(self, other: Self, f: impl Fn(T, T) -> T) -> Self
    {
        Vector(std::array::from_fn(|i| f(self.0[i], other.0[i])))
    }

    pub fn scale(self, factor: T) -> Self
    where
        T: Mul<Output = T>,
    {
        self.map(|v| v * factor)
    }

    pub fn hadamard(self, other: Self) -> Self
    where
        T: Mul<Output = T>,
    {
        self * other
    }

    /// Scalar dot product, the sum of the elementwise products
    pub fn dot(self, other: Self) -> T
    where
        T: Zero + Mul<Output = T>,
    {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(T::zero(), |sum, (&lhs, &rhs)| sum + lhs * rhs)
    }

    pub fn length_squared(self) -> T
    where
        T: Zero + Mul<Output = T>,
    {
        self.dot(self)
    }
}

impl<T: Float, const SIZE: usize> Vector<T, SIZE>
{
    pub fn length(self) -> T { self.length_squared().sqrt() }

    pub fn unit(self) -> Self
    {
        let length = self.length();
        self.map(|v| v / length)
    }

    pub fn is_nan(&self) -> bool { self.0.iter().any(|v| v.is_nan()) }
}

impl<T, const SIZE: usize> Vector<T, SIZE>
where
    Standard: Distribution<T>,
{
    /// Draws every element from [`Standard`] using the thread-local generator.
    ///
    /// Floats are uniform in `[0, 1)`, integers uniform over their whole range.
    pub fn random() -> Self { Self::random_with(&mut rand::thread_rng()) }

    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self { Vector(std::array::from_fn(|_| rng.gen())) }
}

impl<T: Copy> Vector<T, 3>
{
    pub fn x(&self) -> T { self.0[0] }
    pub fn y(&self) -> T { self.0[1] }
    pub fn z(&self) -> T { self.0[2] }

    pub fn cross(self, other: Self) -> Self
    where
        T: Mul<Output = T> + Sub<Output = T>,
    {
        let [a0, a1, a2] = self.0;
        let [b0, b1, b2] = other.0;
        Vector([a1 * b2 - a2 * b1, a2 * b0 - a0 * b2, a0 * b1 - a1 * b0])
    }
}

impl<T: Float> Vector<T, 3>
where
    Standard: Distribution<T>,
{
    /// Uniform point inside the ball of the given radius around the origin
    pub fn random_in_unit_sphere<R: Rng + ?Sized>(radius: T, rng: &mut R) -> Self
    {
        let mut rejected = 0usize;
        loop {
            let candidate = Self::random_with(rng).map(|v| v + v - T::one());
            if candidate.length_squared() <= T::one() {
                trace!("Sampled point in unit sphere after {} rejections", rejected);
                return candidate.scale(radius);
            }
            rejected += 1;
        }
    }
}

impl<T: Default, const SIZE: usize> Default for Vector<T, SIZE>
{
    fn default() -> Self { Vector(std::array::from_fn(|_| T::default())) }
}

impl<T, const SIZE: usize> From<[T; SIZE]> for Vector<T, SIZE>
{
    fn from(values: [T; SIZE]) -> Self { Vector(values) }
}

impl<T: Copy, const SIZE: usize> TryFrom<&[T]> for Vector<T, SIZE>
{
    type Error = VectorError;

    fn try_from(values: &[T]) -> Result<Self, Self::Error> { Self::from_slice(values) }
}

impl<T, const SIZE: usize> Index<usize> for Vector<T, SIZE>
{
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output { &self.0[index] }
}

macro_rules! impl_elementwise_op {
    ($op:ident, $op_fn:ident, $assign_op:ident, $assign_fn:ident) => {
        impl<T: Copy + $op<Output = T>, const SIZE: usize> $op for Vector<T, SIZE>
        {
            type Output = Self;

            fn $op_fn(self, other: Self) -> Self { self.zip_with(other, |lhs, rhs| lhs.$op_fn(rhs)) }
        }

        impl<T: $assign_op, const SIZE: usize> $assign_op for Vector<T, SIZE>
        {
            fn $assign_fn(&mut self, other: Self)
            {
                for (value, other) in self.0.iter_mut().zip(other.0) {
                    value.$assign_fn(other);
                }
            }
        }
    };
}

impl_elementwise_op!(Add, add, AddAssign, add_assign);
impl_elementwise_op!(Sub, sub, SubAssign, sub_assign);
impl_elementwise_op!(Mul, mul, MulAssign, mul_assign);
impl_elementwise_op!(Div, div, DivAssign, div_assign);

impl<T: Copy + Neg<Output = T>, const SIZE: usize> Neg for Vector<T, SIZE>
{
    type Output = Self;

    fn neg(self) -> Self { self.map(|v| -v) }
}

/// Renders the elements separated by `", "` without brackets, e.g. `1, 2, 3`
impl<T: Display, const SIZE: usize> Display for Vector<T, SIZE>
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}
