use num_traits::Zero;
use std::ops::Mul;

/// Values that can be stored in a [`SquareMatrix`](crate::SquareMatrix).
///
/// [`Zero`] brings addition along with it and seeds every sum.
/// Implemented for every type meeting the bounds, so all the
/// primitive integer and floating point types qualify.
///
/// ```
/// fn takes_element<T: sqmat::Element>() {}
/// takes_element::<i32>();
/// takes_element::<f64>();
/// ```
pub trait Element: Clone + Zero + Mul<Output = Self> {}

impl<T> Element for T where T: Clone + Zero + Mul<Output = T> {}
