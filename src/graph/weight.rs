use std::{
    fmt::{Debug, Display},
    ops::{AddAssign, Sub},
};

use num::traits::Zero;

/// Edge weights accepted by the arborescence solvers.
///
/// Besides the usual arithmetic, a weight has to support the reweighting of edges entering a
/// contracted cycle: [`Weight::reduced_by`] subtracts the weight of the cheapest edge entering
/// the same node and must never produce a negative value (or a negative zero) when `other` is
/// not larger than `self`.
pub trait Weight:
    Copy + Debug + Display + PartialOrd + Zero + Sub<Output = Self> + AddAssign + Send + Sync
{
    /// Returns `self - other` where `other <= self` is the minimum weight entering the same node
    fn reduced_by(self, other: Self) -> Self;

    /// Returns true if the value may be used as edge weight, i.e. it is finite and non-negative
    fn is_admissible(&self) -> bool;
}

macro_rules! impl_integer_weight {
    ($($t : ty),*) => {
        $(
            impl Weight for $t {
                #[inline(always)]
                fn reduced_by(self, other: Self) -> Self {
                    self - other
                }

                #[inline(always)]
                fn is_admissible(&self) -> bool {
                    *self >= Self::zero()
                }
            }
        )*
    };
}

macro_rules! impl_float_weight {
    ($($t : ty),*) => {
        $(
            impl Weight for $t {
                #[inline(always)]
                fn reduced_by(self, other: Self) -> Self {
                    // clamping also maps -0.0 to +0.0
                    let diff = self - other;
                    if diff > 0.0 { diff } else { 0.0 }
                }

                #[inline(always)]
                fn is_admissible(&self) -> bool {
                    self.is_finite() && *self >= 0.0
                }
            }
        )*
    };
}

impl_integer_weight!(u32, u64, usize, i32, i64);
impl_float_weight!(f32, f64);
