use std::ops::Add;

/// Edge weight usable by the shortest path routines.
pub trait Weight: Copy + PartialOrd + Add<Output = Self> {
    fn zero() -> Self;

    /// `None` when the sum does not fit in the type.
    fn checked_add(self, other: Self) -> Option<Self>;

    /// Weights must be comparable and not below zero.
    fn is_valid(&self) -> bool {
        matches!(
            self.partial_cmp(&Self::zero()),
            Some(std::cmp::Ordering::Equal | std::cmp::Ordering::Greater)
        )
    }
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn zero() -> Self {
                    0
                }

                fn checked_add(self, other: Self) -> Option<Self> {
                    <$t>::checked_add(self, other)
                }
            }
        )*
    };
}

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn zero() -> Self {
                    0.0
                }

                fn checked_add(self, other: Self) -> Option<Self> {
                    Some(self + other)
                }
            }
        )*
    };
}

impl_integer_weight!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
impl_float_weight!(f32, f64);
