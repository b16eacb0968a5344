/// Derives the by-value `Add`/`Sub` and the `Sum` of a point type from its
/// `AddAssign<&Self>`/`SubAssign<&Self>` impls.
macro_rules! impl_additive_ops_from_ref {
    ($point: ident) => {
        impl core::ops::Add<Self> for $point {
            type Output = Self;

            #[inline]
            fn add(mut self, other: Self) -> Self {
                self += &other;
                self
            }
        }

        impl core::ops::Sub<Self> for $point {
            type Output = Self;

            #[inline]
            fn sub(mut self, other: Self) -> Self {
                self -= &other;
                self
            }
        }

        impl core::iter::Sum<Self> for $point {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(<Self as ark_ff::Zero>::zero(), |mut acc, p| {
                    acc += &p;
                    acc
                })
            }
        }
    };
}
