//! Zero / empty value detection used by the `Optional` combinator.

/// Types that have a distinguished "not provided" value.
///
/// Mirrors the notion of a type's zero value: the empty string, `0`,
/// `false`, an empty collection, `None`.
pub trait ZeroValue {
    /// Returns `true` if `self` is the zero value of its type.
    fn is_zero_value(&self) -> bool;
}

impl ZeroValue for str {
    #[inline]
    fn is_zero_value(&self) -> bool {
        self.is_empty()
    }
}

impl ZeroValue for String {
    #[inline]
    fn is_zero_value(&self) -> bool {
        self.is_empty()
    }
}

macro_rules! zero_value_numeric {
    ($zero:literal => $($t:ty),+ $(,)?) => {
        $(
            impl ZeroValue for $t {
                #[inline]
                fn is_zero_value(&self) -> bool {
                    *self == $zero
                }
            }
        )+
    };
}

zero_value_numeric!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
zero_value_numeric!(0.0 => f32, f64);

impl ZeroValue for bool {
    #[inline]
    fn is_zero_value(&self) -> bool {
        !*self
    }
}

impl ZeroValue for char {
    #[inline]
    fn is_zero_value(&self) -> bool {
        *self == '\0'
    }
}

impl<T> ZeroValue for [T] {
    #[inline]
    fn is_zero_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> ZeroValue for Vec<T> {
    #[inline]
    fn is_zero_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> ZeroValue for Option<T> {
    #[inline]
    fn is_zero_value(&self) -> bool {
        self.is_none()
    }
}

impl<T: ZeroValue + ?Sized> ZeroValue for &T {
    #[inline]
    fn is_zero_value(&self) -> bool {
        (**self).is_zero_value()
    }
}

impl<T: ZeroValue + ?Sized> ZeroValue for Box<T> {
    #[inline]
    fn is_zero_value(&self) -> bool {
        (**self).is_zero_value()
    }
}
