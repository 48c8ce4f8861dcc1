//! Enum membership for raw numeric values.
//!
//! A Rust enum value is always a declared member, so membership is checked on
//! the raw representation before it becomes an enum: a wire field, a config
//! number, an FFI integer. [`requires::defined`](crate::requires::defined)
//! decodes the raw value or fails with `InvalidEnumValue`.

use std::fmt;

/// Integer type an enum can be represented by.
pub trait EnumRepr: Copy + PartialEq + fmt::Display + fmt::Debug + 'static {
    /// `true` only for `i32`, the representation of a plain fieldless enum.
    const INT32: bool;
}

macro_rules! impl_enum_repr {
    ($($ty:ty => $int32:literal),* $(,)?) => { $(
        impl EnumRepr for $ty {
            const INT32: bool = $int32;
        }
    )* };
}

impl_enum_repr!(
    i8 => false,
    i16 => false,
    i32 => true,
    i64 => false,
    isize => false,
    u8 => false,
    u16 => false,
    u32 => false,
    u64 => false,
    usize => false,
);

/// An enum whose named members can be decoded from a raw value.
///
/// Usually implemented with [`enum_definition!`](crate::enum_definition).
pub trait EnumDefinition: Sized {
    type Repr: EnumRepr;

    /// The member whose discriminant is `raw`, if any.
    fn from_repr(raw: Self::Repr) -> Option<Self>;

    /// Full type path, used in failure messages.
    fn enum_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Implement [`EnumDefinition`] for a fieldless enum by listing its members.
///
/// ```text
/// #[repr(i64)]
/// enum Level { Low = 1, High = 0x1_0000_0000 }
/// guardrail::enum_definition!(Level: i64 { Low, High });
/// ```
#[macro_export]
macro_rules! enum_definition {
    ($ty:ident : $repr:ty { $($variant:ident),+ $(,)? }) => {
        impl $crate::EnumDefinition for $ty {
            type Repr = $repr;

            fn from_repr(raw: $repr) -> ::core::option::Option<Self> {
                $(
                    if raw == $ty::$variant as $repr {
                        return ::core::option::Option::Some($ty::$variant);
                    }
                )+
                ::core::option::Option::None
            }
        }
    };
}
