//! Exotically-sized integers used by the MIDI wire protocol.
//!
//! Every type here wraps a plain unsigned integer and masks it down to its bit width whenever a
//! value is created, so an out-of-range field cannot be represented at all.

use core::fmt;

/// Slightly restricted integers.
macro_rules! restricted_int {
    {$(#[$attr:meta])* $name:ident : $inner:tt => $bits:expr} => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Default)]
        #[repr(transparent)]
        #[allow(non_camel_case_types)]
        pub struct $name($inner);
        impl From<$inner> for $name {
            /// Lossy conversion, loses the top bits.
            #[inline]
            fn from(raw: $inner) -> $name {
                $name::from_int_lossy(raw)
            }
        }
        impl From<$name> for $inner {
            #[inline]
            fn from(restricted: $name) -> $inner {restricted.0}
        }
        impl fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
        impl $name {
            const MASK: $inner = (1 << $bits) - 1;

            /// The number of significant bits in this restricted integer.
            pub const BITS: u32 = $bits;

            /// The maximum value that this restricted integer can hold.
            #[inline]
            pub const fn max_value() -> $name {
                $name (Self::MASK)
            }

            /// Creates a restricted int from its non-restricted counterpart by masking off the
            /// extra bits.
            #[inline]
            pub const fn new(raw: $inner) -> $name {
                $name (raw & Self::MASK)
            }

            /// Creates a restricted int from its non-restricted counterpart by masking off the
            /// extra bits.
            #[inline]
            pub const fn from_int_lossy(raw: $inner) -> $name {
                $name (raw & Self::MASK)
            }

            /// Returns `Some` if the raw integer is within range of the restricted integer, and
            /// `None` otherwise.
            #[inline]
            pub fn try_from(raw: $inner) -> Option<$name> {
                if raw <= Self::MASK {
                    Some($name(raw))
                }else{
                    None
                }
            }

            /// Get the inner integer out of the wrapper.
            /// The inner integer is guaranteed to be in range of the restricted wrapper.
            #[inline]
            pub const fn as_int(self) -> $inner {
                self.0
            }
        }
        impl PartialEq<$inner> for $name {
            fn eq(&self, rhs: &$inner) -> bool {
                self.as_int() == *rhs
            }
        }
        impl PartialOrd<$inner> for $name {
            fn partial_cmp(&self, rhs: &$inner) -> Option<core::cmp::Ordering> {
                Some(self.as_int().cmp(rhs))
            }
        }
        impl PartialEq<$name> for $inner {
            fn eq(&self, rhs: &$name) -> bool {
                *self == rhs.as_int()
            }
        }
        impl PartialOrd<$name> for $inner {
            fn partial_cmp(&self, rhs: &$name) -> Option<core::cmp::Ordering> {
                Some(self.cmp(&rhs.as_int()))
            }
        }
        impl core::ops::BitOr for $name {
            type Output = Self;
            fn bitor(self, other: Self) -> Self {
                Self::new(self.as_int() | other.as_int())
            }
        }
        impl core::ops::BitAnd for $name {
            type Output = Self;
            fn bitand(self, other: Self) -> Self {
                Self::new(self.as_int() & other.as_int())
            }
        }
        impl core::ops::BitXor for $name {
            type Output = Self;
            fn bitxor(self, other: Self) -> Self {
                Self::new(self.as_int() ^ other.as_int())
            }
        }
        impl core::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, other: Self) {
                *self = *self | other
            }
        }
        impl core::ops::BitAndAssign for $name {
            fn bitand_assign(&mut self, other: Self) {
                *self = *self & other
            }
        }
        impl core::ops::BitXorAssign for $name {
            fn bitxor_assign(&mut self, other: Self) {
                *self = *self ^ other
            }
        }
    };
}

restricted_int! {
    /// A 14-bit integer type.
    ///
    /// Wraps the `u16` type and ensures that the top two bits are always zero.
    /// Used for the combined value of a pitch bend, which travels as two 7-bit halves.
    u14: u16 => 14
}
restricted_int! {
    /// A 7-bit integer type.
    ///
    /// Wraps the `u8` type and ensures that the top bit is always zero.
    /// MIDI data bytes, and in particular controller numbers, are 7-bit.
    u7: u8 => 7
}
restricted_int! {
    /// A 4-bit integer type.
    ///
    /// Wraps the `u8` type and ensures that the top 4 bits are always zero.
    /// MIDI channels are the low nibble of a status byte.
    u4: u8 => 4
}
restricted_int! {
    /// A 3-bit integer type.
    ///
    /// Wraps the `u8` type and ensures that the top 5 bits are always zero.
    u3: u8 => 3
}

impl u14 {
    /// Join two 7-bit halves, least significant first, as they appear on the wire.
    ///
    /// The top bit of each half is ignored.
    #[inline]
    pub fn from_lsb_msb(lsb: u8, msb: u8) -> u14 {
        let lsb = u7::new(lsb).as_int() as u16;
        let msb = u7::new(msb).as_int() as u16;
        u14::new(msb << 7 | lsb)
    }

    /// Split into its two 7-bit halves, least significant first.
    #[inline]
    pub fn to_lsb_msb(self) -> (u7, u7) {
        let raw = self.as_int();
        (u7::new(raw as u8), u7::new((raw >> 7) as u8))
    }
}
