//! Fixed-width address arithmetic.
//!
//! Provides the [`Address`] trait, implemented for `u32` (IPv4), `u128` (IPv6)
//! and `u64` (a plain integer space), along with the guarded step functions
//! [`predecessor`] and [`successor`].

use crate::error::CidrError;
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::ops::{BitAnd, BitOr, Not};

/// An unsigned integer address on the number line `[0, 2^BITS - 1]`.
pub trait Address:
    Copy
    + Ord
    + Hash
    + fmt::Debug
    + Send
    + Sync
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
    + 'static
{
    /// Address width in bits.
    const BITS: u8;
    /// Lowest address.
    const ZERO: Self;
    /// Highest address.
    const MAX: Self;

    fn trailing_zeros(self) -> u32;
    fn checked_add_one(self) -> Option<Self>;
    fn checked_sub_one(self) -> Option<Self>;
    /// `self >> shift`, or `None` when the shift covers the whole width.
    fn checked_shr(self, shift: u32) -> Option<Self>;

    /// Write the address in its family's usual notation.
    fn fmt_addr(self, f: &mut fmt::Formatter) -> fmt::Result;
    /// Parse an address written in its family's usual notation.
    fn parse_addr(s: &str) -> Result<Self, CidrError>;

    /// Wrap the address for `{}` formatting.
    fn display(self) -> AddrDisplay<Self> {
        AddrDisplay(self)
    }

    /// The host bits of a block with prefix length `prefix_len`: `2^(BITS - prefix_len) - 1`.
    fn hostmask(prefix_len: u8) -> Result<Self, CidrError> {
        if prefix_len > Self::BITS {
            Err(CidrError::InvalidPrefix {
                prefix: prefix_len,
                bits: Self::BITS,
            })
        } else {
            Ok(Self::MAX
                .checked_shr(u32::from(prefix_len))
                .unwrap_or(Self::ZERO))
        }
    }

    /// The network bits of a block with prefix length `prefix_len`.
    fn netmask(prefix_len: u8) -> Result<Self, CidrError> {
        Ok(!Self::hostmask(prefix_len)?)
    }
}

/// `Display` adapter produced by [`Address::display`].
#[derive(Clone, Copy)]
pub struct AddrDisplay<A>(A);

impl<A: Address> fmt::Display for AddrDisplay<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt_addr(f)
    }
}

macro_rules! impl_address {
    ($int:ty, |$a:ident, $f:ident| $fmt:block, |$s:ident| $parse:block) => {
        impl Address for $int {
            const BITS: u8 = <$int>::BITS as u8;
            const ZERO: Self = 0;
            const MAX: Self = <$int>::MAX;

            fn trailing_zeros(self) -> u32 {
                <$int>::trailing_zeros(self)
            }

            fn checked_add_one(self) -> Option<Self> {
                self.checked_add(1)
            }

            fn checked_sub_one(self) -> Option<Self> {
                self.checked_sub(1)
            }

            fn checked_shr(self, shift: u32) -> Option<Self> {
                <$int>::checked_shr(self, shift)
            }

            fn fmt_addr(self, $f: &mut fmt::Formatter) -> fmt::Result {
                let $a = self;
                $fmt
            }

            fn parse_addr(s: &str) -> Result<Self, CidrError> {
                let $s = s.trim();
                $parse
            }
        }
    };
}

impl_address!(
    u32,
    |a, f| { write!(f, "{}", Ipv4Addr::from(a)) },
    |s| {
        s.parse::<Ipv4Addr>()
            .map(u32::from)
            .map_err(|_| CidrError::Parse(format!("Invalid IPv4 address {s}")))
    }
);

impl_address!(
    u128,
    |a, f| { write!(f, "{}", Ipv6Addr::from(a)) },
    |s| {
        s.parse::<Ipv6Addr>()
            .map(u128::from)
            .map_err(|_| CidrError::Parse(format!("Invalid IPv6 address {s}")))
    }
);

impl_address!(
    u64,
    |a, f| { write!(f, "{a}") },
    |s| {
        s.parse::<u64>()
            .map_err(|_| CidrError::Parse(format!("Invalid integer address {s}")))
    }
);

/// Total order of two addresses by unsigned value.
pub fn compare<A: Address>(a: A, b: A) -> Ordering {
    a.cmp(&b)
}

/// `a - 1`, failing with [`CidrError::RangeUnderflow`] at address zero.
pub fn predecessor<A: Address>(a: A) -> Result<A, CidrError> {
    a.checked_sub_one().ok_or_else(|| CidrError::RangeUnderflow {
        addr: a.display().to_string(),
    })
}

/// `a + 1`, failing with [`CidrError::RangeOverflow`] at the top address.
pub fn successor<A: Address>(a: A) -> Result<A, CidrError> {
    a.checked_add_one().ok_or_else(|| CidrError::RangeOverflow {
        addr: a.display().to_string(),
    })
}

/// Shortest prefix length for which `addr` is a valid block base.
///
/// Address zero is aligned to every prefix, so the result is `/0`.
pub fn max_aligned_prefix<A: Address>(addr: A) -> u8 {
    let trailing_zeros = addr.trailing_zeros().min(u32::from(A::BITS)) as u8;
    A::BITS - trailing_zeros
}
