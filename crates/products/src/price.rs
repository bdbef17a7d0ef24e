use serde::{Deserialize, Serialize};

use storefront_core::ValueObject;

/// Price in smallest currency unit (cents).
///
/// Unsigned integer storage keeps every price finite and non-negative, and
/// makes price comparison exact. Amounts finer than one cent cannot be
/// represented; callers round before constructing a `Price`.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }
}

impl ValueObject for Price {}

impl From<u64> for Price {
    fn from(cents: u64) -> Self {
        Self(cents)
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}
