//! Activation code usage tracking.

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock};

use crate::product::Product;

/// Registry of redeemed activation codes.
///
/// Construct one per process (or per test) and pass it to whatever needs it.
/// The set only grows; codes are never un-marked. Expiration dates on digital
/// products are not consulted.
///
/// `is_code_used` followed by `use_code` is not atomic. Callers that need a
/// check-and-mark in one step should use the return value of [`use_code`].
///
/// [`use_code`]: CodeRegistry::use_code
#[derive(Debug, Default)]
pub struct CodeRegistry {
    used: RwLock<HashSet<String>>,
}

impl CodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff `use_code` was previously called with exactly this string.
    pub fn is_code_used(&self, code: &str) -> bool {
        // A panic while holding the lock cannot leave the set half-updated.
        let used = self.used.read().unwrap_or_else(PoisonError::into_inner);
        used.contains(code)
    }

    /// Mark `code` as used. Returns `true` if this call marked it, `false` if
    /// it was already used.
    pub fn use_code(&self, code: &str) -> bool {
        let mut used = self.used.write().unwrap_or_else(PoisonError::into_inner);
        let newly_used = used.insert(code.to_string());
        if newly_used {
            tracing::debug!(code, "activation code marked as used");
        } else {
            tracing::debug!(code, "activation code already used");
        }
        newly_used
    }

    /// Mark a digital product's activation code as used.
    ///
    /// Returns `false` for tangible products and for codes already used.
    pub fn redeem(&self, product: &Product) -> bool {
        match product.as_digital() {
            Some(digital) => self.use_code(&digital.code),
            None => {
                tracing::debug!(
                    product = product.name(),
                    "tangible product has no activation code"
                );
                false
            }
        }
    }

    /// Number of distinct codes used so far.
    pub fn len(&self) -> usize {
        self.used.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
