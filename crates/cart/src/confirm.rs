//! Pluggable checkout confirmation.
//!
//! The checkout flow shows a blocking user-facing acknowledgement
//! before the cart is cleared. Rather than tying the engine to a
//! platform modal, the capability is a synchronous callback returning
//! proceed/cancel.

/// Blocking user-facing confirmation shown before checkout clears the
/// cart.
pub trait CheckoutPrompt {
    /// Present `message` and return whether to proceed.
    fn confirm(&self, message: &str) -> bool;
}

/// Prompt that always proceeds.
///
/// Matches an acknowledge-only dialog that offers no cancel path.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl CheckoutPrompt for AlwaysConfirm {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

impl<P: CheckoutPrompt + ?Sized> CheckoutPrompt for &P {
    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }
}
