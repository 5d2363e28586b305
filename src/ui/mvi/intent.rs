//! Base trait for intents (user/system actions) in MVI architecture.

/// Trait for intent objects.
///
/// Intents represent:
/// - User actions (add to cart, remove from cart)
/// - System events (catalog fetched, fetch failed)
///
/// Intents are consumed once by a reducer and then discarded.
pub trait Intent: std::fmt::Debug + Send + 'static {
    /// Short name of the intent kind, used in log events instead of the
    /// full payload.
    fn tag(&self) -> &'static str;
}
