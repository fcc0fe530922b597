/// Cached query layer
///
/// This module handles:
/// - Injected time source for freshness checks (clock.rs)
/// - The keyed, time-boxed response store (store.rs)
/// - The fail-soft query facade every screen talks to (directory.rs)

pub mod clock;
pub mod directory;
pub mod store;

pub use clock::{Clock, SystemClock};
pub use directory::CachedDirectory;
pub use store::{CacheKey, CacheValue, ResponseCache};
