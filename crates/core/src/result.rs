//! Result type definition.

use crate::error::Error;

/// The standard Result type for TravelConnect operations.
///
/// # Examples
///
/// ```ignore
/// fn settings_route() -> Result<RoutePath> {
///     RoutePath::parse("/settings")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;
