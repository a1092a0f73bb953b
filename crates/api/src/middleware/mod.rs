//! Authorization extractors.
//!
//! - [`manager::RequireManager`] -- Requires valid manager Basic credentials.

pub mod manager;
