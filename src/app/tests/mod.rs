//! Tests for the app module.
//!
//! This module is organized into submodules by functionality:
//! - `helpers` - Mock gateway and shared test utilities
//! - `store` - Fetch transitions, ordering, and failure handling
//! - `keys` - Focus, navigation, search input, and paste handling
//! - `ui` - Full-screen rendering through `TestBackend`

#[allow(clippy::unwrap_used, clippy::expect_used)]
pub mod helpers;
