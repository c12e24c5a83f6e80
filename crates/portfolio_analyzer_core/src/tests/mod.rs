//! Engine-level tests
//!
//! Tests are organized by topic:
//! - `golden` - Pinned outputs for the preset portfolios under the default seed
//! - `properties` - Determinism, ordering, horizon trend, fixed vs varying mode
//! - `validation` - Rejected inputs and the index-floor boundaries

mod validation;
