//! Scenario tests that exercise collections and map queries together.
//!
//! - `helpers.rs`: a radial, identified, filterable test entity and factories
//! - `integration.rs`: end-to-end queries over populated collections

mod helpers;
