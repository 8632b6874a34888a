//! camview-ui - Shared UI types and components for camview
//!
//! Contains display types and pure view components. Nothing in here fetches
//! data or talks to a router; navigation leaves through callbacks.

pub mod components;
pub mod display_types;

pub use components::*;
pub use display_types::*;
