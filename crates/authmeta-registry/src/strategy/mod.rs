//! Strategy dispatch.
//!
//! Strategies are looked up by the names carried in metadata records. Only
//! the contract lives here; concrete credential checks are provided by the
//! embedding application.

pub mod action;
pub mod registry;
pub mod request;

pub use action::AuthenticateAction;
pub use registry::{AuthenticationStrategy, ResolvedStrategy, StrategyRegistry};
pub use request::{AuthRequest, UserProfile};
