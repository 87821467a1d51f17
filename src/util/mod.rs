//! Browser helpers used by the route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! These wrap `web_sys` so guard logic stays testable; off-browser they are
//! no-ops.

pub mod location;
pub mod storage;
