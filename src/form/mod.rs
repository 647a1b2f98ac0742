//! Form hosting
//!
//! Form kinds, the signup role toggle, and the session state the page keeps
//! while a user fills a form in.

pub mod kind;
pub mod session;

pub use kind::{FormKind, Role};
pub use session::{FieldState, FormSession, SubmitOutcome};
