//! Application services for session management.

mod session;

pub use session::{Session, SessionError, SessionResult, SessionService};
