mod health;
pub mod router;
mod session;
mod state;

pub use session::{Session, session_from_headers};
pub use state::{ApiState, ApiStateBuilder, ApiStateError, ApiStateInner};
