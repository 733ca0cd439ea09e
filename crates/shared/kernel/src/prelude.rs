pub use crate::config::{ConfigError, load_config};
pub use crate::domain::config::ApiConfig;
pub use crate::domain::registry::{FeatureSlice, InitializedSlice};
#[cfg(feature = "server")]
pub use crate::server::{ApiState, ApiStateError, Session};
pub use crate::safe_nanoid;
#[cfg(feature = "upstream")]
pub use crate::upstream::{UpstreamClient, UpstreamError};
