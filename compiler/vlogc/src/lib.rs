//! Vlogc - the parse session driver
//!
//! A [`ParseSession`] owns everything one parse produces: the node arena,
//! the preprocessor context and the source tree, plus the syntax errors the
//! grammar reports. The external scanner and grammar drive it; once parsing
//! is done [`ParseSession::resolve`] links module instantiations and
//! [`ParseSession::release`] tears the whole session down at once.

mod config;
mod error;
mod session;
mod tracing_setup;

pub use config::SessionConfig;
pub use error::SyntaxError;
pub use session::ParseSession;
pub use tracing_setup::init_tracing;
