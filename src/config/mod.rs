mod logging;
mod server;

pub use logging::init_logging;
pub use server::ServerConfig;
