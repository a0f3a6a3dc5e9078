pub mod models;
pub mod transport;

pub use models::{create_model, ModelKind};
pub use transport::{HttpTransport, Transport, TransportError, DEFAULT_TIMEOUT};

