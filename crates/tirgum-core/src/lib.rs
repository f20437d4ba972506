pub mod connectivity;
pub mod debounce;
pub mod session;

pub use connectivity::{AlwaysOnline, Connectivity, TcpProbe};
pub use debounce::Debouncer;
pub use session::{CONNECT_MESSAGE, FAILED_MESSAGE, OFFLINE_MESSAGE, TranslationSession};
