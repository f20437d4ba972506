pub mod response;
pub mod translator;

pub use response::{ResponseData, TranslationResponse};
pub use translator::{MyMemoryTranslator, probe_address};
