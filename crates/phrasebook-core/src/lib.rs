pub mod dictionary;
pub mod loader;
pub mod preprocess;
pub mod text;

pub use dictionary::{LoadError, PhraseDictionary, PhraseEntry};
pub use loader::{PhraseLoader, load_dictionary};
pub use preprocess::{NfkcPreprocessor, Preprocessor, RawPreprocessor};
