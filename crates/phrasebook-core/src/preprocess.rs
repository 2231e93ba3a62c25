use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor: Send + Sync {
    // Default strips line breaks only
    fn process(&self, text: &str) -> String {
        text.replace(['\n', '\r'], "")
    }
}

/// Leaves text as typed, minus line breaks
pub struct RawPreprocessor;
impl Preprocessor for RawPreprocessor {}

/// Folds compatibility forms (full-width latin, ligatures, ...) with NFKC
pub struct NfkcPreprocessor;
impl Preprocessor for NfkcPreprocessor {
    fn process(&self, text: &str) -> String {
        let text: String = text.nfkc().collect();
        text.replace(['\n', '\r'], "")
    }
}

/// Pick a preprocessor from the `unicode_normalization` switch
pub fn preprocessor(unicode_normalization: bool) -> Box<dyn Preprocessor> {
    if unicode_normalization {
        Box::new(NfkcPreprocessor)
    } else {
        Box::new(RawPreprocessor)
    }
}
