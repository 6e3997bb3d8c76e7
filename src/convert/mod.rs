//! Simplified/Traditional Chinese script conversion.

mod zh;

pub use zh::ZhConverter;

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("script conversion failed: {0}")]
    Failed(String),
}

/// Converts text between Simplified and Traditional Chinese.
/// Implemented by `ZhConverter` for production; mock implementations used in tests.
pub trait ScriptConverter {
    fn to_traditional(&self, text: &str) -> Result<String, ConversionError>;
    fn to_simplified(&self, text: &str) -> Result<String, ConversionError>;
}

/// True if `text` contains at least one CJK ideograph (Unified block or Extension A).
pub fn contains_chinese(text: &str) -> bool {
    text.chars()
        .any(|c| matches!(c, '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}'))
}
