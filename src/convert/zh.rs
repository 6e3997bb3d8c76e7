use zhconv::{Variant, zhconv};

use super::{ConversionError, ScriptConverter};

/// Converter backed by the `zhconv` rulesets, targeting the generic `zh-Hant`
/// and `zh-Hans` variants rather than a regional one (`zh-TW`, `zh-CN`), so
/// only script forms change and regional vocabulary is left alone.
///
/// Conversion is total: unknown characters pass through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZhConverter;

impl ScriptConverter for ZhConverter {
    fn to_traditional(&self, text: &str) -> Result<String, ConversionError> {
        Ok(zhconv(text, Variant::ZhHant))
    }

    fn to_simplified(&self, text: &str) -> Result<String, ConversionError> {
        Ok(zhconv(text, Variant::ZhHans))
    }
}
