//! ASCII 音译
//!
//! 将任意 Unicode 文本转写为最接近的 ASCII 形式，供只含 ASCII 符号表的模型使用

use deunicode::deunicode;

/// 转写为 ASCII（"Привет" → "Privet"）
pub fn convert_to_ascii(text: &str) -> String {
    if text.is_ascii() {
        return text.to_string();
    }
    deunicode(text)
}
