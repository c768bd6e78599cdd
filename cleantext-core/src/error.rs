use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextNormError {
    // 数字展开错误
    #[error("Failed to parse number literal: {literal}")]
    NumberParse {
        literal: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Number {value} exceeds the largest supported magnitude (billions)")]
    UnsupportedMagnitude { value: i64 },

    #[error("Decimal fraction has {digits} digits, at most {max} are supported")]
    DecimalPlaceOverflow { digits: usize, max: usize },

    #[error("Malformed number literal: {0}")]
    MalformedNumber(String),

    #[error("English number conversion failed: {0}")]
    EnglishConversion(String),

    // 清洗器选择错误
    #[error("Unknown cleaner: {0}")]
    UnknownCleaner(String),

    // 配置错误
    #[error("Config parse error: {path} - {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    // 其他错误
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TextNormResult<T> = Result<T, TextNormError>;
