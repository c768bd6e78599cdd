//! 文本清洗模块
//!
//! TTS 前端的文本规范化：数字展开、缩写展开、音译、空白规整

pub mod russian_lexicon;
pub mod tokenizer;
pub mod russian_number;
pub mod english_number;
pub mod rules;
pub mod transliteration;
pub mod engine;

// 导出核心类型
pub use russian_lexicon::{Gender, MagnitudeOrder, NumeralForm, PluralClass, NO_UNITS};
pub use russian_number::{RussianNumberExpander, Triad};
pub use english_number::EnglishNumberExpander;
pub use rules::{AbbreviationRule, RomanOrdinalRule};
pub use engine::{
    basic_cleaners, english_cleaners, russian_cleaners, transliteration_cleaners, CleanChange,
    CleanResult, CleanerEngine, CleanerKind,
};
