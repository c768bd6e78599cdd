//! Cleaner Engine - 主管道
//!
//! 组合各清洗步骤，按名称选择清洗器

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::cleaners::rules::{AbbreviationRule, RomanOrdinalRule};
use crate::cleaners::transliteration::convert_to_ascii;
use crate::cleaners::{EnglishNumberExpander, RussianNumberExpander};
use crate::config::CleanersConfig;
use crate::error::{TextNormError, TextNormResult};

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

/// 转小写
pub fn lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// 合并连续空白为单个空格
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").into_owned()
}

/// 基础清洗：转小写、合并空白，不做音译
pub fn basic_cleaners(text: &str) -> TextNormResult<String> {
    let text = lowercase(text);
    Ok(collapse_whitespace(&text))
}

/// 非英语文本：音译为 ASCII 后转小写、合并空白
pub fn transliteration_cleaners(text: &str) -> TextNormResult<String> {
    let text = convert_to_ascii(text);
    let text = lowercase(&text);
    Ok(collapse_whitespace(&text))
}

/// 英语文本：音译、转小写、数字展开、缩写展开、合并空白
pub fn english_cleaners(text: &str) -> TextNormResult<String> {
    let text = convert_to_ascii(text);
    let text = lowercase(&text);
    let text = EnglishNumberExpander::normalize(&text)?;
    let text = AbbreviationRule::expand_english(&text);
    Ok(collapse_whitespace(&text))
}

/// 俄语文本：转小写、数字展开、缩写展开、罗马数字序数词、合并空白
///
/// 数字展开在缩写展开之前执行，展开出的数词不含句点，不会触发缩写规则
pub fn russian_cleaners(text: &str) -> TextNormResult<String> {
    let text = lowercase(text);
    let text = RussianNumberExpander::normalize(&text)?;
    let text = AbbreviationRule::expand_russian(&text);
    let text = RomanOrdinalRule::expand_russian(&text);
    Ok(collapse_whitespace(&text))
}

/// 清洗器类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanerKind {
    /// 转小写 + 合并空白
    Basic,
    /// 音译 + 转小写 + 合并空白
    Transliteration,
    /// 英语完整清洗
    English,
    /// 俄语完整清洗
    Russian,
}

impl CleanerKind {
    /// 全部清洗器
    pub const ALL: [CleanerKind; 4] = [
        CleanerKind::Basic,
        CleanerKind::Transliteration,
        CleanerKind::English,
        CleanerKind::Russian,
    ];

    /// 配置中使用的名称
    pub fn name(&self) -> &'static str {
        match self {
            CleanerKind::Basic => "basic_cleaners",
            CleanerKind::Transliteration => "transliteration_cleaners",
            CleanerKind::English => "english_cleaners",
            CleanerKind::Russian => "russian_cleaners",
        }
    }

    /// 执行清洗
    pub fn apply(&self, text: &str) -> TextNormResult<String> {
        match self {
            CleanerKind::Basic => basic_cleaners(text),
            CleanerKind::Transliteration => transliteration_cleaners(text),
            CleanerKind::English => english_cleaners(text),
            CleanerKind::Russian => russian_cleaners(text),
        }
    }
}

impl fmt::Display for CleanerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CleanerKind {
    type Err = TextNormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| TextNormError::UnknownCleaner(name.to_string()))
    }
}

/// 清洗变更记录
#[derive(Debug, Clone)]
pub struct CleanChange {
    /// 产生变更的清洗器
    pub cleaner: CleanerKind,
    /// 清洗前文本
    pub before: String,
    /// 清洗后文本
    pub after: String,
}

/// 清洗结果
#[derive(Debug, Clone)]
pub struct CleanResult {
    /// 清洗后的文本
    pub text: String,
    /// 变更记录列表（未启用记录时为空）
    pub changes: Vec<CleanChange>,
}

/// 清洗引擎
///
/// 构造后不可变，可在多线程间共享
#[derive(Debug, Clone)]
pub struct CleanerEngine {
    cleaners: Vec<CleanerKind>,
    record_changes: bool,
}

impl CleanerEngine {
    /// 创建清洗引擎
    pub fn new(cleaners: Vec<CleanerKind>) -> Self {
        Self {
            cleaners,
            record_changes: true,
        }
    }

    /// 从逗号分隔的清洗器名称创建（例如 "basic_cleaners,russian_cleaners"）
    pub fn from_names(names: &str) -> TextNormResult<Self> {
        let cleaners = names
            .split(',')
            .filter(|name| !name.trim().is_empty())
            .map(CleanerKind::from_str)
            .collect::<TextNormResult<Vec<_>>>()?;

        Ok(Self::new(cleaners))
    }

    /// 从配置创建
    pub fn from_config(config: &CleanersConfig) -> TextNormResult<Self> {
        let cleaners = config
            .pipeline
            .iter()
            .map(|name| name.parse::<CleanerKind>())
            .collect::<TextNormResult<Vec<_>>>()?;

        Ok(Self {
            cleaners,
            record_changes: config.record_changes,
        })
    }

    /// 是否记录变更
    pub fn with_change_tracking(mut self, enabled: bool) -> Self {
        self.record_changes = enabled;
        self
    }

    /// 处理文本
    ///
    /// 任一清洗器失败则整个调用失败
    pub fn process(&self, text: &str) -> TextNormResult<CleanResult> {
        let mut current = text.to_string();
        let mut changes = Vec::new();

        for cleaner in &self.cleaners {
            let cleaned = cleaner.apply(&current).map_err(|e| {
                tracing::debug!("{} failed: {}", cleaner, e);
                e
            })?;

            if cleaned != current {
                tracing::debug!("{}: {:?} -> {:?}", cleaner, current, cleaned);
                if self.record_changes {
                    changes.push(CleanChange {
                        cleaner: *cleaner,
                        before: current.clone(),
                        after: cleaned.clone(),
                    });
                }
            }

            current = cleaned;
        }

        Ok(CleanResult {
            text: current,
            changes,
        })
    }

    /// 当前清洗器列表
    pub fn cleaners(&self) -> &[CleanerKind] {
        &self.cleaners
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_cleaners() {
        assert_eq!(
            basic_cleaners("  Hello   \t World\n").unwrap(),
            " hello world "
        );
    }

    #[test]
    fn test_transliteration_cleaners() {
        assert_eq!(transliteration_cleaners("Привет,  МИР").unwrap(), "privet, mir");
    }

    #[test]
    fn test_english_cleaners() {
        assert_eq!(
            english_cleaners("Dr. Smith has 3 cats.").unwrap(),
            "doctor smith has three cats."
        );
    }

    #[test]
    fn test_russian_cleaners() {
        assert_eq!(
            russian_cleaners("В  2000 г. Пётр I купил 21 кг. и т.д.").unwrap(),
            "в две тысячи год пётр первый купил двадцать один килограмм и так далее"
        );
    }

    #[test]
    fn test_russian_cleaners_decimal() {
        assert_eq!(
            russian_cleaners("Пи = 3.14").unwrap(),
            "пи = три целых четырнадцать сотых"
        );
    }

    #[test]
    fn test_cleaner_kind_from_str() {
        assert_eq!("russian_cleaners".parse::<CleanerKind>().unwrap(), CleanerKind::Russian);
        assert_eq!(" basic_cleaners ".parse::<CleanerKind>().unwrap(), CleanerKind::Basic);
        assert!(matches!(
            "klingon_cleaners".parse::<CleanerKind>(),
            Err(TextNormError::UnknownCleaner(_))
        ));
    }

    #[test]
    fn test_cleaner_kind_names_roundtrip() {
        for kind in CleanerKind::ALL {
            assert_eq!(kind.to_string().parse::<CleanerKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_engine_from_names() {
        let engine = CleanerEngine::from_names("basic_cleaners, russian_cleaners").unwrap();
        assert_eq!(engine.cleaners(), &[CleanerKind::Basic, CleanerKind::Russian]);

        assert!(CleanerEngine::from_names("basic_cleaners,nope").is_err());
    }

    #[test]
    fn test_engine_records_changes() {
        let engine = CleanerEngine::new(vec![CleanerKind::Basic, CleanerKind::Russian]);
        let result = engine.process("Ровно 5").unwrap();

        assert_eq!(result.text, "ровно пять");
        assert_eq!(result.changes.len(), 2);
        assert_eq!(result.changes[0].cleaner, CleanerKind::Basic);
        assert_eq!(result.changes[0].after, "ровно 5");
        assert_eq!(result.changes[1].after, "ровно пять");
    }

    #[test]
    fn test_engine_without_change_tracking() {
        let engine = CleanerEngine::new(vec![CleanerKind::Russian]).with_change_tracking(false);
        let result = engine.process("5").unwrap();

        assert_eq!(result.text, "пять");
        assert!(result.changes.is_empty());
    }

    #[test]
    fn test_engine_unchanged_text_has_no_changes() {
        let engine = CleanerEngine::new(vec![CleanerKind::Basic]);
        let result = engine.process("уже чисто").unwrap();
        assert!(result.changes.is_empty());
    }

    #[test]
    fn test_engine_propagates_errors() {
        let engine = CleanerEngine::new(vec![CleanerKind::Russian]);
        assert!(matches!(
            engine.process("0.1234567"),
            Err(TextNormError::DecimalPlaceOverflow { .. })
        ));
    }
}
