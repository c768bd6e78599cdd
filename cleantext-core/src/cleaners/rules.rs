//! 替换规则模块
//!
//! AbbreviationRule（英语/俄语缩写）, RomanOrdinalRule（I-X 序数词）

use once_cell::sync::Lazy;
use regex::{Captures, NoExpand, Regex};

/// 单条替换规则
pub struct SubstitutionRule {
    pattern: Regex,
    replacement: &'static str,
}

impl SubstitutionRule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("substitution pattern"),
            replacement,
        }
    }

    /// 应用到文本
    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, NoExpand(self.replacement))
            .into_owned()
    }
}

/// 英语缩写表（缩写不含末尾句点）
const ENGLISH_ABBREVIATIONS: &[(&str, &str)] = &[
    ("mrs", "misess"),
    ("mr", "mister"),
    ("dr", "doctor"),
    ("st", "saint"),
    ("co", "company"),
    ("jr", "junior"),
    ("maj", "major"),
    ("gen", "general"),
    ("drs", "doctors"),
    ("rev", "reverend"),
    ("lt", "lieutenant"),
    ("hon", "honorable"),
    ("sgt", "sergeant"),
    ("capt", "captain"),
    ("esq", "esquire"),
    ("ltd", "limited"),
    ("col", "colonel"),
    ("ft", "fort"),
];

/// 俄语缩写表（正则片段，按顺序匹配）
const RUSSIAN_ABBREVIATIONS: &[(&str, &str)] = &[
    (r"т\.д\.", "так далее"),
    (r"т\. д\.", "так далее"),
    (r"т\.е\.", "то есть"),
    (r"т\. е\.", "то есть"),
    (r"т\.к\.", "так как"),
    (r"т\. к\.", "так как"),
    (r"м\.", "метров"),
    (r"см\.", "сантиметров"),
    (r"км\.", "километров"),
    ("г-жа", "госпожа"),
    ("г-дин", "господин"),
    // "г.г." 和 "гг." 必须排在 "г." 之前
    (r"г\.г\.", "годы"),
    (r"гг\.", "годы"),
    (r"г\.", "год"),
    (r"н\.э\.", "нашей эры"),
    (r"кг\.", "килограмм"),
];

static ENGLISH_RULES: Lazy<Vec<SubstitutionRule>> = Lazy::new(|| {
    ENGLISH_ABBREVIATIONS
        .iter()
        .map(|&(abbr, full)| SubstitutionRule::new(&format!(r"(?i)\b{}\.", abbr), full))
        .collect()
});

static RUSSIAN_RULES: Lazy<Vec<SubstitutionRule>> = Lazy::new(|| {
    RUSSIAN_ABBREVIATIONS
        .iter()
        .map(|&(pattern, full)| SubstitutionRule::new(&format!(r"(?i)\b{}", pattern), full))
        .collect()
});

/// AbbreviationRule - 缩写展开规则
pub struct AbbreviationRule;

impl AbbreviationRule {
    /// 展开英语缩写（"Dr." → "doctor"）
    pub fn expand_english(text: &str) -> String {
        Self::apply_all(&ENGLISH_RULES, text)
    }

    /// 展开俄语缩写（"т.е." → "то есть"）
    pub fn expand_russian(text: &str) -> String {
        Self::apply_all(&RUSSIAN_RULES, text)
    }

    fn apply_all(rules: &[SubstitutionRule], text: &str) -> String {
        rules
            .iter()
            .fold(text.to_string(), |acc, rule| rule.apply(&acc))
    }
}

/// 罗马数字 I-X（只匹配完整单词）
static ROMAN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(viii|vii|vi|iv|v|iii|ii|ix|i|x)\b").expect("roman numeral pattern")
});

/// RomanOrdinalRule - 罗马数字序数词规则（用于君主名号，如 "Пётр I"）
pub struct RomanOrdinalRule;

impl RomanOrdinalRule {
    /// 罗马数字对应的俄语序数词
    pub fn ordinal(numeral: &str) -> Option<&'static str> {
        let word = match numeral.to_lowercase().as_str() {
            "i" => "первый",
            "ii" => "второй",
            "iii" => "третий",
            "iv" => "четвертый",
            "v" => "пятый",
            "vi" => "шестой",
            "vii" => "седьмой",
            "viii" => "восьмой",
            "ix" => "девятый",
            "x" => "десятый",
            _ => return None,
        };
        Some(word)
    }

    /// 替换文本中的 I-X
    pub fn expand_russian(text: &str) -> String {
        ROMAN_RE
            .replace_all(text, |caps: &Captures<'_>| {
                Self::ordinal(&caps[1])
                    .map(str::to_string)
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}
