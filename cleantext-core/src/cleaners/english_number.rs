//! 英文数字展开模块
//!
//! 将阿拉伯数字展开为英文单词
//!
//! 支持：千分位、英镑、美元（dollars/cents）、小数（point）、序数词（1st）、
//! 年份读法（1905 → nineteen oh five）

use num2words::Num2Words;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::cleaners::tokenizer::{
    rewrite_matches, strip_group_separators, DECIMAL_NUMBER_RE, NUMBER_RE,
};
use crate::error::{TextNormError, TextNormResult};

static POUNDS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"£([0-9,]*[0-9]+)").expect("pounds pattern"));

static DOLLARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$([0-9.,]*[0-9]+)").expect("dollars pattern"));

static ORDINAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+(st|nd|rd|th)").expect("ordinal pattern"));

/// 英文数字展开器
pub struct EnglishNumberExpander;

impl EnglishNumberExpander {
    /// 展开文本中的所有数字
    pub fn normalize(text: &str) -> TextNormResult<String> {
        let text = strip_group_separators(text);

        let text = POUNDS_RE
            .replace_all(&text, |caps: &Captures<'_>| format!("{} pounds", &caps[1]))
            .into_owned();

        let text = rewrite_matches(&DOLLARS_RE, &text, |caps| Self::expand_dollars(&caps[1]))?;

        let text = DECIMAL_NUMBER_RE
            .replace_all(&text, |caps: &Captures<'_>| caps[1].replace('.', " point "))
            .into_owned();

        let text = rewrite_matches(&ORDINAL_RE, &text, |caps| {
            let digits = caps[0].trim_end_matches(char::is_alphabetic);
            Self::ordinal(Self::parse_literal(digits)?)
        })?;

        rewrite_matches(&NUMBER_RE, &text, |caps| {
            Self::expand_number(Self::parse_literal(&caps[0])?)
        })
    }

    /// 展开美元金额（"2.50" → "two dollars, fifty cents"）
    ///
    /// 数字部分保留为阿拉伯数字，由后续整数改写处理
    fn expand_dollars(amount: &str) -> TextNormResult<String> {
        let parts: Vec<&str> = amount.split('.').collect();
        if parts.len() > 2 {
            // 无法识别的格式
            return Ok(format!("{} dollars", amount));
        }

        let dollars = match parts[0] {
            "" => 0,
            digits => Self::parse_literal(&digits.replace(',', ""))?,
        };
        let cents = match parts.get(1) {
            Some(digits) if !digits.is_empty() => Self::parse_literal(digits)?,
            _ => 0,
        };

        let dollar_unit = if dollars == 1 { "dollar" } else { "dollars" };
        let cent_unit = if cents == 1 { "cent" } else { "cents" };

        let result = match (dollars, cents) {
            (0, 0) => "zero dollars".to_string(),
            (d, 0) => format!("{} {}", d, dollar_unit),
            (0, c) => format!("{} {}", c, cent_unit),
            (d, c) => format!("{} {}, {} {}", d, dollar_unit, c, cent_unit),
        };

        Ok(result)
    }

    /// 展开整数，1001-2999 按年份读
    fn expand_number(num: i64) -> TextNormResult<String> {
        if num > 1000 && num < 3000 {
            if num == 2000 {
                return Ok("two thousand".to_string());
            }
            if num > 2000 && num < 2010 {
                return Ok(format!("two thousand {}", Self::cardinal(num % 100)?));
            }
            if num % 100 == 0 {
                return Ok(format!("{} hundred", Self::cardinal(num / 100)?));
            }

            let (high, low) = (num / 100, num % 100);
            let low = if low < 10 {
                format!("oh {}", Self::cardinal(low)?)
            } else {
                Self::cardinal(low)?
            };
            return Ok(format!("{} {}", Self::cardinal(high)?, low));
        }

        Self::cardinal(num)
    }

    /// 基数词
    fn cardinal(num: i64) -> TextNormResult<String> {
        Num2Words::new(num)
            .to_words()
            .map_err(|e| TextNormError::EnglishConversion(format!("{}: {:?}", num, e)))
    }

    /// 序数词
    fn ordinal(num: i64) -> TextNormResult<String> {
        Num2Words::new(num)
            .ordinal()
            .to_words()
            .map_err(|e| TextNormError::EnglishConversion(format!("{}: {:?}", num, e)))
    }

    fn parse_literal(literal: &str) -> TextNormResult<i64> {
        literal.parse::<i64>().map_err(|source| TextNormError::NumberParse {
            literal: literal.to_string(),
            source,
        })
    }
}
