//! Tokenizer - 数字片段识别与改写
//!
//! 数字展开分三趟按顺序执行：
//! 1. 去掉分组数字中的千分位逗号（"1,234" → "1234"）
//! 2. 改写小数（"3.14"）
//! 3. 改写剩余的整数
//!
//! 第 1 趟必须在第 3 趟之前，否则 "1,234" 会被读成两个数；
//! 第 2 趟必须在第 3 趟之前，否则小数点两侧会被读成两个整数。

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::error::TextNormResult;

/// 含千分位逗号的数字串
pub static COMMA_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9][0-9,]+[0-9])").expect("comma number pattern"));

/// 小数
pub static DECIMAL_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+\.[0-9]+)").expect("decimal number pattern"));

/// 整数
pub static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").expect("number pattern"));

/// 去掉数字串内部的逗号
pub fn strip_group_separators(text: &str) -> String {
    COMMA_NUMBER_RE
        .replace_all(text, |caps: &Captures<'_>| caps[1].replace(',', ""))
        .into_owned()
}

/// 用可能失败的改写函数替换所有匹配
///
/// 任一匹配改写失败则整个调用失败，不产生部分输出
pub fn rewrite_matches<F>(re: &Regex, text: &str, mut rewrite: F) -> TextNormResult<String>
where
    F: FnMut(&Captures<'_>) -> TextNormResult<String>,
{
    let mut result = String::with_capacity(text.len());
    let mut last_end = 0;

    for caps in re.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };

        result.push_str(&text[last_end..whole.start()]);
        result.push_str(&rewrite(&caps)?);
        last_end = whole.end();
    }

    result.push_str(&text[last_end..]);
    Ok(result)
}

/// 文本中是否含有 ASCII 数字
pub fn contains_digits(text: &str) -> bool {
    text.chars().any(|ch| ch.is_ascii_digit())
}
