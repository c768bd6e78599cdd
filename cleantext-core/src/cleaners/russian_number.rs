//! 俄语数字展开模块
//!
//! 将阿拉伯数字展开为俄语数词，处理性别一致（одна тысяча / один миллион）
//! 和复数类别一致（тысяча / тысячи / тысяч）
//!
//! 支持范围：±999 999 999 999，小数最多 6 位

use crate::cleaners::russian_lexicon::{
    Gender, MagnitudeOrder, PluralClass, DECIMAL_PLACES, DECIMAL_POINT, HUNDREDS, MINUS,
    NO_UNITS, ONES, ORDERS, TEENS, TENS,
};
use crate::cleaners::tokenizer::{
    rewrite_matches, strip_group_separators, DECIMAL_NUMBER_RE, NUMBER_RE,
};
use crate::error::{TextNormError, TextNormResult};

/// 三位组（0-999）的转换结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triad {
    /// 支配后续数量级词的复数类别
    pub plural: PluralClass,
    /// 按阅读顺序排列的数词
    pub words: Vec<&'static str>,
}

/// 俄语数字展开器
pub struct RussianNumberExpander;

impl RussianNumberExpander {
    /// 展开文本中的所有数字
    ///
    /// # 示例
    /// ```
    /// # use cleantext_core::cleaners::RussianNumberExpander;
    /// let result = RussianNumberExpander::normalize("2000 лет").unwrap();
    /// assert_eq!(result, "две тысячи лет");
    /// ```
    pub fn normalize(text: &str) -> TextNormResult<String> {
        let text = strip_group_separators(text);

        let text = rewrite_matches(&DECIMAL_NUMBER_RE, &text, |caps| {
            Self::expand_decimal(&caps[1])
        })?;

        rewrite_matches(&NUMBER_RE, &text, |caps| {
            let num = Self::parse_literal(&caps[0])?;
            Self::number_to_text(num, &NO_UNITS)
        })
    }

    /// 转换一个三位组
    ///
    /// # 参数
    /// - `value`: 0-999
    /// - `gender`: 当前数量级支配的性别（决定 один/одна、два/две）
    pub fn convert_triad(value: u16, gender: Gender) -> Triad {
        debug_assert!(value < 1000, "triad out of range: {}", value);

        let value = value % 1000;
        let plural = PluralClass::from_triad(value);
        let hundreds = usize::from(value / 100);
        let tens = usize::from(value / 10 % 10);
        let ones = usize::from(value % 10);

        let mut words = Vec::with_capacity(3);

        if hundreds > 0 {
            words.push(HUNDREDS[hundreds]);
        }

        if tens == 1 {
            // 10-19 用单个词
            words.push(TEENS[ones]);
        } else {
            if tens >= 2 {
                words.push(TENS[tens]);
            }
            if ones > 0 {
                words.push(ONES[ones].select(gender, plural));
            }
        }

        Triad { plural, words }
    }

    /// 将整数转换为俄语数词
    ///
    /// # 参数
    /// - `num`: 整数，绝对值不超过 999 999 999 999
    /// - `units`: 最低一级的计量单位（例如 рубль），无单位时用 `NO_UNITS`
    ///
    /// # 返回
    /// - `Ok(String)`: 以空格分隔的数词
    /// - `Err(UnsupportedMagnitude)`: 超出十亿级
    pub fn number_to_text(num: i64, units: &MagnitudeOrder) -> TextNormResult<String> {
        if num == 0 {
            let zero = ONES[0].select(units.gender, PluralClass::Many);
            let unit_word = units.word(PluralClass::Many);
            if unit_word.is_empty() {
                return Ok(zero.to_string());
            }
            return Ok(format!("{} {}", zero, unit_word));
        }

        let tiers: [&MagnitudeOrder; 4] = [units, &ORDERS[0], &ORDERS[1], &ORDERS[2]];
        let mut rest = num.unsigned_abs();
        let mut groups: Vec<Vec<&'static str>> = Vec::with_capacity(tiers.len());

        for (tier, order) in tiers.iter().enumerate() {
            if rest == 0 {
                break;
            }

            let triad = Self::convert_triad((rest % 1000) as u16, order.gender);
            let mut group = triad.words;

            // 高位全零的三位组不输出数量级词
            if tier == 0 || !group.is_empty() {
                let order_word = order.word(triad.plural);
                if !order_word.is_empty() {
                    group.push(order_word);
                }
            }

            groups.push(group);
            rest /= 1000;
        }

        if rest > 0 {
            return Err(TextNormError::UnsupportedMagnitude { value: num });
        }

        let mut words = Vec::new();
        if num < 0 {
            words.push(MINUS);
        }
        words.extend(groups.into_iter().rev().flatten());

        Ok(words.join(" "))
    }

    /// 展开小数（"3.14" → "три целых четырнадцать сотых"）
    ///
    /// 小数部分按普通整数读，前导零不影响读出的数值（"3.05" 读作 "пять сотых"）
    pub fn expand_decimal(literal: &str) -> TextNormResult<String> {
        let (integer_part, fraction_part) = literal
            .split_once('.')
            .filter(|(integer, fraction)| !integer.is_empty() && !fraction.is_empty())
            .ok_or_else(|| TextNormError::MalformedNumber(literal.to_string()))?;

        let places = fraction_part.len();
        let suffix = DECIMAL_PLACES
            .get(places - 1)
            .ok_or(TextNormError::DecimalPlaceOverflow {
                digits: places,
                max: DECIMAL_PLACES.len(),
            })?;

        let integer = Self::number_to_text(Self::parse_literal(integer_part)?, &NO_UNITS)?;
        let fraction = Self::number_to_text(Self::parse_literal(fraction_part)?, &NO_UNITS)?;

        Ok(format!("{} {} {} {}", integer, DECIMAL_POINT, fraction, suffix))
    }

    /// 解析纯数字串
    fn parse_literal(literal: &str) -> TextNormResult<i64> {
        if literal.is_empty() || !literal.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TextNormError::MalformedNumber(literal.to_string()));
        }

        literal.parse::<i64>().map_err(|source| TextNormError::NumberParse {
            literal: literal.to_string(),
            source,
        })
    }
}
