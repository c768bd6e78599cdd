//! 俄语数词词库
//!
//! 个位（含阴阳性）、十几、整十、整百、数量级（千/百万/十亿，各含三种复数形式）
//! 以及小数位后缀。所有表均为编译期常量，构造后不再修改。

/// 语法性别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    /// 阳性
    Masculine,
    /// 阴性
    Feminine,
}

/// 复数类别（斯拉夫语数词一致关系）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralClass {
    /// 1, 21, 31 ...
    One,
    /// 2-4, 22-24 ...
    Few,
    /// 0, 5-20, 25-30 ...
    Many,
}

impl PluralClass {
    /// 根据三位组的末两位确定复数类别
    ///
    /// 末两位为 10-19 时一律为 `Many`，否则看个位：1 → `One`，2-4 → `Few`，其余 → `Many`
    pub fn from_triad(value: u16) -> Self {
        if (10..=19).contains(&(value % 100)) {
            return PluralClass::Many;
        }

        match value % 10 {
            1 => PluralClass::One,
            2..=4 => PluralClass::Few,
            _ => PluralClass::Many,
        }
    }
}

/// 数词词形
///
/// 有的词不变形，有的随性别变化，有的随复数类别变化
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralForm {
    /// 不变形
    Invariant(&'static str),
    /// (阳性, 阴性)
    GenderPair(&'static str, &'static str),
    /// (One, Few, Many)
    PluralTriple(&'static str, &'static str, &'static str),
}

impl NumeralForm {
    /// 按性别和复数类别选择词形
    pub fn select(&self, gender: Gender, plural: PluralClass) -> &'static str {
        match *self {
            NumeralForm::Invariant(text) => text,
            NumeralForm::GenderPair(masculine, feminine) => match gender {
                Gender::Masculine => masculine,
                Gender::Feminine => feminine,
            },
            NumeralForm::PluralTriple(one, few, many) => match plural {
                PluralClass::One => one,
                PluralClass::Few => few,
                PluralClass::Many => many,
            },
        }
    }

    /// 所有词形是否均为空串
    pub fn is_empty(&self) -> bool {
        match *self {
            NumeralForm::Invariant(text) => text.is_empty(),
            NumeralForm::GenderPair(masculine, feminine) => {
                masculine.is_empty() && feminine.is_empty()
            }
            NumeralForm::PluralTriple(one, few, many) => {
                one.is_empty() && few.is_empty() && many.is_empty()
            }
        }
    }
}

/// 数量级（千、百万、十亿），也用作最低一级的计量单位描述
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagnitudeOrder {
    /// 三种复数形式
    pub forms: NumeralForm,
    /// 支配该级数词的语法性别
    pub gender: Gender,
}

impl MagnitudeOrder {
    /// 创建数量级描述
    pub const fn new(one: &'static str, few: &'static str, many: &'static str, gender: Gender) -> Self {
        Self {
            forms: NumeralForm::PluralTriple(one, few, many),
            gender,
        }
    }

    /// 按复数类别取词
    pub fn word(&self, plural: PluralClass) -> &'static str {
        self.forms.select(self.gender, plural)
    }
}

/// 默认单位：无单位词，阳性
pub const NO_UNITS: MagnitudeOrder = MagnitudeOrder::new("", "", "", Gender::Masculine);

/// 0-9
pub const ONES: [NumeralForm; 10] = [
    NumeralForm::Invariant("ноль"),
    NumeralForm::GenderPair("один", "одна"),
    NumeralForm::GenderPair("два", "две"),
    NumeralForm::Invariant("три"),
    NumeralForm::Invariant("четыре"),
    NumeralForm::Invariant("пять"),
    NumeralForm::Invariant("шесть"),
    NumeralForm::Invariant("семь"),
    NumeralForm::Invariant("восемь"),
    NumeralForm::Invariant("девять"),
];

/// 10-19，按个位索引
pub const TEENS: [&str; 10] = [
    "десять",
    "одиннадцать",
    "двенадцать",
    "тринадцать",
    "четырнадцать",
    "пятнадцать",
    "шестнадцать",
    "семнадцать",
    "восемнадцать",
    "девятнадцать",
];

/// 20-90，按十位索引（0 和 1 不使用）
pub const TENS: [&str; 10] = [
    "",
    "",
    "двадцать",
    "тридцать",
    "сорок",
    "пятьдесят",
    "шестьдесят",
    "семьдесят",
    "восемьдесят",
    "девяносто",
];

/// 100-900，按百位索引（0 不使用）
pub const HUNDREDS: [&str; 10] = [
    "",
    "сто",
    "двести",
    "триста",
    "четыреста",
    "пятьсот",
    "шестьсот",
    "семьсот",
    "восемьсот",
    "девятьсот",
];

/// 千、百万、十亿
pub static ORDERS: [MagnitudeOrder; 3] = [
    MagnitudeOrder::new("тысяча", "тысячи", "тысяч", Gender::Feminine),
    MagnitudeOrder::new("миллион", "миллиона", "миллионов", Gender::Masculine),
    MagnitudeOrder::new("миллиард", "миллиарда", "миллиардов", Gender::Masculine),
];

/// 小数位后缀，按 (小数位数 - 1) 索引
pub const DECIMAL_PLACES: [&str; 6] = [
    "десятых",
    "сотых",
    "тысячных",
    "десятитысячных",
    "стотысячных",
    "миллионных",
];

/// 负号
pub const MINUS: &str = "минус";

/// 整数部分与小数部分之间的连接词
pub const DECIMAL_POINT: &str = "целых";
