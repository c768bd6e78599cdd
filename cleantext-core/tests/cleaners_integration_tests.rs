//! 清洗管道集成测试
//!
//! 测试完整的清洗管道
//!
//! 运行方式（带详细日志）：
//!   RUST_LOG=debug cargo test --test cleaners_integration_tests -- --nocapture

use cleantext_core::cleaners::{RussianNumberExpander, NO_UNITS};
use cleantext_core::{
    english_cleaners, russian_cleaners, CleanTextConfig, CleanerEngine, CleanerKind,
    CleanersConfig, TextNormError,
};

/// 初始化日志（忽略重复初始化错误）
fn init_log() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

fn spell(num: i64) -> String {
    RussianNumberExpander::number_to_text(num, &NO_UNITS).unwrap()
}

#[test]
fn test_complete_pipeline_russian_numbers() {
    init_log();

    assert_eq!(russian_cleaners("1").unwrap(), "один");
    assert_eq!(russian_cleaners("2").unwrap(), "два");
    assert_eq!(russian_cleaners("11").unwrap(), "одиннадцать");
    assert_eq!(russian_cleaners("21").unwrap(), "двадцать один");
    assert_eq!(russian_cleaners("100").unwrap(), "сто");
    assert_eq!(russian_cleaners("1000").unwrap(), "одна тысяча");
    assert_eq!(russian_cleaners("2000").unwrap(), "две тысячи");
    assert_eq!(russian_cleaners("5000").unwrap(), "пять тысяч");
    assert_eq!(russian_cleaners("1000000").unwrap(), "один миллион");
    assert_eq!(russian_cleaners("0").unwrap(), "ноль");
}

#[test]
fn test_complete_pipeline_grouped_numbers() {
    init_log();

    // 千分位逗号先去掉，再整体展开
    assert_eq!(russian_cleaners("1,234").unwrap(), spell(1234));
    assert_eq!(russian_cleaners("1,000,000").unwrap(), "один миллион");
}

#[test]
fn test_complete_pipeline_decimals() {
    init_log();

    assert_eq!(
        russian_cleaners("3.14").unwrap(),
        format!("{} целых {} сотых", spell(3), spell(14))
    );

    // 后缀由小数位数决定
    let suffixes = [
        ("1.5", "десятых"),
        ("1.25", "сотых"),
        ("1.125", "тысячных"),
        ("1.0625", "десятитысячных"),
        ("1.03125", "стотысячных"),
        ("1.015625", "миллионных"),
    ];
    for (literal, suffix) in suffixes {
        let result = russian_cleaners(literal).unwrap();
        assert!(result.ends_with(suffix), "{} -> {}", literal, result);
    }
}

#[test]
fn test_complete_pipeline_errors_abort() {
    init_log();

    assert!(matches!(
        russian_cleaners("число 3.1415926"),
        Err(TextNormError::DecimalPlaceOverflow { digits: 7, max: 6 })
    ));
    assert!(matches!(
        russian_cleaners("1000000000000 звёзд"),
        Err(TextNormError::UnsupportedMagnitude { .. })
    ));
    assert!(matches!(
        russian_cleaners("123456789012345678901234567890"),
        Err(TextNormError::NumberParse { .. })
    ));
}

#[test]
fn test_complete_pipeline_idempotent_without_digits() {
    init_log();

    let once = russian_cleaners("В 1990 г. было 25 градусов, т.е. тепло").unwrap();
    assert!(!once.chars().any(|c| c.is_ascii_digit()));

    let twice = russian_cleaners(&once).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_complete_pipeline_abbreviations_after_numbers() {
    init_log();

    // 数词展开的结果不会再被缩写规则改写
    assert_eq!(
        russian_cleaners("5 м. и 2 км.").unwrap(),
        "пять метров и два километров"
    );
    assert_eq!(russian_cleaners("Екатерина II").unwrap(), "екатерина второй");
}

#[test]
fn test_complete_pipeline_negative_symmetry() {
    for n in [1i64, 2, 19, 101, 2022, 1_000_001, 987_654_321_012] {
        assert_eq!(spell(-n), format!("минус {}", spell(n)));
    }
}

#[test]
fn test_complete_pipeline_english() {
    init_log();

    assert_eq!(
        english_cleaners("Dr. Smith paid $2.50").unwrap(),
        "doctor smith paid two dollars, fifty cents"
    );
    assert_eq!(english_cleaners("the 1st  of   May").unwrap(), "the first of may");
}

#[test]
fn test_engine_from_config() {
    init_log();

    let config = CleanTextConfig {
        cleaners: CleanersConfig {
            pipeline: vec!["russian_cleaners".to_string()],
            record_changes: true,
        },
    };

    let engine = CleanerEngine::from_config(&config.cleaners).unwrap();
    assert_eq!(engine.cleaners(), &[CleanerKind::Russian]);

    let result = engine.process("Ровно 2000").unwrap();
    assert_eq!(result.text, "ровно две тысячи");
    assert_eq!(result.changes.len(), 1);
    assert_eq!(result.changes[0].before, "Ровно 2000");
}

#[test]
fn test_engine_rejects_unknown_cleaner() {
    let config = CleanersConfig {
        pipeline: vec!["russian_cleaners".to_string(), "nope".to_string()],
        record_changes: false,
    };

    assert!(matches!(
        CleanerEngine::from_config(&config),
        Err(TextNormError::UnknownCleaner(name)) if name == "nope"
    ));
}

#[test]
fn test_engine_shared_across_threads() {
    let engine = std::sync::Arc::new(CleanerEngine::new(vec![CleanerKind::Russian]));

    let handles: Vec<_> = (1..=4)
        .map(|n| {
            let engine = engine.clone();
            std::thread::spawn(move || engine.process(&n.to_string()).unwrap().text)
        })
        .collect();

    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec!["один", "два", "три", "четыре"]);
}
