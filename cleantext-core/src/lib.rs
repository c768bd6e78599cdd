//! CleanText Core Engine
//!
//! 语音合成前端的文本清洗引擎（英语 / 俄语）

#![warn(rust_2018_idioms)]

pub mod cleaners;
pub mod config;
pub mod error;

// Re-export key types
pub use cleaners::{
    basic_cleaners, english_cleaners, russian_cleaners, transliteration_cleaners, CleanResult,
    CleanerEngine, CleanerKind,
};
pub use config::{CleanTextConfig, CleanersConfig};
pub use error::{TextNormError, TextNormResult};

/// 初始化日志系统
///
/// 默认静默；调试模式 (--features debug-logs) 下按 CLEANTEXT_LOG 过滤输出
///
/// 注意: 此函数可以安全地多次调用
pub fn init_logging() {
    #[cfg(feature = "debug-logs")]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_env("CLEANTEXT_LOG")
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // 使用 try_init() 代替 init()，避免重复初始化时 panic
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(false))
            .with(filter)
            .try_init();
    }
}
