//! Core JMdict / KANJIDIC2 reader module

pub mod entities;
pub mod format;
pub mod reader;
pub mod types;
pub mod xml;
mod utils;

pub use reader::{Dictionary, JMdict, KanjiDic};
pub use types::error::{DictError, Result};
