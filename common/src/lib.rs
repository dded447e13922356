//! German Vocab Common Library
//!
//! 単語データモデル・振り分け・重複判定（ファイル入出力なし）

pub mod types;
pub mod record;
pub mod book;
pub mod error;
pub mod export;

pub use types::{Article, ConjugationSet, Person, WordEntry};
pub use record::{Category, RowKind, WordRecord, display_word, categories_for};
pub use book::{AddOutcome, Collection, Row, VocabBook, sort_key};
pub use error::{Error, Result};
