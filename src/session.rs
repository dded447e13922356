//! 対話式の単語登録セッション
//!
//! 単語入力 → 辞書取得・解析 → レッスン番号 → (動詞なら活用取得) → 重複判定 → 追加・保存
//!
//! ワークブックは開始時に1回だけ読み込み、追加のたびにブック全体を保存する。

use crate::config::Config;
use crate::conjugation;
use crate::error::Result;
use crate::fetch::DocumentFetcher;
use crate::lexicon::{self, LookupOutcome};
use crate::prompt::Prompter;
use crate::workbook;
use german_vocab_common::{display_word, AddOutcome, VocabBook, WordEntry, WordRecord};
use scraper::Html;
use std::path::{Path, PathBuf};

pub const WORD_PROMPT: &str = "Enter the word (or 'q' to quit)";
pub const LESSON_PROMPT: &str = "Which lesson did you learn this word in?";
const QUIT: &str = "q";

/// 1語ごとの処理結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordReport {
    Added {
        word: String,
        definition: String,
        lesson: u32,
        targets: Vec<String>,
    },
    Duplicate {
        word: String,
        definition: String,
    },
    /// 訳語が見つからない・ページ構造が想定外
    Skipped {
        word: String,
        reason: String,
    },
    FetchFailed {
        word: String,
        reason: String,
    },
}

impl std::fmt::Display for WordReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WordReport::Added { word, definition, lesson, .. } => {
                write!(f, "✅ Added '{}' - {} under lesson {}.", word, definition, lesson)
            }
            WordReport::Duplicate { word, definition } => {
                write!(f, "⚠️ '{}' already exists! - {}", word, definition)
            }
            WordReport::Skipped { word, reason } => {
                write!(f, "⚠️ Skipping '{}' due to missing data ({}).", word, reason)
            }
            WordReport::FetchFailed { word, reason } => {
                write!(f, "❌ Error: unable to fetch '{}': {}", word, reason)
            }
        }
    }
}

pub struct Session<'a> {
    config: &'a Config,
    fetcher: &'a dyn DocumentFetcher,
    prompter: &'a mut dyn Prompter,
    book: VocabBook,
    path: PathBuf,
}

impl<'a> Session<'a> {
    pub fn open(
        config: &'a Config,
        path: &Path,
        fetcher: &'a dyn DocumentFetcher,
        prompter: &'a mut dyn Prompter,
    ) -> Result<Self> {
        let book = workbook::open_or_create(path)?;
        Ok(Self {
            config,
            fetcher,
            prompter,
            book,
            path: path.to_path_buf(),
        })
    }

    pub fn book(&self) -> &VocabBook {
        &self.book
    }

    /// 'q' が入力されるまで繰り返す
    pub fn run(&mut self) -> Result<()> {
        loop {
            let word = self.prompter.ask_text(WORD_PROMPT)?;
            let word = word.trim();
            if word == QUIT {
                break;
            }
            if word.is_empty() {
                continue;
            }

            let report = self.process_word(word)?;
            println!("{}", report);
        }
        Ok(())
    }

    /// 1語を処理。取得失敗・データ欠落・重複はエラーにせず報告として返す。
    pub fn process_word(&mut self, word: &str) -> Result<WordReport> {
        let url = self.config.dictionary_url_for(word);
        let body = match self.fetcher.fetch(&url) {
            Ok(body) => body,
            Err(e) if e.is_fetch_failure() => {
                return Ok(WordReport::FetchFailed {
                    word: word.to_string(),
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        };

        let outcome = {
            let doc = Html::parse_document(&body);
            lexicon::parse_entry(&doc, self.prompter, self.config.page_size)?
        };
        let found = match outcome {
            LookupOutcome::Found(found) => found,
            LookupOutcome::NoDefinition => {
                return Ok(WordReport::Skipped {
                    word: word.to_string(),
                    reason: "no definition found".into(),
                });
            }
            LookupOutcome::Malformed => {
                return Ok(WordReport::Skipped {
                    word: word.to_string(),
                    reason: "could not determine the article or definition".into(),
                });
            }
        };

        let lesson = self.prompter.ask_number(LESSON_PROMPT)?;
        let entry = WordEntry::new(word, found.article, found.definition, found.is_verb, lesson);

        // 活用取得の前に重複を弾く
        if let Some((word, definition)) = self.book.find_duplicate(&display_word(&entry), entry.definition()) {
            return Ok(WordReport::Duplicate { word, definition });
        }

        let conjugations = if entry.is_verb() {
            conjugation::fetch_conjugations(self.fetcher, self.config, entry.raw_word())
        } else {
            None
        };

        let record = WordRecord::from_entry(&entry, conjugations);
        // 保存に成功するまでは self.book を変更しない
        let mut updated = self.book.clone();
        match updated.add(&record) {
            AddOutcome::Added { word, definition, targets } => {
                log::debug!("'{}' routed to {:?}", word, targets);
                workbook::save(&updated, &self.path)?;
                self.book = updated;
                Ok(WordReport::Added {
                    word,
                    definition,
                    lesson,
                    targets,
                })
            }
            AddOutcome::Duplicate { word, definition } => Ok(WordReport::Duplicate { word, definition }),
        }
    }
}
