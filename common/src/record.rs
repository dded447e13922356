//! 単語レコードの正規化と振り分け
//!
//! - 表示形: `冠詞 + " " + 単語` をtrimしたもの
//! - 名詞（冠詞あり）は先頭だけ大文字で残りは小文字、それ以外は全て小文字
//! - 振り分け先: 名詞・その他 → General / 冠詞別 / Lesson-N、動詞 → Verbs / Lesson-N

use crate::types::{Article, ConjugationSet, WordEntry};

/// 冠詞別の色（der=青, die=赤, das=緑, なし=茶）
pub const COLOR_DER: u32 = 0x0000FF;
pub const COLOR_DIE: u32 = 0xFF0000;
pub const COLOR_DAS: u32 = 0x008000;
pub const COLOR_NONE: u32 = 0x8B4513;
/// 動詞（紫）
pub const COLOR_VERB: u32 = 0x800080;

/// シート（カテゴリ）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    General,
    Article(Article),
    Verbs,
    Lesson(u32),
}

impl Category {
    pub const GENERAL: &'static str = "General";
    pub const VERBS: &'static str = "Verbs";

    pub fn name(&self) -> String {
        match self {
            Category::General => Self::GENERAL.to_string(),
            Category::Article(article) => article.collection_name().to_string(),
            Category::Verbs => Self::VERBS.to_string(),
            Category::Lesson(n) => lesson_collection_name(*n),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            Self::GENERAL => Some(Category::General),
            Self::VERBS => Some(Category::Verbs),
            "der" => Some(Category::Article(Article::Der)),
            "die" => Some(Category::Article(Article::Die)),
            "das" => Some(Category::Article(Article::Das)),
            "No Article" => Some(Category::Article(Article::None)),
            other => other
                .strip_prefix("Lesson-")
                .and_then(|n| n.parse().ok())
                .map(Category::Lesson),
        }
    }

    /// 新規ブックで最初から作るシート
    pub fn base() -> [Category; 6] {
        [
            Category::General,
            Category::Article(Article::Der),
            Category::Article(Article::Die),
            Category::Article(Article::Das),
            Category::Article(Article::None),
            Category::Verbs,
        ]
    }
}

pub fn lesson_collection_name(lesson: u32) -> String {
    format!("Lesson-{}", lesson)
}

/// 単語セルの色分け種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Noun(Article),
    Verb,
}

impl RowKind {
    pub fn color(&self) -> u32 {
        match self {
            RowKind::Noun(Article::Der) => COLOR_DER,
            RowKind::Noun(Article::Die) => COLOR_DIE,
            RowKind::Noun(Article::Das) => COLOR_DAS,
            RowKind::Noun(Article::None) => COLOR_NONE,
            RowKind::Verb => COLOR_VERB,
        }
    }

    pub fn is_verb(&self) -> bool {
        matches!(self, RowKind::Verb)
    }
}

/// 冠詞ありなら先頭だけ大文字（残りは小文字）、なしなら全て小文字
pub fn normalize_case(word: &str, article: Article) -> String {
    let word = word.trim();
    if article.is_none() {
        return word.to_lowercase();
    }
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// 表示形（"das Haus" / "gehen"）
pub fn display_word(entry: &WordEntry) -> String {
    let word = normalize_case(entry.raw_word(), entry.article());
    format!("{} {}", entry.article().as_str(), word)
        .trim()
        .to_string()
}

/// 登録先カテゴリ
pub fn categories_for(entry: &WordEntry) -> Vec<Category> {
    if entry.is_verb() {
        vec![Category::Verbs, Category::Lesson(entry.lesson())]
    } else {
        vec![
            Category::General,
            Category::Article(entry.article()),
            Category::Lesson(entry.lesson()),
        ]
    }
}

/// シートに書き込む直前の形
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    pub word: String,
    pub definition: String,
    pub kind: RowKind,
    pub conjugations: Option<ConjugationSet>,
    pub categories: Vec<Category>,
}

impl WordRecord {
    /// 活用形は動詞のときだけ保持する
    pub fn from_entry(entry: &WordEntry, conjugations: Option<ConjugationSet>) -> Self {
        let kind = if entry.is_verb() {
            RowKind::Verb
        } else {
            RowKind::Noun(entry.article())
        };
        Self {
            word: display_word(entry),
            definition: entry.definition().to_string(),
            kind,
            conjugations: conjugations.filter(|_| entry.is_verb()),
            categories: categories_for(entry),
        }
    }
}
