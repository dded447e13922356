//! 単語帳（メモリ上のワークブック）
//!
//! シート名 → Collection の順序付き集合。ファイル入出力は持たない。
//!
//! ## 不変条件
//! - 各Collectionの行は冠詞を除いた単語のアルファベット順（大文字小文字無視）
//! - 同じ（単語, 定義）の組はどのシートにも2回入らない

use crate::record::{Category, RowKind, WordRecord};
use crate::types::{Article, ConjugationSet, Person};
use std::collections::HashSet;

/// 通常シートのヘッダー
pub const WORD_HEADER: [&str; 2] = ["Word", "Definition"];

/// Verbsシートのヘッダー（活用6列付き）
pub fn verb_header() -> Vec<String> {
    let mut header = vec!["Verb".to_string(), "Definition".to_string()];
    header.extend(Person::ALL.iter().map(|p| p.label().to_string()));
    header
}

fn word_header() -> Vec<String> {
    WORD_HEADER.iter().map(|s| s.to_string()).collect()
}

/// 並び替えキー: 先頭の冠詞トークンを除いて小文字化
pub fn sort_key(word: &str) -> String {
    let word = word.trim();
    match word.split_once(' ') {
        Some((head, rest)) if Article::from_token(head).is_some() => rest.trim().to_lowercase(),
        _ => word.to_lowercase(),
    }
}

/// 1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub word: String,
    pub definition: String,
    pub kind: RowKind,
    pub conjugations: Option<ConjugationSet>,
}

impl Row {
    /// 書き出すセル。動詞で活用があれば8列、それ以外は2列。
    pub fn cells(&self) -> Vec<String> {
        let mut cells = vec![self.word.clone(), self.definition.clone()];
        if let (RowKind::Verb, Some(conjugations)) = (self.kind, &self.conjugations) {
            cells.extend(conjugations.cells());
        }
        cells
    }

    fn matches(&self, word: &str, definition: &str) -> bool {
        self.word.to_lowercase() == word.to_lowercase()
            && self.definition.to_lowercase() == definition.to_lowercase()
    }
}

impl From<&WordRecord> for Row {
    fn from(record: &WordRecord) -> Self {
        Self {
            word: record.word.clone(),
            definition: record.definition.clone(),
            kind: record.kind,
            conjugations: record.conjugations.clone(),
        }
    }
}

/// シート
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    pub name: String,
    pub header: Vec<String>,
    rows: Vec<Row>,
}

impl Collection {
    pub fn new(name: impl Into<String>, header: Vec<String>) -> Self {
        Self {
            name: name.into(),
            header,
            rows: Vec::new(),
        }
    }

    pub fn for_category(category: Category) -> Self {
        let header = match category {
            Category::Verbs => verb_header(),
            _ => word_header(),
        };
        Self::new(category.name(), header)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 追加して並び替え
    pub fn insert(&mut self, row: Row) {
        self.rows.push(row);
        self.sort();
    }

    /// 安定ソートなので同じキーは追加順を保つ
    pub fn sort(&mut self) {
        self.rows.sort_by_cached_key(|row| sort_key(&row.word));
    }

    pub fn find(&self, word: &str, definition: &str) -> Option<&Row> {
        self.rows.iter().find(|row| row.matches(word, definition))
    }
}

/// 追加結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added { word: String, definition: String, targets: Vec<String> },
    Duplicate { word: String, definition: String },
}

/// 単語帳
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabBook {
    collections: Vec<Collection>,
}

impl Default for VocabBook {
    fn default() -> Self {
        Self {
            collections: Category::base()
                .into_iter()
                .map(Collection::for_category)
                .collect(),
        }
    }
}

impl VocabBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// 読み込んだシート（ヘッダー行を含むセル行列）から復元
    ///
    /// 行の種別は先頭冠詞 → Verbsシートにある単語 → 冠詞なし、の順で決める。
    /// 基本シートが欠けていれば補う。
    pub fn from_sheets(sheets: Vec<(String, Vec<Vec<String>>)>) -> Self {
        let verbs: HashSet<String> = sheets
            .iter()
            .filter(|(name, _)| name == Category::VERBS)
            .flat_map(|(_, rows)| rows.iter().skip(1))
            .filter_map(|cells| cells.first())
            .map(|word| word.trim().to_lowercase())
            .collect();

        let mut collections = Vec::new();
        for (name, mut rows) in sheets {
            let header = if rows.is_empty() {
                match Category::from_name(&name) {
                    Some(Category::Verbs) => verb_header(),
                    _ => word_header(),
                }
            } else {
                let mut header = rows.remove(0);
                // 幅の広い行があるとヘッダーも空セルで埋められて読まれる
                while header.last().is_some_and(|h| h.is_empty()) {
                    header.pop();
                }
                header
            };
            let mut collection = Collection::new(name, header);
            for cells in rows {
                if let Some(row) = row_from_cells(cells, &verbs) {
                    collection.rows.push(row);
                }
            }
            collection.sort();
            collections.push(collection);
        }

        let mut book = Self { collections };
        for category in Category::base() {
            book.ensure(category);
        }
        book
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn names(&self) -> Vec<&str> {
        self.collections.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.name == name)
    }

    /// 無ければ作成（Lessonシートはここで遅延生成される）
    pub fn ensure(&mut self, category: Category) -> &mut Collection {
        let name = category.name();
        let index = match self.collections.iter().position(|c| c.name == name) {
            Some(index) => index,
            None => {
                self.collections.push(Collection::for_category(category));
                self.collections.len() - 1
            }
        };
        &mut self.collections[index]
    }

    /// 全シートを走査して最初に一致した（単語, 定義）を返す
    pub fn find_duplicate(&self, word: &str, definition: &str) -> Option<(String, String)> {
        self.collections
            .iter()
            .find_map(|c| c.find(word, definition))
            .map(|row| (row.word.clone(), row.definition.clone()))
    }

    /// 重複が無ければ全対象シートに追加して並び替え
    pub fn add(&mut self, record: &WordRecord) -> AddOutcome {
        if let Some((word, definition)) = self.find_duplicate(&record.word, &record.definition) {
            return AddOutcome::Duplicate { word, definition };
        }

        let row = Row::from(record);
        let mut targets = Vec::with_capacity(record.categories.len());
        for category in &record.categories {
            let collection = self.ensure(*category);
            collection.insert(row.clone());
            targets.push(collection.name.clone());
        }

        AddOutcome::Added {
            word: record.word.clone(),
            definition: record.definition.clone(),
            targets,
        }
    }

    pub fn total_rows(&self) -> usize {
        self.collections.iter().map(|c| c.len()).sum()
    }
}

fn row_from_cells(cells: Vec<String>, verbs: &HashSet<String>) -> Option<Row> {
    let mut cells = cells.into_iter();
    let word = cells.next()?.trim().to_string();
    if word.is_empty() {
        return None;
    }
    let definition = cells.next().unwrap_or_default().trim().to_string();
    let rest: Vec<String> = cells.collect();

    let head = word.split(' ').next().unwrap_or_default();
    let kind = match Article::from_token(head) {
        Some(article) => RowKind::Noun(article),
        None if verbs.contains(&word.to_lowercase()) => RowKind::Verb,
        None => RowKind::Noun(Article::None),
    };

    let conjugations = match kind {
        RowKind::Verb => Some(ConjugationSet::from_cells(&rest)).filter(|set| !set.is_empty()),
        RowKind::Noun(_) => None,
    };

    Some(Row {
        word,
        definition,
        kind,
        conjugations,
    })
}
