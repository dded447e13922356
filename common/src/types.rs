//! 単語データの型定義
//!
//! CLIとテストで共有される型:
//! - Article: 冠詞（der/die/das/なし）
//! - Person: 現在形の人称（6種類固定）
//! - ConjugationSet: 人称 → 活用形
//! - WordEntry: ユーザーが登録する1語

/// 冠詞
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Article {
    Der,
    Die,
    Das,
    #[default]
    None,
}

impl Article {
    /// 辞書の性別表記（m/f/nt）から冠詞へ変換
    ///
    /// 想定外の値は `Article::None` に落とす。
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "m" | "der" => Article::Der,
            "f" | "die" => Article::Die,
            "nt" | "n" | "das" => Article::Das,
            _ => Article::None,
        }
    }

    /// 先頭トークンが冠詞そのものの場合のみ一致
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "der" => Some(Article::Der),
            "die" => Some(Article::Die),
            "das" => Some(Article::Das),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Article::Der => "der",
            Article::Die => "die",
            Article::Das => "das",
            Article::None => "",
        }
    }

    /// 冠詞別シート名
    pub fn collection_name(&self) -> &'static str {
        match self {
            Article::None => "No Article",
            other => other.as_str(),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Article::None)
    }
}

impl std::fmt::Display for Article {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 現在形の人称
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Person {
    Ich,
    Du,
    ErSieEs,
    Wir,
    Ihr,
    SieSie,
}

impl Person {
    /// 列順
    pub const ALL: [Person; 6] = [
        Person::Ich,
        Person::Du,
        Person::ErSieEs,
        Person::Wir,
        Person::Ihr,
        Person::SieSie,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Person::Ich => "ich",
            Person::Du => "du",
            Person::ErSieEs => "er/sie/es",
            Person::Wir => "wir",
            Person::Ihr => "ihr",
            Person::SieSie => "sie/Sie",
        }
    }

    fn index(&self) -> usize {
        match self {
            Person::Ich => 0,
            Person::Du => 1,
            Person::ErSieEs => 2,
            Person::Wir => 3,
            Person::Ihr => 4,
            Person::SieSie => 5,
        }
    }

    /// 活用表の人称ラベルから判定
    ///
    /// 部分一致で、ich → du → er/sie/es → wir → ihr → sie の順に最初に当たったもの。
    /// "er/sie/es" は "sie" より先に判定すること。
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().to_lowercase();
        const ORDER: [(&str, Person); 6] = [
            ("ich", Person::Ich),
            ("du", Person::Du),
            ("er/sie/es", Person::ErSieEs),
            ("wir", Person::Wir),
            ("ihr", Person::Ihr),
            ("sie", Person::SieSie),
        ];
        ORDER
            .iter()
            .find(|(needle, _)| label.contains(needle))
            .map(|(_, person)| *person)
    }
}

/// 人称 → 活用形（欠けていてもよい）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConjugationSet {
    forms: [Option<String>; 6],
}

impl ConjugationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 活用形を登録。既に同じ人称がある場合は最初の値を残す。
    pub fn insert(&mut self, person: Person, form: impl Into<String>) -> bool {
        let slot = &mut self.forms[person.index()];
        if slot.is_some() {
            return false;
        }
        let form = form.into();
        let form = form.trim();
        if form.is_empty() {
            return false;
        }
        *slot = Some(form.to_string());
        true
    }

    pub fn get(&self, person: Person) -> Option<&str> {
        self.forms[person.index()].as_deref()
    }

    pub fn len(&self) -> usize {
        self.forms.iter().filter(|f| f.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_complete(&self) -> bool {
        self.len() == Person::ALL.len()
    }

    /// シート書き出し用の6セル（欠けは空文字）
    pub fn cells(&self) -> Vec<String> {
        self.forms
            .iter()
            .map(|f| f.clone().unwrap_or_default())
            .collect()
    }

    /// シートの6セルから復元
    pub fn from_cells(cells: &[String]) -> Self {
        let mut set = Self::new();
        for (person, cell) in Person::ALL.iter().zip(cells.iter()) {
            set.insert(*person, cell.as_str());
        }
        set
    }
}

/// 登録する1語
///
/// 動詞と冠詞は排他的：動詞として作ると冠詞は常に `Article::None`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    raw_word: String,
    article: Article,
    definition: String,
    is_verb: bool,
    lesson: u32,
}

impl WordEntry {
    pub fn new(
        raw_word: impl Into<String>,
        article: Article,
        definition: impl Into<String>,
        is_verb: bool,
        lesson: u32,
    ) -> Self {
        Self {
            raw_word: raw_word.into().trim().to_string(),
            article: if is_verb { Article::None } else { article },
            definition: definition.into().trim().to_string(),
            is_verb,
            lesson,
        }
    }

    pub fn raw_word(&self) -> &str {
        &self.raw_word
    }

    pub fn article(&self) -> Article {
        self.article
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn is_verb(&self) -> bool {
        self.is_verb
    }

    pub fn lesson(&self) -> u32 {
        self.lesson
    }
}
