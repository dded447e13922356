use thiserror::Error;

#[derive(Error, Debug)]
pub enum VocabError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Unable to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("Dictionary returned HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("Failed to read workbook {path}: {reason}")]
    WorkbookRead { path: String, reason: String },

    #[error("Failed to write workbook {path}: {reason}")]
    WorkbookWrite { path: String, reason: String },

    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] german_vocab_common::Error),
}

impl VocabError {
    /// 単語単位で報告して続行できるエラー
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, VocabError::Fetch { .. } | VocabError::HttpStatus { .. })
    }
}

impl From<dialoguer::Error> for VocabError {
    fn from(e: dialoguer::Error) -> Self {
        VocabError::Prompt(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, VocabError>;
