use crate::error::{Result, VocabError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_WORKBOOK: &str = "German_Words.xlsx";
pub const DEFAULT_DICTIONARY_URL: &str = "https://en.pons.com/translate/german-english/{word}";
pub const DEFAULT_CONJUGATION_URL: &str = "https://www.verbformen.com/conjugation/{word}.htm";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub workbook_path: PathBuf,
    /// `{word}` が小文字の見出し語に置き換わる
    pub dictionary_url: String,
    pub conjugation_url: String,
    pub timeout_seconds: u64,
    /// 定義候補の1ページあたり件数
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workbook_path: PathBuf::from(DEFAULT_WORKBOOK),
            dictionary_url: DEFAULT_DICTIONARY_URL.into(),
            conjugation_url: DEFAULT_CONJUGATION_URL.into(),
            timeout_seconds: 30,
            page_size: 10,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            log::debug!("config loaded from {}", config_path.display());
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| VocabError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("german-vocab").join("config.json"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.workbook_path.as_os_str().is_empty() {
            return Err(VocabError::Config("workbook_path is empty".into()));
        }
        for (key, template) in [
            ("dictionary_url", &self.dictionary_url),
            ("conjugation_url", &self.conjugation_url),
        ] {
            if !template.contains("{word}") {
                return Err(VocabError::Config(format!("{} must contain {{word}}", key)));
            }
        }
        if self.page_size == 0 {
            return Err(VocabError::Config("page_size must be at least 1".into()));
        }
        Ok(())
    }

    pub fn set_workbook_path(&mut self, path: PathBuf) -> Result<()> {
        self.workbook_path = path;
        self.validate()?;
        self.save()
    }

    pub fn dictionary_url_for(&self, word: &str) -> String {
        fill_template(&self.dictionary_url, word)
    }

    pub fn conjugation_url_for(&self, word: &str) -> String {
        fill_template(&self.conjugation_url, word)
    }
}

fn fill_template(template: &str, word: &str) -> String {
    template.replace("{word}", &word.trim().to_lowercase())
}
