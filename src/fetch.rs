//! 辞書ページ取得
//!
//! パーサーは取得済みHTML文字列だけを受け取る。通信の詳細はここで閉じる。

use crate::error::{Result, VocabError};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) german-vocab/0.1";

/// URL → HTML本文
pub trait DocumentFetcher {
    fn fetch(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| VocabError::Config(format!("HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl DocumentFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        log::debug!("GET {}", url);
        let response = self.client.get(url).send().map_err(|e| VocabError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let status = response.status();
        log::debug!("{} -> {}", url, status);
        if status != StatusCode::OK {
            return Err(VocabError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().map_err(|e| VocabError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}
