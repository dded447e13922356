//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use german_vocab::error::VocabError;
use german_vocab::workbook;
use std::path::Path;

/// 存在しないワークブックの読み込み
#[test]
fn test_load_nonexistent_workbook() {
    let result = workbook::load(Path::new("/nonexistent/path/12345/words.xlsx"));
    assert!(matches!(result, Err(VocabError::WorkbookRead { .. })));
}

/// VocabErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        VocabError::Config("test".to_string()),
        VocabError::Fetch { url: "https://example.com".into(), reason: "timeout".into() },
        VocabError::HttpStatus { url: "https://example.com".into(), status: 503 },
        VocabError::Prompt("closed".to_string()),
        VocabError::WorkbookRead { path: "a.xlsx".into(), reason: "zip".into() },
        VocabError::WorkbookWrite { path: "a.xlsx".into(), reason: "denied".into() },
        VocabError::CollectionNotFound("Lesson-9".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 取得系エラーだけが単語単位で継続可能
#[test]
fn test_fetch_failure_classification() {
    assert!(VocabError::HttpStatus { url: "u".into(), status: 404 }.is_fetch_failure());
    assert!(VocabError::Fetch { url: "u".into(), reason: "dns".into() }.is_fetch_failure());
    assert!(!VocabError::Config("x".into()).is_fetch_failure());
}

/// HTTPステータスがメッセージに含まれる
#[test]
fn test_http_status_message() {
    let err = VocabError::HttpStatus { url: "https://en.pons.com/x".into(), status: 404 };
    let display = format!("{}", err);

    assert!(display.contains("404"));
    assert!(display.contains("https://en.pons.com/x"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: VocabError = io_err.into();

    assert!(matches!(err, VocabError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: VocabError = json_err.into();

    assert!(matches!(err, VocabError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
    let common_err = german_vocab_common::Error::Io(io_err);
    let err: VocabError = common_err.into();

    assert!(matches!(err, VocabError::Common(_)));
    assert!(format!("{}", err).contains("disk full"));
}
