//! ワークブックのファイル入出力
//!
//! 読み込みはcalamine、書き出しは共通ライブラリのExcel生成を使う。
//! 保存は常にブック全体の書き直し。

use crate::error::{Result, VocabError};
use calamine::{open_workbook, Data, Reader, Xlsx};
use german_vocab_common::export::excel_core::generate_workbook_buffer;
use german_vocab_common::VocabBook;
use std::path::Path;

/// 既存ファイルを読み込み、無ければ基本シートで作成して保存
pub fn open_or_create(path: &Path) -> Result<VocabBook> {
    if path.exists() {
        let book = load(path)?;
        log::debug!(
            "loaded {} ({} sheets, {} rows)",
            path.display(),
            book.collections().len(),
            book.total_rows()
        );
        Ok(book)
    } else {
        let book = VocabBook::new();
        save(&book, path)?;
        log::info!("created new workbook {}", path.display());
        Ok(book)
    }
}

pub fn load(path: &Path) -> Result<VocabBook> {
    let read_error = |reason: String| VocabError::WorkbookRead {
        path: path.display().to_string(),
        reason,
    };

    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e| read_error(format!("{}", e)))?;

    let mut sheets = Vec::new();
    for name in workbook.sheet_names() {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| read_error(format!("{}: {}", name, e)))?;
        let rows: Vec<Vec<String>> = range
            .rows()
            .map(|row| row.iter().map(cell_to_string).collect())
            .collect();
        sheets.push((name, rows));
    }

    Ok(VocabBook::from_sheets(sheets))
}

pub fn save(book: &VocabBook, path: &Path) -> Result<()> {
    let buffer = generate_workbook_buffer(book).map_err(|e| VocabError::WorkbookWrite {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, buffer)?;
    log::debug!("saved {}", path.display());
    Ok(())
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        other => other.to_string(),
    }
}
