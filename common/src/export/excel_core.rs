//! Excel生成（共通ライブラリ）
//!
//! VocabBook全体を1つのxlsxバッファに書き出す。
//! 単語セルだけを冠詞別の色で塗り、ヘッダー行は太字。

use crate::book::VocabBook;
use crate::error::Result;
use crate::record::RowKind;
use rust_xlsxwriter::*;

const WORD_COL_WIDTH: f64 = 24.0;
const DEFINITION_COL_WIDTH: f64 = 40.0;
const CONJUGATION_COL_WIDTH: f64 = 14.0;

fn word_format(kind: RowKind) -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(kind.color()))
        .set_pattern(FormatPattern::Solid)
}

/// ワークブックをバッファに生成
pub fn generate_workbook_buffer(book: &VocabBook) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    for collection in book.collections() {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&collection.name)?;

        worksheet.set_column_width(0, WORD_COL_WIDTH)?;
        worksheet.set_column_width(1, DEFINITION_COL_WIDTH)?;
        for col in 2..8u16 {
            worksheet.set_column_width(col, CONJUGATION_COL_WIDTH)?;
        }

        for (col, title) in collection.header.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, title, &header_format)?;
        }
        worksheet.set_freeze_panes(1, 0)?;

        for (index, row) in collection.rows().iter().enumerate() {
            let row_num = index as u32 + 1;
            for (col, value) in row.cells().iter().enumerate() {
                if col == 0 {
                    worksheet.write_string_with_format(row_num, 0, value, &word_format(row.kind))?;
                } else if !value.is_empty() {
                    worksheet.write_string(row_num, col as u16, value)?;
                }
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}
