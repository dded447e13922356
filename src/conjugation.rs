//! 動詞の現在形活用取得

use crate::config::Config;
use crate::fetch::DocumentFetcher;
use german_vocab_common::{ConjugationSet, Person};
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

lazy_static! {
    static ref TABLE: Selector = Selector::parse("table").unwrap();
    static ref ROW: Selector = Selector::parse("tr").unwrap();
    static ref CELL: Selector = Selector::parse("td, th").unwrap();
}

/// （人称ラベル, 活用形）の2列表を読む
///
/// 人称が1つでも取れた最初の表を採用する（現在形が先頭にある前提）。
pub fn parse_conjugation_table(doc: &Html) -> Option<ConjugationSet> {
    for table in doc.select(&TABLE) {
        let mut set = ConjugationSet::new();
        for row in table.select(&ROW) {
            let cells: Vec<String> = row.select(&CELL).map(cell_text).collect();
            if cells.len() < 2 {
                continue;
            }
            if let Some(person) = Person::from_label(&cells[0]) {
                set.insert(person, cells[1].as_str());
            }
        }
        if !set.is_empty() {
            return Some(set);
        }
    }
    None
}

/// 取得に失敗しても動詞自体は登録できるのでNoneを返すだけ
pub fn fetch_conjugations(
    fetcher: &dyn DocumentFetcher,
    config: &Config,
    verb: &str,
) -> Option<ConjugationSet> {
    let url = config.conjugation_url_for(verb);
    let body = match fetcher.fetch(&url) {
        Ok(body) => body,
        Err(e) => {
            log::warn!("conjugations unavailable for '{}': {}", verb, e);
            return None;
        }
    };

    let set = parse_conjugation_table(&Html::parse_document(&body));
    match &set {
        Some(set) => log::debug!("{} conjugation(s) for '{}'", set.len(), verb),
        None => log::warn!("no conjugation table for '{}'", verb),
    }
    set
}

fn cell_text(el: ElementRef) -> String {
    el.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
