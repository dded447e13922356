//! 辞書ページ解析モジュール
//!
//! 見出し語ページから冠詞・品詞・訳語候補を取り出す。
//!
//! ## 処理フロー
//! 1. 各見出しブロックから（品詞, 冠詞）の組を抽出
//! 2. 名詞/動詞の曖昧さがあればユーザーに選ばせる
//! 3. 訳語ブロックから注記を除いた訳語を抽出（重複除去・出現順）
//! 4. 候補が複数なら10件ずつページ送りで選択、または自由入力

use crate::error::Result;
use crate::prompt::Prompter;
use german_vocab_common::Article;
use lazy_static::lazy_static;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;

lazy_static! {
    static ref ENTRY: Selector = Selector::parse("div.entry").unwrap();
    static ref BLOCK: Selector = Selector::parse("div.rom").unwrap();
    static ref WORD_CLASS: Selector = Selector::parse("span.wordclass").unwrap();
    static ref GENUS: Selector = Selector::parse("span.genus").unwrap();
    static ref TARGET: Selector = Selector::parse("div.target").unwrap();
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
    static ref EMPTY_BRACKETS_RE: Regex = Regex::new(r"\(\s*\)|\[\s*\]").unwrap();
}

/// 訳語ブロック内で読み飛ばす注記要素
const ANNOTATION_TAGS: &[&str] = &["span", "acronym", "sup"];

pub const MORE_OPTION: &str = "More definitions...";
pub const CUSTOM_OPTION: &str = "Enter a custom definition";

/// 品詞
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordClass {
    Noun,
    Verb,
    Other,
}

impl WordClass {
    /// 辞書の品詞表記を分類（"NOUN" / "VERB trans" / "ADV" ...）
    ///
    /// 先頭の語で判定する。"PRONOUN" や "ADVERB" は名詞・動詞にしない。
    pub fn classify(tag: &str) -> Self {
        let tag = tag.trim().to_lowercase();
        if tag.starts_with("verb") {
            WordClass::Verb
        } else if tag.starts_with("noun") || tag.starts_with("substantiv") {
            WordClass::Noun
        } else {
            WordClass::Other
        }
    }
}

/// 解析できた1語
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalEntry {
    pub article: Article,
    pub definition: String,
    pub is_verb: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(LexicalEntry),
    /// 構造はあったが訳語が1つも無い
    NoDefinition,
    /// 想定したマークアップが無い
    Malformed,
}

/// 見出しブロックごとの（品詞, 冠詞）。div.entry の外は読まない。
pub fn extract_word_classes(doc: &Html) -> Vec<(WordClass, Article)> {
    doc.select(&ENTRY)
        .flat_map(|entry| entry.select(&BLOCK))
        .filter_map(|block| {
            let class = block
                .select(&WORD_CLASS)
                .next()
                .map(|el| WordClass::classify(&element_text(el)));
            let article = block
                .select(&GENUS)
                .next()
                .map(|el| Article::from_code(&element_text(el)))
                .unwrap_or_default();
            match class {
                Some(class) => Some((class, article)),
                // 品詞表記が無くても性があれば名詞
                None if !article.is_none() => Some((WordClass::Noun, article)),
                None => None,
            }
        })
        .collect()
}

/// 訳語候補（注記除去・重複除去・出現順）。div.entry の外は読まない。
pub fn extract_definitions(doc: &Html) -> Vec<String> {
    let mut seen = HashSet::new();
    doc.select(&ENTRY)
        .flat_map(|entry| entry.select(&TARGET))
        .map(strip_annotations)
        .filter(|d| !d.is_empty())
        .filter(|d| seen.insert(d.to_lowercase()))
        .collect()
}

/// 解析本体
pub fn parse_entry(
    doc: &Html,
    prompter: &mut dyn Prompter,
    page_size: usize,
) -> Result<LookupOutcome> {
    if doc.select(&ENTRY).next().is_none() {
        return Ok(LookupOutcome::Malformed);
    }

    let classes = extract_word_classes(doc);
    let definitions = extract_definitions(doc);
    log::debug!(
        "{} word class block(s), {} definition candidate(s)",
        classes.len(),
        definitions.len()
    );

    if definitions.is_empty() {
        return Ok(LookupOutcome::NoDefinition);
    }

    let (article, is_verb) = resolve_word_class(&classes, prompter)?;
    let definition = choose_definition(&definitions, prompter, page_size)?;

    Ok(LookupOutcome::Found(LexicalEntry {
        article,
        definition,
        is_verb,
    }))
}

/// 品詞の決定。名詞と動詞が両方ある場合だけ問い合わせる。
pub fn resolve_word_class(
    classes: &[(WordClass, Article)],
    prompter: &mut dyn Prompter,
) -> Result<(Article, bool)> {
    let distinct: HashSet<WordClass> = classes.iter().map(|(c, _)| *c).collect();
    let noun_article = classes
        .iter()
        .find(|(c, _)| *c == WordClass::Noun)
        .map(|(_, a)| *a)
        .unwrap_or_default();

    if distinct.len() > 1 && distinct.contains(&WordClass::Noun) && distinct.contains(&WordClass::Verb) {
        let options = vec!["Noun".to_string(), "Verb".to_string(), "Other".to_string()];
        return match prompter.ask_choice("This word has several classes. Which one?", &options)? {
            0 => Ok((noun_article, false)),
            1 => Ok((Article::None, true)),
            _ => Ok((Article::None, false)),
        };
    }

    if distinct.len() == 1 && distinct.contains(&WordClass::Verb) {
        return Ok((Article::None, true));
    }

    Ok((noun_article, false))
}

/// 訳語の選択（1件ならそのまま）
pub fn choose_definition(
    definitions: &[String],
    prompter: &mut dyn Prompter,
    page_size: usize,
) -> Result<String> {
    if definitions.len() == 1 {
        return Ok(definitions[0].clone());
    }

    let page_size = page_size.max(1);
    let mut start = 0;
    loop {
        let end = (start + page_size).min(definitions.len());
        let page = &definitions[start..end];
        let has_more = end < definitions.len();

        let mut options: Vec<String> = page
            .iter()
            .enumerate()
            .map(|(i, d)| format!("{}. {}", start + i + 1, d))
            .collect();
        if has_more {
            options.push(MORE_OPTION.to_string());
        }
        options.push(CUSTOM_OPTION.to_string());

        let picked = prompter.ask_choice("Choose a definition", &options)?;
        if picked < page.len() {
            return Ok(page[picked].clone());
        }
        if has_more && picked == page.len() {
            start = end;
            continue;
        }

        let custom = prompter.ask_text("Your definition")?;
        let custom = custom.trim();
        if !custom.is_empty() {
            return Ok(custom.to_string());
        }
        // 空入力は同じページを出し直す
    }
}

fn element_text(el: ElementRef) -> String {
    WHITESPACE_RE
        .replace_all(&el.text().collect::<String>(), " ")
        .trim()
        .to_string()
}

/// 注記要素の中にあるテキストを除いて連結
fn strip_annotations(target: ElementRef) -> String {
    let root = target.id();
    let mut text = String::new();
    for node in target.descendants() {
        let Some(fragment) = node.value().as_text() else {
            continue;
        };
        let annotated = node
            .ancestors()
            .take_while(|a| a.id() != root)
            .any(|a| {
                a.value()
                    .as_element()
                    .map(|e| ANNOTATION_TAGS.contains(&e.name()))
                    .unwrap_or(false)
            });
        if !annotated {
            text.push_str(fragment);
        }
    }
    let text = EMPTY_BRACKETS_RE.replace_all(&text, " ");
    WHITESPACE_RE
        .replace_all(&text, " ")
        .trim()
        .trim_end_matches(',')
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// 台本どおりに答えるPrompter
    #[derive(Default)]
    struct Scripted {
        choices: VecDeque<usize>,
        texts: VecDeque<String>,
        seen_options: Vec<Vec<String>>,
    }

    impl Prompter for Scripted {
        fn ask_choice(&mut self, _prompt: &str, options: &[String]) -> Result<usize> {
            self.seen_options.push(options.to_vec());
            Ok(self.choices.pop_front().expect("no scripted choice left"))
        }

        fn ask_text(&mut self, _prompt: &str) -> Result<String> {
            Ok(self.texts.pop_front().expect("no scripted text left"))
        }

        fn ask_number(&mut self, _prompt: &str) -> Result<u32> {
            Ok(1)
        }
    }

    fn page(blocks: &str) -> Html {
        Html::parse_document(&format!(
            r#"<html><body><div class="results"><div class="entry">{}</div></div></body></html>"#,
            blocks
        ))
    }

    const HAUS: &str = r#"
        <div class="rom">
          <h2 class="romhead">Haus <span class="genus"><acronym title="neuter">nt</acronym></span>
            <span class="wordclass">NOUN</span></h2>
          <div class="translations"><dl><dd>
            <div class="target"><a>house</a> <span class="info">(building)</span></div>
          </dd><dd>
            <div class="target"><a>home</a></div>
          </dd><dd>
            <div class="target"><a>House</a></div>
          </dd></dl></div>
        </div>"#;

    #[test]
    fn test_classify_word_class() {
        assert_eq!(WordClass::classify("NOUN"), WordClass::Noun);
        assert_eq!(WordClass::classify("VERB intr"), WordClass::Verb);
        // "adverb" は動詞ではない
        assert_eq!(WordClass::classify("ADVERB"), WordClass::Other);
        assert_eq!(WordClass::classify("ADJ"), WordClass::Other);
        assert_eq!(WordClass::classify("PRONOUN"), WordClass::Other);
        assert_eq!(WordClass::classify("noun, masculine"), WordClass::Noun);
    }

    #[test]
    fn test_blocks_outside_entry_are_ignored() {
        let doc = Html::parse_document(
            r#"<html><body>
               <div class="entry"><div class="rom">
                 <h2>Hund <span class="genus">m</span> <span class="wordclass">NOUN</span></h2>
                 <div class="target">dog</div>
               </div></div>
               <aside><div class="rom">
                 <span class="wordclass">VERB</span>
                 <div class="target">hunden (other direction)</div>
               </div></aside>
               </body></html>"#,
        );

        assert_eq!(extract_word_classes(&doc), vec![(WordClass::Noun, Article::Der)]);
        assert_eq!(extract_definitions(&doc), vec!["dog"]);

        // 名詞/動詞の問い合わせも起きない
        let mut prompter = Scripted::default();
        let outcome = parse_entry(&doc, &mut prompter, 10).unwrap();
        assert_eq!(
            outcome,
            LookupOutcome::Found(LexicalEntry {
                article: Article::Der,
                definition: "dog".into(),
                is_verb: false,
            })
        );
        assert!(prompter.seen_options.is_empty());
    }

    #[test]
    fn test_extract_word_classes_with_genus() {
        let doc = page(HAUS);
        assert_eq!(extract_word_classes(&doc), vec![(WordClass::Noun, Article::Das)]);
    }

    #[test]
    fn test_extract_definitions_strips_annotations_and_dedups() {
        let doc = page(HAUS);
        assert_eq!(extract_definitions(&doc), vec!["house", "home"]);
    }

    #[test]
    fn test_malformed_page() {
        let doc = Html::parse_document("<html><body><p>Not found</p></body></html>");
        let mut prompter = Scripted::default();
        let outcome = parse_entry(&doc, &mut prompter, 10).unwrap();
        assert_eq!(outcome, LookupOutcome::Malformed);
    }

    #[test]
    fn test_no_definition() {
        let doc = page(r#"<div class="rom"><span class="wordclass">NOUN</span></div>"#);
        let mut prompter = Scripted::default();
        let outcome = parse_entry(&doc, &mut prompter, 10).unwrap();
        assert_eq!(outcome, LookupOutcome::NoDefinition);
    }

    #[test]
    fn test_noun_entry_picks_definition() {
        let doc = page(HAUS);
        let mut prompter = Scripted {
            choices: VecDeque::from(vec![1]),
            ..Default::default()
        };
        let outcome = parse_entry(&doc, &mut prompter, 10).unwrap();
        assert_eq!(
            outcome,
            LookupOutcome::Found(LexicalEntry {
                article: Article::Das,
                definition: "home".into(),
                is_verb: false,
            })
        );
    }

    #[test]
    fn test_single_verb_class_sets_verb_without_prompt() {
        let doc = page(
            r#"<div class="rom"><span class="wordclass">VERB intr</span>
               <div class="target">to run</div></div>"#,
        );
        let mut prompter = Scripted::default();
        let outcome = parse_entry(&doc, &mut prompter, 10).unwrap();
        assert_eq!(
            outcome,
            LookupOutcome::Found(LexicalEntry {
                article: Article::None,
                definition: "to run".into(),
                is_verb: true,
            })
        );
        assert!(prompter.seen_options.is_empty());
    }

    #[test]
    fn test_noun_verb_ambiguity_prompts() {
        let classes = vec![
            (WordClass::Verb, Article::None),
            (WordClass::Noun, Article::Das),
        ];

        let mut noun = Scripted { choices: VecDeque::from(vec![0]), ..Default::default() };
        assert_eq!(resolve_word_class(&classes, &mut noun).unwrap(), (Article::Das, false));

        let mut verb = Scripted { choices: VecDeque::from(vec![1]), ..Default::default() };
        assert_eq!(resolve_word_class(&classes, &mut verb).unwrap(), (Article::None, true));

        let mut other = Scripted { choices: VecDeque::from(vec![2]), ..Default::default() };
        assert_eq!(resolve_word_class(&classes, &mut other).unwrap(), (Article::None, false));
    }

    #[test]
    fn test_definition_pagination() {
        let definitions: Vec<String> = (1..=12).map(|i| format!("meaning {}", i)).collect();
        // 1ページ目で「次へ」、2ページ目の2件目
        let mut prompter = Scripted {
            choices: VecDeque::from(vec![10, 1]),
            ..Default::default()
        };
        let picked = choose_definition(&definitions, &mut prompter, 10).unwrap();
        assert_eq!(picked, "meaning 12");

        assert_eq!(prompter.seen_options[0].len(), 12);
        assert_eq!(prompter.seen_options[0][10], MORE_OPTION);
        assert_eq!(prompter.seen_options[1], vec!["11. meaning 11", "12. meaning 12", CUSTOM_OPTION]);
    }

    #[test]
    fn test_custom_definition() {
        let definitions = vec!["to run".to_string(), "to walk".to_string()];
        let mut prompter = Scripted {
            choices: VecDeque::from(vec![2]),
            texts: VecDeque::from(vec!["  to jog ".to_string()]),
            ..Default::default()
        };
        let picked = choose_definition(&definitions, &mut prompter, 10).unwrap();
        assert_eq!(picked, "to jog");
    }
}
