//! ワークブック入出力の統合テスト
//!
//! xlsxに保存して読み戻し、並び順・行種別・活用列が保たれることを検証

use german_vocab::workbook;
use german_vocab_common::{
    AddOutcome, Article, ConjugationSet, Person, RowKind, VocabBook, WordEntry, WordRecord,
};
use tempfile::tempdir;

fn add(book: &mut VocabBook, word: &str, article: Article, definition: &str, is_verb: bool, lesson: u32) -> AddOutcome {
    let entry = WordEntry::new(word, article, definition, is_verb, lesson);
    book.add(&WordRecord::from_entry(&entry, None))
}

fn words(book: &VocabBook, name: &str) -> Vec<String> {
    book.get(name)
        .map(|c| c.rows().iter().map(|r| r.word.clone()).collect())
        .unwrap_or_default()
}

/// 初回起動: ファイルが無ければ基本シートで作成される
#[test]
fn test_open_or_create_new_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("German_Words.xlsx");

    let book = workbook::open_or_create(&path).expect("ワークブック作成失敗");

    assert!(path.exists(), "ワークブックが作成されていない");
    assert_eq!(book.names(), vec!["General", "der", "die", "das", "No Article", "Verbs"]);
    assert_eq!(book.total_rows(), 0);

    let reloaded = workbook::load(&path).expect("読み込み失敗");
    assert_eq!(reloaded.names(), book.names());
    assert_eq!(reloaded.get("Verbs").unwrap().header.len(), 8);
    assert_eq!(reloaded.get("General").unwrap().header, vec!["Word", "Definition"]);
}

/// 保存と読み込み
#[test]
fn test_save_and_load_roundtrip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("words.xlsx");

    let mut book = VocabBook::new();
    add(&mut book, "katze", Article::Die, "cat", false, 1);
    add(&mut book, "hund", Article::Der, "dog", false, 1);
    add(&mut book, "auto", Article::Das, "car", false, 2);
    add(&mut book, "oft", Article::None, "often", false, 2);

    let mut set = ConjugationSet::new();
    for (person, form) in Person::ALL.iter().zip(["gehe", "gehst", "geht", "gehen", "geht", "gehen"]) {
        set.insert(*person, form);
    }
    let verb = WordEntry::new("gehen", Article::None, "to go", true, 2);
    book.add(&WordRecord::from_entry(&verb, Some(set)));

    workbook::save(&book, &path).expect("保存失敗");
    let loaded = workbook::load(&path).expect("読み込み失敗");

    assert_eq!(words(&loaded, "General"), vec!["das Auto", "der Hund", "die Katze", "oft"]);
    assert_eq!(words(&loaded, "Lesson-1"), vec!["der Hund", "die Katze"]);
    assert_eq!(words(&loaded, "Lesson-2"), vec!["das Auto", "gehen", "oft"]);
    assert_eq!(words(&loaded, "Verbs"), vec!["gehen"]);

    let lesson2 = loaded.get("Lesson-2").unwrap();
    assert_eq!(lesson2.rows()[0].kind, RowKind::Noun(Article::Das));
    assert_eq!(lesson2.rows()[1].kind, RowKind::Verb);
    assert_eq!(lesson2.rows()[2].kind, RowKind::Noun(Article::None));

    let gehen = &loaded.get("Verbs").unwrap().rows()[0];
    let conjugations = gehen.conjugations.as_ref().expect("活用列が失われた");
    assert!(conjugations.is_complete());
    assert_eq!(conjugations.get(Person::Du), Some("gehst"));

    // 読み戻したブックに同じ語を足しても重複になる
    let mut loaded = loaded;
    let outcome = add(&mut loaded, "Hund", Article::Der, "dog", false, 5);
    assert!(matches!(outcome, AddOutcome::Duplicate { .. }));
}

/// 壊れたファイルは読み込みエラー
#[test]
fn test_load_invalid_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("broken.xlsx");
    std::fs::write(&path, "not a workbook").unwrap();

    let result = workbook::load(&path);
    assert!(matches!(result, Err(german_vocab::error::VocabError::WorkbookRead { .. })));
}
