//! Tests for INI parsing and serialization.

use super::*;
use std::path::Path;

fn parse(text: &str) -> Result<IniDocument, IniError> {
    IniDocument::parse(text, Path::new("test.ini"))
}

#[test]
fn sections_keep_file_order() {
    let doc = parse("[MQTT]\nhost = a\n\n[CORE]\nx = 1\n\n[LOG]\nlevel = INFO\n").unwrap();
    assert_eq!(doc.sections(), vec!["MQTT", "CORE", "LOG"]);
}

#[test]
fn keys_are_case_sensitive() {
    let doc = parse("[core]\nKey = upper\nkey = lower\n").unwrap();
    assert_eq!(doc.get("core", "Key").unwrap(), "upper");
    assert_eq!(doc.get("core", "key").unwrap(), "lower");
    assert!(matches!(
        doc.get("CORE", "key"),
        Err(IniError::NoSection(_))
    ));
}

#[test]
fn colon_delimiter_and_first_delimiter_wins() {
    let doc = parse("[db]\nurl = http://host:8080/x\nport: 5432\n").unwrap();
    assert_eq!(doc.get("db", "url").unwrap(), "http://host:8080/x");
    assert_eq!(doc.get("db", "port").unwrap(), "5432");
}

#[test]
fn non_ascii_values_survive() {
    let doc = parse("[channel]\nname = Канал\n").unwrap();
    assert_eq!(doc.get("channel", "name").unwrap(), "Канал");
    assert!(doc.to_string().contains("name = Канал"));
}

#[test]
fn comments_and_bom_are_skipped() {
    let doc = parse("\u{feff}# header comment\n[a]\n; note\nk = v\n").unwrap();
    assert_eq!(doc.sections(), vec!["a"]);
    assert_eq!(doc.section("a").unwrap().len(), 1);
}

#[test]
fn indented_lines_continue_a_value() {
    let doc = parse("[a]\nmotd = first\n  second\nnext = 2\n").unwrap();
    assert_eq!(doc.get("a", "motd").unwrap(), "first\nsecond");
    assert_eq!(doc.get("a", "next").unwrap(), "2");

    let reparsed = parse(&doc.to_string()).unwrap();
    assert_eq!(reparsed, doc);
}

#[test]
fn pair_before_header_is_missing_section_header() {
    let err = IniDocument::parse("id = 1234\n[a]\n", Path::new("/x/wrong_config.ini")).unwrap_err();
    match err {
        IniError::MissingSectionHeader {
            path,
            line,
            content,
        } => {
            assert_eq!(path, Path::new("/x/wrong_config.ini"));
            assert_eq!(line, 1);
            assert_eq!(content, "id = 1234");
        }
        other => panic!("expected MissingSectionHeader, got {other:?}"),
    }
}

#[test]
fn duplicates_are_rejected() {
    assert!(matches!(
        parse("[a]\n[a]\n"),
        Err(IniError::DuplicateSection { line: 2, .. })
    ));
    assert!(matches!(
        parse("[a]\nk = 1\nk = 2\n"),
        Err(IniError::DuplicateOption { line: 3, .. })
    ));
}

#[test]
fn line_without_delimiter_is_malformed() {
    assert!(matches!(
        parse("[a]\njust words\n"),
        Err(IniError::Malformed { line: 2, .. })
    ));
    assert!(matches!(
        parse("[a]\n= orphan\n"),
        Err(IniError::Malformed { line: 2, .. })
    ));
}

#[test]
fn with_value_replaces_in_place_and_appends() {
    let doc = parse("[database]\ndriver = sqlite\nname = main\n\n[LOG]\nlevel = INFO\n").unwrap();

    let replaced = doc.with_value("database", "driver", "postgres").unwrap();
    let keys: Vec<_> = replaced.section("database").unwrap().keys().collect();
    assert_eq!(keys, vec!["driver", "name"]);
    assert_eq!(replaced.get("database", "driver").unwrap(), "postgres");

    let appended = doc.with_value("database", "url", "www.test.ru").unwrap();
    let keys: Vec<_> = appended.section("database").unwrap().keys().collect();
    assert_eq!(keys, vec!["driver", "name", "url"]);
    assert_eq!(appended.section("LOG"), doc.section("LOG"));

    // The original snapshot is untouched.
    assert!(doc.get("database", "url").is_err());
}

#[test]
fn with_value_requires_existing_section() {
    let doc = parse("[a]\nk = v\n").unwrap();
    assert!(matches!(
        doc.with_value("database", "url", "x"),
        Err(IniError::NoSection(name)) if name == "database"
    ));
}

#[test]
fn display_writes_sections_and_pairs() {
    let doc = parse("[a]\nk=v\n[b]\nx :  y\n").unwrap();
    assert_eq!(doc.to_string(), "[a]\nk = v\n\n[b]\nx = y\n\n");
}

#[test]
fn empty_text_is_an_empty_document() {
    let doc = parse("").unwrap();
    assert!(doc.sections().is_empty());
    assert_eq!(doc.to_string(), "");
}

#[test]
fn accepted_pairs_read_back_unchanged() {
    let doc = parse("[database]\ndriver = sqlite\n").unwrap();
    let pairs = [
        ("url", "www.test.ru"),
        ("url", "postgres://user:pw@host:5432/db?x=1"),
        ("name", "Канал"),
        ("empty", ""),
        ("motd", "first\nsecond\nthird"),
        ("list", "a = b\n[not a header]"),
        ("Mixed.Case_key", "value with  inner  spaces"),
        ("path", "C:\\config\\app.ini"),
    ];

    for (key, value) in pairs {
        let updated = doc.with_value("database", key, value).unwrap();
        let reparsed = parse(&updated.to_string()).unwrap();
        assert_eq!(reparsed.get("database", key).unwrap(), value, "key {key:?}");
        assert_eq!(reparsed.get("database", "driver").unwrap(), "sqlite");
        assert_eq!(reparsed, updated);
    }
}

#[test]
fn pairs_the_parser_cannot_read_back_are_rejected() {
    let doc = parse("[database]\ndriver = sqlite\n").unwrap();
    let pairs = [
        ("", "v"),
        (" url", "v"),
        ("a=b", "v"),
        ("a:b", "v"),
        ("a\nb", "v"),
        ("[x]", "v"),
        ("#url", "v"),
        (";url", "v"),
        ("url", "a\n\nb"),
        ("url", " padded"),
        ("url", "trailing "),
        ("url", "a\n  indented"),
        ("url", "a\n# comment"),
        ("url", "\nafter break"),
        ("url", "a\r\nb"),
    ];

    for (key, value) in pairs {
        let err = doc.with_value("database", key, value).unwrap_err();
        assert!(
            matches!(err, IniError::InvalidOption { .. }),
            "({key:?}, {value:?}) gave {err:?}"
        );
    }
}
