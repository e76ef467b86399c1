use charlm_core::Error;
use tempfile::tempdir;
use tokenize::CharTokenizer;

#[test]
fn save_then_load_keeps_mapping() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vocab.bin");

    let tok = CharTokenizer::new("to be, or not to be: that is the question\n").unwrap();
    tok.save(&path).unwrap();
    let loaded = CharTokenizer::load(&path).unwrap();

    assert_eq!(loaded, tok);
    let ids = tok.encode("the question").unwrap();
    assert_eq!(loaded.decode(&ids).unwrap(), "the question");
}

#[test]
fn missing_file_is_io_error_with_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.bin");
    match CharTokenizer::load(&path) {
        Err(Error::Io { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}
