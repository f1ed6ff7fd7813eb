#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use std::fs;

use xmlrender::test_utils::*;

#[test]
fn file_read_error() {
    let result = render_file("nonexistent_file.json");
    assert!(result.is_err(), "Expected error when reading non-existent file");

    let err = result.unwrap_err();
    match err.kind() {
        RenderErrorKind::IO(IOError::FileNotFound(path)) => {
            assert_eq!(path, "nonexistent_file.json")
        }
        other => panic!("Expected IO error, got {:?}", other),
    }
}

#[test]
fn render_fixture_file() {
    let rendered = render_file("tests/input/page.json").expect("fixture should render");
    let expected = fs::read_to_string("tests/input/page.xml").expect("fixture should exist");
    assert_eq!(rendered, expected.trim_end());
}

#[test]
fn read_and_write_file() {
    let temp_path = tmp_file_path("rw_test.xml");
    let path = temp_path.to_str().unwrap();
    let content = render_json(r#"[["note", {"id": 7}, "saved"]]"#).unwrap();

    write_file(path, &content).expect("Failed to write file");
    let read_back = read_file(path).expect("Failed to read file");
    assert_eq!(read_back, r#"<note id="7">saved</note>"#);

    let _ = fs::remove_file(temp_path);
}

#[test]
fn invalid_file_content_has_context() {
    let temp_path = tmp_file_path("invalid.json");
    let path = temp_path.to_str().unwrap();
    write_file(path, r#"{"root": true}"#).unwrap();

    let err = render_file(path).unwrap_err();
    assert!(matches!(
        err.kind(),
        RenderErrorKind::Input(InputError::InvalidDocument(_))
    ));
    assert!(err.context().is_some_and(|ctx| ctx.contains("invalid.json")));

    let _ = fs::remove_file(temp_path);
}
