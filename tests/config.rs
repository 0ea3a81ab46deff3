//! Config loading: defaults, partial files, malformed input

mod common;

use std::io::Write;

use caret::EditorConfig;
use tempfile::tempdir;

#[test]
fn test_default_config_values() {
    let config = EditorConfig::default();
    assert_eq!(config.tab_width, 4);
    assert_eq!(config.max_history, 50);
    assert!(config.auto_indent_newline);
    assert!(config.backspace_unindent);
    assert!(!config.regex_find);
    assert!(!config.use_global_buffer);
    assert_eq!(config.comment_prefix, "// ");
}

#[test]
fn test_load_from_missing_file_uses_defaults() {
    let dir = tempdir().expect("tempdir");
    let config = EditorConfig::load_from(&dir.path().join("nope.yaml"));
    assert_eq!(config.tab_width, 4);
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.yaml");
    let mut f = std::fs::File::create(&path).expect("create");
    writeln!(f, "tab_width: 2").expect("write");
    writeln!(f, "regex_find: true").expect("write");
    drop(f);

    let config = EditorConfig::load_from(&path);
    assert_eq!(config.tab_width, 2);
    assert!(config.regex_find);
    assert_eq!(config.max_history, 50, "unset keys fall back to defaults");
    assert_eq!(config.comment_prefix, "// ");
}

#[test]
fn test_malformed_file_uses_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "{{{ not yaml").expect("write");

    let config = EditorConfig::load_from(&path);
    assert_eq!(config.tab_width, 4);
}

#[cfg(not(target_os = "windows"))]
#[test]
fn test_save_creates_config_dir_and_file() {
    let dir = tempdir().expect("tempdir");
    std::env::set_var("XDG_CONFIG_HOME", dir.path());

    let mut config = EditorConfig::default();
    config.tab_width = 3;
    config.save().expect("save");

    let path = dir.path().join("caret").join("config.yaml");
    assert!(path.exists(), "save must create the config directory");
    let back = EditorConfig::load_from(&path);
    assert_eq!(back.tab_width, 3);

    std::env::remove_var("XDG_CONFIG_HOME");
}

#[test]
fn test_config_round_trips_through_yaml() {
    let mut config = EditorConfig::default();
    config.tab_width = 8;
    config.use_global_buffer = true;
    config.comment_prefix = "# ".to_string();

    let yaml = serde_yaml::to_string(&config).expect("serialize");
    let back: EditorConfig = serde_yaml::from_str(&yaml).expect("parse");
    assert_eq!(back.tab_width, 8);
    assert!(back.use_global_buffer);
    assert_eq!(back.comment_prefix, "# ");
}

#[test]
fn test_tab_width_flows_into_editing() {
    let mut config = common::test_config();
    config.tab_width = 2;
    let mut editor = caret::Editor::new(config);
    editor.set_data("x", "\n");
    editor.set_cursor(0, 0);

    editor.run_operation("tab");
    assert_eq!(editor.buffer_contents(), vec!["  x"]);
}
