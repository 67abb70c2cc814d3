//! Integration tests for board file loading

use std::fs;
use std::path::PathBuf;

use pingboard_foundation::{ErrorKind, SimulationConfig};
use pingboard_runtime::{Encoding, load_board, read_board};

fn temp_board(name: &str, bytes: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("pingboard_it_{name}.pb"));
    fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn load_utf8_board() {
    let path = temp_board(
        "utf8",
        b"board name=Flippers gravity=20.0\nleftFlipper name=FL x=10 y=7\n",
    );
    let scene = load_board(&path, Encoding::utf8(), SimulationConfig::default()).unwrap();
    assert_eq!(scene.name(), "Flippers");
    assert_eq!(scene.registry().len(), 1);
    let _ = fs::remove_file(&path);
}

#[test]
fn windows_1252_comment_is_ignored() {
    let path = temp_board(
        "cp1252",
        b"# tr\xE8s \x93bien\x94\nboard name=Latin\nsquareBumper name=S x=0 y=0\n",
    );
    assert!(matches!(
        load_board(&path, Encoding::utf8(), SimulationConfig::default())
            .unwrap_err()
            .kind,
        ErrorKind::Io(_)
    ));
    let cp1252: Encoding = "windows-1252".parse().unwrap();
    let scene = load_board(&path, cp1252, SimulationConfig::default()).unwrap();
    assert_eq!(scene.name(), "Latin");
    let _ = fs::remove_file(&path);
}

#[test]
fn shift_jis_board() {
    let path = temp_board(
        "sjis",
        b"# \x93\xfa\x96\x7b\nboard name=Japan\ncircleBumper name=C x=1 y=1\n",
    );
    let sjis = Encoding::for_label("shift_jis").unwrap();
    assert!(read_board(&path, sjis).unwrap().starts_with("# \u{65e5}\u{672c}"));
    let scene = load_board(&path, sjis, SimulationConfig::default()).unwrap();
    assert_eq!(scene.name(), "Japan");
    let _ = fs::remove_file(&path);
}

#[test]
fn unknown_label_rejected() {
    assert!("klingon".parse::<Encoding>().is_err());
    assert!(Encoding::for_label("klingon").is_none());
}

#[test]
fn read_board_returns_text() {
    let path = temp_board("read", b"board name=Text\n");
    assert_eq!(read_board(&path, Encoding::utf8()).unwrap(), "board name=Text\n");
    let _ = fs::remove_file(&path);
}

#[test]
fn parse_errors_carry_the_path() {
    let path = temp_board("bad", b"board name=Bad\nfire trigger=A action=B\n");
    let err = load_board(&path, Encoding::utf8(), SimulationConfig::default()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnresolvedReference { .. }));
    let source = err.context.and_then(|c| c.source).unwrap();
    assert!(source.ends_with("pingboard_it_bad.pb"));
    let _ = fs::remove_file(&path);
}
