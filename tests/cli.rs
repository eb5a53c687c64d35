use std::fs;
use std::process::{Command, Output};

const OFF: usize = 0x624;

fn zmulpatch(args: &[&std::ffi::OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_zmulpatch"))
        .args(args)
        .output()
        .expect("spawn zmulpatch")
}

fn image_with(word: u32) -> Vec<u8> {
    let mut bytes = vec![0u8; 0x800];
    bytes[OFF..OFF + 4].copy_from_slice(&word.to_le_bytes());
    bytes
}

#[test]
fn no_argument_prints_usage_and_fails() {
    let out = zmulpatch(&[]);

    assert!(!out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "usage: zmulpatch </path/to/binaryfile>\n"
    );
}

#[test]
fn patches_then_warns_on_second_run() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("a.out");
    fs::write(&path, image_with(0x02F7_07BB)).expect("write");

    let first = zmulpatch(&[path.as_os_str()]);
    assert!(first.status.success());
    assert!(first.stdout.is_empty());
    assert_eq!(&fs::read(&path).expect("read")[OFF..OFF + 4], &[0xBB, 0x17, 0xF7, 0x02]);

    let second = zmulpatch(&[path.as_os_str()]);
    assert!(second.status.success());
    assert_eq!(
        String::from_utf8_lossy(&second.stdout),
        "Warning: Expected mulw instruction not found at offset 0x624 (found 0x02f717bb)\n"
    );
    assert_eq!(fs::read(&path).expect("read"), image_with(0x02F7_17BB));
}

#[test]
fn short_image_prints_nothing_on_stdout() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("tiny");
    fs::write(&path, [1u8, 2, 3]).expect("write");

    let out = zmulpatch(&[path.as_os_str()]);

    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("skipped: image too short"));
    assert_eq!(fs::read(&path).expect("read"), [1u8, 2, 3]);
}

#[test]
fn missing_file_exits_with_one() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nope");

    let out = zmulpatch(&[path.as_os_str()]);

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).starts_with("error: cannot read"));
    assert!(!path.exists());
}
