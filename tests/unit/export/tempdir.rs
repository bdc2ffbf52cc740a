use super::*;

fn scratch_root(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("motioncraft-test-{tag}-{}", std::process::id()))
}

#[test]
fn directory_is_removed_on_drop() {
    let root = scratch_root("drop");
    let dir = TempDirGuard::create(&root, 4).unwrap();
    let path = dir.path().to_path_buf();
    std::fs::write(dir.frame_path(3), b"x").unwrap();
    assert!(path.join("00000003.png").exists());

    drop(dir);
    assert!(!path.exists());
    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn collisions_are_retried() {
    let root = scratch_root("retry");
    std::fs::create_dir_all(root.join("taken-0")).unwrap();
    let dir = TempDirGuard::create_named(&root, 3, |a| format!("taken-{a}")).unwrap();
    assert!(dir.path().ends_with("taken-1"));
    drop(dir);
    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn exhausted_attempts_are_an_io_error() {
    let root = scratch_root("exhaust");
    std::fs::create_dir_all(root.join("fixed")).unwrap();
    let err = TempDirGuard::create_named(&root, 5, |_| "fixed".to_string()).unwrap_err();
    assert!(matches!(err, MotionError::ExportIo(_)));
    assert!(root.join("fixed").exists());
    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn candidate_names_differ_per_attempt() {
    assert_ne!(candidate_name(1, 2, 0), candidate_name(1, 2, 1));
    assert_eq!(candidate_name(1, 2, 0), candidate_name(1, 2, 0));
    assert!(candidate_name(7, 7, 7).starts_with("motioncraft-"));
}
