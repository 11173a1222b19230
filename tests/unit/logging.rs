use super::*;

#[test]
fn resolve_log_dir_creates_preferred_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let wanted = tmp.path().join("nested").join("logs");

    let dir = resolve_log_dir(Some(&wanted)).unwrap();

    assert_eq!(dir, wanted);
    assert!(wanted.is_dir());
}

#[test]
fn resolve_log_dir_falls_back_to_temp() {
    let tmp = tempfile::tempdir().unwrap();
    // A regular file cannot become a directory.
    let blocker = tmp.path().join("file");
    std::fs::write(&blocker, b"x").unwrap();

    let dir = resolve_log_dir(Some(&blocker.join("logs"))).unwrap();

    assert!(dir.starts_with(std::env::temp_dir()));
    assert!(dir.is_dir());
}
