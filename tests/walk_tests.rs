// Traversal tests against real temporary directories

mod common;

use pathsize::options::Options;
use pathsize::report::Recorder;
use pathsize::scan::{Walker, scan};
use pathsize::size::format_size;
use std::fs;
use tempfile::TempDir;

fn suffixed() -> Options {
    Options {
        size_suffixes: true,
        ..Options::default()
    }
}

#[test]
fn test_empty_directory() {
    let dir = TempDir::new().unwrap();
    let mut rec = Recorder::new();

    assert_eq!(scan(&Options::default(), &mut rec, dir.path()), 0);
    assert!(rec.lines.is_empty());
}

#[test]
fn test_sample_tree_lines() {
    let dir = common::create_sample_tree();
    let mut rec = Recorder::new();

    let total = scan(&suffixed(), &mut rec, dir.path());
    assert_eq!(total, 2548);

    let sizes = rec.sizes();
    assert_eq!(sizes.len(), 3);

    let find = |path: &str| sizes.iter().position(|(_, p)| *p == path).unwrap();
    let f1 = find("./f1");
    let sub = find("./sub");
    let f2 = find("./sub/f2");

    assert_eq!(sizes[f1].0, format_size(2048, true));
    assert_eq!(sizes[f1].0.value, 2.0);
    assert_eq!(sizes[f1].0.suffix, 'K');
    assert_eq!(sizes[sub].0, format_size(500, true));
    assert_eq!(sizes[f2].0.value, 500.0);
    assert_eq!(sizes[f2].0.suffix, 'B');

    // A directory's line comes after everything below it
    assert!(f2 < sub);
    assert!(rec.errors().is_empty());
}

#[test]
fn test_nested_totals() {
    let dir = TempDir::new().unwrap();
    common::write_file(dir.path(), "a/b/c/one", 10);
    common::write_file(dir.path(), "a/b/two", 20);
    common::write_file(dir.path(), "a/three", 30);
    fs::create_dir_all(dir.path().join("a/empty")).unwrap();

    let mut rec = Recorder::new();
    let total = scan(&Options::default(), &mut rec, dir.path());
    assert_eq!(total, 60);

    let sizes = rec.sizes();
    let size_of = |path: &str| {
        sizes
            .iter()
            .find(|(_, p)| *p == path)
            .map(|(s, _)| s.value)
            .unwrap()
    };
    assert_eq!(size_of("./a"), 60.0);
    assert_eq!(size_of("./a/b"), 30.0);
    assert_eq!(size_of("./a/b/c"), 10.0);
    assert_eq!(size_of("./a/empty"), 0.0);
    assert_eq!(sizes.len(), 7);
}

#[test]
fn test_silent_walk_prints_nothing() {
    let dir = common::create_sample_tree();
    let options = Options {
        silent: true,
        ..Options::default()
    };
    let mut rec = Recorder::new();

    assert_eq!(scan(&options, &mut rec, dir.path()), 2548);
    assert_eq!(scan(&options, &mut rec, &dir.path().join("missing")), 0);
    assert!(rec.lines.is_empty());
}

#[test]
fn test_missing_path_is_not_fatal() {
    let dir = TempDir::new().unwrap();
    let mut rec = Recorder::new();

    let total = scan(&Options::default(), &mut rec, &dir.path().join("ghost"));
    assert_eq!(total, 0);
    assert_eq!(rec.errors().len(), 1);
    assert!(rec.sizes().is_empty());
}

#[test]
fn test_deep_tree() {
    let dir = TempDir::new().unwrap();
    let rel = vec!["d"; 200].join("/");
    common::write_file(dir.path(), &format!("{rel}/leaf"), 7);

    let mut rec = Recorder::new();
    let total = scan(&Options::default(), &mut rec, dir.path());
    assert_eq!(total, 7);
    // 200 directories plus the leaf
    assert_eq!(rec.sizes().len(), 201);
    assert_eq!(rec.sizes().last().unwrap().1, "./d");
}

#[cfg(unix)]
#[test]
fn test_symlinked_directory_is_not_followed() {
    let dir = TempDir::new().unwrap();
    common::write_file(dir.path(), "real/data", 100);
    std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link")).unwrap();

    let mut rec = Recorder::new();
    let options = Options::default();
    let total = Walker::new(&options, &mut rec).walk(dir.path());

    let sizes = rec.sizes();
    assert!(sizes.iter().all(|(_, p)| !p.starts_with("./link/")));
    let link_size = fs::symlink_metadata(dir.path().join("link")).unwrap().len();
    assert_eq!(total, 100 + link_size);
}

/// Makes `dir` unreadable. Returns false when the permission change has no
/// effect (privileged user), after restoring access.
#[cfg(unix)]
fn lock_dir(dir: &std::path::Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(dir, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::read_dir(dir).is_ok() {
        unlock_dir(dir);
        return false;
    }
    true
}

#[cfg(unix)]
fn unlock_dir(dir: &std::path::Path) {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(dir, fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(unix)]
#[test]
fn test_unlistable_subdirectory_counts_zero() {
    let dir = TempDir::new().unwrap();
    common::write_file(dir.path(), "f", 100);
    common::write_file(dir.path(), "locked/hidden", 5000);
    let locked = dir.path().join("locked");
    if !lock_dir(&locked) {
        return;
    }

    let mut rec = Recorder::new();
    let total = scan(&Options::default(), &mut rec, dir.path());
    unlock_dir(&locked);

    assert_eq!(total, 100);
    let errors = rec.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Cannot list directory"));

    let sizes = rec.sizes();
    assert_eq!(sizes.len(), 2);
    assert!(sizes.contains(&(format_size(0, false), "./locked")));
    assert!(sizes.contains(&(format_size(100, false), "./f")));
}

#[cfg(unix)]
#[test]
fn test_unlistable_work_path_counts_zero() {
    let dir = TempDir::new().unwrap();
    common::write_file(dir.path(), "a/f", 100);
    let root = dir.path().join("a");
    if !lock_dir(&root) {
        return;
    }

    let mut rec = Recorder::new();
    let total = scan(&Options::default(), &mut rec, &root);
    unlock_dir(&root);

    assert_eq!(total, 0);
    assert_eq!(rec.lines.len(), 1);
    assert!(rec.errors()[0].starts_with("Cannot list directory"));
}
