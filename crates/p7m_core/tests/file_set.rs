use std::path::{Path, PathBuf};

use p7m_core::{FileOrigin, FileSet};
use pretty_assertions::assert_eq;

fn paths(items: &[&str]) -> Vec<PathBuf> {
    items.iter().map(PathBuf::from).collect()
}

#[test]
fn refresh_is_sorted_and_unique() {
    let mut set = FileSet::new();
    set.add_files(paths(&[
        "/docs/c.p7m",
        "/docs/a.p7m",
        "/docs/b.p7m",
        "/docs/a.p7m",
        "/docs//c.p7m",
        "/docs/./b.p7m",
    ]));

    assert_eq!(
        set.refresh(),
        paths(&["/docs/a.p7m", "/docs/b.p7m", "/docs/c.p7m"])
    );
    assert_eq!(set.len(), 3);
}

#[test]
fn refresh_stays_canonical_across_mixed_sources() {
    let mut set = FileSet::new();
    set.add_dropped(paths(&["/z/last.p7m", "/a/first.P7M"]));
    set.add_folder(
        Path::new("/m"),
        paths(&["/m/sub/two.p7m", "/m/one.p7m", "/z/last.p7m"]),
    );
    set.add_files(paths(&["/m/one.p7m"]));

    let listed = set.refresh();
    let mut expected = listed.clone();
    expected.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    expected.dedup();
    assert_eq!(listed, expected);
    assert_eq!(listed.len(), 4);
}

#[test]
fn picker_accepts_any_extension() {
    let mut set = FileSet::new();
    let added = set.add_files(paths(&["/in/readme.txt", "/in/doc.p7m"]));

    assert_eq!(added, 2);
    assert_eq!(set.origin(Path::new("/in/readme.txt")), Some(FileOrigin::Picked));
}

#[test]
fn drop_keeps_only_p7m_names() {
    let mut set = FileSet::new();
    let added = set.add_dropped(paths(&[
        "/in/doc.P7M",
        "/in/notes.txt",
        "/in/archive.p7m.zip",
        "/in/other.p7m",
    ]));

    assert_eq!(added, 2);
    assert_eq!(set.refresh(), paths(&["/in/doc.P7M", "/in/other.p7m"]));
}

#[test]
fn switching_folder_replaces_previous_folder_files() {
    let mut set = FileSet::new();
    set.add_folder(Path::new("/first"), paths(&["/first/a.p7m", "/first/deep/b.p7m"]));
    set.add_folder(Path::new("/second"), paths(&["/second/c.p7m"]));

    assert_eq!(set.refresh(), paths(&["/second/c.p7m"]));
    assert_eq!(set.active_folder(), Some(Path::new("/second")));
}

#[test]
fn individually_added_files_survive_folder_switch() {
    let mut set = FileSet::new();
    set.add_files(paths(&["/picked/p.p7m"]));
    set.add_dropped(paths(&["/dropped/d.p7m"]));
    set.add_folder(Path::new("/first"), paths(&["/first/a.p7m"]));
    set.add_folder(Path::new("/second"), paths(&["/second/c.p7m"]));

    assert_eq!(
        set.refresh(),
        paths(&["/dropped/d.p7m", "/picked/p.p7m", "/second/c.p7m"])
    );
}

#[test]
fn rescanning_same_folder_merges() {
    let mut set = FileSet::new();
    set.add_folder(Path::new("/f"), paths(&["/f/a.p7m"]));
    set.add_folder(Path::new("/f/"), paths(&["/f/a.p7m", "/f/b.p7m"]));

    assert_eq!(set.refresh(), paths(&["/f/a.p7m", "/f/b.p7m"]));
}

#[test]
fn empty_scan_leaves_set_unchanged() {
    let mut set = FileSet::new();
    set.add_folder(Path::new("/first"), paths(&["/first/a.p7m"]));
    let before = set.clone();

    let added = set.add_folder(Path::new("/empty"), Vec::new());

    assert_eq!(added, 0);
    assert_eq!(set, before);
    assert_eq!(set.active_folder(), Some(Path::new("/first")));
}

#[test]
fn clear_forgets_everything() {
    let mut set = FileSet::new();
    set.add_files(paths(&["/a.p7m"]));
    set.add_folder(Path::new("/f"), paths(&["/f/b.p7m"]));

    set.clear();

    assert!(set.is_empty());
    assert!(set.refresh().is_empty());
    assert_eq!(set.active_folder(), None);
}
