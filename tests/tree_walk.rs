mod common;

use std::error::Error;
use std::fs;

use tempfile::tempdir;
use treedoc::rules::RuleList;
use treedoc::walk::{walk, WalkOptions};

use common::write_file;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn walk_renders_tree_and_collects_files_depth_first() -> TestResult {
    let dir = tempdir()?;
    let root = dir.path();
    write_file(root, "b.txt", "b")?;
    write_file(root, "a/x.rs", "x")?;
    write_file(root, "a/inner/y.rs", "y")?;
    write_file(root, "c/z.rs", "z")?;

    let ignored = RuleList::default();
    let out = walk(
        root,
        &WalkOptions {
            ignored: &ignored,
            sort_entries: true,
            skip_rel: None,
        },
    )?;

    let expected = "\
├── a
│   ├── inner
│   │   └── y.rs
│   └── x.rs
├── b.txt
└── c
    └── z.rs
";
    assert_eq!(out.tree, expected);

    let rels: Vec<&str> = out.files.iter().map(|f| f.rel_path.as_str()).collect();
    assert_eq!(rels, vec!["a/inner/y.rs", "a/x.rs", "b.txt", "c/z.rs"]);
    assert_eq!(out.files[0].name, "y.rs");
    assert_eq!(out.files[0].path, root.join("a").join("inner").join("y.rs"));

    Ok(())
}

#[test]
fn hidden_entries_are_pruned_and_last_connector_uses_visible_siblings() -> TestResult {
    let dir = tempdir()?;
    let root = dir.path();
    write_file(root, "src/main.js", "main")?;
    write_file(root, "node_modules/pkg/index.js", "dep")?;
    write_file(root, "packages/app/node_modules/dep/a.js", "dep")?;
    write_file(root, "packages/app/index.js", "app")?;
    write_file(root, "zz.log", "noise")?;

    let ignored = RuleList::compile("ignored_paths", &["node_modules/", "*.log"])?;
    let out = walk(
        root,
        &WalkOptions {
            ignored: &ignored,
            sort_entries: true,
            skip_rel: None,
        },
    )?;

    // `zz.log` sorts last but is hidden, so `src` gets the closing connector.
    let expected = "\
├── packages
│   └── app
│       └── index.js
└── src
    └── main.js
";
    assert_eq!(out.tree, expected);
    assert!(!out.tree.contains("node_modules"));
    assert!(out.files.iter().all(|f| !f.rel_path.contains("node_modules")));
    assert_eq!(out.files.len(), 2);

    Ok(())
}

#[test]
fn skip_rel_excludes_the_output_document() -> TestResult {
    let dir = tempdir()?;
    let root = dir.path();
    write_file(root, "docs/project.md", "old output")?;
    write_file(root, "docs/guide.md", "guide")?;

    let ignored = RuleList::default();
    let out = walk(
        root,
        &WalkOptions {
            ignored: &ignored,
            sort_entries: true,
            skip_rel: Some("docs/project.md"),
        },
    )?;

    assert_eq!(out.tree, "└── docs\n    └── guide.md\n");
    assert_eq!(out.files.len(), 1);

    Ok(())
}

#[test]
fn empty_directories_are_listed_without_children() -> TestResult {
    let dir = tempdir()?;
    let root = dir.path();
    fs::create_dir_all(root.join("empty"))?;

    let ignored = RuleList::default();
    let out = walk(
        root,
        &WalkOptions {
            ignored: &ignored,
            sort_entries: false,
            skip_rel: None,
        },
    )?;

    assert_eq!(out.tree, "└── empty\n");
    assert!(out.files.is_empty());
    Ok(())
}

#[cfg(unix)]
#[test]
fn broken_entry_aborts_the_walk() -> TestResult {
    let dir = tempdir()?;
    let root = dir.path();
    write_file(root, "ok.txt", "ok")?;
    std::os::unix::fs::symlink(root.join("missing-target"), root.join("dangling"))?;

    let ignored = RuleList::default();
    let res = walk(
        root,
        &WalkOptions {
            ignored: &ignored,
            sort_entries: true,
            skip_rel: None,
        },
    );
    assert!(res.is_err());

    Ok(())
}
