use pairkit_core::{
    rename_operation, rename_pairs, DirectorySnapshot, RenameJournal, RenameOptions, Session,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn file_names(dir: &Path) -> Vec<String> {
    DirectorySnapshot::read(dir).unwrap().files().to_vec()
}

fn rename_in(dir: &Path, prefix: &str) -> pairkit_core::RenameReport {
    let snapshot = DirectorySnapshot::read(dir).unwrap();
    let mut session = Session::new(dir);
    rename_pairs(&snapshot, prefix, &mut session, &mut RenameJournal::disabled()).unwrap()
}

#[test]
fn renames_the_cat_dog_example() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("cat.jpg"), b"jpg-bytes").unwrap();
    fs::write(temp.path().join("cat.txt"), "a cat").unwrap();
    fs::write(temp.path().join("dog.png"), b"png-bytes").unwrap();
    fs::write(temp.path().join("dog.txt"), "a dog").unwrap();

    let report = rename_in(temp.path(), "set");

    assert_eq!(report.pairs_renamed, 2);
    assert_eq!(report.width, 1);
    assert_eq!(
        file_names(temp.path()),
        ["set_1.jpg", "set_1.txt", "set_2.png", "set_2.txt"]
    );
    // Pairings moved with their images.
    assert_eq!(
        fs::read_to_string(temp.path().join("set_1.txt")).unwrap(),
        "a cat"
    );
    assert_eq!(
        fs::read_to_string(temp.path().join("set_2.txt")).unwrap(),
        "a dog"
    );
    assert_eq!(fs::read(temp.path().join("set_1.jpg")).unwrap(), b"jpg-bytes");
}

#[test]
fn staging_avoids_collisions_with_existing_names() {
    // a.png's target name is img_1.png, which is currently a different
    // file. A direct rename would overwrite it.
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.png"), b"first").unwrap();
    fs::write(temp.path().join("a.txt"), "caption one").unwrap();
    fs::write(temp.path().join("img_1.png"), b"second").unwrap();
    fs::write(temp.path().join("img_1.txt"), "caption two").unwrap();

    rename_in(temp.path(), "img");

    assert_eq!(
        file_names(temp.path()),
        ["img_1.png", "img_1.txt", "img_2.png", "img_2.txt"]
    );
    // No data loss: both contents survived, in sorted order.
    assert_eq!(fs::read(temp.path().join("img_1.png")).unwrap(), b"first");
    assert_eq!(fs::read(temp.path().join("img_2.png")).unwrap(), b"second");
    assert_eq!(
        fs::read_to_string(temp.path().join("img_1.txt")).unwrap(),
        "caption one"
    );
    assert_eq!(
        fs::read_to_string(temp.path().join("img_2.txt")).unwrap(),
        "caption two"
    );
}

#[test]
fn files_already_in_the_staging_namespace_are_not_clobbered() {
    // temp_1.png is exactly where a.png would be staged under the default
    // staging prefix, so staging must move into a different namespace.
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.png"), b"first").unwrap();
    fs::write(temp.path().join("temp_1.png"), b"second").unwrap();

    rename_in(temp.path(), "set");

    assert_eq!(file_names(temp.path()), ["set_1.png", "set_2.png"]);
    assert_eq!(fs::read(temp.path().join("set_1.png")).unwrap(), b"first");
    assert_eq!(fs::read(temp.path().join("set_2.png")).unwrap(), b"second");
}

#[test]
fn rename_refuses_to_overwrite_an_orphan_caption() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("cat.png"), []).unwrap();
    fs::write(temp.path().join("cat.txt"), "a cat").unwrap();
    fs::write(temp.path().join("set_1.txt"), "orphan").unwrap();

    let snapshot = DirectorySnapshot::read(temp.path()).unwrap();
    let mut session = Session::new(temp.path());
    let err = rename_pairs(&snapshot, "set", &mut session, &mut RenameJournal::disabled())
        .unwrap_err();

    assert!(matches!(err, pairkit_core::Error::WouldOverwrite(name) if name == "set_1.txt"));
    // The plan was rejected before any rename ran.
    assert_eq!(file_names(temp.path()), ["cat.png", "cat.txt", "set_1.txt"]);
    assert_eq!(
        fs::read_to_string(temp.path().join("set_1.txt")).unwrap(),
        "orphan"
    );
}

#[test]
fn twelve_files_get_two_digit_indices() {
    let temp = TempDir::new().unwrap();
    for i in 0..12 {
        fs::write(temp.path().join(format!("src{i:02}.png")), [i]).unwrap();
    }

    let report = rename_in(temp.path(), "set");
    assert_eq!(report.width, 2);

    let expected: Vec<String> = (1..=12).map(|i| format!("set_{i:02}.png")).collect();
    assert_eq!(file_names(temp.path()), expected);
}

#[test]
fn rerunning_with_the_same_prefix_is_stable() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("cat.jpg"), []).unwrap();
    fs::write(temp.path().join("dog.png"), []).unwrap();

    rename_in(temp.path(), "set");
    let first = file_names(temp.path());
    rename_in(temp.path(), "set");
    assert_eq!(file_names(temp.path()), first);
}

#[test]
fn image_without_caption_is_renamed_alone() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("cat.png"), []).unwrap();
    fs::write(temp.path().join("dog.png"), []).unwrap();
    fs::write(temp.path().join("dog.txt"), "a dog").unwrap();

    let report = rename_in(temp.path(), "set");
    assert_eq!(report.pairs_renamed, 2);
    assert_eq!(
        file_names(temp.path()),
        ["set_1.png", "set_2.png", "set_2.txt"]
    );
}

#[test]
fn open_caption_file_is_repointed() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("cat.png"), []).unwrap();
    fs::write(temp.path().join("cat.txt"), "a cat").unwrap();

    let snapshot = DirectorySnapshot::read(temp.path()).unwrap();
    let mut session = Session::new(temp.path()).with_current_file(temp.path().join("cat.txt"));
    rename_pairs(&snapshot, "set", &mut session, &mut RenameJournal::disabled()).unwrap();

    assert_eq!(
        session.current_file().unwrap(),
        temp.path().join("set_1.txt")
    );
}

#[test]
fn journal_records_every_rename() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("cat.png"), []).unwrap();
    fs::write(temp.path().join("cat.txt"), "a cat").unwrap();

    let log = temp.path().join("rename.log");
    let snapshot = DirectorySnapshot::read(temp.path()).unwrap();
    let mut journal = RenameJournal::open(&log).unwrap();
    let mut session = Session::new(temp.path());
    rename_pairs(&snapshot, "set", &mut session, &mut journal).unwrap();

    let contents = fs::read_to_string(&log).unwrap();
    assert!(contents.contains("renamed cat.png -> temp_1.png"));
    assert!(contents.contains("renamed temp_1.png -> set_1.png"));
    assert!(contents.contains("renamed cat.txt -> temp_1.txt"));
    assert!(contents.contains("renamed temp_1.txt -> set_1.txt"));
    assert!(contents.contains("completed rename of 1 pairs"));
}

#[test]
fn operation_creates_missing_companions_first() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("cat.png"), []).unwrap();

    let options = RenameOptions {
        journal: false,
        ..Default::default()
    };
    let report = rename_operation(temp.path(), "set", &options).unwrap();

    assert_eq!(report.pairs_renamed, 1);
    assert!(temp.path().join("set_1.png").exists());
    assert_eq!(
        fs::read_to_string(temp.path().join("set_1.txt")).unwrap(),
        ""
    );
}

#[test]
fn dry_run_reports_the_plan_without_renaming() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("cat.png"), []).unwrap();

    let options = RenameOptions {
        dry_run: true,
        journal: false,
        ..Default::default()
    };
    let report = rename_operation(temp.path(), "set", &options).unwrap();

    assert!(!report.applied);
    let plan = report.plan.as_ref().unwrap();
    assert_eq!(plan.entries[0].image.to, "set_1.png");
    // Nothing was touched, not even a companion file.
    assert_eq!(file_names(temp.path()), ["cat.png"]);
}

#[test]
fn operation_writes_the_default_journal() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("cat.png"), []).unwrap();

    rename_operation(temp.path(), "set", &RenameOptions::default()).unwrap();

    let log = temp.path().join(".pairkit").join("rename.log");
    assert!(fs::read_to_string(log)
        .unwrap()
        .contains("renamed temp_1.png -> set_1.png"));
}
