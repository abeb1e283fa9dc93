use assert_cmd::Command;
use predicates::prelude::*;
use labelplot::data::DataReader;
use labelplot::spiral::{self, SpiralConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;

#[test]
fn generated_files_load_back() {
    let dir = tempfile::tempdir().unwrap();
    let config = SpiralConfig {
        points_per_spiral: 25,
        ..SpiralConfig::default()
    };
    let split = spiral::generate(&config, &mut StdRng::seed_from_u64(3)).unwrap();

    let train = dir.path().join("train.txt");
    spiral::write_dataset_file(&train, &split.train).unwrap();
    let dataset = DataReader::read_file(&train).unwrap();

    assert_eq!(dataset.len(), split.train.len());
    let zeros = split.train.iter().filter(|r| r.is_class_zero()).count();
    assert_eq!(dataset.class_zero.len(), zeros);
    assert_eq!(dataset.class_other.len(), split.train.len() - zeros);

    let first_zero = split.train.iter().find(|r| r.is_class_zero()).unwrap();
    assert_eq!(dataset.class_zero.xs()[0], first_zero.x);
    assert_eq!(dataset.class_zero.ys()[0], first_zero.y);
}

#[test]
fn binary_writes_train_and_test_splits() {
    let dir = tempfile::tempdir().unwrap();
    let train = dir.path().join("spiral_train.txt");
    let test = dir.path().join("spiral_test.txt");

    Command::cargo_bin("generate_spirals")
        .unwrap()
        .arg(&train)
        .arg(&test)
        .args(["--points", "10", "--seed", "7"])
        .assert()
        .success();

    let train_text = fs::read_to_string(&train).unwrap();
    let test_text = fs::read_to_string(&test).unwrap();
    assert_eq!(train_text.lines().next(), Some("16 2 1"));
    assert_eq!(train_text.lines().count(), 17);
    assert_eq!(test_text.lines().next(), Some("4 2 1"));
    assert_eq!(test_text.lines().count(), 5);

    assert_eq!(DataReader::read_file(&train).unwrap().len(), 16);
    assert_eq!(DataReader::read_file(&test).unwrap().len(), 4);
}

#[test]
fn same_seed_gives_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let run = |name: &str| {
        let train = dir.path().join(format!("{name}_train.txt"));
        let test = dir.path().join(format!("{name}_test.txt"));
        Command::cargo_bin("generate_spirals")
            .unwrap()
            .arg(&train)
            .arg(&test)
            .args(["--points", "20", "--seed", "42"])
            .assert()
            .success();
        (
            fs::read_to_string(train).unwrap(),
            fs::read_to_string(test).unwrap(),
        )
    };

    assert_eq!(run("a"), run("b"));
}

#[test]
fn binary_rejects_point_count_that_overflows() {
    let dir = tempfile::tempdir().unwrap();
    let train = dir.path().join("train.txt");

    Command::cargo_bin("generate_spirals")
        .unwrap()
        .arg(&train)
        .arg(dir.path().join("test.txt"))
        .args(["--points", &(usize::MAX / 2 + 1).to_string()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too many"));

    assert!(!train.exists());
}
