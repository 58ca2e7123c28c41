//! Integration tests for the cd command

#![allow(deprecated)]

use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

mod common;
use common::{sww_cmd, write_config};

#[test]
fn test_cd_prints_only_the_path() {
    let home = TempDir::new().unwrap();
    write_config(
        home.path(),
        &[("Infra", Path::new("/srv/infra")), ("web", Path::new("/srv/web"))],
    );

    for key in ["infra", "INFRA", "Infra"] {
        sww_cmd(home.path())
            .args(["cd", key])
            .assert()
            .success()
            .stdout("/srv/infra\n");
    }
}

#[test]
fn test_cd_unknown_name() {
    let home = TempDir::new().unwrap();
    write_config(home.path(), &[("Infra", Path::new("/srv/infra"))]);

    sww_cmd(home.path())
        .args(["cd", "doesnotexist"])
        .assert()
        .code(5)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("\"doesnotexist\" not found"));
}

#[test]
fn test_cd_partial_name_is_not_a_match() {
    let home = TempDir::new().unwrap();
    write_config(home.path(), &[("Infra", Path::new("/srv/infra"))]);

    sww_cmd(home.path())
        .args(["cd", "inf"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_cd_ignores_all_flag() {
    let home = TempDir::new().unwrap();
    write_config(home.path(), &[("web", Path::new("/srv/web"))]);

    sww_cmd(home.path())
        .args(["-all", "cd", "web"])
        .assert()
        .success()
        .stdout("/srv/web\n");
}

#[test]
fn test_cd_without_name_on_empty_config() {
    let home = TempDir::new().unwrap();
    write_config(home.path(), &[]);

    sww_cmd(home.path())
        .arg("cd")
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_cd_missing_config() {
    let home = TempDir::new().unwrap();

    sww_cmd(home.path())
        .args(["cd", "web"])
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty());
}
