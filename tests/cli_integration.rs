use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn recipebox(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("recipebox").unwrap();
    cmd.env("RECIPEBOX_CONFIG_DIR", config_dir.path())
        .env("NO_COLOR", "1")
        .env_remove("RECIPEBOX_LOG");
    cmd
}

#[test]
fn test_naked_run_lists_samples() {
    let dir = tempfile::tempdir().unwrap();
    recipebox(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Tomato Soup"))
        .stdout(predicate::str::contains("5. Spaghetti Carbonara"));
}

#[test]
fn test_search_keeps_display_indexes() {
    let dir = tempfile::tempdir().unwrap();
    recipebox(&dir)
        .args(["list", "--search", "TOMATO"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Tomato Soup"))
        .stdout(predicate::str::contains("4. Greek Salad"))
        .stdout(predicate::str::contains("Apple Pie").not());
}

#[test]
fn test_category_filter_and_no_results() {
    let dir = tempfile::tempdir().unwrap();
    recipebox(&dir)
        .args(["list", "--category", "Dessert"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Apple Pie"))
        .stdout(predicate::str::contains("Tomato Soup").not());

    recipebox(&dir)
        .args(["list", "--category", "dessert"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipes found."));
}

#[test]
fn test_categories_are_sorted() {
    let dir = tempfile::tempdir().unwrap();
    recipebox(&dir)
        .args(["--json", "categories"])
        .assert()
        .success()
        .stdout(
            predicate::str::is_match(
                r#"(?s)"Breakfast",\s*"Dessert",\s*"Main",\s*"Salad",\s*"Soup""#,
            )
            .unwrap(),
        );
}

#[test]
fn test_view_shows_ingredients() {
    let dir = tempfile::tempdir().unwrap();
    recipebox(&dir)
        .args(["view", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Apple Pie"))
        .stdout(predicate::str::contains("2 1/2 cup flour"));
}

#[test]
fn test_view_unknown_index_fails() {
    let dir = tempfile::tempdir().unwrap();
    recipebox(&dir)
        .args(["view", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_create_rejects_blank_title() {
    let dir = tempfile::tempdir().unwrap();
    recipebox(&dir)
        .args(["create", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Title cannot be empty"));
}

#[test]
fn test_create_rejects_non_image_upload() {
    let dir = tempfile::tempdir().unwrap();
    let notes = dir.path().join("notes.txt");
    std::fs::write(&notes, "not a picture").unwrap();

    recipebox(&dir)
        .args(["create", "Toast", "--image"])
        .arg(&notes)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please select an image file"));
}

#[test]
fn test_image_limit_comes_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let photo = dir.path().join("toast.jpg");
    std::fs::write(&photo, vec![0u8; 64]).unwrap();

    recipebox(&dir)
        .args(["config", "max-image-bytes", "32"])
        .assert()
        .success()
        .stdout(predicate::str::contains("max-image-bytes set to 32"));

    recipebox(&dir)
        .args(["create", "Toast", "--image"])
        .arg(&photo)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Image must be under"));
}

#[test]
fn test_config_show_and_disable_samples() {
    let dir = tempfile::tempdir().unwrap();
    recipebox(&dir)
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("max-image-bytes = 2097152"))
        .stdout(predicate::str::contains("load-samples = true"));

    recipebox(&dir)
        .args(["config", "load-samples", "false"])
        .assert()
        .success();

    recipebox(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipes found."));
}

#[test]
fn test_basket_merges_lines() {
    let dir = tempfile::tempdir().unwrap();
    recipebox(&dir)
        .args(["basket", "2", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 1/2 + 1 1/2 cup flour"))
        .stdout(predicate::str::contains("(Apple Pie, Fluffy Pancakes)"));
}

#[test]
fn test_session_keeps_changes() {
    let dir = tempfile::tempdir().unwrap();
    let script = [
        r#"create "Miso Soup" -c Soup --cook 10 -t "quick, vegan" -i "2|tbsp|miso""#,
        "ingredient add 6 tofu",
        "edit 1 --title \"Roast Tomato Soup\"",
        "delete 2",
        "list --search soup",
        "view 5",
        "exit",
        "list",
    ]
    .join("\n");

    recipebox(&dir)
        .arg("session")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Recipe created: Miso Soup"))
        .stdout(predicate::str::contains("Added tofu to Miso Soup"))
        .stdout(predicate::str::contains("Recipe updated: Roast Tomato Soup"))
        .stdout(predicate::str::contains("Recipe deleted: Apple Pie"))
        .stdout(predicate::str::contains("1. Roast Tomato Soup"))
        // Apple Pie is gone, so Miso Soup moves from 6 to 5
        .stdout(predicate::str::contains("5. Miso Soup"))
        .stdout(predicate::str::contains("2 tbsp miso"))
        .stdout(predicate::str::contains("tofu"));
}

#[test]
fn test_session_reports_errors_and_continues() {
    let dir = tempfile::tempdir().unwrap();
    recipebox(&dir)
        .arg("session")
        .write_stdin("view 99\nfrobnicate\nlist --category Main\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Error:"))
        .stdout(predicate::str::contains("Spaghetti Carbonara"));
}

#[test]
fn test_session_survives_huge_times() {
    let dir = tempfile::tempdir().unwrap();
    recipebox(&dir)
        .arg("session")
        .write_stdin("create Stew --prep 4294967295 --cook 5\nlist --sort time\nview 6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recipe created: Stew"))
        .stdout(predicate::str::contains("6. Stew"))
        .stdout(predicate::str::contains("total 4294967295 min"));
}

#[test]
fn test_changes_do_not_outlive_the_process() {
    let dir = tempfile::tempdir().unwrap();
    recipebox(&dir)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recipe deleted: Tomato Soup"));

    recipebox(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Tomato Soup"));
}
