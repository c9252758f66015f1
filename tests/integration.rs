#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use assert_fs::prelude::*;
    use assert_fs::TempDir;
    use imagine::{Loader, ProcessSettings, Dispatcher};
    use predicates::prelude::*;

    fn imagine() -> Command {
        let mut cmd = Command::cargo_bin("imagine").unwrap();
        cmd.env_remove("RUST_LOG");
        cmd
    }

    fn gallery() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        image::RgbImage::new(1000, 500)
            .save(temp_dir.child("ball.png").path())
            .unwrap();
        temp_dir.child("notes.txt").write_str("not an image").unwrap();
        temp_dir.child("nested/deep").create_dir_all().unwrap();
        image::RgbImage::new(10, 10)
            .save(temp_dir.child("nested/deep/tiny.jpg").path())
            .unwrap();
        temp_dir
    }

    #[test]
    fn test_show_images_flat_lists_files_not_directories() {
        let temp_dir = gallery();

        imagine()
            .args(["show-images", temp_dir.path().to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("ball.png"))
            .stdout(predicate::str::contains("notes.txt"))
            .stdout(predicate::str::contains("nested").not())
            .stdout(predicate::str::contains("tiny.jpg").not());
    }

    #[test]
    fn test_show_images_recursive_lists_only_images() {
        let temp_dir = gallery();

        imagine()
            .args(["show-images", temp_dir.path().to_str().unwrap(), "--r"])
            .assert()
            .success()
            .stdout(predicate::str::contains("ball.png"))
            .stdout(predicate::str::contains("tiny.jpg"))
            .stdout(predicate::str::contains("notes.txt").not());
    }

    #[test]
    fn test_image_info_prints_requested_fields_in_order() {
        let temp_dir = gallery();
        let image = temp_dir.child("ball.png");

        imagine()
            .args(["image-info", image.path().to_str().unwrap(), "--m", "--s"])
            .assert()
            .success()
            .stdout(predicate::str::ends_with("Width: 1000 Height: 500\nMode: RGB\n"));
    }

    #[test]
    fn test_chain_continues_after_failed_command() {
        let temp_dir = gallery();
        let empty = TempDir::new().unwrap();
        let image = temp_dir.child("ball.png");

        imagine()
            .args([
                "set-working-dir",
                empty.path().to_str().unwrap(),
                "image-info",
                image.path().to_str().unwrap(),
                "--f",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Supported image(s) format not found in directory",
            ))
            .stdout(predicate::str::contains("working directory: unset"))
            .stdout(predicate::str::ends_with("Format: PNG\n"));
    }

    #[test]
    fn test_set_working_dir_reports_count() {
        let temp_dir = gallery();

        imagine()
            .args(["set-working-dir", temp_dir.path().to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("2 Supported Image format(s) found"));
    }

    #[test]
    fn test_missing_path_fails_only_that_command() {
        let temp_dir = gallery();
        let missing = temp_dir.child("missing");

        imagine()
            .args([
                "show-images",
                missing.path().to_str().unwrap(),
                "show-images",
                temp_dir.path().to_str().unwrap(),
            ])
            .assert()
            .code(2)
            .stdout(predicate::str::contains("does not exist"))
            .stdout(predicate::str::contains("ball.png"));
    }

    #[test]
    fn test_process_image_resizes_from_scripted_stdin() {
        let temp_dir = gallery();
        let image = temp_dir.child("ball.png");

        imagine()
            .args(["process-image", image.path().to_str().unwrap()])
            .write_stdin("1\n200\n200\nn\nthumb\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("new file name is: thumb.png"))
            .stdout(predicate::str::contains("Saved 200x100 image to"));

        temp_dir.child("thumb.png").assert(predicate::path::is_file());
        let meta = Loader::new()
            .read_metadata(temp_dir.child("thumb.png").path())
            .unwrap();
        assert_eq!((meta.width, meta.height), (200, 100));
    }

    #[test]
    fn test_process_image_convert_option_is_reported() {
        let temp_dir = gallery();
        let image = temp_dir.child("ball.png");

        imagine()
            .args(["process-image", image.path().to_str().unwrap()])
            .write_stdin("2\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Not supported yet"));
    }

    #[test]
    fn test_help_lists_commands() {
        imagine()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("set-working-dir"))
            .stdout(predicate::str::contains("process-image"));
    }

    #[test]
    fn test_library_dispatcher_round_trip() {
        let temp_dir = gallery();
        let image = temp_dir.child("ball.png");
        let mut dispatcher = Dispatcher::new(Vec::new(), "1\n300\n300\n\n".as_bytes());

        dispatcher
            .process_image(image.path(), None, ProcessSettings::default())
            .unwrap();

        let meta = Loader::new().read_metadata(image.path()).unwrap();
        assert_eq!((meta.width, meta.height), (300, 150));
        assert_eq!(meta.format_name(), "PNG");
    }
}
