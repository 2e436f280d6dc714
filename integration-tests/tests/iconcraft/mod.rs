use crate::new_workdir;
use assert_cmd::Command;
use std::path::Path;

fn iconcraft(workdir: &crate::Workdir) -> Command {
    let mut cmd = Command::cargo_bin("test-iconcraft").unwrap();
    cmd.current_dir(workdir.path())
        .arg("--config-file")
        .arg(workdir.config_file());
    cmd
}

fn read_json(path: impl AsRef<Path>) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn should_generate_ios_icons_with_builtin_rasterizer() {
    let workdir = new_workdir().with_source_image(128);
    let output = iconcraft(&workdir)
        .args(["--platform", "ios", "--output", "out"])
        .arg(workdir.source_image())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert!(String::from_utf8_lossy(&output).contains("iOS icons written to out"));

    let out = workdir.path().join("out");
    assert_eq!(
        image::image_dimensions(out.join("Icon-1024.png")).unwrap(),
        (1024, 1024)
    );
    assert_eq!(
        image::image_dimensions(out.join("Icon-60@3x.png")).unwrap(),
        (180, 180)
    );
    assert_eq!(
        image::image_dimensions(out.join("Icon-83.5@2x.png")).unwrap(),
        (167, 167)
    );
    let contents = read_json(out.join("Contents.json"));
    let images = contents["images"].as_array().unwrap();
    assert_eq!(images.len(), 38);
    assert!(images.contains(&serde_json::json!({
        "filename": "Icon-60@3x.png",
        "idiom": "iphone",
        "scale": "3x",
        "size": "60x60"
    })));
}

#[test]
fn should_generate_android_icons_into_default_directory() {
    let workdir = new_workdir().with_source_image(64).with_fake_sips();
    iconcraft(&workdir)
        .args(["-p", "android"])
        .arg(workdir.source_image())
        .assert()
        .success();

    let out = workdir.path().join("android-icons");
    for path in [
        "mipmap-mdpi/ic_launcher.png",
        "mipmap-xxxhdpi/ic_launcher_foreground.png",
        "drawable-hdpi/ic_notification.png",
        "web/ic_launcher_web.png",
        "mipmap-anydpi-v26/ic_launcher.xml",
        "mipmap-anydpi-v26/ic_launcher_round.xml",
        "values/colors.xml",
    ] {
        assert!(out.join(path).is_file(), "{} is missing", path);
    }
    assert_eq!(workdir.sips_calls().len(), 21);
    assert_eq!(
        workdir.sips_calls()[20],
        vec![
            "-z".to_owned(),
            "512".to_owned(),
            "512".to_owned(),
            workdir.source_image().to_string_lossy().into_owned(),
            "--out".to_owned(),
            Path::new("android-icons")
                .join("web")
                .join("ic_launcher_web.png")
                .to_string_lossy()
                .into_owned(),
        ]
    );
}

#[test]
fn should_generate_both_platforms_under_output() {
    let workdir = new_workdir().with_source_image(64).with_fake_sips();
    iconcraft(&workdir)
        .args(["--output", "icons"])
        .arg(workdir.source_image())
        .assert()
        .success();

    let icons = workdir.path().join("icons");
    assert!(icons.join("AppIcon.appiconset/Contents.json").is_file());
    assert!(icons.join("android-icons/values/colors.xml").is_file());
    assert_eq!(workdir.sips_calls().len(), 38 + 21);
}

#[test]
fn should_use_output_directories_from_config() {
    let workdir = new_workdir().with_source_image(64).with_fake_sips();
    let config = std::fs::read_to_string(workdir.config_file()).unwrap()
        + "[output]\nios = \"ios/AppIcon.appiconset\"\n";
    let workdir = workdir.with_config(&config);

    iconcraft(&workdir)
        .args(["-p", "ios"])
        .arg(workdir.source_image())
        .assert()
        .success();

    assert!(workdir
        .path()
        .join("ios/AppIcon.appiconset/Contents.json")
        .is_file());
}

#[test]
fn should_fail_for_missing_input() {
    let workdir = new_workdir().with_fake_sips();
    iconcraft(&workdir)
        .args(["--output", "out"])
        .arg(workdir.path().join("missing.png"))
        .assert()
        .failure()
        .code(1);

    assert!(!workdir.path().join("out").exists());
    assert!(workdir.sips_calls().is_empty());
}

#[test]
fn should_abort_platform_on_rasterizer_failure() {
    let workdir = new_workdir()
        .with_source_image(64)
        .with_fake_sips()
        .with_sips_failing_at(5);
    iconcraft(&workdir)
        .args(["-p", "ios", "-o", "out"])
        .arg(workdir.source_image())
        .assert()
        .failure()
        .code(1);

    let out = workdir.path().join("out");
    assert_eq!(workdir.sips_calls().len(), 6);
    assert!(out.join("Icon-83.5@2x.png").is_file());
    assert!(!out.join("Icon-1024.png").exists());
    assert!(!out.join("Contents.json").exists());
}

#[test]
fn should_run_android_after_ios_failure() {
    let workdir = new_workdir()
        .with_source_image(64)
        .with_fake_sips()
        .with_sips_failing_at(0);
    iconcraft(&workdir)
        .arg(workdir.source_image())
        .assert()
        .failure();

    assert!(!workdir
        .path()
        .join("AppIcon.appiconset/Contents.json")
        .exists());
    assert!(workdir
        .path()
        .join("android-icons/values/colors.xml")
        .is_file());
}

#[test]
fn should_print_plan_without_writing() {
    let workdir = new_workdir().with_fake_sips();
    let output = iconcraft(&workdir)
        .args(["--plan", "-p", "ios", "-o", "out"])
        .arg("icon.png")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.starts_with("iOS icons in out\n"));
    assert!(stdout.contains("[step #2] Icon-60@3x.png (iphone, 60x60@3x): "));
    assert!(!workdir.path().join("out").exists());
    assert!(workdir.sips_calls().is_empty());
}

#[test]
fn should_fail_for_invalid_config() {
    let workdir = new_workdir()
        .with_source_image(16)
        .with_config("rasterizer = 42\n");
    iconcraft(&workdir)
        .arg(workdir.source_image())
        .assert()
        .failure();
}

#[test]
fn should_report_every_failed_platform() {
    let workdir = new_workdir().with_source_image(16);
    std::fs::write(workdir.path().join("blocker"), "").unwrap();
    let output = iconcraft(&workdir)
        .args(["-o", "blocker"])
        .arg(workdir.source_image())
        .assert()
        .failure()
        .code(1)
        .get_output()
        .clone();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("iOS icons failed"));
    assert!(stdout.contains("Android icons failed"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    for dir in ["AppIcon.appiconset", "android-icons"] {
        let path = Path::new("blocker").join(dir);
        assert!(
            stderr.contains(&path.display().to_string()),
            "{} missing from {}",
            path.display(),
            stderr
        );
    }
}

#[test]
fn should_not_color_piped_output() {
    let workdir = new_workdir().with_source_image(16);
    std::fs::write(workdir.path().join("blocker"), "").unwrap();
    let output = iconcraft(&workdir)
        .args(["-p", "ios", "-o", "blocker"])
        .arg(workdir.source_image())
        .assert()
        .failure()
        .get_output()
        .clone();

    assert!(!String::from_utf8_lossy(&output.stdout).contains('\x1b'));
}
