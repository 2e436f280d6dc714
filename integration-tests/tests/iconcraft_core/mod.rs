use crate::new_workdir;
use iconcraft_core::{
    generate,
    rasterizer::{Rasterizer, Sips},
    GenerateError, Platform,
};

#[test]
fn should_run_sips_with_size_and_paths() {
    let workdir = new_workdir().with_source_image(32);
    let output = workdir.path().join("out.png");

    Sips::new(workdir.sips())
        .resize(&workdir.source_image(), &output, 167)
        .unwrap();

    assert_eq!(
        workdir.sips_calls(),
        vec![vec![
            "-z".to_owned(),
            "167".to_owned(),
            "167".to_owned(),
            workdir.source_image().to_string_lossy().into_owned(),
            "--out".to_owned(),
            output.to_string_lossy().into_owned(),
        ]]
    );
    assert!(output.is_file());
}

#[test]
fn should_report_sips_failure() {
    let workdir = new_workdir()
        .with_source_image(32)
        .with_sips_failing_at(0);
    let output = workdir.path().join("out.png");

    let result = Sips::new(workdir.sips()).resize(&workdir.source_image(), &output, 16);

    assert!(result.is_err());
    assert!(!output.exists());
}

#[test]
fn should_generate_android_icons_with_sips() {
    let workdir = new_workdir().with_source_image(32);
    let out = workdir.path().join("res");

    let generated = generate(
        Platform::Android,
        &workdir.source_image(),
        &out,
        &Sips::new(workdir.sips()),
    )
    .unwrap();

    assert_eq!(generated.images.len(), 21);
    assert_eq!(workdir.sips_calls().len(), 21);
    assert!(out.join("mipmap-xxhdpi/ic_launcher_round.png").is_file());
    assert!(out.join("mipmap-anydpi-v26/ic_launcher_round.xml").is_file());
}

#[test]
fn should_identify_failed_record() {
    let workdir = new_workdir()
        .with_source_image(32)
        .with_sips_failing_at(20);
    let out = workdir.path().join("res");

    let result = generate(
        Platform::Android,
        &workdir.source_image(),
        &out,
        &Sips::new(workdir.sips()),
    );

    match result {
        Err(GenerateError::ResizeFailed { index, record, .. }) => {
            assert_eq!(index, 20);
            assert_eq!(record, "web/ic_launcher_web.png (web)");
        }
        other => panic!("unexpected result {:?}", other),
    }
    assert!(out.join("drawable-xxxhdpi/ic_notification.png").is_file());
    assert!(!out.join("values").exists());
}
