use bottle_icons::{run_batch, Config};
use std::fs;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

#[test]
fn test_default_table_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        output_dir: dir.path().to_path_buf(),
        ..Config::default()
    };
    let mut out = Vec::new();

    let report = run_batch(&config, &mut out).unwrap();
    assert_eq!(report.written.len(), 13);

    let mut names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    let mut expected: Vec<String> = config.icons.iter().map(|icon| icon.name.clone()).collect();
    expected.sort();
    assert_eq!(names, expected);
    assert!(names.contains(&"icon_20x20.png".to_string()));
    assert!(names.contains(&"icon_1024x1024.png".to_string()));

    for icon in &config.icons {
        let path = dir.path().join(&icon.name);
        let bytes = fs::read(&path).unwrap();
        assert_eq!(bytes[..8], PNG_SIGNATURE, "{}", icon.name);

        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (icon.size, icon.size));
    }

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Generating HydraTrack water bottle icons...");
    assert_eq!(lines.iter().filter(|line| line.starts_with("✓ Created: ")).count(), 13);
    assert!(text.contains("✅ All 13 icons generated successfully!"));
}

#[test]
fn test_config_file_drives_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("icons.yaml");
    let yaml = format!(
        "output_dir: {}\nicons:\n  - name: tiny.png\n    size: 24\nfonts:\n  - /missing/font.ttf\n",
        dir.path().display()
    );
    fs::write(&config_path, yaml).unwrap();

    let config = Config::load(&config_path).unwrap();
    let report = run_batch(&config, &mut Vec::new()).unwrap();

    assert_eq!(report.written, vec![dir.path().join("tiny.png")]);
    assert_eq!(image::open(dir.path().join("tiny.png")).unwrap().width(), 24);
}

#[test]
fn test_invalid_config_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("icons.yaml");
    fs::write(&config_path, "icons: []\n").unwrap();

    let err = Config::load(&config_path).unwrap_err();
    assert!(format!("{:#}", err).contains("at least one icon"));
}
