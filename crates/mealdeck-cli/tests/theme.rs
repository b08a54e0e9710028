use mealdeck_testing::TestWorld;

#[test]
fn test_theme_defaults_to_light() {
    let world = TestWorld::new();

    let result = world.run(&["theme"]).unwrap();

    assert!(result.success(), "theme failed: {}", result.stderr());
    assert!(result.stdout().contains("Theme: light"));
    assert!(!world.data_dir().join("preferences.toml").exists());
}

#[test]
fn test_theme_choice_persists() {
    let world = TestWorld::new();

    let dark = world.run(&["theme", "--dark"]).unwrap();
    assert!(dark.success(), "theme --dark failed: {}", dark.stderr());
    assert!(dark.stdout().contains("Theme preference saved"));
    assert!(world.data_dir().join("preferences.toml").exists());

    let shown = world.run(&["theme"]).unwrap();
    assert!(shown.stdout().contains("Theme: dark"));

    world.run(&["theme", "--light"]).unwrap();
    let shown = world.run(&["theme"]).unwrap();
    assert!(shown.stdout().contains("Theme: light"));
}

#[test]
#[allow(deprecated)]
fn test_data_dir_from_environment() {
    let world = TestWorld::new();
    let env_dir = world.temp_dir().join("from-env");

    let mut cmd = assert_cmd::Command::cargo_bin("mealdeck").unwrap();
    cmd.env("MEALDECK_PATH", &env_dir)
        .env_remove("RUST_LOG")
        .args(["theme", "--dark"]);
    cmd.assert().success();

    assert!(env_dir.join("preferences.toml").exists());
}
