//! Podspec edits driven through the command line.

mod common;

use common::*;

const FULL_LINE: &str = r#"        full.source_files  = "tealium/core/**/*","tealium/collect/*""#;

#[test]
fn test_add_module_golden_podspec() {
    let temp = create_test_repo();
    let root = temp.path();

    run_new_module(root, &["-f", "TealiumAnalytics", "-s", "analytics"]).success();

    let expected = PODSPEC
        .replace(FULL_LINE, &format!("{},\"tealium/analytics/*\"", FULL_LINE))
        .replace(
            "    end\n\nend\n",
            r#"    end

  s.subspec "TealiumAnalytics" do |analytics|
    analytics.source_files = "tealium/analytics/*"
    analytics.dependency "tealium-swift/Core"
  end

end
"#,
        );

    assert_eq!(read_podspec(root), expected);
}

#[test]
fn test_subspec_is_last_block() {
    let temp = create_test_repo();
    let root = temp.path();

    run_new_module(root, &["-f", "TealiumAnalytics", "-s", "analytics"]).success();

    let podspec = read_podspec(root);
    assert!(podspec.ends_with(
        r#"        collect.dependency "tealium-swift/Core"
    end

  s.subspec "TealiumAnalytics" do |analytics|
    analytics.source_files = "tealium/analytics/*"
    analytics.dependency "tealium-swift/Core"
  end

end
"#
    ));
}

#[test]
fn test_excluded_platforms() {
    let temp = create_test_repo();
    let root = temp.path();

    run_new_module(
        root,
        &["-f", "TealiumLocation", "-s", "location", "-e", "tvos,osx"],
    )
    .success();

    let podspec = read_podspec(root);

    assert!(podspec.contains(
        r#"full.tvos.exclude_files = "tealium/autotracking/*","tealium/location/*""#
    ));
    assert!(podspec.contains(
        r#"full.osx.exclude_files = "tealium/autotracking/*","tealium/location/*""#
    ));
    assert!(podspec.contains("full.ios.exclude_files = \"tealium/core/devicedata/watchos/*\"\n"));
    assert!(podspec.contains("full.watchos.exclude_files = \"tealium/autotracking/*\"\n"));

    assert!(podspec.contains(
        r#"  s.subspec "TealiumLocation" do |location|
    location.ios.deployment_target = "9.0"
    location.watchos.deployment_target = "3.0"
    location.source_files = "tealium/location/*"
    location.dependency "tealium-swift/Core"
  end
"#
    ));
}

#[test]
fn test_single_exclusion_declares_remaining_platforms() {
    let temp = create_test_repo();
    let root = temp.path();

    run_new_module(root, &["-f", "TealiumAutotracking", "-s", "autotracking", "-e", "watchos"])
        .success();

    let podspec = read_podspec(root);
    let subspec = podspec
        .split("s.subspec \"TealiumAutotracking\"")
        .nth(1)
        .unwrap();

    assert!(subspec.contains(r#"autotracking.ios.deployment_target = "9.0""#));
    assert!(subspec.contains(r#"autotracking.osx.deployment_target = "10.11""#));
    assert!(subspec.contains(r#"autotracking.tvos.deployment_target = "9.0""#));
    assert!(!subspec.contains("autotracking.watchos"));
}

#[test]
fn test_no_deployment_targets_without_exclusions() {
    let temp = create_test_repo();
    let root = temp.path();

    run_new_module(root, &["-f", "TealiumAnalytics", "-s", "analytics"]).success();

    assert!(!read_podspec(root).contains("analytics.ios.deployment_target"));
}

#[test]
fn test_version_update() {
    let temp = create_test_repo();
    let root = temp.path();

    run_new_module(root, &["-v", "2.2.0"]).success();

    let podspec = read_podspec(root);
    assert!(podspec.contains(r#"s.version      = "2.2.0""#));
    assert!(!podspec.contains("2.1.0"));
    assert_eq!(podspec, PODSPEC.replace("\"2.1.0\"", "\"2.2.0\""));
}

#[test]
fn test_version_only_changes_one_triple() {
    let temp = create_test_repo();
    let root = temp.path();

    std::fs::write(
        root.join("tealium-swift.podspec"),
        "Pod::Spec.new do |pod|\n  pod.version = '3.9.9'\n  pod.dependency 'PLCrashReporter', '1.8.1'\nend\n",
    )
    .unwrap();

    run_new_module(root, &["--version", "4.2.1"]).success();

    let podspec = read_podspec(root);
    assert!(podspec.contains("pod.version = '4.2.1'"));
    assert!(podspec.contains("'PLCrashReporter', '1.8.1'"));
}

#[test]
fn test_module_and_version_together() {
    let temp = create_test_repo();
    let root = temp.path();

    run_new_module(
        root,
        &["-f", "TealiumAnalytics", "-s", "analytics", "-v", "2.2.0"],
    )
    .success();

    let podspec = read_podspec(root);
    assert!(podspec.contains(r#"s.version      = "2.2.0""#));
    assert!(podspec.contains(r#"s.subspec "TealiumAnalytics" do |analytics|"#));
    assert!(read_package(root).contains(r#"name: "TealiumAnalytics""#));
}

#[test]
fn test_spec_variable_is_detected() {
    let temp = create_test_repo();
    let root = temp.path();

    std::fs::write(
        root.join("tealium-swift.podspec"),
        "Pod::Spec.new do |spec|\n  spec.subspec \"TealiumFull\" do |full|\n    full.source_files = \"tealium/core/*\"\n  end\nend\n",
    )
    .unwrap();

    run_new_module(root, &["-f", "TealiumAnalytics", "-s", "analytics"]).success();

    assert!(read_podspec(root).contains(r#"  spec.subspec "TealiumAnalytics" do |analytics|"#));
}

#[test]
fn test_custom_podspec_path() {
    let temp = create_test_repo();
    let root = temp.path();

    std::fs::create_dir(root.join("pods")).unwrap();
    std::fs::rename(
        root.join("tealium-swift.podspec"),
        root.join("pods/custom.podspec"),
    )
    .unwrap();

    run_new_module(root, &["-v", "3.0.0", "--podspec", "pods/custom.podspec"]).success();

    let podspec = std::fs::read_to_string(root.join("pods/custom.podspec")).unwrap();
    assert!(podspec.contains(r#"s.version      = "3.0.0""#));
}
