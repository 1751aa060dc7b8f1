use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[allow(unused)]
pub const PODSPEC: &str = r##"Pod::Spec.new do |s|

    # ―――  Spec Metadata  ―――――――――――――――――――――――――――――――――――――――――――――――――――――――――― #
    s.name         = "tealium-swift"
    s.module_name  = "TealiumSwift"
    s.version      = "2.1.0"
    s.summary      = "Tealium Swift Integration Library"
    s.homepage     = "https://github.com/Tealium/tealium-swift"
    s.license      = { :type => "Commercial", :file => "LICENSE.txt" }
    s.authors      = { "Tealium Inc." => "tealium@tealium.com" }

    # ――― Platform Specifics ――――――――――――――――――――――――――――――――――――――――――――――――――――――― #
    s.swift_version = "5.0"
    s.ios.deployment_target = "9.0"
    s.osx.deployment_target = "10.11"
    s.watchos.deployment_target = "3.0"
    s.tvos.deployment_target = "9.0"

    # ――― Source Location ―――――――――――――――――――――――――――――――――――――――――――――――――――――――――― #
    s.source       = { :git => "https://github.com/Tealium/tealium-swift.git", :tag => "#{s.version}" }

    # ――― Subspecs ――――――――――――――――――――――――――――――――――――――――――――――――――――――――――――――――――― #
    s.default_subspec = "TealiumFull"

    s.subspec "TealiumFull" do |full|
        full.source_files  = "tealium/core/**/*","tealium/collect/*"
        full.ios.exclude_files = "tealium/core/devicedata/watchos/*"
        full.tvos.exclude_files = "tealium/autotracking/*"
        full.watchos.exclude_files = "tealium/autotracking/*"
        full.osx.exclude_files = "tealium/autotracking/*"
    end

    s.subspec "Core" do |core|
        core.source_files = "tealium/core/**/*"
    end

    s.subspec "Collect" do |collect|
        collect.source_files = "tealium/collect/*"
        collect.dependency "tealium-swift/Core"
    end

end
"##;

#[allow(unused)]
pub const PACKAGE_SWIFT: &str = r#"// swift-tools-version:5.1
import PackageDescription

let package = Package(
  name: "TealiumSwift",
  platforms: [ .iOS(.v9), .macOS(.v10_11), .tvOS(.v9), .watchOS(.v3) ],
  products: [
    .library(
      name: "TealiumCore",
      targets: ["TealiumCore"]),
    .library(
      name: "TealiumCollect",
      targets: ["TealiumCollect"]),
  ],
  targets: [
    .target(
      name: "TealiumCore",
      path: "tealium/core/"
    ),
    .target(
      name: "TealiumCollect",
      dependencies: ["TealiumCore"],
      path: "tealium/collect/",
      swiftSettings: [.define("collect")]
    ),
  ]
)
"#;

/// Creates a repository root holding the podspec and package manifest.
#[allow(unused)]
pub fn create_test_repo() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("tealium-swift.podspec"), PODSPEC).unwrap();
    fs::write(temp.path().join("Package.swift"), PACKAGE_SWIFT).unwrap();
    temp
}

#[allow(unused)]
pub fn read_podspec(root: &Path) -> String {
    fs::read_to_string(root.join("tealium-swift.podspec")).unwrap()
}

#[allow(unused)]
pub fn read_package(root: &Path) -> String {
    fs::read_to_string(root.join("Package.swift")).unwrap()
}

/// Runs `new-module` in `root` with the given arguments.
pub fn run_new_module(root: &Path, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("new-module");
    cmd.args(args).current_dir(root);
    cmd.assert()
}
