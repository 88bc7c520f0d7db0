#[cfg(unix)]
#[cfg(test)]
mod cli_integration_tests {
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use assert_cmd::Command;
    use predicates::prelude::*;
    use tempfile::{tempdir, TempDir};
    use apimock_dist::make_executable;

    /// `node_modules/apimock-rs` with the launcher copied in, as npm would lay it out.
    fn package_root() -> (TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let root = dir.path().join("node_modules").join("apimock-rs");
        std::fs::create_dir_all(&root).unwrap();
        let launcher = assert_cmd::cargo::cargo_bin("apimock-launch");
        std::fs::copy(&launcher, root.join("apimock-launch")).unwrap();
        (dir, root)
    }

    fn write_stub(path: &Path, script: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, script).unwrap();
        make_executable(path).unwrap();
    }

    fn launcher(root: &Path) -> Command {
        Command::new(root.join("apimock-launch"))
    }

    fn linux_source(root: &Path) -> PathBuf {
        root.parent()
            .unwrap()
            .join("@apimock-rs")
            .join("bin-linux-x64-gnu")
            .join("apimock")
    }

    #[test]
    fn test_launch_relays_exit_codes() {
        let (_dir, root) = package_root();
        for code in [0, 1, 127] {
            write_stub(&root.join("apimock"), &format!("#!/bin/sh\nexit {code}\n"));
            launcher(&root)
                .assert()
                .code(code)
                .stderr(predicate::str::is_empty());
        }
    }

    #[test]
    fn test_launch_reports_signal() {
        let (_dir, root) = package_root();
        write_stub(&root.join("apimock"), "#!/bin/sh\nkill -TERM $$\n");
        launcher(&root)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("exit by signal: SIGTERM"));
    }

    #[test]
    fn test_launch_passes_streams_through() {
        let (_dir, root) = package_root();
        write_stub(
            &root.join("apimock"),
            "#!/bin/sh\nprintf 'out\\n'\nprintf 'err\\n' >&2\ncat\n",
        );
        launcher(&root)
            .write_stdin("from stdin\n")
            .assert()
            .success()
            .stdout("out\nfrom stdin\n")
            .stderr("err\n");
    }

    #[test]
    fn test_launch_forwards_arguments() {
        let (_dir, root) = package_root();
        write_stub(
            &root.join("apimock"),
            "#!/bin/sh\nfor a in \"$@\"; do printf '<%s>\\n' \"$a\"; done\n",
        );
        launcher(&root)
            .args(["--port", "3001", "two words", "", "a\"b", "$PATH"])
            .assert()
            .success()
            .stdout("<--port>\n<3001>\n<two words>\n<>\n<a\"b>\n<$PATH>\n");

        launcher(&root).assert().success().stdout("");
    }

    #[test]
    fn test_launch_without_binary() {
        let (_dir, root) = package_root();
        launcher(&root)
            .arg("--help")
            .assert()
            .code(255)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("failed to start"));
    }

    #[test]
    fn test_launch_honours_config() {
        let (_dir, root) = package_root();
        std::fs::write(root.join("dist.toml"), "binary-name = \"mocker\"\n").unwrap();
        write_stub(&root.join("mocker"), "#!/bin/sh\necho mocker\n");
        launcher(&root).assert().success().stdout("mocker\n");
    }

    #[test]
    fn test_install_end_to_end_linux_x64() {
        let (_dir, root) = package_root();
        let source = linux_source(&root);
        write_stub(&source, "#!/bin/sh\necho \"hello $*\"\n");
        std::fs::set_permissions(&source, std::fs::Permissions::from_mode(0o644)).unwrap();

        Command::cargo_bin("apimock-install").unwrap()
            .args(["--root", root.to_str().unwrap(), "--os", "linux", "--arch", "x64"])
            .assert()
            .success()
            .stdout(predicate::str::contains("linked"))
            .stdout(predicate::str::contains(source.to_str().unwrap()));

        let destination = root.join("apimock");
        assert_eq!(std::fs::read_link(&destination).unwrap(), source);
        assert!(is_executable(&destination));

        launcher(&root)
            .arg("world")
            .assert()
            .success()
            .stdout("hello world\n");
    }

    #[test]
    fn test_install_twice() {
        let (_dir, root) = package_root();
        let source = linux_source(&root);
        write_stub(&source, "#!/bin/sh\n");
        for _ in 0..2 {
            Command::cargo_bin("apimock-install").unwrap()
                .args(["--root", root.to_str().unwrap(), "--os", "linux", "--arch", "x64"])
                .assert()
                .success();
        }
        assert_eq!(std::fs::read_link(root.join("apimock")).unwrap(), source);
    }

    #[test]
    fn test_install_with_relative_root() {
        let (dir, root) = package_root();
        let source = linux_source(&root);
        write_stub(&source, "#!/bin/sh\necho relative\n");

        Command::cargo_bin("apimock-install").unwrap()
            .current_dir(dir.path())
            .args(["--root", "node_modules/apimock-rs", "--os", "linux", "--arch", "x64"])
            .assert()
            .success()
            .stdout(predicate::str::contains("linked"));

        let destination = root.join("apimock");
        assert!(destination.exists());
        assert!(std::fs::read_link(&destination).unwrap().is_absolute());
        launcher(&root).assert().success().stdout("relative\n");
    }

    #[test]
    fn test_install_unsupported_platform() {
        let (_dir, root) = package_root();
        Command::cargo_bin("apimock-install").unwrap()
            .args(["--root", root.to_str().unwrap(), "--os", "freebsd", "--arch", "x64"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Unsupported platform: freebsd/x64"));
        assert!(!root.join("apimock").exists());
    }

    #[test]
    fn test_install_missing_source() {
        let (_dir, root) = package_root();
        Command::cargo_bin("apimock-install").unwrap()
            .args(["--root", root.to_str().unwrap(), "--os", "linux", "--arch", "x64"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("prebuilt binary not found"));
        assert!(std::fs::symlink_metadata(root.join("apimock")).is_err());
    }

    #[cfg(all(target_os = "linux", target_arch = "x86_64"))]
    #[test]
    fn test_install_without_arguments() {
        let (_dir, root) = package_root();
        let installer = assert_cmd::cargo::cargo_bin("apimock-install");
        std::fs::copy(&installer, root.join("apimock-install")).unwrap();
        write_stub(&linux_source(&root), "#!/bin/sh\necho ok\n");

        Command::new(root.join("apimock-install"))
            .assert()
            .success()
            .stdout(predicate::str::contains("linked"));
        launcher(&root).assert().success().stdout("ok\n");
    }

    fn is_executable(path: &Path) -> bool {
        std::fs::metadata(path)
            .map(|meta| meta.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
    }
}
