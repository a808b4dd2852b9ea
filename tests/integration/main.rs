//! Integration tests for opticache

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;

    fn opticache() -> Command {
        cargo_bin_cmd!("opticache")
    }

    #[test]
    fn help_displays() {
        opticache()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Shared optimization cache"));
    }

    #[test]
    fn version_displays() {
        opticache()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("opticache"));
    }

    #[test]
    fn run_requires_manifest() {
        opticache().arg("run").assert().failure();
    }

    #[test]
    fn run_missing_manifest_errors() {
        let dir = tempfile::TempDir::new().unwrap();
        opticache()
            .args(["run", "--manifest"])
            .arg(dir.path().join("absent.deps.json"))
            .args(["--cache-root"])
            .arg(dir.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("manifest not found"));
    }

    #[test]
    fn run_without_cache_root_hints() {
        let dir = tempfile::TempDir::new().unwrap();
        let manifest = dir.path().join("app.deps.json");
        std::fs::write(
            &manifest,
            r#"{ "runtimeIdentifier": "linux-x64", "libraries": [] }"#,
        )
        .unwrap();

        opticache()
            .env_remove("OPTICACHE_CONFIG")
            .args(["--config"])
            .arg(dir.path().join("no-config.toml"))
            .args(["run", "--manifest"])
            .arg(&manifest)
            .assert()
            .failure()
            .stderr(predicate::str::contains("--cache-root"));
    }

    #[test]
    fn locate_prints_entry_paths() {
        opticache()
            .args([
                "locate",
                "Foo",
                "1.0.0",
                "--rid",
                "win-x64",
                "--cache-root",
                "/cache",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("/cache/x64/Foo/1.0.0"))
            .stdout(predicate::str::contains("Foo.1.0.0.sha512"));
    }

    #[test]
    fn list_empty_cache() {
        let dir = tempfile::TempDir::new().unwrap();
        opticache()
            .args(["list", "--cache-root"])
            .arg(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("No cached entries"));
    }

    #[test]
    fn config_path_displays() {
        opticache()
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_init_and_show() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = dir.path().join("config.toml");

        opticache()
            .args(["--config"])
            .arg(&config)
            .args(["config", "init"])
            .assert()
            .success();

        opticache()
            .args(["--config"])
            .arg(&config)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[cache]"));
    }
}

#[cfg(unix)]
mod pass_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn opticache() -> Command {
        cargo_bin_cmd!("opticache")
    }

    const MANIFEST: &str = r#"
{
  "runtimeIdentifier": "linux-x64",
  "libraries": [
    {
      "name": "Foo",
      "version": "1.0.0",
      "hash": "sha512-ABC123",
      "serviceable": true,
      "assembly": "lib/Foo.dll",
      "nativeLibraryGroups": [{ "runtime": "linux-x64", "assetPaths": ["native/libfoo.so"] }],
      "resourceAssemblies": ["de/Foo.resources.dll"]
    },
    {
      "name": "System.Runtime",
      "version": "4.3.0",
      "hash": "sha512-ZZZ",
      "serviceable": false,
      "assembly": "System.Runtime.dll"
    }
  ]
}
"#;

    /// App output dir, cache root, manifest path, and a stub compiler
    /// that records each invocation to a log file.
    struct Fixture {
        _dir: TempDir,
        app: PathBuf,
        cache: PathBuf,
        manifest: PathBuf,
        compiler: PathBuf,
        compiler_log: PathBuf,
    }

    fn fixture() -> Fixture {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let app = dir.path().join("app");
        let cache = dir.path().join("cache");

        for path in ["lib/Foo.dll", "native/libfoo.so", "System.Runtime.dll"] {
            let full = app.join(path);
            std::fs::create_dir_all(full.parent().unwrap()).unwrap();
            std::fs::write(full, path.as_bytes()).unwrap();
        }
        // de/Foo.resources.dll deliberately missing

        let manifest = dir.path().join("app.deps.json");
        std::fs::write(&manifest, MANIFEST).unwrap();

        let compiler_log = dir.path().join("compiler.log");
        let compiler = dir.path().join("fake-crossgen");
        std::fs::write(
            &compiler,
            format!("#!/bin/sh\necho \"$1\" >> {}\n", compiler_log.display()),
        )
        .unwrap();
        std::fs::set_permissions(&compiler, std::fs::Permissions::from_mode(0o755)).unwrap();

        Fixture {
            _dir: dir,
            app,
            cache,
            manifest,
            compiler,
            compiler_log,
        }
    }

    fn run_pass(f: &Fixture, extra: &[&str]) -> assert_cmd::assert::Assert {
        opticache()
            .args(["run", "--manifest"])
            .arg(&f.manifest)
            .args(["--app-dir"])
            .arg(&f.app)
            .args(["--cache-root"])
            .arg(&f.cache)
            .args(["--compiler"])
            .arg(&f.compiler)
            .args(extra)
            .assert()
    }

    fn record_path(cache: &Path) -> PathBuf {
        cache.join("x64/Foo/1.0.0/Foo.1.0.0.sha512")
    }

    #[test]
    fn full_pass_populates_cache() {
        let f = fixture();
        run_pass(&f, &[])
            .success()
            .stdout(predicate::str::contains("1 generated"));

        // Hash records hold the bare value, no algorithm prefix
        assert_eq!(
            std::fs::read_to_string(record_path(&f.cache)).unwrap(),
            "ABC123"
        );
        assert_eq!(
            std::fs::read_to_string(f.cache.join("x64/System.Runtime/4.3.0/System.Runtime.4.3.0.sha512"))
                .unwrap(),
            "ZZZ"
        );

        // Assets mirrored under the entry directory
        assert!(f.cache.join("x64/Foo/1.0.0/lib/Foo.dll").exists());
        assert!(f.cache.join("x64/Foo/1.0.0/native/libfoo.so").exists());
        // Missing optional asset skipped without failing
        assert!(!f.cache.join("x64/Foo/1.0.0/de/Foo.resources.dll").exists());

        // Only the serviceable library was compiled
        let log = std::fs::read_to_string(&f.compiler_log).unwrap();
        assert!(log.contains("Foo.dll"));
        assert!(!log.contains("System.Runtime"));
    }

    #[test]
    fn rerun_leaves_cache_unchanged() {
        let f = fixture();
        run_pass(&f, &[]).success();

        let record = record_path(&f.cache);
        let before = std::fs::metadata(&record).unwrap().modified().unwrap();

        run_pass(&f, &[])
            .success()
            .stdout(predicate::str::contains("0 hash records written"));

        let after = std::fs::metadata(&record).unwrap().modified().unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn conflict_aborts_whole_batch_before_mutation() {
        let f = fixture();

        // Seed a conflicting record for Foo
        let record = record_path(&f.cache);
        std::fs::create_dir_all(record.parent().unwrap()).unwrap();
        std::fs::write(&record, "XYZ999").unwrap();

        run_pass(&f, &[])
            .failure()
            .stderr(predicate::str::contains("Hash mismatch"))
            .stderr(predicate::str::contains("Foo.1.0.0"));

        // Conflicting record kept, no other entry touched, no compile ran
        assert_eq!(std::fs::read_to_string(&record).unwrap(), "XYZ999");
        assert!(!f.cache.join("x64/System.Runtime").exists());
        assert!(!f.compiler_log.exists());
    }

    #[test]
    fn overwrite_replaces_conflicting_record() {
        let f = fixture();

        let record = record_path(&f.cache);
        std::fs::create_dir_all(record.parent().unwrap()).unwrap();
        std::fs::write(&record, "XYZ999").unwrap();

        run_pass(&f, &["--overwrite"]).success();

        assert_eq!(std::fs::read_to_string(&record).unwrap(), "ABC123");
    }

    #[test]
    fn dry_run_mutates_nothing() {
        let f = fixture();
        run_pass(&f, &["--dry-run"])
            .success()
            .stdout(predicate::str::contains("nothing modified"))
            .stdout(predicate::str::contains("Foo.1.0.0"));

        assert!(!f.cache.exists());
        assert!(!f.compiler_log.exists());
    }

    #[test]
    fn list_shows_populated_entries() {
        let f = fixture();
        run_pass(&f, &[]).success();

        opticache()
            .args(["list", "--cache-root"])
            .arg(&f.cache)
            .args(["--format", "plain"])
            .assert()
            .success()
            .stdout(predicate::str::contains("x64/Foo/1.0.0"))
            .stdout(predicate::str::contains("x64/System.Runtime/4.3.0"));
    }
}
