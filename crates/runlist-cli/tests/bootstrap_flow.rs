//! Integration tests for the CLI composition root and handler flow.
//!
//! Every setting is passed explicitly so the tests do not depend on the
//! `RUNLIST_*` environment of the machine running them.

use std::path::PathBuf;

use runlist_cli::handlers::list::{ListOptions, format_listing};
use runlist_cli::handlers::{check, write};
use runlist_cli::{CliConfig, bootstrap};
use runlist_core::{BuildProfile, ConfigOverrides, PathOverrides, PathSource};
use tempfile::tempdir;

fn explicit_config(root: &std::path::Path) -> CliConfig {
    let build = root.join("build");
    std::fs::create_dir_all(&build).unwrap();
    CliConfig::new(ConfigOverrides {
        paths: PathOverrides {
            build_dir: Some(build.to_string_lossy().into_owned()),
            status_file: None,
            source_dir: Some(root.to_string_lossy().into_owned()),
        },
        app_name: Some("ns3".to_string()),
        app_version: Some("3.17".to_string()),
        profile: Some("optimized".to_string()),
        interpreter: Some("/usr/bin/python3".to_string()),
    })
}

#[test]
fn test_bootstrap_uses_explicit_settings() {
    let dir = tempdir().unwrap();
    let ctx = bootstrap(&explicit_config(dir.path())).unwrap();

    assert_eq!(ctx.paths().build_dir_source, PathSource::Explicit);
    assert_eq!(ctx.paths().status_file_source, PathSource::Default);
    assert_eq!(
        ctx.paths().status_file,
        dir.path().join("build").join("build-status.py")
    );
    assert_eq!(ctx.naming().profile(), BuildProfile::Optimized);
    assert_eq!(ctx.config.interpreter, PathBuf::from("/usr/bin/python3"));
}

#[test]
fn test_bootstrap_rejects_unknown_profile() {
    let dir = tempdir().unwrap();
    let mut config = explicit_config(dir.path());
    config.overrides.profile = Some("turbo".to_string());

    let err = bootstrap(&config).err().unwrap();
    assert_eq!(err.exit_code(), 78);
}

#[test]
fn test_write_then_list_and_check() {
    let dir = tempdir().unwrap();
    let ctx = bootstrap(&explicit_config(dir.path())).unwrap();

    let program = "scratch/ns3-3.17-ndncc-simple-optimized";
    let program_path = ctx.paths().build_dir.join("scratch");
    std::fs::create_dir_all(&program_path).unwrap();
    std::fs::write(program_path.join("ns3-3.17-ndncc-simple-optimized"), "").unwrap();

    write::execute(&ctx, vec![program.to_string()], Vec::new()).unwrap();

    let status = ctx.load_status().unwrap();
    let short = format_listing(
        &status,
        ctx.naming(),
        ListOptions {
            short: true,
            ..ListOptions::default()
        },
    )
    .unwrap();
    assert_eq!(short, "ndncc-simple\n");

    check::execute(&ctx).unwrap();
}
