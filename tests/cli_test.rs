use bootstrapper::cli::Args;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("bootstrapper")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["--dir", "github.com/alice/myapp"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.dir, "github.com/alice/myapp");
    assert_eq!(parsed.gopath, None);
    assert_eq!(parsed.template, None);
    assert_eq!(parsed.step_timeout, None);
    assert!(!parsed.require_empty);
    assert!(!parsed.dry_run);
    assert!(!parsed.verbose);
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--dir",
        "github.com/alice/myapp",
        "--gopath",
        "/b",
        "--template",
        "/tmp/blank",
        "--step-timeout",
        "30",
        "--require-empty",
        "--dry-run",
        "--verbose",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.gopath.as_deref(), Some("/b"));
    assert_eq!(parsed.template, Some(PathBuf::from("/tmp/blank")));
    assert_eq!(parsed.step_timeout, Some(30));
    assert!(parsed.require_empty);
    assert!(parsed.dry_run);
    assert!(parsed.verbose);
}

#[test]
fn test_short_verbose() {
    let args = make_args(&["-v", "--dir", "a/b/c"]);
    assert!(Args::try_parse_from(args).unwrap().verbose);
}

#[test]
fn test_missing_dir() {
    let args = make_args(&["--gopath", "/go"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_invalid_timeout() {
    let args = make_args(&["--dir", "a/b/c", "--step-timeout", "soon"]);
    assert!(Args::try_parse_from(args).is_err());
}
