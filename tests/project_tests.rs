use assert_fs::prelude::*;
use std::collections::BTreeSet;
use ycm_flags::config::Config;
use ycm_flags::flags::Language;
use ycm_flags::project::{Project, include_flag};

#[test]
fn c_file_gets_c_flags_and_one_include() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = assert_fs::TempDir::new()?;
    tmp.child("src/foo.c").write_str("")?;
    tmp.child("include/bar.h").write_str("")?;

    let project = Project::at(tmp.path())?;
    let res = project.flags_for_file("src/foo.c");

    let n = Language::C.flags().len();
    assert_eq!(&res.flags[..n], Language::C.flags());
    assert_eq!(res.flags[n..], [include_flag(&tmp.path().join("include"))]);
    assert!(res.do_cache);
    tmp.close()?;
    Ok(())
}

#[test]
fn repeated_calls_agree() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = assert_fs::TempDir::new()?;
    tmp.child("a/x.h").write_str("")?;
    tmp.child("b/c/y.hpp").write_str("")?;
    tmp.child("b/z.cc").write_str("")?;

    let project = Project::at(tmp.path())?;
    let first = project.flags_for_file("b/z.cc");
    let second = project.flags_for_file("b/z.cc");
    let as_set = |v: &Vec<String>| v.iter().cloned().collect::<BTreeSet<_>>();
    assert_eq!(as_set(&first.flags), as_set(&second.flags));
    assert_eq!(first.flags.len(), Language::Cxx.flags().len() + 2);
    tmp.close()?;
    Ok(())
}

#[test]
fn config_include_dirs_and_excludes() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = assert_fs::TempDir::new()?;
    tmp.child(".ycm-flags.toml")
        .write_str("include_dirs = [\"include\"]\nexclude = [\"vendor\"]\n")?;
    tmp.child("include/a.h").write_str("")?;
    tmp.child("lib/include/b.txt").write_str("")?;
    tmp.child("vendor/include/c.h").write_str("")?;
    tmp.child("other/d.h").write_str("")?;

    let project = Project::locate(&tmp.path().join("lib"))?;
    assert_eq!(project.config().include_dirs, vec!["include".to_string()]);
    let res = project.flags_for_file("main.txt");
    let got: BTreeSet<String> = res.flags.into_iter().collect();
    let want: BTreeSet<String> = [
        include_flag(&tmp.path().join("include")),
        include_flag(&tmp.path().join("lib/include")),
    ]
    .into_iter()
    .collect();
    assert_eq!(got, want);
    tmp.close()?;
    Ok(())
}

#[test]
fn missing_root_gives_language_flags_only() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = assert_fs::TempDir::new()?;
    let gone = tmp.path().join("gone");
    let project = Project::with_config(gone, Config::default())?;
    let res = project.flags_for_file("main.c");
    assert_eq!(res.flags, Language::C.flags());
    assert!(res.do_cache);
    Ok(())
}
