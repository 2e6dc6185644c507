use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for tagmatch with an isolated config directory
#[allow(dead_code)]
pub fn tagmatch(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("tagmatch");
    cmd.env("TAGMATCH_CONFIG_DIR", config_dir)
        .env_remove("TAGMATCH_CATALOG")
        .env_remove("TAGMATCH_LOG");
    cmd
}

#[allow(dead_code)]
pub const SAMPLE_CATALOG: &str = "\
Name,ReviewCount,Brand,ImageURL,Rating,Tags
Red Shoes,10,Acme,https://img/1.png,4.5,red shoes
Blue Shoes,3,Bolt,https://img/2.png,3.5,blue shoes
Red Hat,,Acme,https://img/3.png,,red hat
";

/// Write a catalog CSV into `dir` and return its path
#[allow(dead_code)]
pub fn write_catalog(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("catalog.csv");
    fs::write(&path, content).expect("write catalog");
    path
}
