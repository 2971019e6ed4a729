//! Stamps the build with `PORTFOLIO_VERSION` and `PORTFOLIO_GIT_SHA`.
//!
//! CI can pin either value through the environment. Otherwise the version
//! comes from Cargo and the SHA from the local checkout.

use std::env;
use std::process::Command;

const SHORT_SHA_LEN: usize = 7;

fn main() {
    let version = env::var("PORTFOLIO_VERSION")
        .ok()
        .or_else(|| env::var("CARGO_PKG_VERSION").ok())
        .unwrap_or_else(|| "unknown".into());

    let git_sha = env::var("PORTFOLIO_GIT_SHA")
        .ok()
        .or_else(|| env::var("GITHUB_SHA").ok().map(short_sha))
        .or_else(|| git(&["rev-parse", "HEAD"]).map(short_sha))
        .unwrap_or_else(|| "unknown".into());

    for (key, value) in [("PORTFOLIO_VERSION", &version), ("PORTFOLIO_GIT_SHA", &git_sha)] {
        println!("cargo:rustc-env={key}={value}");
        println!("cargo:rerun-if-env-changed={key}");
    }
    println!("cargo:rerun-if-env-changed=GITHUB_SHA");

    // New commits move HEAD (or the branch it points at)
    if let Some(head) = git(&["rev-parse", "--git-path", "HEAD"]) {
        println!("cargo:rerun-if-changed={head}");
    }
}

fn short_sha(sha: String) -> String {
    sha.chars().take(SHORT_SHA_LEN).collect()
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
