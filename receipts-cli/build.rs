use std::path::Path;
use std::process::Command;

/// Short commit hash of the checkout this binary is built from.
fn git_short_sha(repo: &Path) -> Option<String> {
    let out = Command::new("git")
        .arg("rev-parse")
        .arg("--short")
        .arg("HEAD")
        .current_dir(repo)
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let sha = String::from_utf8(out.stdout).ok()?;
    let sha = sha.trim();
    (!sha.is_empty()).then(|| sha.to_owned())
}

fn main() {
    let manifest_dir = std::env::var_os("CARGO_MANIFEST_DIR").unwrap_or_default();
    let sha = git_short_sha(Path::new(&manifest_dir)).unwrap_or_else(|| "unknown".into());
    println!("cargo:rustc-env=RECEIPTS_BUILD_SHA={sha}");
}
