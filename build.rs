use std::process::Command;

fn git_hash() -> String {
    let unknown = String::from("unknown");

    let changes = Command::new("git")
        .args(["diff", "--cached", "--exit-code"])
        .status()
        .map_or(true, |status| !status.success());

    if changes {
        return unknown;
    }

    Command::new("git")
        .args(["rev-parse", "--verify", "HEAD"])
        .output()
        .ok()
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|hash| hash.trim().to_string())
        .unwrap_or(unknown)
}

fn main() {
    // embed git hash as environment variable GIT_HASH for use in header
    println!("cargo:rustc-env=GIT_HASH={}", git_hash());
    println!("cargo:rerun-if-changed=build.rs");
}
