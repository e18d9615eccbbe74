use std::process::Command;

fn main() {
  embed_build_info();
  set_rerun_conditions();
}

/// Runs `git` with the given arguments and returns trimmed stdout, or an empty
/// string when git is unavailable or the tree is not a repository.
fn git_output(args: &[&str]) -> String {
  Command::new("git")
    .args(args)
    .output()
    .ok()
    .and_then(|output| String::from_utf8(output.stdout).ok())
    .map(|stdout| stdout.trim().to_string())
    .unwrap_or_default()
}

fn embed_build_info() {
  // Always emit both vars, even when empty, so env!() in the CLI stays
  // compilable outside a git checkout.
  println!("cargo:rustc-env=GIT_HASH={}", git_output(&["rev-parse", "--short", "HEAD"]));
  println!("cargo:rustc-env=GIT_DATE={}", git_output(&["log", "-1", "--format=%cs"]));
}

fn set_rerun_conditions() {
  println!("cargo:rerun-if-changed=build.rs");
  println!("cargo:rerun-if-changed=.git/HEAD");
}
