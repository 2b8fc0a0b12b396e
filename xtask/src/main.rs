//! Custom cargo commands for kumono-search.
//!
//! Usage:
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Tests, clippy and a wasm feature check
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask wasm      - Build the browser package with wasm-pack

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("wasm") => wasm()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  test      Run all Rust tests
  check     Tests + clippy + wasm feature check
  bench     Run benchmarks
  wasm      Build the browser package (wasm-pack, --features wasm)
"#
    );
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Everything CI runs before merging
fn check() -> Result<()> {
    println!("==========================================");
    println!("kumono-search checks");
    println!("==========================================\n");

    println!("[1/3] Running tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All tests passed\n");

    println!("[2/3] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy clean\n");

    println!("[3/3] Checking the wasm build...");
    run_cargo(&["check", "--quiet", "--lib", "--no-default-features", "--features", "wasm"])?;
    println!("✓ wasm feature compiles\n");

    println!("✓ All checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Build the npm package into pkg/
fn wasm() -> Result<()> {
    let root = project_root()?;

    let status = Command::new("wasm-pack")
        .args(["build", "--target", "web", "--release", "--", "--no-default-features", "--features", "wasm"])
        .current_dir(&root)
        .status()
        .context("Failed to run wasm-pack (is it installed?)")?;

    if !status.success() {
        bail!("wasm-pack build failed");
    }

    println!("✓ Package written to {}", root.join("pkg").display());
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}
