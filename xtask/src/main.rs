#![deny(unused_must_use)]

use std::{env, fs, path::PathBuf};

use xshell::cmd;

fn main() -> Result<(), anyhow::Error> {
    let args = env::args().skip(1).collect::<Vec<_>>();
    let args = args.iter().map(|s| &**s).collect::<Vec<_>>();

    match &args[..] {
        ["ci"] => test_ci(),
        ["update"] => update(),
        _ => {
            println!("USAGE cargo xtask [ci|update]");
            Ok(())
        }
    }
}

fn update() -> Result<(), anyhow::Error> {
    let _p = xshell::pushd(root_dir())?;
    cmd!("cargo update").run()?;
    Ok(())
}

fn test_ci() -> Result<(), anyhow::Error> {
    let _e = xshell::pushenv("CI", "true");
    test_device()?;
    build_features()?;
    Ok(())
}

fn test_device() -> Result<(), anyhow::Error> {
    let _p = xshell::pushd(device_dir())?;
    cmd!("cargo test").run()?;
    cmd!("cargo test --no-default-features").run()?;
    Ok(())
}

/// Build the device crate once per optional feature on its own, so a feature that only compiles
/// alongside the defaults is caught.
fn build_features() -> Result<(), anyhow::Error> {
    let _p = xshell::pushd(device_dir())?;
    cmd!("cargo build --no-default-features").run()?;
    for feature in device_features()? {
        println!("Building device with feature {}", feature);
        cmd!("cargo build --no-default-features --features {feature}").run()?;
    }
    Ok(())
}

fn device_features() -> Result<Vec<String>, anyhow::Error> {
    let mut manifest = device_dir();
    manifest.push("Cargo.toml");
    let manifest: toml::Value = fs::read_to_string(&manifest)?.parse()?;

    let features = manifest
        .get("features")
        .and_then(|f| f.as_table())
        .map(|f| {
            f.keys()
                .filter(|k| k.as_str() != "default")
                .cloned()
                .collect()
        })
        .unwrap_or_default();
    Ok(features)
}

fn device_dir() -> PathBuf {
    let mut device = root_dir();
    device.push("device");
    device
}

fn root_dir() -> PathBuf {
    let mut xtask_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    xtask_dir.pop();
    xtask_dir
}
