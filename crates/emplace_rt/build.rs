use std::env;
use std::path::PathBuf;

use emplace_gen::GenConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let config = GenConfig::default().with_runtime_path("crate");
    emplace_gen::write_to_path(&config, out_dir.join("constructors.rs"))?;

    Ok(())
}
