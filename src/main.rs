use std::env;

use anyhow::Context;
use log::info;

use gradient_engine::{RunConfig, fit};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => {
            info!("loading config from {path}");
            RunConfig::from_path(&path).with_context(|| format!("cannot load '{path}'"))?
        }
        None => RunConfig::default(),
    };

    let outcome = fit(&config).context("fit failed")?;
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    Ok(())
}
