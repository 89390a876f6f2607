use anyhow::{Context, Result};
use sf::config::Settings;
use std::{env,
          fs::File,
          io::Write,
};

fn main() -> Result<()> {
    let filename = env::args()
        .nth(1)
        .unwrap_or_else(|| "secret-finder.toml".to_string());

    let toml = toml::to_string(&Settings::default())?;

    let mut file = File::create(&filename)
        .with_context(|| format!("creating {}", filename))?;
    file.write_all(toml.as_bytes())?;

    Ok(())
}
