use crate::cli::Config;

use anyhow::{Context, Result};
use handlebars::Handlebars;

use std::fs;

pub mod error;
use error::Error;

mod data;
mod partials;

/// One render pass: load the data tree, read the template, register partials,
/// evaluate, emit. The partial registry lives inside the engine instance and
/// is fully populated before the main template is compiled.
pub struct Renderer {
    config: Config,
    registry: Handlebars<'static>,
}

impl Renderer {
    pub fn run_command(config: Config) -> Result<()> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);

        let mut renderer = Renderer { config, registry };
        renderer.run().context("Failed to generate output")?;
        Ok(())
    }

    fn run(&mut self) -> Result<()> {
        let data = data::load(&self.config.data)?;
        let template = fs::read_to_string(&self.config.template).with_context(|| {
            format!(
                "Failed to read template file: {}",
                self.config.template.display()
            )
        })?;

        if let Some(dir) = &self.config.partials {
            if dir.is_dir() {
                partials::register_all(&mut self.registry, dir)?;
            } else {
                log::debug!("Skipping partials, not a directory: {}", dir.display());
            }
        }

        let rendered = self
            .registry
            .render_template(&template, &data)
            .context(Error::Render(self.config.template.clone()))?;

        self.emit(&rendered)
    }

    fn emit(&self, rendered: &str) -> Result<()> {
        match &self.config.output {
            Some(path) => {
                fs::write(path, rendered)
                    .with_context(|| format!("Failed to write output file: {}", path.display()))?;
                println!("Generated HTML file: {}", path.display());
            }
            None => println!("{}", rendered),
        }
        Ok(())
    }
}
