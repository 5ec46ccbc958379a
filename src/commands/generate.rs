//! Generate static files

use anyhow::Result;

use crate::generator::Generator;
use crate::Site;

/// Generate the static site into the public directory
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let generator = Generator::new(site)?;
    let written = generator.generate()?;

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} files into {:?} in {:.2}s",
        written,
        site.public_dir,
        duration.as_secs_f64()
    );

    Ok(())
}
