//! Texture command: look up the fractions of a texture class.

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use soilprof_texture::{ClassRanges, TextureConverter};

use crate::cli::TextureArgs;
use crate::convert;

/// Run the texture command.
pub fn run(args: TextureArgs) -> Result<()> {
    let _cmd = info_span!("texture").entered();
    let method = convert::parse_method(&args.method)?;
    let converter = match args.table {
        Some(ref path) => TextureConverter::from_path(path)
            .with_context(|| format!("failed to load texture table: {}", path.display()))?,
        None => TextureConverter::usda()?,
    };
    debug!(system = %converter.metadata().system, %method, "texture table loaded");

    let (sand, silt, clay) = converter.class_to_percentages(&args.class, method, !args.raw)?;
    println!(
        "{}: sand {sand:.1}%  silt {silt:.1}%  clay {clay:.1}%",
        converter.normalize_class_name(&args.class)
    );
    if args.ranges {
        print!("{}", render_ranges(converter.get_ranges(&args.class)?));
    }
    Ok(())
}

fn render_ranges(ranges: &ClassRanges) -> String {
    [("sand", ranges.sand), ("silt", ranges.silt), ("clay", ranges.clay)]
        .iter()
        .map(|(name, r)| {
            format!(
                "  {name:<5} mean {:>5.1}  min {:>5.1}  max {:>5.1}  std {:>4.1}\n",
                r.mean, r.min, r.max, r.std
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_table() {
        let converter = TextureConverter::usda().unwrap();
        let text = render_ranges(converter.get_ranges("loam").unwrap());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("  sand  mean"));
        assert!(lines[2].starts_with("  clay  mean"));
    }
}
