//! Swap command: write the SWAP soil section of a profile.

use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;
use tracing::{info, info_span};

use soilprof_profile::SoilProfile;

use crate::cli::SwapArgs;
use crate::config::read_profile_config;
use crate::convert;

/// Run the swap command.
pub fn run(args: SwapArgs) -> Result<()> {
    let _cmd = info_span!("swap").entered();
    let cfg = read_profile_config(&args.config)?;
    let profile = convert::build_profile(&cfg)?;
    write_profile(&profile, &args.output)?;
    info!(path = %args.output.display(), "SWAP soil section written");
    Ok(())
}

/// Writes to a temporary file next to `path` and renames it into place, so a
/// failed export leaves any existing file untouched.
fn write_profile(profile: &SoilProfile, path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temporary file in {}", dir.display()))?;

    let mut writer = BufWriter::new(tmp.as_file_mut());
    soilprof_swap::write_swap_soil_file(profile, &mut writer)
        .with_context(|| format!("failed to write SWAP soil section for {:?}", profile.name()))?;
    writer
        .flush()
        .with_context(|| format!("failed to write output file: {}", path.display()))?;
    drop(writer);

    tmp.persist(path)
        .with_context(|| format!("failed to create output file: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use soilprof_profile::SoilLayer;

    #[test]
    fn writes_file() {
        let layer = SoilLayer::builder("Ap")
            .with_van_genuchten(0.02, 0.4, 0.02, 1.5, 10.0)
            .build()
            .unwrap();
        let profile = SoilProfile::new("p", vec![layer], vec![25.0]).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("soil.swp");

        write_profile(&profile, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("* Soil profile: p\n"));
        assert!(text.contains("  25.0    ! HSUBLAY"));
    }

    #[test]
    fn missing_parameters_reported() {
        let layer = SoilLayer::builder("Ap").build().unwrap();
        let profile = SoilProfile::new("p", vec![layer], vec![25.0]).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("soil.swp");
        let err = write_profile(&profile, &path).unwrap_err();
        assert!(format!("{err:#}").contains("has no theta_res"));
        assert!(!path.exists());
    }

    #[test]
    fn failed_export_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("soil.swp");
        std::fs::write(&path, "* previous export\n").unwrap();

        let layer = SoilLayer::builder("Ap").build().unwrap();
        let profile = SoilProfile::new("p", vec![layer], vec![25.0]).unwrap();
        assert!(write_profile(&profile, &path).is_err());

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "* previous export\n"
        );
        let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn successful_export_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("soil.swp");
        std::fs::write(&path, "stale").unwrap();

        let layer = SoilLayer::builder("Ap")
            .with_van_genuchten(0.02, 0.4, 0.02, 1.5, 10.0)
            .build()
            .unwrap();
        let profile = SoilProfile::new("p", vec![layer], vec![25.0]).unwrap();
        write_profile(&profile, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("* Soil profile: p\n"));
    }
}
