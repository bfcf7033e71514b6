//! DOV commands: build a profile from saved service responses, and print the
//! requests that produce them.

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use soilprof_dov::{
    elevation_query, parse_elevation_response, profile_from_texture_response, texture_query,
};
use soilprof_profile::Point;

use crate::cli::{DovArgs, DovQueryArgs};
use crate::output::ProfileReport;

/// Run the dov command.
pub fn run(args: DovArgs) -> Result<()> {
    let _cmd = info_span!("dov").entered();
    let json = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read DOV response: {}", args.input.display()))?;

    let location = match (args.x, args.y) {
        (Some(x), Some(y)) => Some(Point::new(x, y)),
        _ => None,
    };
    let name = args
        .name
        .clone()
        .unwrap_or_else(|| default_profile_name(location));

    let elevation = match args.elevation_response {
        Some(ref path) => {
            let text = std::fs::read_to_string(path).with_context(|| {
                format!("failed to read elevation response: {}", path.display())
            })?;
            let elevation = parse_elevation_response(&text);
            if elevation.is_none() {
                warn!(path = %path.display(), "no elevation in Geopunt response");
            }
            elevation
        }
        None => args.elevation,
    };

    let profile = profile_from_texture_response(&name, location, elevation, &json)
        .with_context(|| format!("failed to parse DOV response: {}", args.input.display()))?;
    info!(
        profile = %profile.name(),
        n_layers = profile.layers().len(),
        "DOV profile built"
    );

    let report = ProfileReport::from_profile(&profile);
    let out = serde_json::to_string_pretty(&report).context("failed to serialize profile")?;
    println!("{out}");
    Ok(())
}

/// Run the dov-query command.
pub fn run_query(args: DovQueryArgs) -> Result<()> {
    let location = Point::new(args.x, args.y);
    println!("{}", texture_query(location, &args.crs).url());
    println!("{}", elevation_query(location, &args.crs).url());
    Ok(())
}

fn default_profile_name(location: Option<Point>) -> String {
    match location {
        Some(p) => format!("Profile_{:.0}_{:.0}", p.x, p.y),
        None => "DOV profile".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_name_from_coordinates() {
        assert_eq!(
            default_profile_name(Some(Point::new(247_172.56, 204_590.58))),
            "Profile_247173_204591"
        );
        assert_eq!(default_profile_name(None), "DOV profile");
    }
}
