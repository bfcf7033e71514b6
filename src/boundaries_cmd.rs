//! Boundaries command: print the vertical discretization of a profile.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use crate::cli::BoundariesArgs;
use crate::config::read_profile_config;
use crate::convert;
use crate::output::BoundariesReport;

/// Run the boundaries command.
pub fn run(args: BoundariesArgs) -> Result<()> {
    let _cmd = info_span!("boundaries").entered();
    let cfg = read_profile_config(&args.config)?;
    let profile = convert::build_profile(&cfg)?;
    info!(
        profile = %profile.name(),
        n_layers = profile.layers().len(),
        "profile loaded"
    );

    let report = BoundariesReport::from_profile(&profile);
    if args.json {
        let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        println!("{json}");
    } else {
        print!("{}", render_table(&report));
    }
    Ok(())
}

fn render_table(report: &BoundariesReport) -> String {
    let mut out = format!(
        "Profile {} ({} layers, {:.1} cm)\n",
        report.profile,
        report.layers.len(),
        report.depth
    );
    for (i, layer) in report.layers.iter().enumerate() {
        let boundaries = layer
            .boundaries
            .iter()
            .map(|b| format!("{b:.2}"))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!(
            "{:>3}  {:<16} {:>7.1} - {:>7.1}  {:<18} {boundaries}\n",
            i + 1,
            layer.name,
            layer.top,
            layer.bottom,
            layer.kind.as_deref().unwrap_or("-"),
        ));
    }
    out.push_str(&format!("{} sublayer depths\n", report.depths.len()));
    out
}
