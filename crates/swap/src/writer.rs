//! SWAP soil section writer.

use std::io::Write;

use soilprof_profile::{SoilLayer, SoilProfile};
use tracing::info;

use crate::compartments::soil_profile_rows;
use crate::error::SwapError;

/// Column headers of the SWAP soil hydraulic function tables.
pub fn swap_table_headers() -> [&'static str; 5] {
    [
        "h",     // pressure head [cm]
        "theta", // water content [cm3/cm3]
        "K",     // hydraulic conductivity [cm/d]
        "C",     // differential moisture capacity [1/cm]
        "Se",    // relative saturation [-]
    ]
}

fn required(
    layer: &SoilLayer,
    value: Option<f64>,
    parameter: &'static str,
) -> Result<f64, SwapError> {
    value.ok_or_else(|| SwapError::MissingHydraulicParameter {
        layer: layer.name().to_string(),
        parameter,
    })
}

/// Formats the Van Genuchten block of one layer.
pub fn format_van_genuchten_table(layer: &SoilLayer) -> Result<String, SwapError> {
    let ores = required(layer, layer.theta_res(), "theta_res")?;
    let osat = required(layer, layer.theta_sat(), "theta_sat")?;
    let alfa = required(layer, layer.alpha(), "alpha")?;
    let npar = required(layer, layer.n(), "n")?;
    let ksat = required(layer, layer.k_sat(), "k_sat")?;

    Ok(format!(
        "* {name}\n\
         * ISOILLAY{upper:5} ! soil hydraulic functions\n\
         \x20 1         ! ORES = {ores:.6}\n\
         \x20 2         ! OSAT = {osat:.6}\n\
         \x20 3         ! ALFA = {alfa:.6}\n\
         \x20 4         ! NPAR = {npar:.6}\n\
         \x20 5         ! KSAT = {ksat:.6}\n\
         \x20 6         ! LEXP = {lexp:.6}\n",
        name = layer.name(),
        upper = layer.name().to_uppercase(),
        lexp = layer.l(),
    ))
}

/// Writes the soil section of a SWAP input file.
///
/// Every layer must carry its Van Genuchten parameters; the check runs before
/// anything is written.
pub fn write_swap_soil_file(
    profile: &SoilProfile,
    out: &mut impl Write,
) -> Result<(), SwapError> {
    let tables = profile
        .layers()
        .iter()
        .map(format_van_genuchten_table)
        .collect::<Result<Vec<_>, _>>()?;

    writeln!(out, "* Soil profile: {}", profile.name())?;
    if let Some(description) = profile.description() {
        writeln!(out, "* Description: {description}")?;
    }
    writeln!(out, "*")?;

    writeln!(
        out,
        "  {}    ! ISOILLAY = number of soil layers",
        profile.layers().len()
    )?;
    writeln!(out, "*")?;

    let thicknesses = profile
        .layer_bounds()
        .iter()
        .map(|(top, bottom)| format!("{:.1}", bottom - top))
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(out, "* thickness of soil layers [cm]:")?;
    writeln!(out, "  {thicknesses}    ! HSUBLAY = thickness of soil layers [cm]")?;
    writeln!(out, "*")?;

    let rows = soil_profile_rows(profile);
    writeln!(out, "* vertical discretization of soil profile:")?;
    writeln!(out, "  ISOILLAY  ISUBLAY   HSUBLAY     HCOMP  NCOMP")?;
    for row in &rows {
        writeln!(
            out,
            "  {:>8}  {:>7}  {:>8.3}  {:>8.3}  {:>5}",
            row.isoillay, row.isublay, row.hsublay, row.hcomp, row.ncomp
        )?;
    }
    writeln!(out, "* End of table")?;
    writeln!(out, "*")?;

    writeln!(out, "* soil hydraulic functions:")?;
    for table in &tables {
        writeln!(out)?;
        out.write_all(table.as_bytes())?;
    }

    info!(
        profile = %profile.name(),
        n_layers = profile.layers().len(),
        n_sublayers = rows.len(),
        "wrote SWAP soil section"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers() {
        assert_eq!(swap_table_headers(), ["h", "theta", "K", "C", "Se"]);
    }

    #[test]
    fn van_genuchten_block() {
        let layer = SoilLayer::builder("TopSoil")
            .with_van_genuchten(0.02, 0.4, 0.02, 1.5, 10.0)
            .build()
            .unwrap();
        let block = format_van_genuchten_table(&layer).unwrap();
        assert_eq!(
            block,
            "* TopSoil\n\
             * ISOILLAYTOPSOIL ! soil hydraulic functions\n\
             \x20 1         ! ORES = 0.020000\n\
             \x20 2         ! OSAT = 0.400000\n\
             \x20 3         ! ALFA = 0.020000\n\
             \x20 4         ! NPAR = 1.500000\n\
             \x20 5         ! KSAT = 10.000000\n\
             \x20 6         ! LEXP = 0.500000\n"
        );
    }

    #[test]
    fn short_names_are_padded() {
        let layer = SoilLayer::builder("A")
            .with_van_genuchten(0.02, 0.4, 0.02, 1.5, 10.0)
            .build()
            .unwrap();
        let block = format_van_genuchten_table(&layer).unwrap();
        assert!(block.contains("* ISOILLAYA     ! soil hydraulic functions"));
    }

    #[test]
    fn missing_parameter() {
        let layer = SoilLayer::builder("dov")
            .with_theta_res(0.02)
            .with_theta_sat(0.4)
            .build()
            .unwrap();
        assert_eq!(
            format_van_genuchten_table(&layer),
            Err(SwapError::MissingHydraulicParameter {
                layer: "dov".to_string(),
                parameter: "alpha",
            })
        );
    }
}
