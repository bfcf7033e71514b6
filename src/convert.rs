//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Context, Result, bail};

use crate::config::*;

use soilprof_discretize::{Discretization, DiscretizationKind};
use soilprof_profile::{Point, SoilLayer, SoilProfile};
use soilprof_texture::{Method, TextureConverter};

/// Parses a discretization kind name into the corresponding enum variant.
pub fn parse_discretization_kind(s: &str) -> Result<DiscretizationKind> {
    Ok(s.parse::<DiscretizationKind>()?)
}

/// Parses a texture lookup method name into the corresponding enum variant.
pub fn parse_method(s: &str) -> Result<Method> {
    Ok(s.parse::<Method>()?)
}

/// Builds a [`Discretization`] from the TOML discretization table.
pub fn build_discretization(d: &DiscretizationToml) -> Result<Discretization> {
    let kind = parse_discretization_kind(&d.kind)?;
    Ok(Discretization::new(
        kind,
        d.num_sublayers,
        d.num_compartments,
        d.log_density,
    )?)
}

/// Builds a [`SoilLayer`] from one `[[layers]]` entry.
///
/// The three fractions must be given together or not at all.
pub fn build_layer(layer: &LayerToml) -> Result<SoilLayer> {
    let mut builder = SoilLayer::builder(&layer.name);
    if let Some(ref description) = layer.description {
        builder = builder.with_description(description);
    }
    if let Some(ref d) = layer.discretization {
        builder = builder.with_discretization(build_discretization(d)?);
    }

    if let Some(v) = layer.theta_res {
        builder = builder.with_theta_res(v);
    }
    if let Some(v) = layer.theta_sat {
        builder = builder.with_theta_sat(v);
    }
    if let Some(v) = layer.alpha {
        builder = builder.with_alpha(v);
    }
    if let Some(v) = layer.n {
        builder = builder.with_n(v);
    }
    if let Some(v) = layer.k_sat {
        builder = builder.with_k_sat(v);
    }
    if let Some(v) = layer.l {
        builder = builder.with_l(v);
    }

    if let Some(ref class) = layer.texture_class {
        builder = builder.with_texture_class(class);
    }
    match (layer.sand, layer.silt, layer.clay) {
        (Some(sand), Some(silt), Some(clay)) => {
            builder = builder.with_fractions(sand, silt, clay);
        }
        (None, None, None) => {}
        _ => bail!(
            "layer {:?}: sand, silt and clay must be given together",
            layer.name
        ),
    }
    if let Some(v) = layer.organic_matter {
        builder = builder.with_organic_matter(v);
    }
    if let Some(v) = layer.bulk_density {
        builder = builder.with_bulk_density(v);
    }

    Ok(builder.build()?)
}

/// Loads the texture table named in the config, or USDA by default.
pub fn build_texture_converter(texture: &TextureToml) -> Result<TextureConverter> {
    match texture.table {
        Some(ref path) => TextureConverter::from_path(path)
            .with_context(|| format!("failed to load texture table: {}", path.display())),
        None => Ok(TextureConverter::usda()?),
    }
}

/// Builds a [`SoilProfile`] from the TOML profile.
///
/// Layers with a texture class but no fractions get their fractions from the
/// classification table when `texture.infer_fractions` is set. With
/// `texture.normalize`, every layer that has fractions is rescaled.
pub fn build_profile(cfg: &ProfileToml) -> Result<SoilProfile> {
    let needs_table = cfg.texture.infer_fractions
        && cfg
            .layers
            .iter()
            .any(|l| l.texture_class.is_some() && l.sand.is_none());
    let converter = if needs_table {
        Some(build_texture_converter(&cfg.texture)?)
    } else {
        None
    };

    let mut layers = Vec::with_capacity(cfg.layers.len());
    for layer_cfg in &cfg.layers {
        let mut layer = build_layer(layer_cfg)?;
        if let Some(ref converter) = converter
            && layer.texture_class().is_some()
            && layer.fractions().is_none()
        {
            layer
                .infer_fractions_from_texture(converter)
                .with_context(|| format!("layer {:?}", layer_cfg.name))?;
        }
        if cfg.texture.normalize && layer.fractions().is_some() {
            layer
                .normalize_soil_fractions(cfg.texture.tolerance)
                .with_context(|| format!("layer {:?}", layer_cfg.name))?;
        }
        layers.push(layer);
    }

    let bottoms = cfg.layers.iter().map(|l| l.bottom).collect();
    let mut profile = SoilProfile::new(&cfg.name, layers, bottoms)?;
    if let Some(ref description) = cfg.description {
        profile = profile.with_description(description);
    }
    if let Some(location) = cfg.location {
        profile = profile.with_location(Point::new(location.x, location.y));
    }
    if let Some(elevation) = cfg.elevation {
        profile = profile.with_elevation(elevation);
    }
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn parse(toml_str: &str) -> ProfileToml {
        toml::from_str(toml_str).unwrap()
    }

    #[test]
    fn discretization_kinds() {
        assert_eq!(
            parse_discretization_kind("even").unwrap(),
            DiscretizationKind::Even
        );
        assert_eq!(
            parse_discretization_kind("log_both").unwrap(),
            DiscretizationKind::LogBoth
        );
        assert!(parse_discretization_kind("cubic").is_err());
    }

    #[test]
    fn methods() {
        assert_eq!(parse_method("mean").unwrap(), Method::Mean);
        assert!(parse_method("median").is_err());
    }

    #[test]
    fn profile_with_inferred_fractions() {
        let cfg = parse(
            r#"
            name = "Field A"
            description = "test"
            location = { x = 1.0, y = 2.0 }
            elevation = 12.5

            [[layers]]
            name = "Ap"
            bottom = 30.0
            texture_class = "silt loam"
            discretization = { kind = "log_top", num_sublayers = 4, num_compartments = 2 }

            [[layers]]
            name = "C"
            bottom = 100.0
            sand = 60.0
            silt = 30.0
            clay = 10.0
            "#,
        );
        let profile = build_profile(&cfg).unwrap();
        assert_eq!(profile.name(), "Field A");
        assert_eq!(profile.description(), Some("test"));
        assert_eq!(profile.location(), Some(Point::new(1.0, 2.0)));
        assert_eq!(profile.elevation(), Some(12.5));
        assert_eq!(profile.layer_bottoms(), &[30.0, 100.0]);

        let ap = &profile.layers()[0];
        assert_eq!(ap.sand_content(), Some(20.0));
        assert_eq!(ap.silt_content(), Some(65.0));
        assert_eq!(ap.clay_content(), Some(15.0));
        assert_eq!(ap.discretization().unwrap().num_sublayers(), 4);
        assert_eq!(profile.get_sublayer_boundaries()[0].len(), 5);
    }

    #[test]
    fn inference_can_be_disabled() {
        let cfg = parse(
            r#"
            name = "p"
            texture = { infer_fractions = false }

            [[layers]]
            name = "Ap"
            bottom = 30.0
            texture_class = "loam"
            "#,
        );
        let profile = build_profile(&cfg).unwrap();
        assert!(profile.layers()[0].fractions().is_none());
    }

    #[test]
    fn normalize_rescales() {
        let cfg = parse(
            r#"
            name = "p"
            texture = { normalize = true }

            [[layers]]
            name = "Ap"
            bottom = 30.0
            sand = 40.0
            silt = 40.0
            clay = 20.05
            "#,
        );
        let profile = build_profile(&cfg).unwrap();
        assert_relative_eq!(
            profile.layers()[0].sum_texture().unwrap(),
            100.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn partial_fractions_rejected() {
        let cfg = parse(
            r#"
            name = "p"

            [[layers]]
            name = "Ap"
            bottom = 30.0
            sand = 40.0
            "#,
        );
        let err = build_profile(&cfg).unwrap_err();
        assert_eq!(
            err.to_string(),
            "layer \"Ap\": sand, silt and clay must be given together"
        );
    }

    #[test]
    fn unknown_class_reported() {
        let cfg = parse(
            r#"
            name = "p"

            [[layers]]
            name = "Ap"
            bottom = 30.0
            texture_class = "peat"
            "#,
        );
        let err = build_profile(&cfg).unwrap_err();
        assert!(format!("{err:#}").contains("peat"));
    }

    #[test]
    fn non_increasing_bottoms_rejected() {
        let cfg = parse(
            r#"
            name = "p"

            [[layers]]
            name = "a"
            bottom = 30.0

            [[layers]]
            name = "b"
            bottom = 30.0
            "#,
        );
        assert!(build_profile(&cfg).is_err());
    }
}
