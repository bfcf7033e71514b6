//! WMS GetFeatureInfo requests for the DOV and Geopunt services.

use soilprof_profile::Point;

/// DOV geoserver WMS endpoint.
pub const DOV_WMS_URL: &str = "https://www.dov.vlaanderen.be/geoserver/wms";

/// Geopunt digital height model WMS endpoint.
pub const GEOPUNT_WMS_URL: &str = "https://geo.api.vlaanderen.be/DHMV/wms";

/// Belgian Lambert 72.
pub const DEFAULT_CRS: &str = "EPSG:31370";

/// DOV texture layers, in the order the response features are expected.
pub const TEXTURE_LAYERS: [&str; 3] = [
    "bdbstat:fractie_klei_basisdata_bodemkartering", // clay
    "bdbstat:fractie_leem_basisdata_bodemkartering", // silt
    "bdbstat:fractie_zand_basisdata_bodemkartering", // sand
];

/// Geopunt 1 m digital terrain model.
pub const ELEVATION_LAYER: &str = "DHMVII_DTM_1m";

const BBOX_BUFFER: f64 = 0.0001;

/// A WMS 1.1.1 GetFeatureInfo request around a single point.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureInfoQuery {
    pub base_url: &'static str,
    pub layers: Vec<String>,
    pub crs: String,
    /// `[min_x, min_y, max_x, max_y]`.
    pub bbox: [f64; 4],
    pub width: u32,
    pub height: u32,
    /// Queried pixel `(x, y)` within the image.
    pub pixel: (u32, u32),
    pub info_format: &'static str,
}

impl FeatureInfoQuery {
    fn around(
        base_url: &'static str,
        layers: &[&str],
        location: Point,
        crs: &str,
        size: u32,
        info_format: &'static str,
    ) -> Self {
        Self {
            base_url,
            layers: layers.iter().map(|l| l.to_string()).collect(),
            crs: crs.to_string(),
            bbox: [
                location.x - BBOX_BUFFER,
                location.y - BBOX_BUFFER,
                location.x + BBOX_BUFFER,
                location.y + BBOX_BUFFER,
            ],
            width: size,
            height: size,
            pixel: (size / 2, size / 2),
            info_format,
        }
    }

    /// Full request URL with query parameters.
    pub fn url(&self) -> String {
        let layers = self.layers.join(",");
        let bbox = self
            .bbox
            .iter()
            .map(f64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        format!(
            "{}?SERVICE=WMS&VERSION=1.1.1&REQUEST=GetFeatureInfo\
             &LAYERS={layers}&QUERY_LAYERS={layers}&STYLES=\
             &SRS={}&BBOX={bbox}&WIDTH={}&HEIGHT={}&X={}&Y={}&INFO_FORMAT={}",
            self.base_url,
            self.crs,
            self.width,
            self.height,
            self.pixel.0,
            self.pixel.1,
            self.info_format,
        )
    }
}

/// Request for the clay, silt and sand fractions at `location`.
pub fn texture_query(location: Point, crs: &str) -> FeatureInfoQuery {
    FeatureInfoQuery::around(
        DOV_WMS_URL,
        &TEXTURE_LAYERS,
        location,
        crs,
        100,
        "application/json",
    )
}

/// Request for the terrain elevation at `location`.
pub fn elevation_query(location: Point, crs: &str) -> FeatureInfoQuery {
    FeatureInfoQuery::around(
        GEOPUNT_WMS_URL,
        &[ELEVATION_LAYER],
        location,
        crs,
        256,
        "text/plain",
    )
}
