//! External collaborators injected into layer operations.

use crate::error::ProfileError;
use crate::fractions::TextureFractions;

/// Maps a texture class label to representative sand/silt/clay percentages.
pub trait TextureClassifier {
    /// Looks up `texture_class`.
    ///
    /// Unknown classes yield [`ProfileError::UnknownTextureClass`].
    fn classify(&self, texture_class: &str) -> Result<TextureFractions, ProfileError>;
}

/// Output of a pedotransfer function for one layer.
///
/// Shape parameters and conductivity are reported on a log10 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HydraulicPrediction {
    /// Residual water content [cm³/cm³].
    pub theta_res: f64,
    /// Saturated water content [cm³/cm³].
    pub theta_sat: f64,
    /// log10 of alpha [1/cm].
    pub log10_alpha: f64,
    /// log10 of n [-].
    pub log10_n: f64,
    /// log10 of saturated conductivity [cm/day].
    pub log10_k_sat: f64,
}

impl HydraulicPrediction {
    pub fn alpha(&self) -> f64 {
        10f64.powf(self.log10_alpha)
    }

    pub fn n(&self) -> f64 {
        10f64.powf(self.log10_n)
    }

    pub fn k_sat(&self) -> f64 {
        10f64.powf(self.log10_k_sat)
    }
}

/// Predicts Van Genuchten parameters from texture fractions.
pub trait Pedotransfer {
    /// Name recorded as the source of predicted parameters.
    fn name(&self) -> &str {
        "pedotransfer"
    }

    /// Returns one prediction per input, in order.
    fn predict(
        &self,
        fractions: &[TextureFractions],
    ) -> Result<Vec<HydraulicPrediction>, ProfileError>;
}
