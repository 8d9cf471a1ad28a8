//! Surface material description.
//!
//! A `Material` is plain data handed over by whatever loaded the scene. The
//! renderer turns it into a scattering model per shading point.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use umbra_math::Vec3;

/// Color type alias (linear RGB, typically 0-1)
pub type Color = Vec3;

/// Index of a material inside a [`crate::Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MaterialId(pub u32);

impl MaterialId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Which scattering model a material is shaded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceModel {
    /// Metalness-driven blend of the metal and dielectric models.
    #[default]
    Principled,
    /// Diffuse lobe only.
    Diffuse,
    /// Bare GGX microfacet lobe with unit Fresnel.
    Ggx,
    /// GGX conductor tinted by the base color.
    Metal,
    /// Diffuse base under a GGX coat.
    Dielectric,
}

/// Errors raised when a material carries unusable parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MaterialError {
    #[error("material '{name}': {parameter} must be finite, got {value}")]
    NotFinite {
        name: String,
        parameter: &'static str,
        value: f32,
    },

    #[error("material '{name}': {parameter} must be in [0, 1], got {value}")]
    OutOfRange {
        name: String,
        parameter: &'static str,
        value: f32,
    },

    #[error("material '{name}': {parameter} must not be negative, got {value}")]
    Negative {
        name: String,
        parameter: &'static str,
        value: f32,
    },
}

/// A PBR material description: base color, roughness and metalness plus
/// emission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Material name (for diagnostics)
    pub name: String,

    /// Albedo for dielectrics, F0 for metals (RGB, 0-1)
    pub base_color: Color,

    /// Roughness factor (0=smooth, 1=rough)
    pub roughness: f32,

    /// Metalness factor (0=dielectric, 1=metal)
    pub metalness: f32,

    /// Emitted radiance, only used when `emitter` is set
    pub emissive: Color,

    /// Whether the surface emits light
    pub emitter: bool,

    /// Scattering model used for this material
    pub model: SurfaceModel,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: String::new(),
            base_color: Color::new(0.5, 0.5, 0.5), // Grey default
            roughness: 0.5,
            metalness: 0.0,
            emissive: Color::ZERO,
            emitter: false,
            model: SurfaceModel::Principled,
        }
    }
}

impl Material {
    /// Create a new material with just a name and base color.
    pub fn new(name: impl Into<String>, base_color: Color) -> Self {
        Self {
            name: name.into(),
            base_color,
            ..Default::default()
        }
    }

    /// Create a pure diffuse material.
    pub fn diffuse(name: impl Into<String>, albedo: Color) -> Self {
        Self {
            model: SurfaceModel::Diffuse,
            roughness: 0.0,
            ..Self::new(name, albedo)
        }
    }

    /// Create a metallic material.
    pub fn metal(name: impl Into<String>, color: Color, roughness: f32) -> Self {
        Self {
            roughness,
            metalness: 1.0,
            model: SurfaceModel::Metal,
            ..Self::new(name, color)
        }
    }

    /// Create a light source with the given radiance.
    pub fn emitter(name: impl Into<String>, radiance: Color) -> Self {
        Self {
            base_color: Color::ZERO,
            emissive: radiance,
            emitter: true,
            model: SurfaceModel::Diffuse,
            ..Self::new(name, Color::ZERO)
        }
    }

    /// Builder method to set roughness.
    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness;
        self
    }

    /// Builder method to set metalness.
    pub fn with_metalness(mut self, metalness: f32) -> Self {
        self.metalness = metalness;
        self
    }

    /// Builder method to set the surface model.
    pub fn with_model(mut self, model: SurfaceModel) -> Self {
        self.model = model;
        self
    }

    /// Check if this material contributes emission.
    pub fn is_emissive(&self) -> bool {
        self.emitter && self.emissive.max_element() > 0.0
    }

    /// Check every parameter is usable by the shading code.
    pub fn validate(&self) -> Result<(), MaterialError> {
        self.check_color("base_color", self.base_color, true)?;
        self.check_color("emissive", self.emissive, false)?;
        self.check_unit("roughness", self.roughness)?;
        self.check_unit("metalness", self.metalness)?;
        Ok(())
    }

    fn check_unit(&self, parameter: &'static str, value: f32) -> Result<(), MaterialError> {
        if !value.is_finite() {
            return Err(MaterialError::NotFinite {
                name: self.name.clone(),
                parameter,
                value,
            });
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(MaterialError::OutOfRange {
                name: self.name.clone(),
                parameter,
                value,
            });
        }
        Ok(())
    }

    fn check_color(
        &self,
        parameter: &'static str,
        color: Color,
        bounded: bool,
    ) -> Result<(), MaterialError> {
        for value in color.to_array() {
            if bounded {
                self.check_unit(parameter, value)?;
            } else if !value.is_finite() {
                return Err(MaterialError::NotFinite {
                    name: self.name.clone(),
                    parameter,
                    value,
                });
            } else if value < 0.0 {
                return Err(MaterialError::Negative {
                    name: self.name.clone(),
                    parameter,
                    value,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Material::default().validate().is_ok());
        assert!(Material::metal("gold", Color::new(1.0, 0.8, 0.3), 0.2).validate().is_ok());
        assert!(Material::emitter("lamp", Color::splat(10.0)).validate().is_ok());
    }

    #[test]
    fn test_roughness_out_of_range() {
        let mat = Material::new("bad", Color::ONE).with_roughness(1.5);
        assert_eq!(
            mat.validate(),
            Err(MaterialError::OutOfRange {
                name: "bad".to_string(),
                parameter: "roughness",
                value: 1.5,
            })
        );
    }

    #[test]
    fn test_nan_metalness_rejected() {
        let mat = Material::new("nan", Color::ONE).with_metalness(f32::NAN);
        assert!(matches!(
            mat.validate(),
            Err(MaterialError::NotFinite { parameter: "metalness", .. })
        ));
    }

    #[test]
    fn test_negative_emission_rejected() {
        let mut mat = Material::emitter("lamp", Color::ONE);
        mat.emissive.y = -1.0;
        assert!(matches!(mat.validate(), Err(MaterialError::Negative { .. })));
    }

    #[test]
    fn test_is_emissive_requires_flag() {
        let mut mat = Material::default();
        mat.emissive = Color::ONE;
        assert!(!mat.is_emissive());
        mat.emitter = true;
        assert!(mat.is_emissive());
    }

    #[test]
    fn test_material_from_json_uses_defaults() {
        let mat: Material =
            serde_json::from_str(r#"{ "name": "red", "base_color": [0.8, 0.1, 0.1], "model": "metal" }"#)
                .unwrap();

        assert_eq!(mat.name, "red");
        assert_eq!(mat.model, SurfaceModel::Metal);
        assert_eq!(mat.roughness, 0.5);
        assert!(!mat.emitter);
    }
}
