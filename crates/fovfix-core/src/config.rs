use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use fovfix_camera::{AspectConstraint, DesiredFov, FovCorrector, ProjectionParams, Rotator, ViewPose, ViewportMetrics};
use glam::Vec3;

use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FovConfig {
    /// Resolution the desired FOVs were authored at.
    #[serde(default = "default_reference_width")]
    pub reference_width: f32,

    #[serde(default = "default_reference_height")]
    pub reference_height: f32,

    #[serde(default)]
    pub meshes: Vec<MeshConfig>,

    #[serde(default)]
    pub preview: PreviewConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshConfig {
    pub id: String,

    /// Degrees, open range (0, 180).
    #[serde(default = "default_desired_fov")]
    pub desired_horizontal_fov: f32,
}

/// Sample frame used by the preview app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub camera_fov: f32,
    pub near_clip: f32,
    pub constraint: AspectConstraint,
    pub location: [f32; 3],
    /// Pitch, yaw, roll in degrees.
    pub rotation: [f32; 3],
}

fn default_reference_width() -> f32 {
    FovCorrector::REFERENCE_RESOLUTION.x
}
fn default_reference_height() -> f32 {
    FovCorrector::REFERENCE_RESOLUTION.y
}
fn default_desired_fov() -> f32 {
    DesiredFov::default().degrees()
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            viewport_width: 2560,
            viewport_height: 1080,
            camera_fov: 90.0,
            near_clip: 10.0,
            constraint: AspectConstraint::MaintainXFov,
            location: [0.0, 0.0, 170.0],
            rotation: [0.0, 0.0, 0.0],
        }
    }
}

impl PreviewConfig {
    pub fn pose(&self) -> ViewPose {
        let [pitch, yaw, roll] = self.rotation;
        ViewPose::new(Vec3::from_array(self.location), Rotator::new(pitch, yaw, roll))
    }

    pub fn viewport(&self) -> ViewportMetrics {
        ViewportMetrics::new(self.viewport_width, self.viewport_height)
    }

    pub fn projection(&self) -> ProjectionParams {
        ProjectionParams::new(self.camera_fov, self.near_clip, self.constraint)
    }
}

impl Default for FovConfig {
    fn default() -> Self {
        Self {
            reference_width: default_reference_width(),
            reference_height: default_reference_height(),
            meshes: vec![MeshConfig {
                id: "first_person_arms".into(),
                desired_horizontal_fov: default_desired_fov(),
            }],
            preview: PreviewConfig::default(),
        }
    }
}

impl MeshConfig {
    pub fn desired_fov(&self) -> CoreResult<DesiredFov> {
        DesiredFov::new(self.desired_horizontal_fov).map_err(|source| CoreError::Mesh {
            mesh: self.id.clone(),
            source,
        })
    }
}

impl FovConfig {
    /// Missing file means defaults; a file that cannot be read, parsed or validated is an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(s) => Self::from_toml_str(&s)
                .map_err(|e| CoreError::Config(format!("{}: {}", path.display(), e))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("config {} not found, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(CoreError::Config(format!("read {}: {}", path.display(), e))),
        }
    }

    pub fn from_toml_str(s: &str) -> CoreResult<Self> {
        let cfg: FovConfig = toml::from_str(s).map_err(|e| CoreError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Rejects a bad reference resolution or any mesh FOV outside (0, 180).
    pub fn validate(&self) -> CoreResult<()> {
        self.corrector()?;
        for mesh in &self.meshes {
            mesh.desired_fov()?;
        }
        if self.preview.near_clip <= 0.0 {
            return Err(CoreError::Config(format!(
                "preview.near_clip must be positive, got {}",
                self.preview.near_clip
            )));
        }
        Ok(())
    }

    pub fn corrector(&self) -> CoreResult<FovCorrector> {
        Ok(FovCorrector::new(self.reference_width, self.reference_height)?)
    }
}
