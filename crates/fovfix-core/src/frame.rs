use fovfix_camera::{ProjectionParams, ViewPose, ViewportMetrics};

/// Per-frame camera state handed to every corrected mesh.
///
/// `pose`/`viewport` are `None` while there is no local player (loading, menus, dedicated server).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameView {
    pub pose: Option<ViewPose>,
    pub viewport: Option<ViewportMetrics>,
    pub projection: ProjectionParams,
}

impl FrameView {
    #[inline]
    pub fn new(pose: ViewPose, viewport: ViewportMetrics, projection: ProjectionParams) -> Self {
        Self {
            pose: Some(pose),
            viewport: Some(viewport),
            projection,
        }
    }

    /// No active player: corrected meshes render with their plain model matrix.
    #[inline]
    pub fn detached(projection: ProjectionParams) -> Self {
        Self {
            pose: None,
            viewport: None,
            projection,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.pose.is_some() && self.viewport.is_some()
    }
}
