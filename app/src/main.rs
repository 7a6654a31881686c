use anyhow::Context;
use glam::{Mat4, Quat, Vec3};

use fovfix_core::{
    camera::{fit::max_fitting_resolution, MatrixSet},
    CorrectedMesh, FovConfig, FrameView, Transform,
};

const DEFAULT_CONFIG: &str = "fovfix.toml";

fn log_matrix(label: &str, m: &Mat4) {
    for (i, row) in m.transpose().to_cols_array_2d().iter().enumerate() {
        log::info!("{label}[{i}] = [{:>10.4} {:>10.4} {:>10.4} {:>10.4}]", row[0], row[1], row[2], row[3]);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let cfg = FovConfig::load_or_default(&path).with_context(|| format!("loading {path}"))?;
    let corrector = cfg.corrector()?;

    let preview = &cfg.preview;
    let frame = FrameView::new(preview.pose(), preview.viewport(), preview.projection());

    let reference = corrector.reference();
    let fit = max_fitting_resolution(
        reference.x,
        reference.y,
        preview.viewport_width as f32,
        preview.viewport_height as f32,
    );
    log::info!(
        "viewport {}x{} vs reference {}x{}: {:?}, scale {:.3}",
        preview.viewport_width,
        preview.viewport_height,
        reference.x,
        reference.y,
        fit.correction,
        fit.pixel_scale
    );

    let native = MatrixSet::build(&preview.pose(), &preview.viewport().view_rect(), &preview.projection())?;
    log_matrix("view_proj", &native.view_proj());

    // Meshes sit half a meter in front of the camera.
    let pose = preview.pose();
    let anchor = pose.location + pose.rotation.forward() * 50.0;
    let transform = Transform::new(anchor, Quat::IDENTITY, Vec3::ONE);

    for mesh_cfg in &cfg.meshes {
        let mesh = CorrectedMesh::from_config(mesh_cfg, transform)?;
        let c = corrector.correct(&pose, &preview.viewport(), &preview.projection(), mesh.desired_fov().degrees())?;
        log::info!(
            "mesh '{}': desired {:.2} deg, applied {:.2} deg{}",
            mesh.id,
            mesh.desired_fov().degrees(),
            c.applied_hor_fov,
            if c.is_noop(1e-5) { " (no-op)" } else { "" }
        );
        log_matrix(&mesh.id, &mesh.render_matrix(&corrector, &frame));
    }

    Ok(())
}
