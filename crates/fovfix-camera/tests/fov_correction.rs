use fovfix_camera::{
    compute_render_matrix,
    fit::max_fitting_resolution,
    fov::{hor_plus, vertical_from_horizontal},
    AspectConstraint, AspectCorrection, FovCorrector, MatrixSet, ProjectionParams, Rotator, ViewPose,
    ViewportMetrics,
};
use glam::{Mat4, Quat, Vec3, Vec4};

fn camera() -> ViewPose {
    ViewPose::new(Vec3::new(3.0, -2.0, 1.7), Rotator::new(-8.0, 135.0, 0.0))
}

fn arms_model(pose: &ViewPose) -> Mat4 {
    let anchor = pose.location + pose.rotation.forward() * 0.6;
    Mat4::from_scale_rotation_translation(Vec3::new(1.0, 1.2, 0.9), Quat::from_rotation_z(0.4), anchor)
}

fn params() -> ProjectionParams {
    ProjectionParams::new(90.0, 0.1, AspectConstraint::MaintainXFov)
}

#[test]
fn fov_tutorial_smoke() {
    let pose = camera();
    let model = arms_model(&pose);
    let m = compute_render_matrix(model, Some(&pose), Some(&ViewportMetrics::default()), &params(), 90.0);
    assert!(m.is_finite());
}

#[test]
fn end_to_end_ultrawide() {
    let fit = max_fitting_resolution(1920.0, 1080.0, 2560.0, 1080.0);
    assert_eq!(fit.correction, AspectCorrection::PillarBox);

    let adjusted = hor_plus(90.0, 1920.0, 1080.0, 2560.0, 1080.0);
    assert!(adjusted > 90.0);

    // Vertical FOV authored at the reference survives at the new aspect.
    let v_ref = vertical_from_horizontal(90.0, 1920.0, 1080.0);
    let v_new = vertical_from_horizontal(adjusted, 2560.0, 1080.0);
    assert!((v_ref - v_new).abs() < 1e-3);
    assert!(((v_ref.to_radians() * 0.5).tan() - 1080.0 / 1920.0).abs() < 1e-5);

    let c = FovCorrector::default()
        .correct(&camera(), &ViewportMetrics::new(2560, 1080), &params(), 90.0)
        .unwrap();
    assert!((c.applied_hor_fov - adjusted).abs() < 1e-5);
}

#[test]
fn native_fov_at_reference_is_noop() {
    let pose = camera();
    let model = arms_model(&pose);
    let out = compute_render_matrix(model, Some(&pose), Some(&ViewportMetrics::new(1920, 1080)), &params(), 90.0);
    assert!(out.abs_diff_eq(model, 1e-4));
}

#[test]
fn no_view_point_passes_model_through() {
    let model = arms_model(&camera());
    let out = compute_render_matrix(model, None, Some(&ViewportMetrics::default()), &params(), 65.0);
    assert_eq!(out, model);
}

#[test]
fn inverse_view_is_identity_for_many_poses() {
    let rect = ViewportMetrics::default().view_rect();
    for (i, yaw) in [-170.0f32, -90.0, -12.5, 0.0, 44.0, 91.0, 179.0].into_iter().enumerate() {
        let pose = ViewPose::new(
            Vec3::new(i as f32 * 1.5, -(i as f32), 0.5),
            Rotator::new(yaw * 0.3, yaw, i as f32 * 7.0),
        );
        let set = MatrixSet::build(&pose, &rect, &params()).unwrap();
        assert!((set.inv_view() * set.view()).abs_diff_eq(Mat4::IDENTITY, 1e-4), "yaw {yaw}");
    }
}

#[test]
fn defect_graphics_fov() {
    let pose = camera();
    let model = arms_model(&pose);
    let viewport = ViewportMetrics::new(2560, 1080);
    let corrector = FovCorrector::default();

    // Matrices: native view-projection of the render matrix equals the corrected one of the model.
    let c = corrector.correct(&pose, &viewport, &params(), 70.0).unwrap();
    let render = c.apply(model);
    assert_eq!(render, corrector.render_matrix(model, Some(&pose), Some(&viewport), &params(), 70.0));

    let local = Vec4::new(0.05, -0.02, 0.1, 1.0);
    let expected = c.view_proj * model * local;
    let actual = c.native.view_proj() * render * local;
    let expected = expected / expected.w;
    let actual = actual / actual.w;
    assert!(actual.abs_diff_eq(expected, 1e-3), "{actual} vs {expected}");

    // Inverse-transpose, used for normals, stays well defined.
    let normal = render.inverse().transpose();
    assert!(normal.is_finite());

    // Translation in world space: a point on the view axis stays on it.
    let on_axis = render.transform_point3(Vec3::ZERO);
    let dir = (on_axis - pose.location).normalize();
    let model_dir = (model.transform_point3(Vec3::ZERO) - pose.location).normalize();
    assert!(dir.abs_diff_eq(model_dir, 1e-3));

    // Scale: the correction only rescales view-space X/Y, so the mesh is never mirrored or flattened.
    assert!(render.determinant() > 0.0);
    assert!((render.row(3) - Vec4::W).length() < 1e-5);
}
