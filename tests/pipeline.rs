use approx::assert_relative_eq;
use cuboid_painter::colors::{self, Color};
use cuboid_painter::cuboid::{Cuboid, FACES};
use cuboid_painter::prelude::*;
use cuboid_painter::render::FrameBuffer;

/// Records every draw call instead of touching pixels.
#[derive(Default)]
struct RecordingRasterizer {
    calls: Vec<(Vec<ScreenPoint>, Color)>,
}

impl PolygonRasterizer for RecordingRasterizer {
    fn fill_polygon(
        &mut self,
        points: &[ScreenPoint],
        color: Color,
        _buffer: &mut FrameBuffer,
    ) -> Result<(), RasterError> {
        self.calls.push((points.to_vec(), color));
        Ok(())
    }
}

fn single_cuboid_session() -> Session {
    let config = RenderConfig::default();
    Session::with_cuboids(Camera::from_config(&config), vec![Cuboid::new(Vec3::ZERO)])
}

#[test]
fn nearest_face_of_a_centered_cuboid_is_drawn_last() {
    let config = RenderConfig::default();
    let session = single_cuboid_session();
    let mut engine = Engine::with_rasterizer(&config, RecordingRasterizer::default());
    engine.render_frame(&session);

    let calls = &engine.rasterizer().calls;
    assert_eq!(calls.len(), FACES.len());

    // The face at z = -0.5 faces the camera at z = -5.
    let (points, color) = calls.last().unwrap();
    assert_eq!(*color, colors::BLUE);
    assert_eq!(
        points.as_slice(),
        &[
            ScreenPoint::new(223, 223),
            ScreenPoint::new(277, 223),
            ScreenPoint::new(277, 277),
            ScreenPoint::new(223, 277),
        ]
    );

    // Far face first, then the four sides in emission order, near face last.
    let order: Vec<Color> = calls.iter().map(|(_, c)| *c).collect();
    assert_eq!(
        order,
        vec![
            colors::RED,
            colors::WHITE,
            colors::YELLOW,
            colors::GREEN,
            colors::ORANGE,
            colors::BLUE,
        ]
    );
}

#[test]
fn draw_order_follows_descending_depth() {
    let config = RenderConfig::default();
    let mut session = Session::new(&config);
    session.camera = Camera::new(Vec3::new(1.3, -0.7, -7.0)).with_rotation(0.15, -0.2);

    let mut engine = Engine::with_rasterizer(&config, RecordingRasterizer::default());
    let stats = engine.render_frame(&session);

    let faces = engine.last_draw_list();
    assert_eq!(faces.len(), stats.visible_faces);
    assert_eq!(engine.rasterizer().calls.len(), faces.len());
    assert!(faces.windows(2).all(|w| w[0].depth >= w[1].depth));
    for (face, (points, color)) in faces.iter().zip(&engine.rasterizer().calls) {
        assert_eq!(points.as_slice(), &face.polygon);
        assert_eq!(*color, face.color);
    }
}

#[test]
fn same_input_gives_same_frame() {
    let config = RenderConfig::default();
    let session = Session::new(&config);

    let mut first = Engine::with_rasterizer(&config, RecordingRasterizer::default());
    let mut second = Engine::with_rasterizer(&config, RecordingRasterizer::default());
    first.render_frame(&session);
    second.render_frame(&session);

    assert_eq!(first.rasterizer().calls, second.rasterizer().calls);
}

#[test]
fn nothing_behind_the_camera_is_drawn() {
    let config = RenderConfig::default();
    let session = Session::with_cuboids(
        Camera::new(Vec3::new(0.0, 0.0, 5.0)),
        vec![Cuboid::new(Vec3::ZERO), Cuboid::new(Vec3::new(0.0, 0.0, 3.0))],
    );
    let mut engine = Engine::with_rasterizer(&config, RecordingRasterizer::default());
    let stats = engine.render_frame(&session);

    assert_eq!(stats.visible_faces, 0);
    assert!(engine.rasterizer().calls.is_empty());
}

#[test]
fn turning_around_brings_the_scene_back() {
    let config = RenderConfig::default();
    let mut session = single_cuboid_session();
    session.camera.set_position(Vec3::new(0.0, 0.0, 5.0));

    let mut engine = Engine::with_rasterizer(&config, RecordingRasterizer::default());
    assert_eq!(engine.render_frame(&session).visible_faces, 0);

    // 200·π pixels of horizontal motion is a half turn.
    let half_turn = (200.0 * std::f32::consts::PI).round() as i32;
    session.apply_input(0.0, &KeyState::default(), &[(half_turn, 0)]);
    assert_relative_eq!(session.camera.yaw(), std::f32::consts::PI, epsilon = 1e-2);
    assert_eq!(engine.render_frame(&session).visible_faces, FACES.len());
}

#[test]
fn pointer_motion_of_200_is_one_radian() {
    let mut session = single_cuboid_session();
    session.apply_input(0.0, &KeyState::default(), &[(200, 0)]);
    assert_eq!(session.camera.yaw(), 1.0);
    assert_eq!(session.camera.pitch(), 0.0);
}

#[test]
fn scanline_frame_paints_the_near_face_on_top() {
    let config = RenderConfig::default();
    let session = single_cuboid_session();
    let mut engine = Engine::new(&config);
    let stats = engine.render_frame(&session);

    assert_eq!(stats.skipped, 0);
    let renderer = engine.renderer();
    assert_eq!(renderer.pixel(250, 250), Some(colors::BLUE));
    assert_eq!(renderer.pixel(10, 10), Some(colors::BACKGROUND));
}

#[test]
fn faces_straddling_the_camera_plane_are_skipped_not_fatal() {
    let config = RenderConfig::default();
    // The camera sits just outside the cuboid's -Z face, so side faces have
    // corners almost exactly on the camera plane and project far off range.
    let session = Session::with_cuboids(
        Camera::new(Vec3::new(0.2, 0.1, -0.5 - 1e-6)),
        vec![Cuboid::new(Vec3::ZERO)],
    );
    let mut engine = Engine::new(&config);
    let stats = engine.render_frame(&session);

    assert!(stats.skipped > 0);
    assert!(stats.drawn > 0);
    assert_eq!(stats.drawn + stats.skipped, stats.visible_faces);
}

#[test]
fn close_range_side_faces_are_still_drawn() {
    let config = RenderConfig::default();
    // 3 thousandths in front of the near face: its corners project tens of
    // thousands of pixels off screen, yet the side faces must still fill.
    let session = Session::with_cuboids(
        Camera::new(Vec3::new(0.0, 0.0, -0.503)),
        vec![Cuboid::new(Vec3::ZERO)],
    );
    let mut engine = Engine::new(&config);
    let stats = engine.render_frame(&session);

    assert_eq!(stats.visible_faces, 5);
    assert_eq!(stats.skipped, 0);
    assert_eq!(stats.drawn, 5);
    assert_eq!(engine.renderer().pixel(490, 250), Some(colors::ORANGE));
    assert_eq!(engine.renderer().pixel(10, 250), Some(colors::GREEN));
}
