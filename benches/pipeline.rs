use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cuboid_painter::colors;
use cuboid_painter::config::RenderConfig;
use cuboid_painter::engine::{Engine, FrameScratch, Session};
use cuboid_painter::math::{ScreenPoint, Vec3};
use cuboid_painter::projection::Projection;
use cuboid_painter::render::{FrameBuffer, PolygonRasterizer, ScanlineRasterizer};
use cuboid_painter::Camera;

const BUFFER_WIDTH: u32 = 500;
const BUFFER_HEIGHT: u32 = 500;

fn benchmark_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");
    let config = RenderConfig::default();
    let mut session = Session::new(&config);
    session.camera = Camera::new(Vec3::new(0.5, -0.5, -7.0)).with_rotation(0.1, 0.2);

    group.bench_function("draw_list_27_cuboids", |b| {
        let projection = Projection::from_config(&config);
        let mut scratch = FrameScratch::with_capacity(session.cuboids().len());
        b.iter(|| {
            black_box(scratch.build_draw_list(session.cuboids(), &session.camera, &projection));
        });
    });

    group.bench_function("render_27_cuboids", |b| {
        let mut engine = Engine::new(&config);
        b.iter(|| black_box(engine.render_frame(&session)));
    });

    group.finish();
}

fn benchmark_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon");
    let mut rasterizer = ScanlineRasterizer::new();

    for (name, quad) in [
        ("small", [(100, 100), (120, 100), (120, 120), (100, 120)]),
        ("large_skewed", [(20, 40), (470, 10), (430, 480), (60, 400)]),
    ] {
        let points = quad.map(ScreenPoint::from);
        group.bench_function(name, |b| {
            let mut buffer = vec![0u32; (BUFFER_WIDTH * BUFFER_HEIGHT) as usize];
            b.iter(|| {
                let mut fb = FrameBuffer::new(&mut buffer, BUFFER_WIDTH, BUFFER_HEIGHT);
                rasterizer
                    .fill_polygon(black_box(&points), colors::ORANGE, &mut fb)
                    .ok();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_frame, benchmark_polygon);
criterion_main!(benches);
