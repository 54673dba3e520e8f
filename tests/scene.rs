use std::time::Duration;

use image::RgbaImage;
use pixel_particles::{Expired, Mode, PixelBuffer, Scene, SceneParams, Surface};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn scene(width: u32, height: u32, step: u32) -> Scene {
    let params = SceneParams {
        sample_step: step,
        ..SceneParams::default()
    };
    Scene::new(width, height, params).with_seed(1234)
}

fn loaded(width: u32, height: u32, step: u32, image: &RgbaImage) -> Scene {
    let mut scene = scene(width, height, step);
    scene.initialize(image);
    scene
}

fn rgba_of(scene: &Scene, index: usize) -> [u8; 4] {
    let c = scene.particles()[index].color;
    [c.red, c.green, c.blue, c.alpha]
}

#[test]
fn solid_ten_by_ten_yields_four_particles() {
    let image = RgbaImage::from_pixel(10, 10, image::Rgba([12, 34, 56, 255]));
    let scene = loaded(10, 10, 5, &image);

    let homes: Vec<(u32, u32)> = scene.particles().iter().map(|p| (p.home_x, p.home_y)).collect();
    assert_eq!(homes, vec![(0, 0), (5, 0), (0, 5), (5, 5)]);
    for i in 0..4 {
        assert_eq!(rgba_of(&scene, i), [12, 34, 56, 255]);
    }
}

#[test]
fn every_opaque_grid_sample_has_exactly_one_particle() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut image = RgbaImage::new(30, 21);
    for pixel in image.pixels_mut() {
        let alpha = if rng.gen_bool(0.3) { 0 } else { rng.gen_range(1..=255) };
        *pixel = image::Rgba([rng.gen(), rng.gen(), rng.gen(), alpha]);
    }

    let scene = loaded(30, 21, 3, &image);

    let mut expected = Vec::new();
    for y in (0..21).step_by(3) {
        for x in (0..30).step_by(3) {
            let pixel = image.get_pixel(x, y).0;
            if pixel[3] > 0 {
                expected.push((x, y, pixel));
            }
        }
    }

    assert_eq!(scene.particles().len(), expected.len());
    for (i, (x, y, pixel)) in expected.into_iter().enumerate() {
        let p = &scene.particles()[i];
        assert_eq!((p.home_x, p.home_y), (x, y));
        assert_eq!(rgba_of(&scene, i), pixel);
    }
}

#[test]
fn draw_is_idempotent() {
    let image = RgbaImage::from_pixel(12, 12, image::Rgba([200, 10, 10, 180]));
    let mut scene = loaded(24, 24, 3, &image);
    scene.warp();

    let mut first = PixelBuffer::new(24, 24);
    scene.draw(&mut first);
    let mut second = PixelBuffer::new(24, 24);
    scene.draw(&mut second);

    assert_eq!(first, second);
}

#[test]
fn active_flags_are_set_synchronously() {
    let image = RgbaImage::from_pixel(9, 9, image::Rgba([1, 1, 1, 255]));
    let mut scene = loaded(9, 9, 3, &image);

    for mode in Mode::ALL {
        scene.trigger(mode);
        let expected_active = !mode.is_staggered();
        assert!(
            scene.particles().iter().all(|p| p.active == expected_active),
            "{:?}",
            mode
        );
        assert!(scene.particles().iter().all(|p| p.pending.is_some() == mode.is_staggered()));
    }
}

#[test]
fn stagger_delays_increase_in_iteration_order() {
    let image = RgbaImage::from_pixel(15, 15, image::Rgba([1, 1, 1, 255]));
    let mut scene = loaded(15, 15, 3, &image);
    let n = scene.particles().len();
    assert_eq!(n, 25);

    for mode in [Mode::ReassembleRandom, Mode::ReassembleCenter] {
        scene.trigger(mode);
        assert_eq!(scene.stagger_counter() as usize, n);

        let delays: Vec<Duration> = scene
            .particles()
            .iter()
            .map(|p| scene.scheduler().deadline(p.pending.unwrap()).unwrap())
            .collect();
        assert!(delays.windows(2).all(|w| w[0] <= w[1]));

        // Release everything before the next trigger
        scene.tick(Duration::from_secs(1));
        assert_eq!(scene.active_count(), n);
    }
}

#[test]
fn warp_cancels_pending_activation() {
    let image = RgbaImage::from_pixel(6, 6, image::Rgba([1, 1, 1, 255]));
    let mut scene = loaded(6, 6, 3, &image);

    scene.assemble();
    let stale = Expired {
        handle: scene.particles()[2].pending.unwrap(),
        target: 2,
    };
    scene.warp();

    assert!(scene.particles()[2].active);
    assert_eq!(scene.scheduler().pending(), 0);

    // Firing the superseded handle by hand changes nothing
    scene.fire(stale);
    assert!(scene.particles()[2].active);
    assert!(scene.particles()[2].pending.is_none());

    // Nor does letting time pass
    assert_eq!(scene.tick(Duration::from_secs(1)), 0);

    // A later staggered trigger is not released by the stale handle either
    scene.prints();
    scene.fire(stale);
    assert!(!scene.particles()[2].active);
}

#[test]
fn update_without_pointer_only_eases_home() {
    let image = RgbaImage::from_pixel(3, 3, image::Rgba([1, 1, 1, 255]));
    let mut scene = loaded(3, 3, 3, &image);
    let before = scene.particles()[0].clone();

    scene.update();

    let after = &scene.particles()[0];
    let vx = before.velocity.x * before.friction;
    let vy = before.velocity.y * before.friction;
    let x = before.position.x + vx + (before.home_x as f32 - before.position.x) * before.ease;
    let y = before.position.y + vy + (before.home_y as f32 - before.position.y) * before.ease;
    assert!((after.position.x - x).abs() < 1e-5);
    assert!((after.position.y - y).abs() < 1e-5);
}

#[test]
fn pointer_on_top_of_particle_stays_finite() {
    let image = RgbaImage::from_pixel(3, 3, image::Rgba([1, 1, 1, 255]));
    let mut scene = loaded(3, 3, 3, &image);
    let position = scene.particles()[0].position;

    scene.set_pointer(position.x, position.y);
    scene.update();

    let p = &scene.particles()[0];
    assert!(p.position.x.is_finite() && p.position.y.is_finite());
    assert!(p.velocity.x.is_finite() && p.velocity.y.is_finite());
}

#[test]
fn pointer_pushes_nearby_particles_away() {
    let image = RgbaImage::from_pixel(120, 120, image::Rgba([1, 1, 1, 255]));
    let mut scene = loaded(120, 120, 30, &image);

    // Let everything settle home
    for _ in 0..400 {
        scene.update();
    }

    scene.set_pointer(62.0, 60.0);
    scene.update();

    // The particle at (60, 60) sits 2 px left of the pointer and is pushed left
    let p = scene
        .particles()
        .iter()
        .find(|p| (p.home_x, p.home_y) == (60, 60))
        .unwrap();
    assert!(p.position.x < 59.0);

    // The particle at (0, 0) is outside the influence radius (7444 > 3000)
    let far = &scene.particles()[0];
    assert!((far.position.x - 0.0).abs() < 0.01);
    assert!((far.position.y - 0.0).abs() < 0.01);
}

#[test]
fn frame_renders_settled_picture() {
    let image = RgbaImage::from_pixel(8, 8, image::Rgba([0, 128, 255, 255]));
    let mut scene = loaded(8, 8, 2, &image);
    let mut surface = PixelBuffer::new(8, 8);

    for _ in 0..300 {
        scene.frame(&mut surface);
    }

    for y in 0..8 {
        for x in 0..8 {
            assert_eq!(surface.pixel(x, y), Some([0, 128, 255, 255]));
        }
    }

    surface.clear();
    assert_eq!(surface.pixel(0, 0), Some([0, 0, 0, 0]));
}

#[test]
fn translucent_pixels_settle_opaque() {
    let image = RgbaImage::from_pixel(2, 2, image::Rgba([255, 0, 0, 128]));
    let mut scene = loaded(2, 2, 1, &image);
    let mut surface = PixelBuffer::new(2, 2);

    for _ in 0..300 {
        scene.frame(&mut surface);
    }

    assert_eq!(surface.pixel(0, 0), Some([255, 0, 0, 255]));
    assert_eq!(rgba_of(&scene, 0), [255, 0, 0, 128]);
}
