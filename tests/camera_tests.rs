use glam::Vec3;
use objview::{
    camera::{FreeLookCamera, PITCH_LIMIT},
    input::Controls,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(test)]
mod camera_tests {
    use super::*;

    #[test]
    fn test_pitch_stays_clamped_under_random_input() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut camera = FreeLookCamera::new(800, 600);

        for _ in 0..10_000 {
            let x = rng.gen_range(-50_000.0..50_000.0);
            let y = rng.gen_range(-50_000.0..50_000.0);
            camera.look_update(x, y);
            assert!(camera.pitch() >= -PITCH_LIMIT && camera.pitch() <= PITCH_LIMIT);
        }
    }

    #[test]
    fn test_direction_is_unit_after_every_look() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut camera = FreeLookCamera::new(1920, 1080);

        for _ in 0..1_000 {
            camera.look_update(rng.gen_range(0.0..1920.0), rng.gen_range(0.0..1080.0));
            assert!((camera.target_direction().length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_first_look_never_turns() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let mut camera = FreeLookCamera::new(800, 600);
            camera.look_update(rng.gen_range(-1e6..1e6), rng.gen_range(-1e6..1e6));
            assert_eq!(camera.yaw(), -90.0);
            assert_eq!(camera.pitch(), 0.0);
            assert!(camera.target_direction().abs_diff_eq(Vec3::NEG_Z, 1e-6));
        }
    }

    #[test]
    fn test_zero_speed_moves_nothing() {
        let mut camera = FreeLookCamera::new(800, 600);
        camera.look_update(400.0, 300.0);
        camera.look_update(523.0, 211.0);
        camera.move_forward(1.0);
        let eye = camera.eye();

        camera.move_forward(0.0);
        camera.move_backward(0.0);
        assert_eq!(camera.eye(), eye);
    }

    #[test]
    fn test_forward_follows_the_look_direction() {
        let mut camera = FreeLookCamera::new(800, 600);
        camera.look_update(0.0, 0.0);
        // +900 px of x travel is +90 degrees of yaw: -Z turns to +X
        camera.look_update(900.0, 0.0);
        camera.move_forward(2.0);
        assert!(camera.eye().abs_diff_eq(Vec3::new(2.0, 0.0, 0.0), 1e-4));
    }

    #[test]
    fn test_controls_scale_by_frame_time() {
        let mut controls = Controls::default();
        let mut camera = FreeLookCamera::new(800, 600);
        controls.set_key(winit::keyboard::KeyCode::KeyS, true);

        let speed = 5.0;
        for dt in [0.016, 0.016, 0.033] {
            controls.apply(&mut camera, speed * dt);
        }
        assert!(camera.eye().abs_diff_eq(Vec3::new(0.0, 0.0, 0.325), 1e-5));
    }
}
