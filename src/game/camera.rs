//! Player Camera
//!
//! Position, facing and camera-plane vectors, advanced once per tick from
//! the intent snapshot. Translation tests each axis independently so the
//! player slides along a wall when moving diagonally into it; strafing
//! tests the combined destination cell; rotation applies the same matrix
//! to facing and plane and never needs a collision check.

use crate::core::vec2::Vec2;
use crate::game::grid::CollisionGrid;
use crate::game::input::IntentFrame;
use crate::game::tick::SimConfig;
use serde::{Deserialize, Serialize};

/// The player's pose in the level.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PlayerCamera {
    /// Continuous position in cell units
    pub position: Vec2,
    /// Unit facing direction
    pub facing: Vec2,
    /// Camera plane, perpendicular to facing (FOV ~66 degrees)
    pub plane: Vec2,
}

impl PlayerCamera {
    /// Spawn at a position with the default pose: facing +X.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            position: Vec2::new(x, y),
            facing: Vec2::new(1.0, 0.0),
            plane: Vec2::new(0.0, -0.66),
        }
    }

    /// Spawn with an explicit pose.
    pub fn with_pose(position: Vec2, facing: Vec2, plane: Vec2) -> Self {
        Self {
            position,
            facing,
            plane,
        }
    }

    /// Advance one tick of movement against the grid.
    ///
    /// Intents are independent booleans and combine freely in a single
    /// tick (forward + turn-right is moving while turning).
    pub fn integrate(&mut self, frame: &IntentFrame, grid: &CollisionGrid, config: &SimConfig) {
        let strafe_speed = config.move_speed / config.strafe_divisor;
        if frame.strafe_left {
            self.strafe(self.facing.perpendicular() * strafe_speed, grid);
        }
        if frame.strafe_right {
            self.strafe(-self.facing.perpendicular() * strafe_speed, grid);
        }
        if frame.forward {
            self.translate(self.facing * config.move_speed, grid);
        }
        if frame.back {
            self.translate(-self.facing * config.move_speed, grid);
        }
        if frame.turn_right {
            self.rotate_by(-config.rotation_speed);
        }
        if frame.turn_left {
            self.rotate_by(config.rotation_speed);
        }
    }

    /// Rotate facing and plane together by `theta` radians.
    ///
    /// Also the entry point for mouse-look collaborators, which supply an
    /// arbitrary per-event angle instead of the per-tick turn speed.
    pub fn rotate_by(&mut self, theta: f64) {
        self.facing = self.facing.rotate(theta);
        self.plane = self.plane.rotate(theta);
    }

    /// Move along `delta`, testing each axis independently.
    ///
    /// X applies first; the Y check then uses the already-updated X, so a
    /// diagonal push into a wall keeps the free axis moving.
    fn translate(&mut self, delta: Vec2, grid: &CollisionGrid) {
        let cand_x = self.position.x + delta.x;
        if !grid.is_blocked(
            CollisionGrid::cell_of(cand_x),
            CollisionGrid::cell_of(self.position.y),
        ) {
            self.position.x = cand_x;
        }

        let cand_y = self.position.y + delta.y;
        if !grid.is_blocked(
            CollisionGrid::cell_of(self.position.x),
            CollisionGrid::cell_of(cand_y),
        ) {
            self.position.y = cand_y;
        }
    }

    /// Sidestep by `delta`, blocked if the combined destination cell is
    /// occupied. Both axes apply or neither.
    fn strafe(&mut self, delta: Vec2, grid: &CollisionGrid) {
        let cand = self.position + delta;
        if !grid.is_blocked(
            CollisionGrid::cell_of(cand.x),
            CollisionGrid::cell_of(cand.y),
        ) {
            self.position = cand;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ring() -> CollisionGrid {
        CollisionGrid::from_rows(&[vec![1, 1, 1], vec![1, 0, 1], vec![1, 1, 1]])
    }

    fn config() -> SimConfig {
        SimConfig::default()
    }

    fn forward() -> IntentFrame {
        IntentFrame {
            forward: true,
            ..IntentFrame::idle()
        }
    }

    #[test]
    fn test_forward_into_wall_freezes_x() {
        let grid = ring();
        let cfg = config();
        let mut camera = PlayerCamera::new(1.5, 1.5);

        // Facing +X toward the blocked column 2. x never crosses 2.0.
        for _ in 0..200 {
            camera.integrate(&forward(), &grid, &cfg);
        }
        assert!(camera.position.x < 2.0);
        assert!((camera.position.y - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_diagonal_slides_along_wall() {
        // A one-cell-wide corridor running along +Y.
        let grid = CollisionGrid::from_rows(&[
            vec![1, 1, 1],
            vec![1, 0, 1],
            vec![1, 0, 1],
            vec![1, 1, 1],
        ]);
        let cfg = config();
        // Facing diagonally into the corridor's +X wall.
        let inv = 1.0 / 2.0f64.sqrt();
        let mut camera = PlayerCamera::with_pose(
            Vec2::new(1.5, 1.5),
            Vec2::new(inv, inv),
            Vec2::new(0.66 * inv, -0.66 * inv),
        );

        for _ in 0..20 {
            camera.integrate(&forward(), &grid, &cfg);
        }
        // X is blocked by the wall column; Y keeps sliding down the corridor.
        assert!(camera.position.x < 2.0);
        assert!(camera.position.y > 2.0);
    }

    #[test]
    fn test_open_floor_moves_both_axes() {
        let grid = CollisionGrid::default_level();
        let cfg = config();
        let inv = 1.0 / 2.0f64.sqrt();
        let mut camera = PlayerCamera::with_pose(
            Vec2::new(4.5, 4.5),
            Vec2::new(inv, inv),
            Vec2::new(0.66 * inv, -0.66 * inv),
        );

        camera.integrate(&forward(), &grid, &cfg);
        let step = cfg.move_speed * inv;
        assert!((camera.position.x - (4.5 + step)).abs() < 1e-12);
        assert!((camera.position.y - (4.5 + step)).abs() < 1e-12);
    }

    #[test]
    fn test_back_is_opposite_of_forward() {
        let grid = CollisionGrid::default_level();
        let cfg = config();
        let mut camera = PlayerCamera::new(4.5, 4.5);

        camera.integrate(&forward(), &grid, &cfg);
        camera.integrate(
            &IntentFrame {
                back: true,
                ..IntentFrame::idle()
            },
            &grid,
            &cfg,
        );
        assert!((camera.position.x - 4.5).abs() < 1e-12);
        assert!((camera.position.y - 4.5).abs() < 1e-12);
    }

    #[test]
    fn test_strafe_blocked_by_destination_cell() {
        let grid = ring();
        let cfg = config();
        let mut camera = PlayerCamera::new(1.5, 1.5);

        // Strafe left moves along +Y (perpendicular of +X facing); the
        // destination cell (1, 2) is a wall, so nothing moves, ever.
        let strafe = IntentFrame {
            strafe_left: true,
            ..IntentFrame::idle()
        };
        for _ in 0..200 {
            camera.integrate(&strafe, &grid, &cfg);
        }
        assert!(camera.position.y < 2.0);
        assert!((camera.position.x - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_strafe_slower_than_walk() {
        let grid = CollisionGrid::default_level();
        let cfg = config();

        let mut walker = PlayerCamera::new(4.5, 4.5);
        walker.integrate(&forward(), &grid, &cfg);
        let walked = (walker.position - Vec2::new(4.5, 4.5)).length();

        let mut strafer = PlayerCamera::new(4.5, 4.5);
        strafer.integrate(
            &IntentFrame {
                strafe_left: true,
                ..IntentFrame::idle()
            },
            &grid,
            &cfg,
        );
        let strafed = (strafer.position - Vec2::new(4.5, 4.5)).length();

        assert!((walked / strafed - cfg.strafe_divisor).abs() < 1e-9);
    }

    #[test]
    fn test_move_while_turning() {
        let grid = CollisionGrid::default_level();
        let cfg = config();
        let mut camera = PlayerCamera::new(4.5, 4.5);

        let frame = IntentFrame {
            forward: true,
            turn_right: true,
            ..IntentFrame::idle()
        };
        camera.integrate(&frame, &grid, &cfg);

        assert!(camera.position.x > 4.5);
        assert!(camera.facing.y < 0.0); // clockwise turn
    }

    #[test]
    fn test_turn_signs_mirror() {
        let grid = CollisionGrid::default_level();
        let cfg = config();

        let mut left = PlayerCamera::new(4.5, 4.5);
        left.integrate(
            &IntentFrame {
                turn_left: true,
                ..IntentFrame::idle()
            },
            &grid,
            &cfg,
        );

        let mut right = PlayerCamera::new(4.5, 4.5);
        right.integrate(
            &IntentFrame {
                turn_right: true,
                ..IntentFrame::idle()
            },
            &grid,
            &cfg,
        );

        assert!((left.facing.y + right.facing.y).abs() < 1e-12);
        assert!((left.facing.x - right.facing.x).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_turn_sequences_preserve_magnitudes(turns in prop::collection::vec(prop::bool::ANY, 0..300)) {
            let grid = CollisionGrid::default_level();
            let cfg = config();
            let mut camera = PlayerCamera::new(4.5, 4.5);
            let facing_len = camera.facing.length();
            let plane_len = camera.plane.length();

            for turn_left in turns {
                let frame = IntentFrame {
                    turn_left,
                    turn_right: !turn_left,
                    ..IntentFrame::idle()
                };
                camera.integrate(&frame, &grid, &cfg);
            }

            prop_assert!((camera.facing.length() - facing_len).abs() < 1e-9);
            prop_assert!((camera.plane.length() - plane_len).abs() < 1e-9);
        }
    }
}
