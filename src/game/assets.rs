//! Asset Locators
//!
//! Path conventions for the `res/` asset directory. The core only builds
//! locators; the renderer and audio collaborators resolve and decode them,
//! and a locator that resolves to nothing is their (logged, non-fatal)
//! problem.

use std::path::PathBuf;

/// Idle sprite for gun `n`: `res/Gun<N>.png`.
pub fn gun_idle_sprite(n: u32) -> PathBuf {
    PathBuf::from(format!("res/Gun{n}.png"))
}

/// Muzzle-flash sprite for gun `n`: `res/Gun<N>F.png`.
pub fn gun_fire_sprite(n: u32) -> PathBuf {
    PathBuf::from(format!("res/Gun{n}F.png"))
}

/// Fire sound for gun `n`: `res/Gun<N>.wav`.
pub fn gun_sound(n: u32) -> PathBuf {
    PathBuf::from(format!("res/Gun{n}.wav"))
}

/// Footstep sound: `res/Step.wav`.
pub fn step_sound() -> PathBuf {
    PathBuf::from("res/Step.wav")
}

/// Background music track `n` (starting at 0): `res/track<N>.wav`.
pub fn music_track(n: u32) -> PathBuf {
    PathBuf::from(format!("res/track{n}.wav"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gun_locators() {
        assert_eq!(gun_idle_sprite(1), PathBuf::from("res/Gun1.png"));
        assert_eq!(gun_fire_sprite(1), PathBuf::from("res/Gun1F.png"));
        assert_eq!(gun_sound(2), PathBuf::from("res/Gun2.wav"));
    }

    #[test]
    fn test_cue_locators() {
        assert_eq!(step_sound(), PathBuf::from("res/Step.wav"));
        assert_eq!(music_track(0), PathBuf::from("res/track0.wav"));
    }
}
