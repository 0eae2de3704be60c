//! Weapon Sprite State
//!
//! Two-state sprite selector for the held weapon. Firing shows the muzzle
//! flash sprite; the switch back to the idle sprite is debounced so rapid
//! shots don't flicker between the two frames.

use serde::{Deserialize, Serialize};

/// Which weapon sprite the renderer should draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponSprite {
    /// Resting sprite
    Idle,
    /// Muzzle-flash sprite
    Firing,
}

/// Sprite selection with a debounce counter.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct WeaponSpriteState {
    sprite: WeaponSprite,
    /// Consecutive fire-free ticks while the Firing sprite is shown.
    clear_ticks: u32,
}

impl WeaponSpriteState {
    /// Start in the idle state.
    pub const fn new() -> Self {
        Self {
            sprite: WeaponSprite::Idle,
            clear_ticks: 0,
        }
    }

    /// React to a fire press: show the Firing sprite immediately and
    /// restart the debounce window.
    pub fn trigger_fire(&mut self) {
        self.sprite = WeaponSprite::Firing;
        self.clear_ticks = 0;
    }

    /// Count one tick with the fire intent absent. After `debounce_ticks`
    /// such ticks the sprite falls back to Idle.
    pub fn advance(&mut self, debounce_ticks: u32) {
        if self.sprite == WeaponSprite::Firing {
            self.clear_ticks += 1;
            if self.clear_ticks >= debounce_ticks {
                self.sprite = WeaponSprite::Idle;
                self.clear_ticks = 0;
            }
        }
    }

    /// Current sprite selection.
    #[inline]
    pub fn sprite(&self) -> WeaponSprite {
        self.sprite
    }

    /// Whether the Firing sprite is currently shown.
    #[inline]
    pub fn is_firing(&self) -> bool {
        self.sprite == WeaponSprite::Firing
    }
}

impl Default for WeaponSpriteState {
    fn default() -> Self {
        Self::new()
    }
}
