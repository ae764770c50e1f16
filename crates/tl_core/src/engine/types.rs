//! Core geometry and identity types shared by the engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};

use super::physics_constants::{decision, pitch};
use crate::models::Side;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    #[inline]
    pub fn distance(&self, other: Vec2) -> f32 {
        (*self - other).length()
    }

    /// Unit vector, or zero for a zero-length input.
    pub fn normalize(&self) -> Vec2 {
        let len = self.length();
        if len > f32::EPSILON {
            Vec2::new(self.x / len, self.y / len)
        } else {
            Vec2::ZERO
        }
    }

    /// Direction angle (rad) from `self` toward `other`.
    #[inline]
    pub fn angle_to(&self, other: Vec2) -> f32 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    #[inline]
    pub fn from_angle(angle: f32, magnitude: f32) -> Vec2 {
        Vec2::new(angle.cos() * magnitude, angle.sin() * magnitude)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Stable player identity within a match: side plus lineup slot (0 = keeper).
///
/// Serialized as `"home-3"` so it can key JSON maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PlayerKey {
    pub side: Side,
    pub slot: u8,
}

impl PlayerKey {
    #[inline]
    pub const fn new(side: Side, slot: u8) -> Self {
        Self { side, slot }
    }

    /// Index into the match's flat player list (home 0..11, away 11..22).
    #[inline]
    pub const fn index(self) -> usize {
        match self.side {
            Side::Home => self.slot as usize,
            Side::Away => SQUAD_SLOTS + self.slot as usize,
        }
    }
}

/// Players per side on the pitch.
pub const SQUAD_SLOTS: usize = 11;

impl fmt::Display for PlayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.side.tag(), self.slot)
    }
}

impl From<PlayerKey> for String {
    fn from(key: PlayerKey) -> String {
        key.to_string()
    }
}

impl TryFrom<String> for PlayerKey {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let (tag, slot) =
            value.split_once('-').ok_or_else(|| format!("invalid player key '{}'", value))?;
        let side = Side::from_tag(tag).ok_or_else(|| format!("invalid side in '{}'", value))?;
        let slot: u8 = slot.parse().map_err(|_| format!("invalid slot in '{}'", value))?;
        if slot as usize >= SQUAD_SLOTS {
            return Err(format!("slot out of range in '{}'", value));
        }
        Ok(PlayerKey { side, slot })
    }
}

// ============================================================
// Side geometry
// ============================================================

/// +1 for home (attacks toward +x), -1 for away.
#[inline]
pub const fn attack_dir(side: Side) -> f32 {
    match side {
        Side::Home => 1.0,
        Side::Away => -1.0,
    }
}

/// x of the goal this side defends.
#[inline]
pub const fn own_goal_x(side: Side) -> f32 {
    match side {
        Side::Home => 0.0,
        Side::Away => pitch::WIDTH,
    }
}

/// x of the goal this side attacks.
#[inline]
pub const fn opponent_goal_x(side: Side) -> f32 {
    own_goal_x(side.opponent())
}

/// Team-wide shift along the attack axis, by who holds the ball.
pub fn team_push(side: Side, holder: Option<Side>) -> f32 {
    match holder {
        Some(h) if h == side => decision::ATTACK_PUSH * attack_dir(side),
        Some(_) => -decision::DEFEND_PUSH * attack_dir(side),
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_basics() {
        let a = Vec2::new(3.0, 4.0);
        assert_eq!(a.length(), 5.0);
        assert_eq!(Vec2::ZERO.distance(a), 5.0);
        let n = a.normalize();
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
    }

    #[test]
    fn test_player_key_string_form() {
        let key = PlayerKey::new(Side::Away, 7);
        assert_eq!(key.to_string(), "away-7");
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"away-7\"");
        let back: PlayerKey = serde_json::from_str("\"away-7\"").unwrap();
        assert_eq!(back, key);
        assert!(PlayerKey::try_from("left-1".to_string()).is_err());
        assert!(PlayerKey::try_from("home-11".to_string()).is_err());
        assert_eq!(key.index(), 18);
    }

    #[test]
    fn test_team_push_signs() {
        assert_eq!(team_push(Side::Home, Some(Side::Home)), 150.0);
        assert_eq!(team_push(Side::Home, Some(Side::Away)), -40.0);
        assert_eq!(team_push(Side::Away, Some(Side::Away)), -150.0);
        assert_eq!(team_push(Side::Away, Some(Side::Home)), 40.0);
        assert_eq!(team_push(Side::Home, None), 0.0);
    }

    #[test]
    fn test_goal_x() {
        assert_eq!(opponent_goal_x(Side::Home), pitch::WIDTH);
        assert_eq!(opponent_goal_x(Side::Away), 0.0);
        assert_eq!(own_goal_x(Side::Home), 0.0);
    }
}
