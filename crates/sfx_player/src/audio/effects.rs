//! The closed set of sound effects the game can trigger

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Named sound effect, each bound to one bundled audio resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SoundEffect {
    /// Ship fires its laser
    Lazer,
    /// Game start jingle
    Startup,
    /// Small explosion
    Explosion1,
    /// Medium explosion
    Explosion2,
    /// Large explosion
    Explosion3,
    /// Fast fly-by
    Swishhh,
    /// Fly-by ending in an impact
    Swishbang,
    /// Near-silent filler
    Quiet,
    /// Ambient space rumble
    SpaceNoise,
    /// Shield raised
    Shield,
    /// Shield hit
    Shield2,
}

impl SoundEffect {
    /// Number of effects
    pub const COUNT: usize = 11;

    /// Every effect, in declaration order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Lazer,
        Self::Startup,
        Self::Explosion1,
        Self::Explosion2,
        Self::Explosion3,
        Self::Swishhh,
        Self::Swishbang,
        Self::Quiet,
        Self::SpaceNoise,
        Self::Shield,
        Self::Shield2,
    ];

    /// Resource path of the effect's audio file
    pub const fn resource_path(self) -> &'static str {
        match self {
            Self::Lazer => "/sfx/laser.wav",
            Self::Startup => "/sfx/startup.wav",
            Self::Explosion1 => "/sfx/explosion1.wav",
            Self::Explosion2 => "/sfx/explosion2.wav",
            Self::Explosion3 => "/sfx/explosion3.wav",
            Self::Swishhh => "/sfx/swishhh.wav",
            Self::Swishbang => "/sfx/swishbang.wav",
            Self::Quiet => "/sfx/quiet.wav",
            Self::SpaceNoise => "/sfx/spacenoise.wav",
            Self::Shield => "/sfx/threetone2.wav",
            Self::Shield2 => "/sfx/lowthreetone.wav",
        }
    }

    /// Stable upper-case identifier
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lazer => "LAZER",
            Self::Startup => "STARTUP",
            Self::Explosion1 => "EXPLOSION1",
            Self::Explosion2 => "EXPLOSION2",
            Self::Explosion3 => "EXPLOSION3",
            Self::Swishhh => "SWISHHH",
            Self::Swishbang => "SWISHBANG",
            Self::Quiet => "QUIET",
            Self::SpaceNoise => "SPACENOISE",
            Self::Shield => "SHIELD",
            Self::Shield2 => "SHIELD2",
        }
    }

    /// Position in [`ALL`](Self::ALL)
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SoundEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no sound effect
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown sound effect: {0}")]
pub struct ParseSoundEffectError(pub String);

impl FromStr for SoundEffect {
    type Err = ParseSoundEffectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|effect| effect.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSoundEffectError(s.to_string()))
    }
}
