use rand::Rng;

/// A single tile of the grid. Cells carry no identity beyond their state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display)]
pub enum Cell {
    #[strum(to_string = "+")]
    Alive,

    #[default]
    #[strum(to_string = "-")]
    Dead,
}

impl Cell {
    /// Alive or dead with equal probability, drawn from `rng`.
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        if rng.random_bool(0.5) {
            Self::Alive
        } else {
            Self::Dead
        }
    }

    /// Same as [`Cell::random`], but using the thread-local generator.
    pub fn new_random() -> Self {
        Self::random(&mut rand::rng())
    }

    pub fn alive() -> Self {
        Self::Alive
    }

    pub fn dead() -> Self {
        Self::Dead
    }

    pub fn is_alive(self) -> bool {
        self == Self::Alive
    }

    pub fn glyph(self) -> char {
        match self {
            Self::Alive => '+',
            Self::Dead => '-',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '+' => Some(Self::Alive),
            '-' => Some(Self::Dead),
            _ => None,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Self::Alive } else { Self::Dead }
    }
}
