//! Difficulty presets and fixed game constants.

/// Highest possible adjacent-mine count for a single cell.
pub const MAX_ADJACENT: u8 = 8;

/// Grid dimensions and mine count for one difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    width: usize,
    height: usize,
    mines: usize,
}

impl Preset {
    /// Create a new preset.
    pub const fn new(width: usize, height: usize, mines: usize) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of mines placed on the grid.
    pub fn mines(&self) -> usize {
        self.mines
    }

    /// Total cell count.
    pub fn cells(&self) -> usize {
        self.width * self.height
    }

    /// Cells that must be revealed to win.
    pub fn safe_cells(&self) -> usize {
        self.cells() - self.mines
    }
}

/// Presets indexed in menu order: beginner, intermediate, advanced.
pub const PRESETS: [Preset; 3] = [
    Preset::new(9, 9, 10),
    Preset::new(16, 16, 40),
    Preset::new(24, 24, 99),
];

/// Difficulty level chosen by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, clap::ValueEnum),
    serde(rename_all = "lowercase")
)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// All levels in menu order.
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    /// Dimensions and mine count for this level.
    pub fn preset(self) -> Preset {
        PRESETS[self as usize]
    }

    /// Map a 1-based menu choice to a level.
    pub fn from_menu(choice: usize) -> Option<Self> {
        choice
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    /// Lowercase display name.
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl core::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
