use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShellType {
    Live,
    Blank,
}

impl ShellType {
    pub fn flipped(self) -> Self {
        match self {
            Self::Live => Self::Blank,
            Self::Blank => Self::Live,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Live => "LIVE",
            Self::Blank => "BLANK",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Shell {
    #[serde(rename = "type")]
    pub kind: ShellType,
}

impl Shell {
    pub fn new(kind: ShellType) -> Self {
        Self { kind }
    }

    pub fn live() -> Self {
        Self::new(ShellType::Live)
    }

    pub fn blank() -> Self {
        Self::new(ShellType::Blank)
    }

    pub fn is_live(&self) -> bool {
        self.kind == ShellType::Live
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::blank()
    }
}

/// The magazine is fired front to back.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Shotgun {
    pub(crate) magazine: VecDeque<Shell>,
    #[serde(default)]
    pub barrel_mod: bool,
}

impl Shotgun {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shells(shells: impl IntoIterator<Item = Shell>) -> Self {
        Self {
            magazine: shells.into_iter().collect(),
            barrel_mod: false,
        }
    }

    /// Replace the magazine with a fresh load.
    pub fn load(&mut self, shells: Vec<Shell>) {
        self.magazine = shells.into();
    }

    pub fn clear(&mut self) {
        self.magazine.clear();
    }

    pub fn pop_front(&mut self) -> Option<Shell> {
        self.magazine.pop_front()
    }

    pub fn front(&self) -> Option<&Shell> {
        self.magazine.front()
    }

    pub(crate) fn front_mut(&mut self) -> Option<&mut Shell> {
        self.magazine.front_mut()
    }

    pub fn back(&self) -> Option<&Shell> {
        self.magazine.back()
    }

    pub fn len(&self) -> usize {
        self.magazine.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magazine.is_empty()
    }

    pub fn shells(&self) -> impl Iterator<Item = &Shell> + '_ {
        self.magazine.iter()
    }

    pub fn live_count(&self) -> usize {
        self.magazine.iter().filter(|shell| shell.is_live()).count()
    }

    pub fn blank_count(&self) -> usize {
        self.magazine.len() - self.live_count()
    }
}
