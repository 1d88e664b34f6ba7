use serde::{Deserialize, Serialize};

/// Keys the lightbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Close,
    Next,
    Prev,
}

impl LightboxKey {
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Close),
            "ArrowRight" => Some(Self::Next),
            "ArrowLeft" => Some(Self::Prev),
            _ => None,
        }
    }
}

/// Selection state of the photo lightbox. Navigation wraps at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Lightbox {
    len: usize,
    selected: Option<usize>,
}

impl Lightbox {
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self {
            len,
            selected: None,
        }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    #[must_use]
    pub const fn open(self, index: usize) -> Self {
        let selected = if index < self.len { Some(index) } else { None };
        Self { selected, ..self }
    }

    #[must_use]
    pub const fn close(self) -> Self {
        Self {
            selected: None,
            ..self
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self.selected {
            Some(i) if self.len > 0 => Self {
                selected: Some((i + 1) % self.len),
                ..self
            },
            _ => self,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self.selected {
            Some(i) if self.len > 0 => Self {
                selected: Some((i + self.len - 1) % self.len),
                ..self
            },
            _ => self,
        }
    }

    /// Apply a keyboard key; unrelated keys and a closed lightbox are no-ops.
    #[must_use]
    pub fn handle_key(self, key: &str) -> Self {
        if !self.is_open() {
            return self;
        }
        match LightboxKey::from_key(key) {
            Some(LightboxKey::Close) => self.close(),
            Some(LightboxKey::Next) => self.next(),
            Some(LightboxKey::Prev) => self.prev(),
            None => self,
        }
    }

    /// One-based `"i / N"` label for the open photo.
    #[must_use]
    pub fn counter(&self) -> Option<String> {
        self.selected.map(|i| format!("{} / {}", i + 1, self.len))
    }
}
