//! Connector glyphs
//!
//! Every rendered line is a run of fixed-width glyph columns followed by a
//! label. A glyph is chosen per column; the concrete strings depend on the
//! orientation and charset.

use super::orientation::{Charset, Orientation};

/// The symbol placed in one level column of a rendered line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Glyph {
    /// Column beyond the row's depth (renders as nothing)
    #[default]
    Empty,
    /// Indentation under an ancestor whose children are finished
    Blank,
    /// Trunk passing by an ancestor with more children below
    Vertical,
    /// Connector to a child that has later siblings
    Mid,
    /// Connector to the last child of a branch
    End,
}

pub mod unicode {
    pub const BLANK: &str = "    ";
    pub const VERTICAL: &str = "│   ";
    pub const MID: &str = "├── ";
    pub const END: &str = "└── ";
}

pub mod unicode_mirrored {
    pub const BLANK: &str = "    ";
    pub const VERTICAL: &str = "   │";
    pub const MID: &str = " ──┤";
    pub const END: &str = " ──┘";
}

pub mod ascii {
    pub const BLANK: &str = "    ";
    pub const VERTICAL: &str = "|   ";
    pub const MID: &str = "|-- ";
    pub const END: &str = "`-- ";
}

pub mod ascii_mirrored {
    pub const BLANK: &str = "    ";
    pub const VERTICAL: &str = "   |";
    pub const MID: &str = " --|";
    pub const END: &str = " --'";
}

/// Concrete strings for each glyph plus the branch-name suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphSet {
    blank: &'static str,
    vertical: &'static str,
    mid: &'static str,
    end: &'static str,
    branch_suffix: String,
}

impl GlyphSet {
    pub fn new(orientation: Orientation, charset: Charset) -> Self {
        let (blank, vertical, mid, end) = match (orientation, charset) {
            (Orientation::Default, Charset::Unicode) => {
                (unicode::BLANK, unicode::VERTICAL, unicode::MID, unicode::END)
            }
            (Orientation::Mirrored, Charset::Unicode) => (
                unicode_mirrored::BLANK,
                unicode_mirrored::VERTICAL,
                unicode_mirrored::MID,
                unicode_mirrored::END,
            ),
            (Orientation::Default, Charset::Ascii) => {
                (ascii::BLANK, ascii::VERTICAL, ascii::MID, ascii::END)
            }
            (Orientation::Mirrored, Charset::Ascii) => (
                ascii_mirrored::BLANK,
                ascii_mirrored::VERTICAL,
                ascii_mirrored::MID,
                ascii_mirrored::END,
            ),
        };

        let branch_suffix = match orientation {
            Orientation::Default => "/",
            Orientation::Mirrored => ":",
        };

        Self {
            blank,
            vertical,
            mid,
            end,
            branch_suffix: branch_suffix.to_string(),
        }
    }

    /// Replace the suffix appended to branch names
    pub fn with_branch_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.branch_suffix = suffix.into();
        self
    }

    pub fn get(&self, glyph: Glyph) -> &'static str {
        match glyph {
            Glyph::Empty => "",
            Glyph::Blank => self.blank,
            Glyph::Vertical => self.vertical,
            Glyph::Mid => self.mid,
            Glyph::End => self.end,
        }
    }

    pub fn branch_suffix(&self) -> &str {
        &self.branch_suffix
    }
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self::new(Orientation::Default, Charset::Unicode)
    }
}
