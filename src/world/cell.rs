/// Stored cell color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    /// The opposite color
    #[inline]
    pub const fn flipped(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// What a rendered cell shows. `Ant` is an overlay only and never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol {
    White,
    Black,
    Ant,
}

impl Symbol {
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Symbol::White => 'O',
            Symbol::Black => 'X',
            Symbol::Ant => '*',
        }
    }
}

impl From<Color> for Symbol {
    #[inline]
    fn from(color: Color) -> Self {
        match color {
            Color::White => Symbol::White,
            Color::Black => Symbol::Black,
        }
    }
}
