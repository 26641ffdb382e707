/// Rotate a move vector 90 degrees clockwise: `(x, y) -> (y, -x)`
#[inline]
pub const fn rotate_clockwise((x, y): (i32, i32)) -> (i32, i32) {
    (y, -x)
}

/// Rotate a move vector 90 degrees counterclockwise: `(x, y) -> (-y, x)`
#[inline]
pub const fn rotate_counterclockwise((x, y): (i32, i32)) -> (i32, i32) {
    (-y, x)
}

/// The four canonical headings. `y` grows upwards, `x` grows to the right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Heading {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Heading {
    /// All possible headings
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Down, Heading::Left, Heading::Right];

    /// Move delta as `(x, y)`
    #[inline]
    pub const fn vector(self) -> (i32, i32) {
        match self {
            Heading::Up => (0, 1),
            Heading::Down => (0, -1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }

    /// Map a move delta back to its heading, `None` for non-unit vectors
    #[inline]
    pub const fn from_vector(v: (i32, i32)) -> Option<Heading> {
        match v {
            (0, 1) => Some(Heading::Up),
            (0, -1) => Some(Heading::Down),
            (-1, 0) => Some(Heading::Left),
            (1, 0) => Some(Heading::Right),
            _ => None,
        }
    }

    #[inline]
    pub const fn clockwise(self) -> Heading {
        Self::canonical(rotate_clockwise(self.vector()))
    }

    #[inline]
    pub const fn counterclockwise(self) -> Heading {
        Self::canonical(rotate_counterclockwise(self.vector()))
    }

    // Rotations are closed over the four unit vectors
    #[inline]
    const fn canonical(v: (i32, i32)) -> Heading {
        match Self::from_vector(v) {
            Some(h) => h,
            None => unreachable!(),
        }
    }

    /// Get heading name as string
    pub const fn as_str(self) -> &'static str {
        match self {
            Heading::Up => "up",
            Heading::Down => "down",
            Heading::Left => "left",
            Heading::Right => "right",
        }
    }
}

/// Source of initial headings. The engine draws from it on construction and
/// on every reset.
pub trait HeadingSource {
    fn next_heading(&mut self) -> Heading;
}

impl HeadingSource for fastrand::Rng {
    #[inline]
    fn next_heading(&mut self) -> Heading {
        Heading::ALL[self.usize(..Heading::ALL.len())]
    }
}

/// Always yields the same heading
#[derive(Clone, Copy, Debug)]
pub struct FixedHeading(pub Heading);

impl HeadingSource for FixedHeading {
    #[inline]
    fn next_heading(&mut self) -> Heading {
        self.0
    }
}
