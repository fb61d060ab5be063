use std::fmt;

#[cfg(feature = "json")]
use serde::{Serialize, Serializer};

/// A single path command, in either absolute or relative form.
///
/// Each variant corresponds to exactly one command letter; the uppercase
/// letter is the absolute form and the lowercase letter the relative one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    MoveTo,
    MoveToRel,
    LineTo,
    LineToRel,
    HorizontalTo,
    HorizontalToRel,
    VerticalTo,
    VerticalToRel,
    CubicTo,
    CubicToRel,
    SmoothCubicTo,
    SmoothCubicToRel,
    QuadTo,
    QuadToRel,
    SmoothQuadTo,
    SmoothQuadToRel,
    ArcTo,
    ArcToRel,
    Close,
    CloseRel,
}

impl Command {
    pub fn from_char(c: char) -> Option<Self> {
        use Command::*;
        Some(match c {
            'M' => MoveTo,
            'm' => MoveToRel,
            'L' => LineTo,
            'l' => LineToRel,
            'H' => HorizontalTo,
            'h' => HorizontalToRel,
            'V' => VerticalTo,
            'v' => VerticalToRel,
            'C' => CubicTo,
            'c' => CubicToRel,
            'S' => SmoothCubicTo,
            's' => SmoothCubicToRel,
            'Q' => QuadTo,
            'q' => QuadToRel,
            'T' => SmoothQuadTo,
            't' => SmoothQuadToRel,
            'A' => ArcTo,
            'a' => ArcToRel,
            'Z' => Close,
            'z' => CloseRel,
            _ => return None,
        })
    }

    /// The command letter, exactly as it appears in path data.
    pub fn key(&self) -> char {
        use Command::*;
        match self {
            MoveTo => 'M',
            MoveToRel => 'm',
            LineTo => 'L',
            LineToRel => 'l',
            HorizontalTo => 'H',
            HorizontalToRel => 'h',
            VerticalTo => 'V',
            VerticalToRel => 'v',
            CubicTo => 'C',
            CubicToRel => 'c',
            SmoothCubicTo => 'S',
            SmoothCubicToRel => 's',
            QuadTo => 'Q',
            QuadToRel => 'q',
            SmoothQuadTo => 'T',
            SmoothQuadToRel => 't',
            ArcTo => 'A',
            ArcToRel => 'a',
            Close => 'Z',
            CloseRel => 'z',
        }
    }

    /// Number of numeric parameters consumed by one instance of this command.
    pub fn arity(&self) -> usize {
        use Command::*;
        match self {
            // "(rx ry x-axis-rotation large-arc-flag sweep-flag x y)+"
            ArcTo | ArcToRel => 7,
            // "(x1 y1 x2 y2 x y)+"
            CubicTo | CubicToRel => 6,
            // "(x2 y2 x y)+" / "(x1 y1 x y)+"
            SmoothCubicTo | SmoothCubicToRel | QuadTo | QuadToRel => 4,
            MoveTo | MoveToRel | LineTo | LineToRel | SmoothQuadTo | SmoothQuadToRel => 2,
            HorizontalTo | HorizontalToRel | VerticalTo | VerticalToRel => 1,
            Close | CloseRel => 0,
        }
    }

    pub fn is_relative(&self) -> bool {
        self.key().is_ascii_lowercase()
    }

    pub fn is_move(&self) -> bool {
        matches!(self, Command::MoveTo | Command::MoveToRel)
    }

    pub fn is_close(&self) -> bool {
        matches!(self, Command::Close | Command::CloseRel)
    }

    /// The command used for bare coordinates following this one.
    ///
    /// Extra coordinate pairs after a moveto are implicit lineto commands;
    /// every other command simply repeats.
    pub fn implicit_next(&self) -> Self {
        match self {
            Command::MoveTo => Command::LineTo,
            Command::MoveToRel => Command::LineToRel,
            other => *other,
        }
    }
}

impl TryFrom<char> for Command {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Command::from_char(c).ok_or(c)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(feature = "json")]
impl Serialize for Command {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.key())
    }
}
