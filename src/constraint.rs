/// Inequality between two adjacent cells. `None` marks positions where the
/// puzzle imposes no relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint {
    Less,
    Greater,
    None,
}

impl Constraint {
    pub fn satisfied(self, left: u16, right: u16) -> bool {
        match self {
            Constraint::Less => left < right,
            Constraint::Greater => left > right,
            Constraint::None => true,
        }
    }

    pub fn horizontal_display(self) -> char {
        match self {
            Constraint::Less => '<',
            Constraint::Greater => '>',
            Constraint::None => ' ',
        }
    }

    /// Between vertically adjacent cells, less-than points at the smaller
    /// cell above it (an upside-down V).
    pub fn vertical_display(self) -> char {
        match self {
            Constraint::Less => '\u{0245}',
            Constraint::Greater => 'V',
            Constraint::None => ' ',
        }
    }
}
