//! Region identifiers and visibility states.

/// One of the five fixed slots of a border layout.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum RegionId {
    /// Full-width band along the top.
    North,
    /// Left column of the middle row.
    West,
    /// Whatever space the other regions leave.
    Center,
    /// Right column of the middle row.
    East,
    /// Full-width band along the bottom.
    South,
}

impl RegionId {
    /// All regions, in slot order.
    pub const ALL: [Self; 5] = [Self::North, Self::West, Self::Center, Self::East, Self::South];

    /// Slot index of this region.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::West => 1,
            Self::Center => 2,
            Self::East => 3,
            Self::South => 4,
        }
    }

    /// Lowercase region name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::West => "west",
            Self::Center => "center",
            Self::East => "east",
            Self::South => "south",
        }
    }

    /// Whether a fixed height pins this region (North and South).
    #[inline]
    pub const fn uses_fixed_height(self) -> bool {
        matches!(self, Self::North | Self::South)
    }

    /// Whether a fixed width pins this region (West and East).
    #[inline]
    pub const fn uses_fixed_width(self) -> bool {
        matches!(self, Self::West | Self::East)
    }

    /// Map the first letter of a region name to the region.
    pub const fn from_initial(c: char) -> Option<Self> {
        match c {
            'n' | 'N' => Some(Self::North),
            'w' | 'W' => Some(Self::West),
            'c' | 'C' => Some(Self::Center),
            'e' | 'E' => Some(Self::East),
            's' | 'S' => Some(Self::South),
            _ => None,
        }
    }
}

impl std::fmt::Display for RegionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Visibility of a region slot.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum RegionState {
    /// Never configured. No transition leaves this state.
    Absent,
    /// Participates in layout and rendering.
    Visible,
    /// Configured but excluded from layout and rendering.
    Hidden,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_indices_are_slot_order() {
        for (i, id) in RegionId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn test_region_axes() {
        assert!(RegionId::North.uses_fixed_height());
        assert!(RegionId::South.uses_fixed_height());
        assert!(!RegionId::North.uses_fixed_width());
        assert!(RegionId::West.uses_fixed_width());
        assert!(RegionId::East.uses_fixed_width());
        assert!(!RegionId::Center.uses_fixed_width());
        assert!(!RegionId::Center.uses_fixed_height());
    }

    #[test]
    fn test_region_from_initial() {
        assert_eq!(RegionId::from_initial('n'), Some(RegionId::North));
        assert_eq!(RegionId::from_initial('C'), Some(RegionId::Center));
        assert_eq!(RegionId::from_initial('x'), None);
        assert_eq!(RegionId::East.to_string(), "east");
    }
}
