use chrono::Weekday;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SunCalculation {
    Sunrise,
    Sunset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}

/// Distance in meters and bearings in degrees clockwise from true north.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodesicSolution {
    pub distance_m: f64,
    pub initial_bearing: f64,
    pub final_bearing: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HebrewYearLength {
    /// 353 days, or 383 in a leap year.
    Short,
    /// 354 days, or 384 in a leap year.
    Regular,
    /// 355 days, or 385 in a leap year.
    Long,
}

/// The fourteen possible shapes of a Hebrew year.
///
/// `A`..`G` are twelve-month years, `H`..`N` thirteen-month years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HebrewYearType {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
}

impl HebrewYearType {
    pub const ALL: [HebrewYearType; 14] = [
        HebrewYearType::A,
        HebrewYearType::B,
        HebrewYearType::C,
        HebrewYearType::D,
        HebrewYearType::E,
        HebrewYearType::F,
        HebrewYearType::G,
        HebrewYearType::H,
        HebrewYearType::I,
        HebrewYearType::J,
        HebrewYearType::K,
        HebrewYearType::L,
        HebrewYearType::M,
        HebrewYearType::N,
    ];

    pub fn from_parts(
        leap: bool,
        length: HebrewYearLength,
        first_weekday: Weekday,
    ) -> Option<Self> {
        use HebrewYearLength::{Long, Regular, Short};
        use Weekday::{Mon, Sat, Thu, Tue};

        let year_type = match (leap, length, first_weekday) {
            (false, Short, Mon) => HebrewYearType::A,
            (false, Short, Sat) => HebrewYearType::B,
            (false, Regular, Tue) => HebrewYearType::C,
            (false, Regular, Thu) => HebrewYearType::D,
            (false, Long, Mon) => HebrewYearType::E,
            (false, Long, Thu) => HebrewYearType::F,
            (false, Long, Sat) => HebrewYearType::G,
            (true, Short, Mon) => HebrewYearType::H,
            (true, Short, Thu) => HebrewYearType::I,
            (true, Short, Sat) => HebrewYearType::J,
            (true, Regular, Tue) => HebrewYearType::K,
            (true, Long, Mon) => HebrewYearType::L,
            (true, Long, Thu) => HebrewYearType::M,
            (true, Long, Sat) => HebrewYearType::N,
            _ => return None,
        };
        Some(year_type)
    }

    pub fn is_leap(self) -> bool {
        self >= HebrewYearType::H
    }

    pub fn length(self) -> HebrewYearLength {
        match self {
            HebrewYearType::A | HebrewYearType::B => HebrewYearLength::Short,
            HebrewYearType::C | HebrewYearType::D => HebrewYearLength::Regular,
            HebrewYearType::E | HebrewYearType::F | HebrewYearType::G => HebrewYearLength::Long,
            HebrewYearType::H | HebrewYearType::I | HebrewYearType::J => HebrewYearLength::Short,
            HebrewYearType::K => HebrewYearLength::Regular,
            HebrewYearType::L | HebrewYearType::M | HebrewYearType::N => HebrewYearLength::Long,
        }
    }

    pub fn first_weekday(self) -> Weekday {
        match self {
            HebrewYearType::A | HebrewYearType::E | HebrewYearType::H | HebrewYearType::L => {
                Weekday::Mon
            }
            HebrewYearType::C | HebrewYearType::K => Weekday::Tue,
            HebrewYearType::D | HebrewYearType::F | HebrewYearType::I | HebrewYearType::M => {
                Weekday::Thu
            }
            HebrewYearType::B | HebrewYearType::G | HebrewYearType::J | HebrewYearType::N => {
                Weekday::Sat
            }
        }
    }

    pub fn days(self) -> i64 {
        let base = match self.length() {
            HebrewYearLength::Short => 353,
            HebrewYearLength::Regular => 354,
            HebrewYearLength::Long => 355,
        };
        if self.is_leap() {
            base + 30
        } else {
            base
        }
    }
}
