use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Travel assistance requested for a trip. `NotRequired` is what the
/// assistance step stores when the toggle is off.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Assistance {
    #[default]
    #[serde(rename = "Not Required")]
    NotRequired,
    Flight,
    Bus,
    Car,
    Train,
}

impl Assistance {
    /// The selectable modes, in picker order.
    pub const MODES: [Assistance; 4] = [
        Assistance::Flight,
        Assistance::Bus,
        Assistance::Car,
        Assistance::Train,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Assistance::NotRequired => "Not Required",
            Assistance::Flight => "Flight",
            Assistance::Bus => "Bus",
            Assistance::Car => "Car",
            Assistance::Train => "Train",
        }
    }

    pub fn is_required(self) -> bool {
        self != Assistance::NotRequired
    }

    /// Cycles through `MODES`; `NotRequired` steps onto the first/last mode.
    pub fn cycle(self, forward: bool) -> Assistance {
        let n = Self::MODES.len();
        let pos = Self::MODES.iter().position(|m| *m == self);
        let next = match (pos, forward) {
            (Some(i), true) => (i + 1) % n,
            (Some(i), false) => (i + n - 1) % n,
            (None, true) => 0,
            (None, false) => n - 1,
        };
        Self::MODES[next]
    }
}

impl fmt::Display for Assistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Assistance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" | "not required" | "not-required" => Ok(Assistance::NotRequired),
            "flight" => Ok(Assistance::Flight),
            "bus" => Ok(Assistance::Bus),
            "car" => Ok(Assistance::Car),
            "train" => Ok(Assistance::Train),
            other => Err(format!(
                "unknown assistance '{}' (expected none, flight, bus, car or train)",
                other
            )),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuestKind {
    Adults,
    Children,
    Infants,
}

impl GuestKind {
    pub const ALL: [GuestKind; 3] = [GuestKind::Adults, GuestKind::Children, GuestKind::Infants];

    pub fn label(self) -> &'static str {
        match self {
            GuestKind::Adults => "Adults",
            GuestKind::Children => "Children",
            GuestKind::Infants => "Infants",
        }
    }

    pub fn age_hint(self) -> &'static str {
        match self {
            GuestKind::Adults => "Age 13 or above",
            GuestKind::Children => "Age 2-12",
            GuestKind::Infants => "Under 2",
        }
    }
}

/// Guest counters. Unsigned, so never negative; no upper bound.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Guests {
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
}

impl Default for Guests {
    fn default() -> Self {
        Guests {
            adults: 1,
            children: 0,
            infants: 0,
        }
    }
}

impl Guests {
    pub fn get(&self, kind: GuestKind) -> u32 {
        match kind {
            GuestKind::Adults => self.adults,
            GuestKind::Children => self.children,
            GuestKind::Infants => self.infants,
        }
    }

    pub fn get_mut(&mut self, kind: GuestKind) -> &mut u32 {
        match kind {
            GuestKind::Adults => &mut self.adults,
            GuestKind::Children => &mut self.children,
            GuestKind::Infants => &mut self.infants,
        }
    }

    pub fn total(&self) -> u32 {
        self.adults + self.children + self.infants
    }
}

/// The in-progress booking. Dates are stored as normalized `DD/MM/YYYY`
/// text or left empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TripDraft {
    pub name: String,
    pub start_location: String,
    pub end_location: String,
    pub start_date: String,
    pub end_date: String,
    pub guests: Guests,
    pub assistance: Assistance,
}

/// Per-counter partial update of `Guests`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GuestsUpdate {
    pub adults: Option<u32>,
    pub children: Option<u32>,
    pub infants: Option<u32>,
}

/// Partial update of a `TripDraft`; `None` leaves a field untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DraftUpdate {
    pub name: Option<String>,
    pub start_location: Option<String>,
    pub end_location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub guests: Option<GuestsUpdate>,
    pub assistance: Option<Assistance>,
}
