/// Wizard position. The five form steps run in order; `Booked` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardStep {
    Details,
    Dates,
    Guests,
    Assistance,
    Confirmation,
    Booked,
}

impl WizardStep {
    /// Number of form steps shown in the step indicator (`Booked` excluded).
    pub const COUNT: usize = 5;

    pub fn index(self) -> usize {
        match self {
            WizardStep::Details => 0,
            WizardStep::Dates => 1,
            WizardStep::Guests => 2,
            WizardStep::Assistance => 3,
            WizardStep::Confirmation => 4,
            WizardStep::Booked => 5,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Details => "Your Details",
            WizardStep::Dates => "Date Selection",
            WizardStep::Guests => "Guests",
            WizardStep::Assistance => "Travel Assistance",
            WizardStep::Confirmation => "Confirmation",
            WizardStep::Booked => "Booked",
        }
    }

    pub fn next(self) -> Option<WizardStep> {
        match self {
            WizardStep::Details => Some(WizardStep::Dates),
            WizardStep::Dates => Some(WizardStep::Guests),
            WizardStep::Guests => Some(WizardStep::Assistance),
            WizardStep::Assistance => Some(WizardStep::Confirmation),
            WizardStep::Confirmation => Some(WizardStep::Booked),
            WizardStep::Booked => None,
        }
    }

    /// The step `go_back` returns to. None at the first step and once booked.
    pub fn previous(self) -> Option<WizardStep> {
        match self {
            WizardStep::Details | WizardStep::Booked => None,
            WizardStep::Dates => Some(WizardStep::Details),
            WizardStep::Guests => Some(WizardStep::Dates),
            WizardStep::Assistance => Some(WizardStep::Guests),
            WizardStep::Confirmation => Some(WizardStep::Assistance),
        }
    }
}
