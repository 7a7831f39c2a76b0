use chrono::NaiveDate;

/// Which part of the search screen currently receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    #[default]
    Calendar,
    Location,
    Seats,
    Gearbox,
    Pets,
}

impl FocusTarget {
    pub fn next(self) -> Self {
        match self {
            FocusTarget::Calendar => FocusTarget::Location,
            FocusTarget::Location => FocusTarget::Seats,
            FocusTarget::Seats => FocusTarget::Gearbox,
            FocusTarget::Gearbox => FocusTarget::Pets,
            FocusTarget::Pets => FocusTarget::Calendar,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FocusTarget::Calendar => FocusTarget::Pets,
            FocusTarget::Location => FocusTarget::Calendar,
            FocusTarget::Seats => FocusTarget::Location,
            FocusTarget::Gearbox => FocusTarget::Seats,
            FocusTarget::Pets => FocusTarget::Gearbox,
        }
    }

    /// Whether this target consumes printable characters.
    pub fn is_text_field(self) -> bool {
        matches!(
            self,
            FocusTarget::Location | FocusTarget::Seats | FocusTarget::Gearbox
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Focus
    FocusNext,
    FocusPrevious,

    // Form field edits
    Input(char),
    Backspace,
    TogglePets,

    // Calendar
    SelectDay(NaiveDate),

    // Navigation
    Search,
    ShowAllListings,
    NavigateBack,

    // UI operations
    ShowHelp(bool),

    // App control
    Quit,
    None,
}
