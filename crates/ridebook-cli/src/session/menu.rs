//! Main menu entries.

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    RegisterDriver,
    RegisterRider,
    CreateRide,
    ListRides,
    SearchByOrigin,
    RemoveRide,
    UpdateRide,
    StartRide,
    FinishRide,
    CalculateFare,
    Exit,
}

impl MenuChoice {
    /// Display order. `Exit` comes last even though its number is 0.
    pub const ALL: [MenuChoice; 11] = [
        Self::RegisterDriver,
        Self::RegisterRider,
        Self::CreateRide,
        Self::ListRides,
        Self::SearchByOrigin,
        Self::RemoveRide,
        Self::UpdateRide,
        Self::StartRide,
        Self::FinishRide,
        Self::CalculateFare,
        Self::Exit,
    ];

    /// Parse a typed selection. Anything that is not a listed number is `None`.
    pub fn from_input(input: &str) -> Option<Self> {
        let number: u8 = input.trim().parse().ok()?;
        Self::ALL.into_iter().find(|c| c.number() == number)
    }

    pub fn number(self) -> u8 {
        match self {
            Self::Exit => 0,
            Self::RegisterDriver => 1,
            Self::RegisterRider => 2,
            Self::CreateRide => 3,
            Self::ListRides => 4,
            Self::SearchByOrigin => 5,
            Self::RemoveRide => 6,
            Self::UpdateRide => 7,
            Self::StartRide => 8,
            Self::FinishRide => 9,
            Self::CalculateFare => 10,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::RegisterDriver => "Register driver",
            Self::RegisterRider => "Register rider",
            Self::CreateRide => "Create ride",
            Self::ListRides => "List rides",
            Self::SearchByOrigin => "Search ride by origin",
            Self::RemoveRide => "Remove ride",
            Self::UpdateRide => "Update ride",
            Self::StartRide => "Start ride (driver)",
            Self::FinishRide => "Finish ride (driver)",
            Self::CalculateFare => "Calculate ride fare",
            Self::Exit => "Exit",
        }
    }

    /// The menu as printed before every selection.
    pub fn menu_lines() -> impl Iterator<Item = String> {
        Self::ALL
            .into_iter()
            .map(|c| format!("{} - {}", c.number(), c.label()))
    }
}
