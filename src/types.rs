//! Type definitions and enums for the application state and navigation.

/// Enumeration of available application screens.
///
/// This enumeration holds information about the current screen of the game. This is used to
/// determine which screen to render and what actions to take based on user input.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Main menu screen of the game.
    ///
    /// This variant represents the main menu screen of the game.
    MainMenu(MainMenuItem),
    /// In-game board screen.
    ///
    /// This variant represents the ingame screen where the tile grid is displayed and played.
    InGame,
}

/// Main menu navigation options.
///
/// This enumeration holds the different items in the main menu. It is used to determine which items
/// can the user select in the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MainMenuItem {
    /// "Start Game" menu option.
    ///
    /// This variant represents the "Start Game" option, which resumes the current grid.
    StartGame,
    /// "Restart" menu option.
    ///
    /// This variant represents the "Restart" option, which generates a new grid before playing.
    Restart,
    /// "Quit" menu option.
    ///
    /// This variant represents the "Quit" option in the main menu.
    Quit,
}

impl MainMenuItem {
    /// Every menu item, in on-screen order.
    pub(crate) const ALL: [Self; 3] = [Self::StartGame, Self::Restart, Self::Quit];

    /// Returns the label shown for the item.
    pub(crate) const fn repr(self) -> &'static str {
        match self {
            Self::StartGame => "Start Game",
            Self::Restart => "Restart",
            Self::Quit => "Quit",
        }
    }

    /// Returns the item below this one, staying on the last item.
    pub(crate) const fn next(self) -> Self {
        match self {
            Self::StartGame => Self::Restart,
            Self::Restart | Self::Quit => Self::Quit,
        }
    }

    /// Returns the item above this one, staying on the first item.
    pub(crate) const fn previous(self) -> Self {
        match self {
            Self::StartGame | Self::Restart => Self::StartGame,
            Self::Quit => Self::Restart,
        }
    }
}

/// On-screen size of a single tile.
///
/// This structure holds the number of terminal cells each tile takes up. It drives both the
/// rendering of the board and the mapping of mouse positions back to grid coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct TileSize {
    /// Tile width in terminal columns.
    pub(crate) width: u16,
    /// Tile height in terminal rows.
    pub(crate) height: u16,
}
