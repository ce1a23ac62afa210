//! Core application state and logic for the merge puzzle.

use color_eyre::eyre::Result;
use ratatui::{layout::Rect, DefaultTerminal};

use crate::{
    engine::GridEngine,
    events,
    types::{MainMenuItem, Screen, TileSize},
    ui, Cli,
};

/// Application state container for the merge puzzle.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the game and Crossterm events will help writing to. The game rules
/// themselves live in the [`GridEngine`]; everything else here is presentation state.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit the game but it starts off `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    ///
    /// This field holds the current screen of the game. It is used to determine which screen to
    /// render and what actions to take based on user input.
    pub(crate) screen: Screen,
    /// Game engine owning the grid, the selection and the score.
    pub(crate) engine: GridEngine,
    /// Size of each tile in terminal cells.
    pub(crate) tile_size: TileSize,
    /// Board rendering area.
    ///
    /// This field holds the area in which the grid was rendered during the last redraw of the
    /// on-screen frame. Mouse positions are mapped to tiles relative to its top-left corner.
    pub(crate) board_area: Rect,
    /// Pending game-over notice.
    ///
    /// This field holds the final score reported by the engine when a merge ended the game. The
    /// notice stays on screen until the user dismisses it or restarts.
    pub(crate) game_over: Option<u64>,
}

impl App {
    /// Creates a new instance of the App structure from the command-line options.
    ///
    /// The grid is generated right away, seeded from the options when a seed was given.
    pub fn new(cli: &Cli) -> Self {
        Self::with_engine(GridEngine::new(cli.seed), cli.tile_size())
    }

    /// Creates a new instance of the App structure around an existing engine.
    pub(crate) fn with_engine(engine: GridEngine, tile_size: TileSize) -> Self {
        Self {
            exit: false,
            screen: Screen::MainMenu(MainMenuItem::StartGame),
            engine,
            tile_size,
            board_area: Rect::default(),
            game_over: None,
        }
    }

    /// Starts a new game on the current engine.
    pub(crate) fn restart(&mut self) {
        self.engine.initialize();
        self.game_over = None;
    }

    /// Runs the main loop of the application.
    ///
    /// This function handles user input and updates the application state. The loop continues until
    /// the exit condition is `true`, after which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame).map_err(std::io::Error::other)
            })?;
            events::handle_events(self)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::*;
    use crate::grid::{Grid, SEED_VALUES};

    #[test]
    fn test_new_app_starts_in_main_menu() {
        let cli = Cli::try_parse_from(["mergetuine", "--seed", "3"]).expect("flags should parse");
        let app = App::new(&cli);

        assert!(!app.exit);
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::StartGame));
        assert_eq!(app.engine.seed(), 3);
        assert_eq!(app.tile_size, cli.tile_size());
        assert_eq!(app.board_area, Rect::default());
        assert!(app.game_over.is_none());
    }

    #[test]
    fn test_restart_clears_game_over_and_score() {
        let cli = Cli::try_parse_from(["mergetuine", "--seed", "3"]).expect("flags should parse");
        let mut app = App::new(&cli);
        app.game_over = Some(120);

        app.restart();

        assert!(app.game_over.is_none());
        assert_eq!(app.engine.score(), 0);
        assert!(Grid::coords().all(|coord| SEED_VALUES.contains(&app.engine.grid()[coord])));
    }
}
