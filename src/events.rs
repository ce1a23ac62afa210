//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::{
    crossterm::event::{
        self, Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
    },
    layout::Rect,
};
use tracing::debug;

use crate::{
    engine::{MergeOutcome, SelectOutcome},
    types::{MainMenuItem, Screen, TileSize},
    App,
};

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard and mouse events and dispatches them to the appropriate
/// handler functions. It uses a timeout to avoid blocking the UI.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(100))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key.code),
            Event::Mouse(mouse) => handle_mouse(app, mouse),
            _ => {}
        }
    }

    Ok(())
}

/// Dispatches a key press to the handler for that key.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') => app.exit = true,
        KeyCode::Char('j') => handle_j_events(app),
        KeyCode::Char('k') => handle_k_events(app),
        KeyCode::Char('l') => handle_l_events(app),
        KeyCode::Char('h') => handle_h_events(app),
        KeyCode::Char('r') => handle_r_events(app),
        KeyCode::Enter | KeyCode::Esc => handle_dismiss_events(app),
        _ => {}
    }
}

/// Handles 'j' key press events for downward navigation in the main menu.
pub(crate) fn handle_j_events(app: &mut App) {
    if let Screen::MainMenu(item) = app.screen {
        app.screen = Screen::MainMenu(item.next());
    }
}

/// Handles 'k' key press events for upward navigation in the main menu.
pub(crate) fn handle_k_events(app: &mut App) {
    if let Screen::MainMenu(item) = app.screen {
        app.screen = Screen::MainMenu(item.previous());
    }
}

/// Handles 'l' key press events for selection in the main menu.
///
/// "Start Game" resumes the current grid, "Restart" generates a new one first, and "Quit" sets
/// the exit flag.
pub(crate) fn handle_l_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(MainMenuItem::StartGame) => {
            app.screen = Screen::InGame;
        }
        Screen::MainMenu(MainMenuItem::Restart) => {
            app.restart();
            app.screen = Screen::InGame;
        }
        Screen::MainMenu(MainMenuItem::Quit) => {
            app.exit = true;
        }
        Screen::InGame => {}
    }
}

/// Handles 'h' key press events for backward navigation.
///
/// This function returns from the in-game screen to the main menu. The game keeps its state, so
/// "Start Game" picks it back up.
pub(crate) fn handle_h_events(app: &mut App) {
    if app.screen == Screen::InGame {
        app.screen = Screen::MainMenu(MainMenuItem::StartGame);
    }
}

/// Handles 'r' key press events, restarting the game while in-game.
pub(crate) fn handle_r_events(app: &mut App) {
    if app.screen == Screen::InGame {
        app.restart();
    }
}

/// Handles dismissal of the game-over notice.
pub(crate) fn handle_dismiss_events(app: &mut App) {
    if app.screen == Screen::InGame {
        app.game_over = None;
    }
}

/// Handles mouse events, forwarding left button presses on the board to the engine.
pub(crate) fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
        handle_click(app, mouse.column, mouse.row);
    }
}

/// Handles a click at the given terminal position.
///
/// While the game-over notice is shown a click only dismisses it. Otherwise the position is
/// translated to grid coordinates and handed to the engine, which ignores anything off the board.
pub(crate) fn handle_click(app: &mut App, column: u16, row: u16) {
    if app.screen != Screen::InGame {
        return;
    }
    if app.game_over.is_some() {
        app.game_over = None;
        return;
    }

    let (x, y) = cell_at(app.board_area, app.tile_size, column, row);
    let outcome = app.engine.select_tile_at(x, y);
    debug!(column, row, x, y, ?outcome, "click handled");

    if let SelectOutcome::Merged(MergeOutcome::Accepted {
        game_over: Some(score),
        ..
    }) = outcome
    {
        app.game_over = Some(score);
    }
}

/// Translates a terminal position to grid coordinates.
///
/// The offset from the board's top-left corner is floor-divided by the tile size, so positions
/// left of or above the board give negative coordinates and positions past its far edges give
/// coordinates beyond the grid. Range checks are left to the engine.
pub(crate) fn cell_at(board: Rect, tile: TileSize, column: u16, row: u16) -> (i32, i32) {
    let x = (i32::from(column) - i32::from(board.x)).div_euclid(i32::from(tile.width.max(1)));
    let y = (i32::from(row) - i32::from(board.y)).div_euclid(i32::from(tile.height.max(1)));

    (x, y)
}

#[cfg(test)]
mod tests {
    use ratatui::crossterm::event::KeyModifiers;

    use super::*;
    use crate::{
        engine::GridEngine,
        grid::{Coord, Grid, Tile, TILE_COUNT},
    };

    /// Tile size used by every test app.
    const TILE: TileSize = TileSize {
        width: 5,
        height: 3,
    };

    /// Creates a test app in-game over a grid of identical tiles, with the board at (10, 2).
    fn create_test_app(value: Tile) -> App {
        let grid = Grid::from_columns([[value; TILE_COUNT]; TILE_COUNT]);
        let mut app = App::with_engine(GridEngine::from_grid(grid, 1), TILE);
        app.screen = Screen::InGame;
        app.board_area = Rect::new(10, 2, 40, 24);

        app
    }

    /// Builds a left button press at the given position.
    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_cell_at_maps_tile_interiors() {
        let board = Rect::new(10, 2, 40, 24);

        assert_eq!(cell_at(board, TILE, 10, 2), (0, 0));
        assert_eq!(cell_at(board, TILE, 14, 4), (0, 0));
        assert_eq!(cell_at(board, TILE, 15, 5), (1, 1));
        assert_eq!(cell_at(board, TILE, 49, 25), (7, 7));
    }

    #[test]
    fn test_cell_at_outside_board() {
        let board = Rect::new(10, 2, 40, 24);

        assert_eq!(cell_at(board, TILE, 9, 2), (-1, 0));
        assert_eq!(cell_at(board, TILE, 10, 0), (0, -1));
        assert_eq!(cell_at(board, TILE, 50, 26), (8, 8));
    }

    #[test]
    fn test_menu_navigation() {
        let mut app = create_test_app(2);
        app.screen = Screen::MainMenu(MainMenuItem::StartGame);

        handle_key(&mut app, KeyCode::Char('j'));
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::Restart));
        handle_key(&mut app, KeyCode::Char('j'));
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::Quit));
        handle_key(&mut app, KeyCode::Char('k'));
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::Restart));
    }

    #[test]
    fn test_start_game_keeps_grid() {
        let mut app = create_test_app(2);
        app.screen = Screen::MainMenu(MainMenuItem::StartGame);

        handle_key(&mut app, KeyCode::Char('l'));

        assert_eq!(app.screen, Screen::InGame);
        assert_eq!(
            app.engine.grid(),
            &Grid::from_columns([[2; TILE_COUNT]; TILE_COUNT])
        );
    }

    #[test]
    fn test_restart_from_menu_regenerates_grid() {
        let mut app = create_test_app(64);
        app.screen = Screen::MainMenu(MainMenuItem::Restart);

        handle_key(&mut app, KeyCode::Char('l'));

        assert_eq!(app.screen, Screen::InGame);
        assert!(Grid::coords().all(|coord| app.engine.grid()[coord] != 64));
    }

    #[test]
    fn test_quit_from_menu_and_game() {
        let mut app = create_test_app(2);
        app.screen = Screen::MainMenu(MainMenuItem::Quit);
        handle_key(&mut app, KeyCode::Char('l'));
        assert!(app.exit);

        let mut app = create_test_app(2);
        handle_key(&mut app, KeyCode::Char('q'));
        assert!(app.exit);
    }

    #[test]
    fn test_h_returns_to_menu() {
        let mut app = create_test_app(2);

        handle_key(&mut app, KeyCode::Char('h'));

        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::StartGame));
    }

    #[test]
    fn test_click_selects_and_merges() {
        let mut app = create_test_app(4);

        handle_mouse(&mut app, left_click(10, 2));
        handle_mouse(&mut app, left_click(16, 2));
        assert_eq!(app.engine.selection().len(), 2);

        // Clicking the last tile again merges 4 + 4 into it.
        handle_mouse(&mut app, left_click(16, 3));

        assert!(app.engine.selection().is_empty());
        assert_eq!(app.engine.score(), 8);
    }

    #[test]
    fn test_click_off_board_is_ignored() {
        let mut app = create_test_app(4);
        handle_click(&mut app, 10, 2);

        handle_click(&mut app, 5, 2);
        handle_click(&mut app, 60, 30);

        assert_eq!(app.engine.selection().len(), 1);
    }

    #[test]
    fn test_non_left_clicks_are_ignored() {
        let mut app = create_test_app(4);
        let mut event = left_click(10, 2);
        event.kind = MouseEventKind::Down(MouseButton::Right);

        handle_mouse(&mut app, event);

        assert!(app.engine.selection().is_empty());
    }

    #[test]
    fn test_clicks_ignored_outside_game() {
        let mut app = create_test_app(4);
        app.screen = Screen::MainMenu(MainMenuItem::StartGame);

        handle_click(&mut app, 10, 2);

        assert!(app.engine.selection().is_empty());
    }

    #[test]
    fn test_game_over_notice_swallows_click() {
        let mut app = create_test_app(4);
        app.game_over = Some(64);

        handle_click(&mut app, 10, 2);

        assert!(app.game_over.is_none());
        assert!(app.engine.selection().is_empty());
    }

    #[test]
    fn test_enter_dismisses_game_over() {
        let mut app = create_test_app(4);
        app.game_over = Some(64);

        handle_key(&mut app, KeyCode::Enter);

        assert!(app.game_over.is_none());
    }

    #[test]
    fn test_r_restarts_game() {
        let mut app = create_test_app(64);
        app.game_over = Some(64);

        handle_key(&mut app, KeyCode::Char('r'));

        assert!(app.game_over.is_none());
        assert_eq!(app.engine.score(), 0);
        assert!(Grid::coords().all(|coord| app.engine.grid()[coord] != 64));
    }

    #[test]
    fn test_terminal_merge_raises_game_over() {
        // Columns alternate 2 and 4 except for two 16s in the corner; merging them leaves no
        // orthogonal pair unless the reseeded tile happens to match a neighbour.
        let mut raised = false;
        for seed in 0..64 {
            let mut cells = [[0; TILE_COUNT]; TILE_COUNT];
            for (x, column) in cells.iter_mut().enumerate() {
                for (y, cell) in column.iter_mut().enumerate() {
                    *cell = if (x + y) % 2 == 0 { 2 } else { 4 };
                }
            }
            let mut grid = Grid::from_columns(cells);
            for (x, y) in [(0, 0), (1, 1)] {
                let coord = Coord::new(x, y).expect("corner tiles should be inside the grid");
                grid[coord] = 16;
            }
            let mut app = App::with_engine(GridEngine::from_grid(grid, seed), TILE);
            app.screen = Screen::InGame;
            app.board_area = Rect::new(0, 0, 40, 24);

            handle_click(&mut app, 0, 0);
            handle_click(&mut app, 5, 3);
            handle_click(&mut app, 5, 3);

            if app.engine.is_terminal() {
                assert_eq!(app.game_over, Some(32));
                raised = true;
            } else {
                assert!(app.game_over.is_none());
            }
        }

        assert!(raised, "at least one seed should end the game");
    }
}
