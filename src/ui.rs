//! User interface rendering functions for all application screens.

use std::rc::Rc;

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
    Frame,
};

use crate::{
    grid::{Coord, Grid, TILE_COUNT},
    types::{MainMenuItem, Screen},
    App,
};

/// Background colour of an unselected tile.
const TILE_COLOR: Color = Color::Rgb(0xee, 0xe4, 0xda);

/// Foreground colour of tile values.
const TEXT_COLOR: Color = Color::Rgb(0x77, 0x6e, 0x65);

/// Background colour of a selected tile.
const SELECTED_COLOR: Color = Color::Rgb(0xf6, 0x8a, 0x80);

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each screen type.
///
/// # Errors
///
/// This function may return errors from layout lookups or data conversion failures.
pub(crate) fn draw(app: &mut App, frame: &mut Frame) -> Result<()> {
    match &app.screen {
        Screen::MainMenu(item) => main_menu(frame, *item),
        Screen::InGame => in_game(app, frame)?,
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Renders the centered, bordered container of a menu.
///
/// This function creates the layout and block structure of a menu holding `items` entries and
/// returns one single-line area per entry for the caller to fill in.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn init_menu(frame: &mut Frame, title: &str, items: u8) -> Rc<[Rect]> {
    let space = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Percentage(20),
        Constraint::Percentage(40),
    ])
    .split(frame.area())[1];
    let space = Layout::horizontal([
        Constraint::Percentage(40),
        Constraint::Percentage(20),
        Constraint::Percentage(40),
    ])
    .split(space)[1];

    let layout = Layout::vertical([Constraint::Max(u16::from(items) + 2)])
        .flex(Flex::Center)
        .split(space)[0];

    let block = Block::bordered()
        .title(title)
        .title_bottom("(j) down / (k) up / (l) select")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    Layout::vertical(vec![Constraint::Max(1); usize::from(items)]).split(inner_space)
}

/// Renders the main menu screen with navigation options.
///
/// This function displays the main menu with options for "Start Game", "Restart", and "Quit". It
/// highlights the currently selected option and provides visual feedback for user navigation.
pub(crate) fn main_menu(frame: &mut Frame, item: MainMenuItem) {
    clear(frame);

    let entries = MainMenuItem::ALL;
    let inner_layout = init_menu(frame, "Main Menu", entries.len().try_into().unwrap_or(u8::MAX));

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    for (entry, area) in entries.into_iter().zip(inner_layout.iter()) {
        let style = if entry == item {
            active_content_style
        } else {
            content_style
        };

        frame.render_widget(Line::raw(entry.repr()).centered().style(style), *area);
    }
}

/// Renders the in-game screen with the score, the tile grid and the key hints.
///
/// The board is centered in the space left between the score line and the hint bar, and its
/// area is stored back into the [`App`] so mouse clicks can be mapped onto tiles. When the engine
/// has reported the end of the game, a notice with the final score is drawn on top.
///
/// # Errors
///
/// This function may return errors from layout lookups or coordinate conversions.
pub(crate) fn in_game(app: &mut App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let tiles = u16::try_from(TILE_COUNT)?;
    let board_width = app.tile_size.width.saturating_mul(tiles);
    let board_height = app.tile_size.height.saturating_mul(tiles);

    let overall_layout = Layout::vertical([
        Constraint::Length(1), // Score line
        Constraint::Min(1),    // Board and padding area
        Constraint::Length(3), // Tooltip block
    ])
    .split(frame.area());

    let score_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get score area from layout")?;
    let board_content_area = *overall_layout
        .get(1)
        .ok_or_eyre("failed to get board content area from layout")?;
    let tooltip_full_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    let board_row = Layout::vertical([Constraint::Length(board_height)])
        .flex(Flex::Center)
        .split(board_content_area)
        .first()
        .copied()
        .ok_or_eyre("failed to get board row from layout")?;
    let board_area = Layout::horizontal([Constraint::Length(board_width)])
        .flex(Flex::Center)
        .split(board_row)
        .first()
        .copied()
        .ok_or_eyre("failed to get board area from horizontal layout")?;

    app.board_area = board_area;

    let score = Line::styled(
        format!(
            "Score: {}    Seed: {}",
            app.engine.score(),
            app.engine.seed()
        ),
        Style::default().fg(Color::Green),
    )
    .centered();
    frame.render_widget(score, score_area);

    for coord in Grid::coords() {
        let x = u16::try_from(coord.x())?;
        let y = u16::try_from(coord.y())?;
        let area = Rect::new(
            board_area.x.saturating_add(x.saturating_mul(app.tile_size.width)),
            board_area.y.saturating_add(y.saturating_mul(app.tile_size.height)),
            app.tile_size.width,
            app.tile_size.height,
        )
        .intersection(frame.area());

        frame.render_widget(tile(app, coord), area);
    }

    let tooltip_block = Block::bordered()
        .title("(click) select / (r) restart / (h) menu / (q) quit")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);

    frame.render_widget(tooltip_block, tooltip_full_area);

    if let Some(final_score) = app.game_over {
        game_over(frame, final_score);
    }

    Ok(())
}

/// Builds the widget for a single tile.
///
/// Selected tiles are filled with a red tint and get a thick red border, the rest use the plain
/// tile palette. The value is vertically centered for any tile height. Values too wide for the
/// space inside the border are drawn on a borderless tile so no digit is cut off.
pub(crate) fn tile(app: &App, coord: Coord) -> Paragraph<'static> {
    let selected = app.engine.is_selected(coord);
    let value = app.engine.grid()[coord].to_string();
    let fits_border = value.len() <= usize::from(app.tile_size.width.saturating_sub(2));
    let (background, border_style, border_type) = if selected {
        (
            SELECTED_COLOR,
            Style::default().fg(Color::Red),
            BorderType::Thick,
        )
    } else {
        (
            TILE_COLOR,
            Style::default().fg(TEXT_COLOR),
            BorderType::Rounded,
        )
    };

    let block = if fits_border {
        Block::bordered()
            .border_type(border_type)
            .border_style(border_style)
            .padding(Padding::top(app.tile_size.height.saturating_sub(3) / 2))
    } else {
        Block::new().padding(Padding::top(app.tile_size.height.saturating_sub(1) / 2))
    };

    Paragraph::new(value)
        .centered()
        .style(
            Style::default()
                .fg(TEXT_COLOR)
                .bg(background)
                .add_modifier(Modifier::BOLD),
        )
        .block(block)
}

/// Renders the game-over notice centered over the board.
pub(crate) fn game_over(frame: &mut Frame, final_score: u64) {
    let [row] = Layout::vertical([Constraint::Length(5)])
        .flex(Flex::Center)
        .areas(frame.area());
    let [area] = Layout::horizontal([Constraint::Length(40)])
        .flex(Flex::Center)
        .areas(row);

    let notice = Paragraph::new(vec![
        Line::raw(format!("Game Over! Final Score: {final_score}")).centered(),
        Line::raw(""),
        Line::raw("(r) restart / (enter) continue").centered(),
    ])
    .block(
        Block::bordered()
            .title("Game Over")
            .title_alignment(Alignment::Center)
            .border_type(BorderType::Rounded),
    )
    .style(Style::default().fg(Color::Green));

    frame.render_widget(Clear, area);
    frame.render_widget(notice, area);
}
