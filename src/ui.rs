//! User interface rendering of the solved maze.

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style},
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear,
    },
    Frame,
};

use crate::{app::App, grid::Coord, types::Screen};

/// Updates the viewer UI based on the persistent state.
///
/// This function draws the maze walls, the solution path when the solution screen is active, and
/// the two endpoints on a canvas centered in the frame, with a status line at the bottom.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations or layout lookups.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    frame.render_widget(Clear, frame.area());

    let maze_rows = app.cells.height();
    let maze_columns = app.cells.width();

    // Overall layout: maze area + status line at the bottom
    let overall_layout = Layout::vertical([Constraint::Min(1), Constraint::Length(3)])
        .split(frame.area());

    let maze_content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get maze content area from layout")?;
    let status_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get status area from layout")?;

    let maze_area = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(u16::try_from(maze_rows)?),
        Constraint::Min(1),
    ])
    .split(maze_content_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze area from layout")?;

    let space = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(u16::try_from(maze_columns)?),
        Constraint::Min(1),
    ])
    .split(maze_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze space from horizontal layout")?;

    // Pre-compute screen coordinates to handle errors before closures
    let mut wall_coords = Vec::new();
    let mut path_coords = Vec::new();
    for (coord, cell) in app.cells.iter() {
        if !cell.is_traversable() {
            wall_coords.push(coord);
        } else if cell.marked && !app.endpoints.contains(coord) {
            path_coords.push(coord);
        }
    }
    if app.screen == Screen::Maze {
        path_coords.clear();
    }
    let endpoint_coords = [app.endpoints.start, app.endpoints.end];

    let wall_screen_coords =
        transform_maze_to_screen_coords(&wall_coords, maze_rows, maze_columns)?;
    let path_screen_coords =
        transform_maze_to_screen_coords(&path_coords, maze_rows, maze_columns)?;
    let endpoint_screen_coords =
        transform_maze_to_screen_coords(&endpoint_coords, maze_rows, maze_columns)?;

    let maze = Canvas::default()
        .x_bounds([
            (-rounded_div::i32(space.width.into(), 2)).into(),
            (rounded_div::i32(space.width.into(), 2)).into(),
        ])
        .y_bounds([
            (-rounded_div::i32(space.height.into(), 2)).into(),
            (rounded_div::i32(space.height.into(), 2)).into(),
        ])
        .marker(Marker::Block)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &wall_screen_coords,
                color: Color::Green,
            });
            ctx.draw(&Points {
                coords: &path_screen_coords,
                color: Color::Red,
            });
            ctx.draw(&Points {
                coords: &endpoint_screen_coords,
                color: Color::Yellow,
            });
        });

    frame.render_widget(maze, space);

    let cost = app
        .cost
        .map_or_else(|| "no path found".to_owned(), |cost| format!("cost {cost}"));
    let status_block = Block::bordered()
        .title(format!(
            "{} | {cost} | (s) toggle solution / (q) quit",
            app.screen.repr()
        ))
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);

    frame.render_widget(status_block, status_area);

    Ok(())
}

/// Transforms maze coordinates to screen coordinates for canvas rendering.
///
/// This function converts maze coordinates to canvas coordinates centered on the origin using the
/// formulas `y = (rows - 1) / 2 - row` and `x = col - (cols - 1) / 2`, so the first row ends up at
/// the top of the canvas.
///
/// # Errors
///
/// This function may return errors if a dimension or coordinate does not fit in a `u16`.
pub(crate) fn transform_maze_to_screen_coords(
    maze_coords: &[Coord],
    rows: usize,
    columns: usize,
) -> Result<Vec<(f64, f64)>> {
    let rows_n = f64::from(u16::try_from(rows)?);
    let cols_n = f64::from(u16::try_from(columns)?);

    maze_coords
        .iter()
        .map(|coord| {
            let screen_y = (rows_n - 1.) / 2. - f64::from(u16::try_from(coord.row)?);
            let screen_x = f64::from(u16::try_from(coord.col)?) - (cols_n - 1.) / 2.;

            Ok((screen_x, screen_y))
        })
        .collect()
}
