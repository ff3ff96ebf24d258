//! Stateless UI rendering for the Tower of Hanoi.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;

use crate::games::hanoi::{Disk, PuzzleState, RodIndex, STARTING_LIVES};

const DISK_COLOR: Color = Color::Rgb(0x00, 0x7b, 0xff);
const HELD_COLOR: Color = Color::Rgb(0xff, 0x7f, 0x7f);
const TITLE_COLOR: Color = Color::Rgb(0x61, 0xaf, 0xef);

/// What the game screen shows besides the puzzle state itself.
#[derive(Debug, Clone, Copy)]
pub struct GameView<'a> {
    /// Puzzle to draw.
    pub state: &'a PuzzleState,
    /// Rod whose top disk is held.
    pub held: Option<RodIndex>,
    /// Rod under the keyboard cursor.
    pub cursor: RodIndex,
    /// Player name for the header.
    pub player_name: &'a str,
    /// Invalid-move notice, shown instead of the last move.
    pub notice: Option<&'a str>,
}

/// Screen regions of the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GameLayout {
    header: Rect,
    towers: [Rect; 3],
    status: Rect,
    help: Rect,
}

fn game_layout(area: Rect) -> GameLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Rods
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[1]);

    GameLayout {
        header: rows[0],
        towers: [cols[0], cols[1], cols[2]],
        status: rows[2],
        help: rows[3],
    }
}

/// Returns the area each rod is drawn in, for mapping clicks to rods.
pub fn tower_areas(area: Rect) -> [Rect; 3] {
    game_layout(area).towers
}

/// Renders the game screen.
pub fn draw_game(frame: &mut Frame, view: &GameView<'_>) {
    let layout = game_layout(frame.area());

    draw_header(frame, layout.header, view);

    for rod in RodIndex::iter() {
        draw_tower(frame, layout.towers[rod.index()], rod, view);
    }

    draw_status(frame, layout.status, view);

    let help = Paragraph::new(
        "1/2/3 or ←/→ + Space: pick up / drop  |  Click a rod  |  Esc: put back  |  q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);
}

fn draw_header(frame: &mut Frame, area: Rect, view: &GameView<'_>) {
    let lives = view.state.lives();
    let hearts: String = (0..STARTING_LIVES)
        .map(|i| if i < lives { '♥' } else { '♡' })
        .collect();

    let line = Line::from(vec![
        Span::styled(
            view.player_name.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("   Lives: "),
        Span::styled(hearts, Style::default().fg(Color::Red)),
        Span::raw(format!(
            "   Moves left: {}",
            view.state.moves_remaining()
        )),
    ]);

    let header = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Tower of Hanoi ")
            .title_style(Style::default().fg(TITLE_COLOR)),
    );
    frame.render_widget(header, area);
}

fn rod_label_color(rod: RodIndex) -> Color {
    match rod {
        RodIndex::Source => Color::Blue,
        RodIndex::Auxiliary => TITLE_COLOR,
        RodIndex::Destination => Color::Red,
    }
}

fn draw_tower(frame: &mut Frame, area: Rect, rod: RodIndex, view: &GameView<'_>) {
    let is_cursor = rod == view.cursor;
    let border_style = if is_cursor {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Line::from(Span::styled(
            format!(" {} ", rod.label()),
            Style::default()
                .fg(rod_label_color(rod))
                .add_modifier(Modifier::BOLD),
        )))
        .title_alignment(Alignment::Center);

    let inner = block.inner(area);
    let disks = view.state.rods().get(rod);
    let held_top = view.held == Some(rod);
    let num_disks = view.state.num_disks().get();
    let lines = tower_lines(disks, num_disks, held_top, inner.width, inner.height);

    let tower = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(tower, area);
}

/// Builds the rod bottom-up: pole segments above, disks stacked at the bottom.
///
/// When the disks outnumber the rows, the bottom disks are kept and the top
/// row reads `+k more` for the `k` disks that did not fit.
fn tower_lines(
    disks: &[Disk],
    num_disks: u8,
    held_top: bool,
    width: u16,
    height: u16,
) -> Vec<Line<'static>> {
    let height = usize::from(height);
    let hidden = if disks.len() > height {
        disks.len() - height.saturating_sub(1)
    } else {
        0
    };
    let top = disks.len().checked_sub(1);
    let disk_color = |i: usize| {
        if held_top && Some(i) == top {
            HELD_COLOR
        } else {
            DISK_COLOR
        }
    };

    let mut disk_lines: Vec<Line<'static>> = disks[..disks.len() - hidden]
        .iter()
        .enumerate()
        .rev()
        .map(|(i, disk)| disk_line(*disk, disk_color(i), num_disks, width))
        .collect();

    if hidden > 0 {
        let marker = Line::from(Span::styled(
            format!("+{} more", hidden),
            Style::default()
                .fg(disk_color(disks.len() - 1))
                .add_modifier(Modifier::BOLD),
        ));
        let mut lines = vec![marker];
        lines.append(&mut disk_lines);
        lines.truncate(height);
        return lines;
    }

    let poles = height.saturating_sub(disk_lines.len());
    let mut lines: Vec<Line<'static>> = (0..poles)
        .map(|_| Line::from(Span::styled("│", Style::default().fg(Color::Gray))))
        .collect();
    lines.append(&mut disk_lines);
    lines
}

/// Width of a disk, two columns per size step when the column allows.
///
/// In a narrow column the widths are spread evenly between 3 and the column
/// width, so every size still draws at its own width while it fits.
fn disk_width(size: u8, num_disks: u8, max_width: u16) -> usize {
    let max_width = usize::from(max_width);
    let natural = usize::from(size) * 2 + 3;
    let widest = usize::from(num_disks) * 2 + 3;
    if widest <= max_width || num_disks <= 1 {
        return natural.min(max_width);
    }
    let span = max_width.saturating_sub(3);
    let step = usize::from(size.saturating_sub(1)) * span / usize::from(num_disks - 1);
    (3 + step).min(max_width)
}

fn disk_line(disk: Disk, color: Color, num_disks: u8, max_width: u16) -> Line<'static> {
    let width = disk_width(disk.size(), num_disks, max_width);
    Line::from(Span::styled(
        format!("{:^width$}", disk.size(), width = width),
        Style::default()
            .bg(color)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
}

fn draw_status(frame: &mut Frame, area: Rect, view: &GameView<'_>) {
    let (text, style) = match (view.notice, view.state.last_move()) {
        (Some(notice), _) => (
            notice.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        (None, Some(last)) => (
            format!("Last Disk Moved: {}", last.disk),
            Style::default().fg(Color::Yellow),
        ),
        (None, None) => (
            "Move the whole tower onto the Destination rod.".to_string(),
            Style::default().fg(Color::Yellow),
        ),
    };

    let status = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

/// Helper to center a rect.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hanoi::{DiskCount, MAX_DISKS};
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_tower_areas_split_width() {
        let towers = tower_areas(Rect::new(0, 0, 90, 30));
        assert_eq!(towers[0].x, 0);
        assert_eq!(towers[1].x, 30);
        assert_eq!(towers[2].x, 60);
        assert!(towers.iter().all(|t| t.width == 30));
    }

    #[test]
    fn test_tower_lines_bottom_aligned() {
        let disks = [Disk::new(3), Disk::new(2), Disk::new(1)];
        let lines = tower_lines(&disks, 3, false, 20, 6);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[2].to_string(), "│");
        assert_eq!(lines[3].to_string().trim(), "1");
        assert_eq!(lines[5].to_string().trim(), "3");
    }

    #[test]
    fn test_tower_lines_keep_bottom_disks_when_short() {
        let disks: Vec<Disk> = (1..=6).rev().map(Disk::new).collect();
        let lines = tower_lines(&disks, 6, false, 20, 4);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].to_string(), "+3 more");
        assert_eq!(lines[1].to_string().trim(), "4");
        assert_eq!(lines[3].to_string().trim(), "6");
    }

    #[test]
    fn test_disk_widths_stay_distinct_in_narrow_column() {
        let widths: Vec<usize> = (1..=MAX_DISKS)
            .map(|size| disk_width(size, MAX_DISKS, 24))
            .collect();
        assert_eq!(widths[0], 3);
        assert_eq!(widths[usize::from(MAX_DISKS) - 1], 24);
        assert!(widths.windows(2).all(|pair| pair[0] < pair[1]));

        assert_eq!(disk_width(3, 3, 24), 9);
    }

    #[test]
    fn test_center_rect_clamps() {
        let rect = center_rect(Rect::new(0, 0, 10, 10), 20, 4);
        assert_eq!(rect, Rect::new(0, 3, 10, 4));
    }

    #[test]
    fn test_draw_game_renders_labels() {
        let backend = TestBackend::new(90, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let state = PuzzleState::new(DiskCount::new(3).unwrap());
        let view = GameView {
            state: &state,
            held: None,
            cursor: RodIndex::Source,
            player_name: "Ada",
            notice: None,
        };
        terminal.draw(|f| draw_game(f, &view)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Source"));
        assert!(text.contains("Auxiliary"));
        assert!(text.contains("Destination"));
        assert!(text.contains("Moves left: 7"));
        assert!(text.contains("♥♥♥"));
    }

    #[test]
    fn test_draw_game_shows_largest_disk_at_max_disks() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let state = PuzzleState::new(DiskCount::new(MAX_DISKS).unwrap());
        let view = GameView {
            state: &state,
            held: None,
            cursor: RodIndex::Source,
            player_name: "Ada",
            notice: None,
        };
        terminal.draw(|f| draw_game(f, &view)).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("16"));
        assert!(text.contains("+2 more"));
    }
}
