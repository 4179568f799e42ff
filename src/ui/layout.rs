use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of one indicator cell, e.g. ` (3) `.
pub const INDICATOR_WIDTH: u16 = 5;

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub slide: Rect,
    pub indicators: Rect,
    pub info: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(6),
        ])
        .split(body);

    Regions {
        header,
        slide: parts[0],
        indicators: parts[1],
        info: parts[2],
        footer,
    }
}

/// One-line cells for `count` indicators, centered inside the bordered
/// indicator region, paired with the slide each one selects.
///
/// When not all indicators fit, a window of them is shown that always
/// contains `current`, kept as centered on it as the ends allow.
pub fn indicator_cells(area: Rect, count: usize, current: usize) -> Vec<(usize, Rect)> {
    if area.height < 3 || area.width < 2 || count == 0 {
        return Vec::new();
    }
    let inner_width = area.width - 2;
    let fits = (inner_width / INDICATOR_WIDTH) as usize;
    let shown = count.min(fits);
    if shown == 0 {
        return Vec::new();
    }
    let first = current
        .min(count - 1)
        .saturating_sub(shown / 2)
        .min(count - shown);
    let total = shown as u16 * INDICATOR_WIDTH;
    let start = area.x + 1 + (inner_width - total) / 2;

    (0..shown as u16)
        .map(|i| {
            let cell = Rect {
                x: start + i * INDICATOR_WIDTH,
                y: area.y + 1,
                width: INDICATOR_WIDTH,
                height: 1,
            };
            (first + i as usize, cell)
        })
        .collect()
}

/// Clickable controls in the info region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Previous,
    Toggle,
    Next,
    Decrease,
    Increase,
    Reset,
    Buy,
}

impl Control {
    pub fn label(self, playing: bool) -> &'static str {
        match self {
            Control::Previous => "[◀ Prev]",
            Control::Toggle if playing => "[⏸ Pause]",
            Control::Toggle => "[▶ Play ]",
            Control::Next => "[Next ▶]",
            Control::Decrease => "[-]",
            Control::Increase => "[+]",
            Control::Reset => "[Reset]",
            Control::Buy => "[Buy]",
        }
    }
}

/// Rows inside the bordered info region.
const PRICE_ROW: u16 = 1;
const QUANTITY_ROW: u16 = 2;
const NAV_ROW: u16 = 3;
const STATUS_ROW: u16 = 4;

/// Column offset and width of each control within its row.
const QUANTITY_CONTROLS: [(Control, u16, u16); 4] = [
    (Control::Decrease, 2, 3),
    (Control::Increase, 15, 3),
    (Control::Reset, 20, 7),
    (Control::Buy, 29, 5),
];
const NAV_CONTROLS: [(Control, u16, u16); 3] = [
    (Control::Previous, 2, 8),
    (Control::Toggle, 12, 9),
    (Control::Next, 23, 8),
];

fn row_cell(info: Rect, row: u16, offset: u16, width: u16) -> Option<Rect> {
    let cell = Rect {
        x: info.x.saturating_add(offset),
        y: info.y.saturating_add(row),
        width,
        height: 1,
    };
    // Keep clear of the right and bottom borders.
    let fits = row + 1 < info.height && offset + width < info.width;
    fits.then_some(cell)
}

pub fn price_cell(info: Rect) -> Option<Rect> {
    row_cell(info, PRICE_ROW, 2, info.width.saturating_sub(4))
}

/// Where the quantity value sits, between the `-` and `+` buttons.
pub fn quantity_cell(info: Rect) -> Option<Rect> {
    row_cell(info, QUANTITY_ROW, 6, 8)
}

pub fn status_cell(info: Rect) -> Option<Rect> {
    row_cell(info, STATUS_ROW, 2, info.width.saturating_sub(4))
}

pub fn control_cells(info: Rect) -> Vec<(Control, Rect)> {
    let quantity = QUANTITY_CONTROLS
        .iter()
        .map(|&(control, offset, width)| (control, QUANTITY_ROW, offset, width));
    let nav = NAV_CONTROLS
        .iter()
        .map(|&(control, offset, width)| (control, NAV_ROW, offset, width));
    quantity
        .chain(nav)
        .filter_map(|(control, row, offset, width)| {
            row_cell(info, row, offset, width).map(|cell| (control, cell))
        })
        .collect()
}

pub fn control_at(cells: &[(Control, Rect)], column: u16, row: u16) -> Option<Control> {
    cells
        .iter()
        .find(|(_, cell)| contains(*cell, column, row))
        .map(|(control, _)| *control)
}

/// Slide selected by the indicator cell under `(column, row)`.
pub fn indicator_at(cells: &[(usize, Rect)], column: u16, row: u16) -> Option<usize> {
    cells
        .iter()
        .find(|(_, cell)| contains(*cell, column, row))
        .map(|(index, _)| *index)
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
