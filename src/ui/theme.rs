use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub bar: Color,       // resting bars
    pub touched: Color,   // indices the last step compared/swapped
    pub swept: Color,     // completion sweep
    pub comment: Color,   // muted text
    pub primary: Color,   // status badges
    pub secondary: Color, // playing/flourish badge
    pub success: Color,
    pub border: Color,
    pub status_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    bar: Color::Rgb(205, 214, 244),       // White bars like the original
    touched: Color::Rgb(243, 139, 168),   // Red for the active pair
    swept: Color::Rgb(166, 227, 161),     // Green sweep when done
    comment: Color::Rgb(108, 112, 134),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    success: Color::Rgb(166, 227, 161),
    border: Color::Rgb(108, 112, 134),
    status_bg: Color::Rgb(50, 50, 70),
};
