//! Bar chart pane rendering

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

use crate::scheduler::{Frame as RunFrame, RunPhase};
use crate::ui::theme::DEFAULT_THEME;

/// Render the array as one bar per value.
///
/// The indices the last step touched are drawn in the `touched` color; once
/// the sort is done the completion sweep recolors elements left to right,
/// one per tick.
pub fn render_bars_pane(frame: &mut Frame, area: Rect, run: &RunFrame, title: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let swept = match run.phase {
        RunPhase::Flourish { swept } => swept,
        RunPhase::Finished => run.values.len(),
        RunPhase::Sorting => 0,
    };

    let bars: Vec<Bar> = run
        .values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let color = if i < swept {
                DEFAULT_THEME.swept
            } else if run.highlight.contains(i) {
                DEFAULT_THEME.touched
            } else {
                DEFAULT_THEME.bar
            };
            Bar::default()
                .value(value.max(0) as u64)
                .style(Style::default().fg(color))
                .text_value(String::new())
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(1)
        .bar_gap(0);

    frame.render_widget(chart, area);
}
