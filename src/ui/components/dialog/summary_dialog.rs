//! Summary dialog showing the submitted form values

use super::base::{render_dialog, wrap_text, DialogConfig};
use crate::state::Submission;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

const MAX_WIDTH: u16 = 64;

/// Render the submitted-values dialog centered on the screen
pub fn render_summary_dialog(frame: &mut Frame, submission: &Submission) {
    let mut body: Vec<Line> = vec![
        Line::from(Span::styled(
            "Here are the details you filled in the form",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    let wrap_width = (MAX_WIDTH - 6) as usize;
    for (label, value) in submission.lines() {
        let mut wrapped = wrap_text(&value, wrap_width.saturating_sub(label.len() + 2));
        let first = wrapped.remove(0);
        body.push(Line::from(vec![
            Span::styled(format!("{label}: "), Style::default().fg(Color::Cyan)),
            Span::styled(first, Style::default().fg(Color::White)),
        ]));
        // Continuation lines for long values (feedback, URLs)
        for rest in wrapped {
            body.push(Line::from(Span::styled(
                format!("  {rest}"),
                Style::default().fg(Color::White),
            )));
        }
    }

    let hint = vec![
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" close  "),
        Span::styled(
            "c",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" copy as JSON"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: submission.title(),
            title_color: Color::Green,
            border_color: Color::Green,
            body,
            hint: Some(hint),
            max_width: MAX_WIDTH,
        },
    );
}
