//! Small view helpers shared across screens.

use iced::widget::{column, container, row, text, text_input};
use iced::{Element, Theme};

use crate::wizard::WizardStep;

/// A caption, a text input and an optional inline validation error,
/// stacked vertically.
pub fn labeled_input<'a, Message: Clone + 'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    error: Option<&'a str>,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let mut col = column![
        text(label).size(14),
        text_input(placeholder, value).on_input(on_input).padding(10),
    ]
    .spacing(5);
    if let Some(message) = error {
        col = col.push(text(message).size(13).style(text::danger));
    }
    col.into()
}

/// The numbered progress header shown above every wizard step.
pub fn step_header<'a, Message: 'a>(current: WizardStep) -> Element<'a, Message> {
    let mut steps = row![].spacing(10);
    for step in WizardStep::ALL {
        steps = steps.push(
            container(text(format!("{} {}", step.number(), step.title())).size(13))
                .padding(8)
                .style(step_style(step, current)),
        );
    }
    column![
        steps,
        text(current.description()).size(14),
    ]
    .spacing(10)
    .into()
}

/// Treat an all-whitespace form input as "not provided".
pub fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Dollar amounts without a trailing `.0` when the value is whole.
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn step_style(step: WizardStep, current: WizardStep) -> impl Fn(&Theme) -> container::Style {
    move |theme| {
        let style = container::bordered_box(theme);
        if step <= current {
            let mut accent = theme.palette().primary;
            accent.a = 0.25;
            style.background(accent)
        } else {
            style
        }
    }
}
