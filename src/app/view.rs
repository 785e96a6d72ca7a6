// SPDX-License-Identifier: MPL-2.0
//! Root view: the row of owner labels and the attach toggle.

use super::{App, Message};
use crate::ui::styles;
use iced::widget::{button, column, container, row, text};
use iced::Element;

const TITLE_SIZE: f32 = 20.0;
const SPACING: f32 = 16.0;
const PANEL_PADDING: f32 = 12.0;

pub fn render(app: &App) -> Element<'_, Message> {
    let labels = app
        .labels()
        .iter()
        .enumerate()
        .fold(row![], |labels, (index, label)| {
            labels.push(
                label
                    .view()
                    .map(move |message| Message::Label { index, message }),
            )
        });

    let toggle_label = if app.is_attached() { "Detach" } else { "Attach" };

    let mut content = column![
        text("Owners").size(TITLE_SIZE),
        container(labels)
            .padding(PANEL_PADDING)
            .style(styles::container::panel),
        button(text(toggle_label)).on_press(Message::ToggleAttached),
    ]
    .spacing(SPACING)
    .padding(SPACING);

    if let Some(warning) = app.config_warning() {
        content = content.push(text(warning));
    }

    content.into()
}
