// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Opacity of the panel surface behind the label row.
const PANEL_OPACITY: f32 = 0.9;

/// Corner radius of the panel surface.
const PANEL_RADIUS: f32 = 8.0;

/// Inline owner label. Only the text color follows the theme so labels blend
/// into whatever row hosts them.
pub fn owner_label(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// Panel surface hosting a row of labels.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            PANEL_OPACITY,
        ))),
        border: Border {
            radius: PANEL_RADIUS.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
