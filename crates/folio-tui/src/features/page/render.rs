//! Page line assembly.

use ratatui::text::Line;

use crate::sections::hero::HeroView;
use crate::sections::{self, SectionId};
use crate::state::TuiState;
use crate::theme::Theme;

use super::observer::Reveal;

/// Builds the whole document for the current width and animation state.
pub fn build_page(tui: &TuiState, width: u16) -> Vec<Line<'static>> {
    let theme = &tui.theme;
    let page = &tui.page;

    let mut lines = Vec::new();
    for id in SectionId::ALL {
        let section = match id {
            SectionId::Home => sections::hero::lines(theme, width, &HeroView::of(&page.hero)),
            SectionId::About => sections::about::lines(theme, width, page.observer.reveal_of(id)),
            SectionId::Education => {
                sections::education::lines(theme, width, page.observer.reveal_of(id))
            }
            SectionId::Skills => sections::skills::lines(theme, width, page.observer.reveal_of(id)),
            SectionId::Projects => {
                sections::projects::lines(theme, width, page.observer.reveal_of(id))
            }
            SectionId::Contact => {
                sections::contact::lines(theme, width, page.observer.reveal_of(id))
            }
            SectionId::Footer => sections::footer::lines(theme, width),
        };
        lines.extend(section);
    }
    lines
}

/// Measures every section's row count at `width`, in page order.
///
/// Measuring uses settled views; row counts are animation-independent, so
/// the result stays valid until the width changes.
pub fn measure_sections(theme: &Theme, width: u16) -> Vec<(SectionId, usize)> {
    SectionId::ALL
        .iter()
        .map(|&id| {
            let rows = match id {
                SectionId::Home => sections::hero::lines(theme, width, &HeroView::settled()),
                SectionId::About => sections::about::lines(theme, width, Reveal::settled()),
                SectionId::Education => sections::education::lines(theme, width, Reveal::settled()),
                SectionId::Skills => sections::skills::lines(theme, width, Reveal::settled()),
                SectionId::Projects => sections::projects::lines(theme, width, Reveal::settled()),
                SectionId::Contact => sections::contact::lines(theme, width, Reveal::settled()),
                SectionId::Footer => sections::footer::lines(theme, width),
            };
            (id, rows.len())
        })
        .collect()
}
