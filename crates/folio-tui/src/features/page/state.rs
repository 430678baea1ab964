//! Page state: scroll, layout extents, observation, hero schedule.

use std::time::{Duration, Instant};

use folio_core::config::Config;

use crate::anim::{Typewriter, stagger};
use crate::mutations::ContactMutation;
use crate::sections::SectionId;
use crate::theme::Theme;

use super::observer::SectionObserver;
use super::render::measure_sections;
use super::scroll::{ScrollAccumulator, ScrollState};

const CURSOR_BLINK_PERIOD: Duration = Duration::from_millis(800);

/// Everything the scrolling page owns.
#[derive(Debug)]
pub struct PageState {
    pub scroll: ScrollState,
    pub scroll_accumulator: ScrollAccumulator,
    pub observer: SectionObserver,
    pub hero: HeroState,
    pub layout: PageLayout,
    /// Rows available to the document in the last frame.
    pub viewport_height: usize,
    content_width: u16,
}

impl PageState {
    pub fn new(config: &Config) -> Self {
        let mut observer = SectionObserver::default();
        for id in SectionId::ALL {
            if let Some(threshold) = id.threshold() {
                if config.animations {
                    observer.register(id, threshold);
                } else {
                    observer.register_settled(id);
                }
            }
        }

        Self {
            scroll: ScrollState::new(),
            scroll_accumulator: ScrollAccumulator::default(),
            observer,
            hero: HeroState::new(
                folio_content::PROFILE.intro,
                config.typewriter_delay(),
                config.animations,
            ),
            layout: PageLayout::default(),
            viewport_height: 0,
            content_width: 0,
        }
    }

    /// Remeasures the section extents when the content width changes.
    ///
    /// Line counts depend only on the width, so this is the single place
    /// layout and scroll bounds are refreshed.
    pub fn ensure_layout(&mut self, theme: &Theme, width: u16) {
        if width == self.content_width {
            return;
        }
        self.content_width = width;
        let counts = measure_sections(theme, width);
        self.layout.rebuild(&counts);
        self.scroll.update_line_count(self.layout.total_lines());
    }

    /// Releases every observation and drops the pending typewriter step.
    pub fn teardown(&mut self) {
        self.observer.release_all();
        self.hero.cancel_pending();
    }
}

/// Hero typewriter plus its step schedule.
#[derive(Debug)]
pub struct HeroState {
    typewriter: Typewriter,
    /// When the next character is due. None once complete or cancelled.
    next_step_at: Option<Instant>,
    delay: Duration,
    started_at: Instant,
}

impl HeroState {
    pub fn new(source: &str, delay: Duration, animate: bool) -> Self {
        let mut typewriter = Typewriter::new(source);
        if !animate {
            typewriter.complete_now();
        }
        // An empty or pre-completed source schedules nothing.
        let next_step_at = (!typewriter.is_complete()).then(|| Instant::now() + delay);
        Self {
            typewriter,
            next_step_at,
            delay,
            started_at: Instant::now(),
        }
    }

    /// Advances at most one character when its deadline has passed.
    pub fn on_tick(&mut self, now: Instant) {
        let Some(due) = self.next_step_at else {
            return;
        };
        if now < due {
            return;
        }
        self.typewriter.step();
        self.next_step_at = (!self.typewriter.is_complete()).then(|| now + self.delay);
    }

    /// Drops the pending step without completing the text. The sequence
    /// never resumes afterwards.
    pub fn cancel_pending(&mut self) {
        self.next_step_at = None;
    }

    /// Whether a step is still scheduled.
    pub fn is_typing(&self) -> bool {
        self.next_step_at.is_some()
    }

    pub fn typed(&self) -> &str {
        self.typewriter.displayed()
    }

    pub fn source(&self) -> &str {
        self.typewriter.source()
    }

    pub fn blink_on(&self) -> bool {
        stagger::blink_on(self.started_at.elapsed(), CURSOR_BLINK_PERIOD)
    }
}

/// One section's vertical slice of the document.
#[derive(Debug, Clone, Copy)]
pub struct SectionExtent {
    pub id: SectionId,
    /// First document line of the section.
    pub start: usize,
    pub lines: usize,
}

/// Section extents at the current content width.
#[derive(Debug, Default)]
pub struct PageLayout {
    extents: Vec<SectionExtent>,
    total_lines: usize,
}

impl PageLayout {
    pub fn rebuild(&mut self, counts: &[(SectionId, usize)]) {
        self.extents.clear();
        let mut start = 0;
        for &(id, lines) in counts {
            self.extents.push(SectionExtent { id, start, lines });
            start += lines;
        }
        self.total_lines = start;
    }

    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    pub fn extent_of(&self, id: SectionId) -> Option<SectionExtent> {
        self.extents.iter().copied().find(|extent| extent.id == id)
    }

    pub fn start_of(&self, id: SectionId) -> usize {
        self.extent_of(id).map_or(0, |extent| extent.start)
    }

    /// The section occupying a document line.
    pub fn section_at(&self, line: usize) -> SectionId {
        self.extents
            .iter()
            .rev()
            .find(|extent| extent.start <= line)
            .map_or(SectionId::Home, |extent| extent.id)
    }

    /// Fraction of the section's rows inside the viewport, or None when the
    /// section has no rows at this width.
    pub fn visible_ratio(&self, id: SectionId, offset: usize, viewport: usize) -> Option<f32> {
        let extent = self.extent_of(id)?;
        if extent.lines == 0 {
            return None;
        }

        let view_end = offset + viewport;
        let section_end = extent.start + extent.lines;
        let overlap = section_end
            .min(view_end)
            .saturating_sub(extent.start.max(offset));
        Some(overlap as f32 / extent.lines as f32)
    }
}

/// Compose form draft, preserved across overlay closes.
#[derive(Debug, Default, Clone)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn apply(&mut self, mutation: ContactMutation) {
        match mutation {
            ContactMutation::SaveDraft {
                name,
                email,
                message,
            } => {
                self.name = name;
                self.email = email;
                self.message = message;
            }
            ContactMutation::ClearDraft => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
            }
        }
    }
}
