//! Typewriter state machine.

/// Grows a displayed prefix of a fixed string, one character per step.
///
/// Two states, running and complete, with a single forward transition per
/// step. Completion is permanent: a finished typewriter ignores further
/// steps and an instance never restarts or loops. An empty source is
/// complete from the start.
#[derive(Debug, Clone)]
pub struct Typewriter {
    source: String,
    /// Byte offset of the prefix end. Always on a char boundary.
    cursor: usize,
}

impl Typewriter {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            cursor: 0,
        }
    }

    /// Advances by one character. Returns false once complete (no-op).
    pub fn step(&mut self) -> bool {
        match self.source[self.cursor..].chars().next() {
            Some(c) => {
                self.cursor += c.len_utf8();
                true
            }
            None => false,
        }
    }

    /// Jumps straight to the end. Used when animations are disabled.
    pub fn complete_now(&mut self) {
        self.cursor = self.source.len();
    }

    /// The currently revealed prefix.
    pub fn displayed(&self) -> &str {
        &self.source[..self.cursor]
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_complete(&self) -> bool {
        self.cursor == self.source.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displayed_is_always_a_prefix() {
        let source = "Hello, world";
        let mut tw = Typewriter::new(source);

        let chars: Vec<char> = source.chars().collect();
        for k in 0..chars.len() {
            let expected: String = chars[..k].iter().collect();
            assert_eq!(tw.displayed(), expected);
            assert!(tw.step());
        }
        assert_eq!(tw.displayed(), source);
    }

    #[test]
    fn completes_after_exactly_n_steps() {
        let source = "abcde";
        let mut tw = Typewriter::new(source);

        for _ in 0..source.len() {
            assert!(!tw.is_complete());
            assert!(tw.step());
        }

        assert!(tw.is_complete());
        assert_eq!(tw.displayed(), source);

        // Further steps are no-ops; the sequence never loops.
        assert!(!tw.step());
        assert_eq!(tw.displayed(), source);
    }

    #[test]
    fn empty_source_is_complete_immediately() {
        let mut tw = Typewriter::new("");
        assert!(tw.is_complete());
        assert_eq!(tw.displayed(), "");
        assert!(!tw.step());
    }

    #[test]
    fn steps_land_on_char_boundaries() {
        let mut tw = Typewriter::new("héllo 👋");

        while tw.step() {
            // displayed() slices at cursor; a misplaced boundary would panic
            let _ = tw.displayed();
        }
        assert_eq!(tw.displayed(), "héllo 👋");
    }

    #[test]
    fn complete_now_finishes_the_sequence() {
        let mut tw = Typewriter::new("some text");
        tw.step();

        tw.complete_now();

        assert!(tw.is_complete());
        assert_eq!(tw.displayed(), "some text");
        assert!(!tw.step());
    }
}
