//! Typing buffer: the transient state behind keystroke coalescing.
//!
//! Exists only between the first keystroke of a burst and finalization.
//! The generation counter is how stale debounce deadlines are recognised:
//! every keystroke, backspace and finalization bumps it, and a deadline
//! only fires if it still carries the current generation.

/// A finalized burst, ready to become a Type action.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FinalizedTyping {
    pub selector: String,
    pub value: String,
}

#[derive(Clone, Debug, Default)]
pub struct TypingBuffer {
    pending_text: String,
    target_tag: Option<String>,
    target_selector: Option<String>,
    generation: u64,
}

impl TypingBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.target_selector.is_some()
    }

    pub fn pending_text(&self) -> &str {
        &self.pending_text
    }

    /// Current deadline generation; a scheduled deadline carrying an older
    /// value is stale.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether an incoming keystroke continues the current burst. Identity
    /// is the derived selector: two fields can share a tag name but never a
    /// selector within one snapshot.
    pub fn matches_target(&self, selector: &str) -> bool {
        self.target_selector.as_deref() == Some(selector)
    }

    /// Append one character, binding the buffer to `target` on first use.
    /// Returns the new deadline generation.
    pub fn push_key(&mut self, key: &str, target_tag: &str, target_selector: &str) -> u64 {
        if !self.is_open() {
            self.target_tag = Some(target_tag.to_string());
            self.target_selector = Some(target_selector.to_string());
        }
        self.pending_text.push_str(key);
        self.generation += 1;
        self.generation
    }

    /// Drop the last pending character; no-op when nothing is pending.
    /// Returns the new deadline generation: the deadline resets even on
    /// an empty buffer.
    pub fn backspace(&mut self) -> u64 {
        self.pending_text.pop();
        self.generation += 1;
        self.generation
    }

    /// Close the buffer. A burst with pending text comes back as a
    /// [`FinalizedTyping`]; an empty buffer finalizes to nothing, silently.
    pub fn take(&mut self) -> Option<FinalizedTyping> {
        self.generation += 1;
        let selector = self.target_selector.take();
        self.target_tag = None;
        let value = std::mem::take(&mut self.pending_text);
        match (selector, value) {
            (Some(selector), value) if !value.is_empty() => {
                Some(FinalizedTyping { selector, value })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_accumulates_and_takes() {
        let mut buffer = TypingBuffer::new();
        for key in ["h", "e", "l", "l", "o"] {
            buffer.push_key(key, "input", "#q");
        }
        assert!(buffer.matches_target("#q"));
        let finalized = buffer.take().unwrap();
        assert_eq!(finalized.value, "hello");
        assert_eq!(finalized.selector, "#q");
        assert!(!buffer.is_open());
    }

    #[test]
    fn backspace_trims_and_bottoms_out() {
        let mut buffer = TypingBuffer::new();
        buffer.push_key("h", "input", "#q");
        buffer.push_key("i", "input", "#q");
        buffer.backspace();
        buffer.backspace();
        buffer.backspace();
        assert_eq!(buffer.pending_text(), "");
        // Open but empty: finalizes to nothing.
        assert!(buffer.is_open());
        assert!(buffer.take().is_none());
    }

    #[test]
    fn every_mutation_advances_the_generation() {
        let mut buffer = TypingBuffer::new();
        let g1 = buffer.push_key("a", "input", "#q");
        let g2 = buffer.backspace();
        assert!(g2 > g1);
        buffer.take();
        assert!(buffer.generation() > g2);
    }
}
