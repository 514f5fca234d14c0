//! ANSI style tracking for prompt output.
//!
//! This module keeps track of the style a prompt segment *wants* and the style
//! the terminal *has* (the last escape sequence written), and emits the
//! smallest SGR sequence that moves the terminal from one to the other.
//!
//! # Public API
//! - [`StyleState`]: Foreground color plus attribute bits
//! - [`StyleTracker`]: Target vs. last-emitted state with minimal diff emission
//! - [`Attribute`]: Bold, faint and italic text attributes
//! - [`color_code`], [`attribute_for`], [`cleared_attribute_for`]: Selector lookups
//! - [`PALETTE`], [`ATTRIBUTES`]: The fixed selector tables used by help output
//!
//! # Emission rules
//! - **No change**: nothing is written
//! - **Back to default**: a single `ESC[0m`
//! - **Attributes added**: only the new attribute codes
//! - **Attribute removed**: `0`, every attribute still set, then the color

/// Universal reset sequence.
pub const RESET_SEQUENCE: &str = "\x1b[0m";

const SEQUENCE_START: &str = "\x1b[";
const SEQUENCE_END: char = 'm';
const SEPARATOR: char = ';';
/// SGR code restoring the default foreground without touching attributes.
const DEFAULT_FOREGROUND: u8 = 39;

/// Color selectors: `(selector, name, SGR foreground code)`.
pub const PALETTE: [(char, &str, u8); 16] = [
    ('k', "Black", 30),
    ('r', "Red", 31),
    ('g', "Green", 32),
    ('y', "Yellow", 33),
    ('b', "Blue", 34),
    ('m', "Magenta", 35),
    ('c', "Cyan", 36),
    ('w', "White", 37),
    ('K', "Highlight Black", 90),
    ('R', "Highlight Red", 91),
    ('G', "Highlight Green", 92),
    ('Y', "Highlight Yellow", 93),
    ('B', "Highlight Blue", 94),
    ('M', "Highlight Magenta", 95),
    ('C', "Highlight Cyan", 96),
    ('W', "Highlight White", 97),
];

/// Text attributes, numbered by their SGR code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Bold = 1,
    Faint = 2,
    Italic = 3,
}

/// Attribute selectors: `(set selector, clear selector, name, attribute)`.
pub const ATTRIBUTES: [(char, char, &str, Attribute); 3] = [
    ('b', 'B', "bold", Attribute::Bold),
    ('f', 'F', "faint/dim color", Attribute::Faint),
    ('i', 'I', "italic", Attribute::Italic),
];

impl Attribute {
    /// SGR code that turns this attribute on
    pub fn code(self) -> u8 {
        self as u8
    }

    fn bit(self) -> u8 {
        1 << self.code()
    }
}

/// Look up the SGR foreground code for a color selector
pub fn color_code(selector: char) -> Option<u8> {
    PALETTE
        .iter()
        .find(|(ch, _, _)| *ch == selector)
        .map(|(_, _, code)| *code)
}

/// Look up the attribute a lowercase selector sets
pub fn attribute_for(selector: char) -> Option<Attribute> {
    ATTRIBUTES
        .iter()
        .find(|(set, _, _, _)| *set == selector)
        .map(|(_, _, _, attr)| *attr)
}

/// Look up the attribute an uppercase selector clears
pub fn cleared_attribute_for(selector: char) -> Option<Attribute> {
    ATTRIBUTES
        .iter()
        .find(|(_, clear, _, _)| *clear == selector)
        .map(|(_, _, _, attr)| *attr)
}

/// A foreground color and a set of attributes.
///
/// `color == 0` means the terminal default. Attribute bits are indexed by SGR
/// code, so bit 1 is bold, bit 2 faint, bit 3 italic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleState {
    pub color: u8,
    pub attributes: u8,
}

impl StyleState {
    pub fn is_default(&self) -> bool {
        self.color == 0 && self.attributes == 0
    }

    pub fn has(&self, attribute: Attribute) -> bool {
        self.attributes & attribute.bit() != 0
    }

    /// SGR codes of the set attribute bits, lowest first
    fn attribute_codes(bits: u8) -> impl Iterator<Item = u8> {
        (1..8u8).filter(move |code| bits & (1u8 << *code) != 0)
    }
}

/// Escape sequence that moves the terminal from `emitted` to `target`.
///
/// Returns `None` when the two states are identical.
pub fn transition(emitted: StyleState, target: StyleState) -> Option<String> {
    if emitted == target {
        return None;
    }
    if target.is_default() {
        return Some(RESET_SEQUENCE.to_string());
    }

    let added = target.attributes & !emitted.attributes;
    let removed = emitted.attributes & !target.attributes;

    let mut codes: Vec<u8> = Vec::with_capacity(5);
    if removed != 0 {
        // No portable way to clear a single attribute: reset and reapply.
        codes.push(0);
        codes.extend(StyleState::attribute_codes(target.attributes));
    } else {
        codes.extend(StyleState::attribute_codes(added));
    }
    if removed != 0 {
        // The reset already restored the default foreground.
        if target.color != 0 {
            codes.push(target.color);
        }
    } else if target.color != emitted.color {
        codes.push(if target.color == 0 {
            DEFAULT_FOREGROUND
        } else {
            target.color
        });
    }

    let mut sequence = String::with_capacity(SEQUENCE_START.len() + codes.len() * 3 + 1);
    sequence.push_str(SEQUENCE_START);
    let mut buffer = itoa::Buffer::new();
    for (i, code) in codes.iter().enumerate() {
        if i > 0 {
            sequence.push(SEPARATOR);
        }
        sequence.push_str(buffer.format(*code));
    }
    sequence.push(SEQUENCE_END);
    Some(sequence)
}

/// Target style plus the style last written to the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleTracker {
    target: StyleState,
    emitted: StyleState,
}

impl StyleTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(&self) -> StyleState {
        self.target
    }

    pub fn emitted(&self) -> StyleState {
        self.emitted
    }

    pub fn set_color(&mut self, code: u8) {
        self.target.color = code;
    }

    pub fn clear_color(&mut self) {
        self.target.color = 0;
    }

    pub fn set_attribute(&mut self, attribute: Attribute) {
        self.target.attributes |= attribute.bit();
    }

    pub fn clear_attribute(&mut self, attribute: Attribute) {
        self.target.attributes &= !attribute.bit();
    }

    pub fn clear_attributes(&mut self) {
        self.target.attributes = 0;
    }

    /// Reset the target to the terminal default without emitting anything
    pub fn reset(&mut self) {
        self.target = StyleState::default();
    }

    /// Make `target` the wanted style and return the bytes needed to reach it
    pub fn apply(&mut self, target: StyleState) -> Option<String> {
        self.target = target;
        let sequence = transition(self.emitted, target);
        self.emitted = target;
        sequence
    }

    /// Write whatever escape sequence the current target requires
    pub fn flush(&mut self, out: &mut String) {
        if let Some(sequence) = self.apply(self.target) {
            out.push_str(&sequence);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(color: u8, attributes: &[Attribute]) -> StyleState {
        let mut tracker = StyleTracker::new();
        tracker.set_color(color);
        for attr in attributes {
            tracker.set_attribute(*attr);
        }
        tracker.target()
    }

    #[test]
    fn test_no_change_emits_nothing() {
        let mut tracker = StyleTracker::new();
        assert_eq!(tracker.apply(StyleState::default()), None);

        let red = state(31, &[]);
        assert!(tracker.apply(red).is_some());
        assert_eq!(tracker.apply(red), None);
    }

    #[test]
    fn test_reset_to_default() {
        let mut tracker = StyleTracker::new();
        tracker.apply(state(31, &[Attribute::Bold]));
        assert_eq!(
            tracker.apply(StyleState::default()),
            Some("\x1b[0m".to_string())
        );
        assert!(tracker.emitted().is_default());
    }

    #[test]
    fn test_color_only() {
        assert_eq!(
            transition(StyleState::default(), state(34, &[])),
            Some("\x1b[34m".to_string())
        );
        assert_eq!(
            transition(state(31, &[]), state(92, &[])),
            Some("\x1b[92m".to_string())
        );
    }

    #[test]
    fn test_attributes_added_before_color() {
        assert_eq!(
            transition(StyleState::default(), state(31, &[Attribute::Bold])),
            Some("\x1b[1;31m".to_string())
        );
    }

    #[test]
    fn test_added_attribute_keeps_color() {
        let from = state(32, &[]);
        let to = state(32, &[Attribute::Bold, Attribute::Italic]);
        assert_eq!(transition(from, to), Some("\x1b[1;3m".to_string()));
    }

    #[test]
    fn test_removed_attribute_resets_and_reapplies() {
        let from = state(32, &[Attribute::Bold, Attribute::Italic]);
        let to = state(32, &[Attribute::Italic]);
        assert_eq!(transition(from, to), Some("\x1b[0;3;32m".to_string()));
    }

    #[test]
    fn test_removed_attribute_without_color() {
        let from = state(0, &[Attribute::Bold, Attribute::Faint]);
        let to = state(0, &[Attribute::Faint]);
        assert_eq!(transition(from, to), Some("\x1b[0;2m".to_string()));
    }

    #[test]
    fn test_clearing_color_keeps_attributes() {
        let from = state(31, &[Attribute::Bold]);
        let to = state(0, &[Attribute::Bold]);
        assert_eq!(transition(from, to), Some("\x1b[39m".to_string()));
    }

    #[test]
    fn test_flush_writes_once() {
        let mut tracker = StyleTracker::new();
        let mut out = String::new();
        tracker.set_color(31);
        tracker.flush(&mut out);
        tracker.set_color(31);
        tracker.flush(&mut out);
        assert_eq!(out, "\x1b[31m");
    }

    #[test]
    fn test_selector_lookups() {
        assert_eq!(color_code('r'), Some(31));
        assert_eq!(color_code('W'), Some(97));
        assert_eq!(color_code('z'), None);
        assert_eq!(attribute_for('i'), Some(Attribute::Italic));
        assert_eq!(attribute_for('I'), None);
        assert_eq!(cleared_attribute_for('F'), Some(Attribute::Faint));
        assert_eq!(cleared_attribute_for('_'), None);
    }

    #[test]
    fn test_clear_attribute() {
        let mut tracker = StyleTracker::new();
        tracker.set_attribute(Attribute::Bold);
        tracker.set_attribute(Attribute::Italic);
        tracker.clear_attribute(Attribute::Bold);
        assert!(!tracker.target().has(Attribute::Bold));
        assert!(tracker.target().has(Attribute::Italic));
        tracker.clear_attributes();
        assert_eq!(tracker.target().attributes, 0);
    }
}
