//! Prompt format interpreter.
//!
//! A format string mixes literal text with directives:
//!
//! | Syntax      | Meaning                                              |
//! |-------------|------------------------------------------------------|
//! | `\x`        | Literal `x`, even if it is a sigil                   |
//! | `#x`, `#_`  | Set foreground color `x`, or reset the color         |
//! | `@x`, `@X`  | Set attribute `x`, clear it with the uppercase form  |
//! | `@_`        | Clear all attributes                                 |
//! | `%x`        | Insert status value `x`                              |
//! | `[ ... ]`   | Group, dropped when all its values are zero          |
//!
//! Rendering never fails: an unknown selector or a sigil at the end of the
//! input is copied to the output as plain text.
//!
//! # Public API
//! - [`render`]: Render a status record through a format string
//! - [`Rendered`]: Output text plus its display width

use crate::core::status::{Placeholder, StatusRecord};
use crate::core::style::{self, StyleTracker};

const ESCAPE: char = '\\';
const COLOR: char = '#';
const ATTRIBUTE: char = '@';
const DATA: char = '%';
const RESET: char = '_';
const GROUP_OPEN: char = '[';
const GROUP_CLOSE: char = ']';

/// Rendered prompt text and the number of terminal columns it occupies
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub width: usize,
}

impl Rendered {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Render `status` according to `format`.
///
/// Returns an empty result when there is no status to show. Every call starts
/// from the terminal default style and ends by resetting to it.
pub fn render(status: Option<&StatusRecord>, format: &str) -> Rendered {
    let Some(status) = status else {
        return Rendered::default();
    };

    let mut interpreter = Interpreter::new(status);
    for ch in format.chars() {
        interpreter.feed(ch);
    }
    interpreter.finish()
}

/// One nesting level of the format
#[derive(Debug, Default)]
struct Group {
    buf: String,
    style: StyleTracker,
    has_data: bool,
    has_value: bool,
    width: usize,
}

impl Group {
    /// Open a nested group that starts from the default style
    fn child(&self) -> Group {
        let mut style = self.style;
        style.reset();
        Group {
            style,
            ..Default::default()
        }
    }

    /// A group whose values were all zero is dropped
    fn is_kept(&self) -> bool {
        !self.has_data || self.has_value
    }

    fn push_char(&mut self, ch: char) {
        // Style changes are deferred past whitespace.
        if !ch.is_whitespace() {
            self.style.flush(&mut self.buf);
        }
        self.width += 1;
        self.buf.push(ch);
    }

    fn push_str(&mut self, s: &str) {
        self.style.flush(&mut self.buf);
        self.width += s.chars().count();
        self.buf.push_str(s);
    }

    /// Append a closed child; the parent then continues from the default style
    fn absorb(&mut self, child: Group) {
        self.buf.push_str(&child.buf);
        self.style = child.style;
        self.style.reset();
        self.width += child.width;
    }
}

/// The directive waiting for its selector character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    None,
    Escape,
    Color,
    Attribute,
    Data,
}

impl Pending {
    fn sigil(self) -> Option<char> {
        match self {
            Pending::None => None,
            Pending::Escape => Some(ESCAPE),
            Pending::Color => Some(COLOR),
            Pending::Attribute => Some(ATTRIBUTE),
            Pending::Data => Some(DATA),
        }
    }
}

struct Interpreter<'a> {
    status: &'a StatusRecord,
    /// Open groups, root first; never empty
    groups: Vec<Group>,
    pending: Pending,
}

impl<'a> Interpreter<'a> {
    fn new(status: &'a StatusRecord) -> Self {
        Self {
            status,
            groups: vec![Group::default()],
            pending: Pending::None,
        }
    }

    fn current(&mut self) -> &mut Group {
        let last = self.groups.len() - 1;
        &mut self.groups[last]
    }

    fn feed(&mut self, ch: char) {
        let pending = std::mem::replace(&mut self.pending, Pending::None);
        match pending {
            Pending::Escape => self.current().push_char(ch),
            Pending::Color => self.color(ch),
            Pending::Attribute => self.attribute(ch),
            Pending::Data => self.data(ch),
            Pending::None => match ch {
                ESCAPE => self.pending = Pending::Escape,
                COLOR => self.pending = Pending::Color,
                ATTRIBUTE => self.pending = Pending::Attribute,
                DATA => self.pending = Pending::Data,
                GROUP_OPEN => self.open_group(),
                GROUP_CLOSE => self.close_group(),
                _ => self.current().push_char(ch),
            },
        }
    }

    /// Emit a directive that did not match as the text it was written as
    fn passthrough(&mut self, sigil: char, selector: char) {
        let group = self.current();
        group.push_char(sigil);
        group.push_char(selector);
    }

    fn color(&mut self, selector: char) {
        if selector == RESET {
            self.current().style.clear_color();
        } else if let Some(code) = style::color_code(selector) {
            self.current().style.set_color(code);
        } else {
            self.passthrough(COLOR, selector);
        }
    }

    fn attribute(&mut self, selector: char) {
        if selector == RESET {
            self.current().style.clear_attributes();
        } else if let Some(attr) = style::attribute_for(selector) {
            self.current().style.set_attribute(attr);
        } else if let Some(attr) = style::cleared_attribute_for(selector) {
            self.current().style.clear_attribute(attr);
        } else {
            self.passthrough(ATTRIBUTE, selector);
        }
    }

    fn data(&mut self, selector: char) {
        let Some(placeholder) = Placeholder::from_selector(selector) else {
            self.passthrough(DATA, selector);
            return;
        };

        let status = self.status;
        let group = self.current();
        group.has_data = true;
        match status.count(placeholder) {
            None => {
                group.has_value = true;
                group.push_str(status.head());
            }
            Some(value) => {
                if value > 0 {
                    group.has_value = true;
                }
                group.push_str(itoa::Buffer::new().format(value));
            }
        }
    }

    fn open_group(&mut self) {
        let child = self.current().child();
        self.groups.push(child);
    }

    fn close_group(&mut self) {
        // A close at root depth has nothing to close.
        if self.groups.len() == 1 {
            return;
        }
        if let Some(child) = self.groups.pop() {
            if child.is_kept() {
                self.current().absorb(child);
            } else {
                log::trace!("dropping group with only zero values: {:?}", child.buf);
            }
        }
    }

    fn finish(mut self) -> Rendered {
        if let Some(sigil) = self.pending.sigil() {
            self.current().push_char(sigil);
        }

        // Unbalanced groups are kept as written.
        while self.groups.len() > 1 {
            if let Some(child) = self.groups.pop() {
                self.current().absorb(child);
            }
        }

        let mut root = self.groups.swap_remove(0);
        root.style.reset();
        root.style.flush(&mut root.buf);

        Rendered {
            text: root.buf,
            width: root.width,
        }
    }
}
