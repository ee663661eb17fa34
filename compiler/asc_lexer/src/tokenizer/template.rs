//! Template literal segments.

use super::Tokenizer;

/// One literal segment of a template, between the backticks and any
/// `${ }` interpolations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TemplatePart {
    /// Value with escapes applied.
    pub cooked: String,
    /// Source text as written.
    pub raw: String,
    /// Whether an interpolation follows this segment.
    pub interpolation: bool,
}

/// Walks the segments of one template literal.
///
/// The caller alternates: read a part, and while it reports an
/// interpolation, parse the embedded expression and consume its closing
/// `}` before reading the next part.
#[derive(Copy, Clone, Debug, Default)]
pub struct TemplateReader {
    tagged: bool,
    started: bool,
    finished: bool,
}

impl TemplateReader {
    pub fn new(is_tagged_template: bool) -> Self {
        TemplateReader {
            tagged: is_tagged_template,
            started: false,
            finished: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Reads the next segment. The first call expects the tokenizer at the
    /// opening backtick.
    pub fn read_part(&mut self, tokenizer: &mut Tokenizer<'_>) -> TemplatePart {
        let quote = self.started.then_some(b'`');
        self.started = true;
        let cooked = tokenizer.read_string(quote, self.tagged);
        let interpolation = tokenizer.reading_template_string();
        self.finished = !interpolation;
        TemplatePart {
            cooked,
            raw: tokenizer.read_string_raw().to_owned(),
            interpolation,
        }
    }
}
