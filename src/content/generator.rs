//! Line generators for the streaming phase.
//!
//! A [`LineSource`] produces the "long" lines (boot step labels or category
//! loader messages). [`SnippetMixer`] sits on top and occasionally swaps in a
//! short snippet, never two in a row.

use rand::Rng;

use super::types::BootStep;

const LINE_PROMPT: &str = "> ";

/// Anything that can produce the next long line of the stream.
pub trait LineSource {
    fn next_line<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String;
}

impl AsRef<str> for BootStep {
    fn as_ref(&self) -> &str {
        &self.label
    }
}

/// Uniform random pick from a pool, prompt-prefixed.
#[derive(Debug, Clone)]
pub struct RandomPick<'a, T> {
    items: &'a [T],
    placeholder: String,
}

impl<'a, T: AsRef<str>> RandomPick<'a, T> {
    pub fn new(items: &'a [T], placeholder: impl Into<String>) -> Self {
        Self {
            items,
            placeholder: placeholder.into(),
        }
    }
}

impl<T: AsRef<str>> LineSource for RandomPick<'_, T> {
    fn next_line<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String {
        if self.items.is_empty() {
            return self.placeholder.clone();
        }
        let item = &self.items[rng.gen_range(0..self.items.len())];
        format!("{LINE_PROMPT}{}", item.as_ref())
    }
}

/// Walks a pool in order and wraps around.
#[derive(Debug, Clone)]
pub struct SequentialCycle<'a, T> {
    items: &'a [T],
    cursor: usize,
    placeholder: String,
}

impl<'a, T: AsRef<str>> SequentialCycle<'a, T> {
    pub fn new(items: &'a [T], placeholder: impl Into<String>) -> Self {
        Self {
            items,
            cursor: 0,
            placeholder: placeholder.into(),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl<T: AsRef<str>> LineSource for SequentialCycle<'_, T> {
    fn next_line<R: Rng + ?Sized>(&mut self, _rng: &mut R) -> String {
        if self.items.is_empty() {
            return self.placeholder.clone();
        }
        let text = format!("{LINE_PROMPT}{}", self.items[self.cursor].as_ref());
        self.cursor = (self.cursor + 1) % self.items.len();
        text
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    Short,
    Long,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixedLine {
    pub text: String,
    pub class: LineClass,
}

/// Mixes short snippets into a long-line source.
///
/// Each call rolls against `short_chance`; a short pick is only allowed if the
/// previous pick was long.
#[derive(Debug, Clone)]
pub struct SnippetMixer<'a> {
    snippets: &'a [String],
    short_chance: f64,
    last_was_short: bool,
}

impl<'a> SnippetMixer<'a> {
    pub fn new(snippets: &'a [String], short_chance: f64) -> Self {
        Self {
            snippets,
            short_chance,
            last_was_short: false,
        }
    }

    pub fn next_line<R, S>(&mut self, rng: &mut R, source: &mut S) -> MixedLine
    where
        R: Rng + ?Sized,
        S: LineSource,
    {
        let roll: f64 = rng.gen();
        let use_short =
            roll < self.short_chance && !self.last_was_short && !self.snippets.is_empty();

        if use_short {
            self.last_was_short = true;
            let text = self.snippets[rng.gen_range(0..self.snippets.len())].clone();
            MixedLine {
                text,
                class: LineClass::Short,
            }
        } else {
            self.last_was_short = false;
            MixedLine {
                text: source.next_line(rng),
                class: LineClass::Long,
            }
        }
    }
}

/// "Contact Me" → "contact_me".
pub fn category_slug(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

/// Uppercases the first character, leaves the rest alone.
pub fn display_label(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
