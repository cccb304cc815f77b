//! The three-symbol alphabet and source filtering.

/// One significant source character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Symbol {
    Space,
    Tab,
    Newline,
}

impl Symbol {
    pub(crate) fn from_char(c: char) -> Option<Self> {
        match c {
            ' ' => Some(Symbol::Space),
            '\t' => Some(Symbol::Tab),
            '\n' => Some(Symbol::Newline),
            _ => None,
        }
    }

    pub(crate) fn as_char(self) -> char {
        match self {
            Symbol::Space => ' ',
            Symbol::Tab => '\t',
            Symbol::Newline => '\n',
        }
    }

    /// Single-letter rendering used in diagnostics.
    pub(crate) fn letter(self) -> char {
        match self {
            Symbol::Space => 'S',
            Symbol::Tab => 'T',
            Symbol::Newline => 'L',
        }
    }

    /// Bit value inside a numeric literal. Newline never appears there.
    pub(crate) fn bit(self) -> u32 {
        match self {
            Symbol::Tab => 1,
            Symbol::Space | Symbol::Newline => 0,
        }
    }
}

/// Source text reduced to its significant symbols.
///
/// `lines[i]` is the 1-based source line of `symbols[i]`.
#[derive(Debug, Default)]
pub(crate) struct Filtered {
    pub(crate) symbols: Vec<Symbol>,
    pub(crate) lines: Vec<usize>,
}

/// Drop every character other than space, tab and newline.
pub(crate) fn filter(text: &str) -> Filtered {
    let mut filtered = Filtered::default();
    let mut line = 1;
    for c in text.chars() {
        if let Some(symbol) = Symbol::from_char(c) {
            filtered.symbols.push(symbol);
            filtered.lines.push(line);
        }
        if c == '\n' {
            line += 1;
        }
    }
    filtered
}

/// Render symbols as `S`/`T`/`L` letters.
pub(crate) fn render(symbols: &[Symbol]) -> String {
    symbols.iter().map(|s| s.letter()).collect()
}
