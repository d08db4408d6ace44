//! Indentation unit of generated files.

/// One level of indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Spaces(usize),
    Tab,
}

impl Indent {
    /// Prettier's default, used throughout generated Next.js code.
    pub const TYPESCRIPT: Self = Self::Spaces(2);

    /// Append `level` indentation units to `buffer`.
    pub fn write(&self, buffer: &mut String, level: usize) {
        match self {
            Self::Spaces(width) => buffer.extend(std::iter::repeat_n(' ', width * level)),
            Self::Tab => buffer.extend(std::iter::repeat_n('\t', level)),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TYPESCRIPT
    }
}
