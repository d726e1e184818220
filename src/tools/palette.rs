use crate::error::ToolError;

/// The sticker glyphs offered in the toolbar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StickerPalette {
    glyphs: Vec<String>,
}

impl StickerPalette {
    /// Palette seeded with `glyphs`; blank and duplicate entries are skipped.
    pub fn new<I, S>(glyphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut palette = Self::default();
        for glyph in glyphs {
            if let Err(err) = palette.add(glyph.as_ref()) {
                log::warn!("Skipping default sticker: {err}");
            }
        }
        palette
    }

    /// Add a custom sticker, returning its index. An existing glyph is not added twice.
    pub fn add(&mut self, glyph: &str) -> Result<usize, ToolError> {
        let glyph = glyph.trim();
        if glyph.is_empty() {
            return Err(ToolError::EmptyGlyph);
        }
        if let Some(index) = self.glyphs.iter().position(|g| g == glyph) {
            return Ok(index);
        }
        self.glyphs.push(glyph.to_owned());
        Ok(self.glyphs.len() - 1)
    }

    pub fn glyphs(&self) -> &[String] {
        &self.glyphs
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.glyphs.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_and_dedupes() {
        let palette = StickerPalette::new(["🐱", "🌮", "🐱", " "]);
        assert_eq!(palette.glyphs(), &["🐱".to_owned(), "🌮".to_owned()]);
    }

    #[test]
    fn add_returns_index() {
        let mut palette = StickerPalette::new(["⭐"]);
        assert_eq!(palette.add(" 🦀 "), Ok(1));
        assert_eq!(palette.add("⭐"), Ok(0));
        assert_eq!(palette.get(1), Some("🦀"));
        assert_eq!(palette.add(""), Err(ToolError::EmptyGlyph));
        assert_eq!(palette.len(), 2);
    }
}
