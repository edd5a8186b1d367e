use crate::foundation::error::{ScrambleError, ScrambleResult};
use crate::foundation::rng::Rng64;

/// Default placeholder alphabet.
///
/// The duplicated trailing underscores deliberately weight the draw toward
/// underscore, which reads as "static" between the flashier symbols.
pub const DEFAULT_GLYPHS: &str = "!<>-_\\/[]{}—=+*^?#________";

/// Validated, non-empty placeholder alphabet.
///
/// Serialized as a plain string: `"!<>-_"` in JSON becomes the five glyphs
/// `!`, `<`, `>`, `-`, `_`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GlyphSet {
    glyphs: Vec<char>,
}

impl GlyphSet {
    /// Build a glyph set from an alphabet string. Repeated characters are
    /// kept: they raise that character's draw weight.
    pub fn new(alphabet: &str) -> ScrambleResult<Self> {
        let glyphs: Vec<char> = alphabet.chars().collect();
        if glyphs.is_empty() {
            return Err(ScrambleError::validation("glyph alphabet must be non-empty"));
        }
        Ok(Self { glyphs })
    }

    /// Number of draw slots (repeats included).
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false; the constructor rejects empty alphabets.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Whether `c` can be drawn from this set.
    pub fn contains(&self, c: char) -> bool {
        self.glyphs.contains(&c)
    }

    /// The alphabet as a string, repeats included.
    pub fn alphabet(&self) -> String {
        self.glyphs.iter().collect()
    }

    /// Draw one glyph uniformly over the slots.
    pub(crate) fn pick(&self, rng: &mut Rng64) -> char {
        let idx = rng.next_below(self.glyphs.len() as u64) as usize;
        self.glyphs[idx]
    }
}

impl Default for GlyphSet {
    fn default() -> Self {
        // DEFAULT_GLYPHS is non-empty, so this cannot fail.
        Self {
            glyphs: DEFAULT_GLYPHS.chars().collect(),
        }
    }
}

impl TryFrom<String> for GlyphSet {
    type Error = ScrambleError;

    fn try_from(s: String) -> ScrambleResult<Self> {
        Self::new(&s)
    }
}

impl From<GlyphSet> for String {
    fn from(set: GlyphSet) -> String {
        set.alphabet()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/glyphs.rs"]
mod tests;
