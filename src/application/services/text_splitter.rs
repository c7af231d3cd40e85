pub const DEFAULT_CHUNK_SIZE: usize = 500;
pub const DEFAULT_CHUNK_OVERLAP: usize = 50;

pub trait TextSplitter: Send + Sync {
    fn split_text(&self, text: &str) -> Vec<String>;
}

/// Fixed-size character windows. Consecutive windows share `chunk_overlap`
/// characters; the last window always ends at the end of the text.
/// Unlike langchain's `CharacterTextSplitter`, which first splits on `"\n\n"`
/// and merges paragraphs, boundaries here ignore paragraph breaks so the
/// chunk count depends only on text length.
#[derive(Debug, Clone)]
pub struct CharacterTextSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl Default for CharacterTextSplitter {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}

impl CharacterTextSplitter {
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self, String> {
        if chunk_size == 0 {
            return Err("Chunk size must be greater than zero".to_string());
        }
        if chunk_overlap >= chunk_size {
            return Err(format!(
                "Chunk overlap ({}) must be smaller than chunk size ({})",
                chunk_overlap, chunk_size
            ));
        }

        Ok(Self {
            chunk_size,
            chunk_overlap,
        })
    }

    /// Number of windows a text of `len` characters is cut into, before
    /// whitespace-only windows are dropped.
    pub fn window_count(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        if len <= self.chunk_size {
            return 1;
        }

        let step = self.chunk_size - self.chunk_overlap;
        (len - self.chunk_overlap).div_ceil(step)
    }
}

impl TextSplitter for CharacterTextSplitter {
    fn split_text(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut chunks = Vec::with_capacity(self.window_count(chars.len()));

        if chars.is_empty() {
            return chunks;
        }

        let step = self.chunk_size - self.chunk_overlap;
        let mut start = 0;

        loop {
            let end = (start + self.chunk_size).min(chars.len());
            let window: String = chars[start..end].iter().collect();
            let trimmed = window.trim();

            if !trimmed.is_empty() {
                chunks.push(trimmed.to_string());
            }

            if end == chars.len() {
                break;
            }

            start += step;
        }

        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(len: usize) -> String {
        (0..len)
            .map(|i| char::from(b'a' + (i % 26) as u8))
            .collect()
    }

    #[test]
    fn test_short_text() {
        let splitter = CharacterTextSplitter::default();
        let chunks = splitter.split_text("Short text");

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], "Short text");
    }

    #[test]
    fn test_empty_and_blank_text() {
        let splitter = CharacterTextSplitter::default();

        assert!(splitter.split_text("").is_empty());
        assert!(splitter.split_text("   \n\n  ").is_empty());
    }

    #[test]
    fn test_window_counts() {
        let splitter = CharacterTextSplitter::default();

        for (len, expected) in [(1, 1), (500, 1), (501, 2), (950, 2), (951, 3), (1000, 3), (2000, 5)] {
            let chunks = splitter.split_text(&letters(len));
            assert_eq!(chunks.len(), expected, "text of length {}", len);
            assert_eq!(splitter.window_count(len), expected);
        }
    }

    #[test]
    fn test_chunks_overlap() {
        let splitter = CharacterTextSplitter::new(10, 3).unwrap();
        let text = letters(24);
        let chunks = splitter.split_text(&text);

        // windows start at 0, 7, 14 and the last one ends at 24
        assert_eq!(chunks, vec![&text[0..10], &text[7..17], &text[14..24]]);
        for pair in chunks.windows(2) {
            assert_eq!(&pair[0][7..], &pair[1][..3]);
        }
    }

    #[test]
    fn test_chunk_size_limit_counts_chars() {
        let splitter = CharacterTextSplitter::new(4, 1).unwrap();
        let chunks = splitter.split_text("ééééééé");

        assert!(chunks.iter().all(|c| c.chars().count() <= 4));
        assert_eq!(chunks.len(), 2);
    }

    #[test]
    fn test_invalid_configuration() {
        assert!(CharacterTextSplitter::new(0, 0).is_err());
        assert!(CharacterTextSplitter::new(50, 50).is_err());
        assert!(CharacterTextSplitter::new(50, 49).is_ok());
    }
}
