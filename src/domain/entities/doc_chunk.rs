use pgvector::Vector;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocChunk {
    id: i32,
    content: String,
    embedding: Vector,
    source: Option<String>,
}

impl DocChunk {
    pub fn new(id: i32, content: String, embedding: Vector, source: Option<String>) -> Self {
        Self {
            id,
            content,
            embedding,
            source,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn embedding(&self) -> &Vector {
        &self.embedding
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn dimension(&self) -> usize {
        self.embedding.as_slice().len()
    }
}

/// A chunk ready to be stored. Chunks are only ever created by ingestion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDocChunk {
    content: String,
    embedding: Vector,
    source: Option<String>,
}

impl NewDocChunk {
    pub fn new(content: String, embedding: Vector, source: Option<String>) -> Self {
        Self {
            content,
            embedding,
            source,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn embedding(&self) -> &Vector {
        &self.embedding
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn dimension(&self) -> usize {
        self.embedding.as_slice().len()
    }
}

/// Dimension shared by every chunk in `chunks`, or an error naming the first
/// chunk that disagrees.
pub fn uniform_dimension(chunks: &[NewDocChunk]) -> Result<Option<usize>, String> {
    let Some(first) = chunks.first() else {
        return Ok(None);
    };
    let expected = first.dimension();

    for (index, chunk) in chunks.iter().enumerate().skip(1) {
        if chunk.dimension() != expected {
            return Err(format!(
                "Chunk {} has {} dimensions, expected {}",
                index,
                chunk.dimension(),
                expected
            ));
        }
    }

    Ok(Some(expected))
}

/// One row of a nearest-neighbor lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkMatch {
    pub id: i32,
    pub content: String,
    pub source: Option<String>,
    pub similarity: f64,
}

impl ChunkMatch {
    pub fn from_distance(id: i32, content: String, source: Option<String>, distance: f64) -> Self {
        Self {
            id,
            content,
            source,
            similarity: similarity_from_distance(distance),
        }
    }
}

/// `1 - distance`, rounded to four decimals.
pub fn similarity_from_distance(distance: f64) -> f64 {
    ((1.0 - distance) * 10_000.0).round() / 10_000.0
}
