use crate::prelude::*;

/// An inclusive range of block numbers, `from..=to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, derive_more::Display)]
#[display("{from}..={to}")]
pub struct BlockRange {
    #[getset(get = "pub")]
    from: u64,

    #[getset(get = "pub")]
    to: u64,
}

impl BlockRange {
    pub fn new(from: u64, to: u64) -> Self {
        Self { from, to }
    }

    pub fn len(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            (self.to - self.from).saturating_add(1)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.to < self.from
    }

    /// Splits the range into consecutive chunks of at most `chunk_size`
    /// blocks, the last one ending at `to`.
    ///
    /// # Panics
    /// Panics if `chunk_size` is zero.
    pub fn chunks(&self, chunk_size: u64) -> BlockChunks {
        assert!(chunk_size > 0, "chunk size must be positive");
        BlockChunks {
            next_from: Some(self.from),
            to: self.to,
            chunk_size,
        }
    }
}

/// Iterator over the chunks of a [`BlockRange`], with no gaps or overlaps.
#[derive(Debug, Clone)]
pub struct BlockChunks {
    next_from: Option<u64>,
    to: u64,
    chunk_size: u64,
}

impl Iterator for BlockChunks {
    type Item = BlockRange;

    fn next(&mut self) -> Option<Self::Item> {
        let from = self.next_from.filter(|from| *from <= self.to)?;
        let chunk_to = from.saturating_add(self.chunk_size - 1).min(self.to);
        self.next_from = chunk_to.checked_add(1);
        Some(BlockRange::new(from, chunk_to))
    }
}
