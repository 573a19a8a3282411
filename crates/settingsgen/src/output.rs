/*
 * output.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Append-only, block-based text storage.
//!
//! Generated text is collected here until the whole run has succeeded, and
//! only then written to its destination. Storage grows in fixed-size blocks
//! so very large outputs never need one big contiguous reallocation.

use std::io::Write;

use crate::error::{GenError, Result};

/// Default capacity of a single output block, in bytes.
pub const DEFAULT_BLOCK_SIZE: usize = 16_000;

/// One fixed-capacity block of stored output.
#[derive(Debug)]
struct OutputBlock {
    data: Vec<u8>,
}

impl OutputBlock {
    fn new(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Store as much of `bytes` as fits, returning the number of bytes stored.
    fn add(&mut self, bytes: &[u8], capacity: usize) -> usize {
        let stored = bytes.len().min(capacity - self.data.len());
        self.data.extend_from_slice(&bytes[..stored]);
        stored
    }

    fn has_room(&self, capacity: usize) -> bool {
        self.data.len() < capacity
    }
}

/// Temporary storage for generated output.
#[derive(Debug)]
pub struct OutputStore {
    blocks: Vec<OutputBlock>,
    block_size: usize,
}

impl Default for OutputStore {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputStore {
    /// Create an empty store using [`DEFAULT_BLOCK_SIZE`].
    pub fn new() -> Self {
        Self::with_block_size(DEFAULT_BLOCK_SIZE)
    }

    /// Create an empty store with a custom block capacity (at least one byte).
    pub fn with_block_size(block_size: usize) -> Self {
        Self {
            blocks: Vec::new(),
            block_size: block_size.max(1),
        }
    }

    /// Drop all stored output.
    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    /// Append text, filling the last block before allocating new ones.
    ///
    /// Text is split at byte granularity; blocks are only ever written out
    /// back to back, so a character split across two blocks is reassembled.
    pub fn add(&mut self, text: &str) {
        let mut bytes = text.as_bytes();
        let capacity = self.block_size;

        if let Some(last) = self.blocks.last_mut().filter(|b| b.has_room(capacity)) {
            let stored = last.add(bytes, capacity);
            bytes = &bytes[stored..];
        }

        while !bytes.is_empty() {
            let mut block = OutputBlock::new(capacity);
            let stored = block.add(bytes, capacity);
            bytes = &bytes[stored..];
            self.blocks.push(block);
        }
    }

    /// Total number of stored bytes.
    pub fn len(&self) -> usize {
        self.blocks.iter().map(|b| b.data.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|b| b.data.is_empty())
    }

    /// Number of allocated blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Write all stored output, in order, to `out`.
    ///
    /// A destination that does not accept every byte is an error.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        for block in &self.blocks {
            out.write_all(&block.data).map_err(GenError::Write)?;
        }
        Ok(())
    }

    /// Copy of the stored output as a string, mainly for tests and logging.
    pub fn to_string_lossy(&self) -> String {
        let mut bytes = Vec::with_capacity(self.len());
        for block in &self.blocks {
            bytes.extend_from_slice(&block.data);
        }
        String::from_utf8_lossy(&bytes).into_owned()
    }
}
