// SPDX-FileCopyrightText: 2026 Intake Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Byte-range partitioning of CSV files.
//!
//! The data region of a file, everything after the header record, is cut
//! into `[start, end)` byte ranges. A line belongs to the block that contains
//! its first byte, so every line is read by exactly one block
//! without parsing the file up front. Quoted fields spanning newlines are not
//! supported when a blocksize is set.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// One partition: a byte range of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub path: PathBuf,
    pub start: u64,
    pub end: u64,
}

/// Split the data region `[data_start, len)` of `path` into blocks of at most
/// `blocksize` bytes. Without a blocksize, or when there is no data, the
/// whole region is one block.
///
/// `data_start` must be 0 or the offset just past a line terminator.
pub fn plan_blocks(path: &Path, data_start: u64, len: u64, blocksize: Option<u64>) -> Vec<Block> {
    let data_start = data_start.min(len);
    let whole = || {
        vec![Block {
            path: path.to_path_buf(),
            start: data_start,
            end: len,
        }]
    };

    let Some(size) = blocksize.filter(|size| *size > 0) else {
        return whole();
    };
    if len == data_start {
        return whole();
    }

    let mut blocks = Vec::new();
    let mut start = data_start;
    while start < len {
        let end = (start + size).min(len);
        blocks.push(Block {
            path: path.to_path_buf(),
            start,
            end,
        });
        start = end;
    }
    blocks
}

/// Read the raw lines owned by `block`.
pub fn read_block_lines(block: &Block) -> io::Result<Vec<u8>> {
    let mut file = File::open(&block.path)?;
    let mut pos = if block.start == 0 { 0 } else { block.start - 1 };
    file.seek(SeekFrom::Start(pos))?;
    let mut reader = BufReader::new(file);

    let mut line = Vec::new();
    if block.start > 0 {
        // Discard the tail of the line that began in the previous block.
        pos += reader.read_until(b'\n', &mut line)? as u64;
    }

    let mut out = Vec::new();
    while pos < block.end {
        line.clear();
        let read = reader.read_until(b'\n', &mut line)?;
        if read == 0 {
            break;
        }
        pos += read as u64;
        out.extend_from_slice(&line);
    }
    Ok(out)
}
