//! Basic Text Chunking
//!
//! Chunk a document for per-chunk model calls and report the overhead.
//!
//! ```bash
//! cargo run --example basic_chunking
//! ```

use chunkwise::{word_count, ChunkStats, StructuralChunker};

fn main() {
    let document = "INTRODUCTION\n\
        Machine learning models learn patterns from data. \
        They generalize these patterns to make predictions.\n\
        \n\
        This is fundamentally different from traditional programming. \
        Deep learning extends this with multiple hidden layers. \
        Each layer learns increasingly abstract representations.\n\
        1.1 Training\n\
        Models are fit by minimizing a loss over examples.";

    let chunker = StructuralChunker::new(20, 4);
    let total_words = word_count(document);

    // Chunks are produced one at a time, as a downstream call would consume them
    let mut chunks = Vec::new();
    for chunk in chunker.split(document) {
        println!("[{}] {} words ({} overlap):", chunk.index, chunk.words, chunk.overlap);
        println!("{}\n", chunk.text);
        chunks.push(chunk);
    }

    let stats = ChunkStats::compute(&chunks, total_words).with_config(chunker.config());
    println!("{stats}");
}
