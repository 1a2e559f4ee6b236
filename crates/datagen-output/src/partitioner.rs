//! Work partitioning for parallel generation.
//!
//! Splits a requested row count into per-worker chunks with disjoint,
//! contiguous id ranges so concurrently produced shards never collide on
//! key space.

/// What to do with the `total % per_chunk` leftover rows when the request
/// does not divide evenly.
///
/// The classic generator floor-divided and silently dropped the remainder;
/// `Truncate` reproduces that for compatibility. `EmitFinalChunk` is the
/// corrected default: a final, shorter chunk covers the leftover rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemainderPolicy {
    #[default]
    EmitFinalChunk,
    Truncate,
}

/// One worker's assignment: a contiguous id range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkPlan {
    /// Chunk index, used as the output file suffix.
    pub index: u64,
    /// First id of the chunk's reserved range.
    pub start_id: u64,
    /// Number of rows (and ids) in the chunk.
    pub row_count: u64,
}

impl ChunkPlan {
    /// Last id of the chunk's reserved range.
    pub fn end_id(&self) -> u64 {
        self.start_id + self.row_count - 1
    }
}

/// Split `total` rows into chunk plans of `per_chunk` rows each, assigning
/// ids from `id_start` upward.
///
/// A request of at most `per_chunk` rows yields a single chunk. Otherwise
/// `total / per_chunk` full chunks are produced, plus - depending on
/// `policy` - a final chunk for the remainder. Ranges are disjoint and
/// contiguous; chunk `p` covers
/// `[id_start + p*per_chunk, id_start + (p+1)*per_chunk - 1]`.
pub fn partition(
    total: u64,
    per_chunk: u64,
    id_start: u64,
    policy: RemainderPolicy,
) -> Vec<ChunkPlan> {
    if total == 0 {
        return Vec::new();
    }
    if total <= per_chunk {
        return vec![ChunkPlan {
            index: 0,
            start_id: id_start,
            row_count: total,
        }];
    }

    let full_chunks = total / per_chunk;
    let remainder = total % per_chunk;

    let mut plans = Vec::with_capacity(full_chunks as usize + 1);
    for p in 0..full_chunks {
        plans.push(ChunkPlan {
            index: p,
            start_id: id_start + p * per_chunk,
            row_count: per_chunk,
        });
    }
    if remainder > 0 && policy == RemainderPolicy::EmitFinalChunk {
        plans.push(ChunkPlan {
            index: full_chunks,
            start_id: id_start + full_chunks * per_chunk,
            row_count: remainder,
        });
    }
    plans
}

/// Describe a partitioning plan for logging.
pub fn describe_plan(plans: &[ChunkPlan]) -> String {
    let mut lines = Vec::with_capacity(plans.len() + 1);
    lines.push("Chunk assignment:".to_string());
    for plan in plans {
        lines.push(format!(
            "  chunk {}: ids {}..={} ({} rows)",
            plan.index,
            plan.start_id,
            plan.end_id(),
            plan.row_count
        ));
    }
    lines.join("\n")
}
