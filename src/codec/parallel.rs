//! Parallel batch coding using a worker pool.
//!
//! Architecture:
//! - Feeder thread: send `(index, input)` jobs
//! - Worker pool: run one complete pipeline per job
//! - Main thread: collect results and restore input order
//!
//! Each job owns its whole pipeline, so workers share no mutable state.

use crossbeam::channel::{bounded, Receiver, Sender};
use log::debug;

use super::encoded::Encoded;
use super::single::HuffmanCodec;
use crate::error::{Error, Result};
use crate::{BatchEncoder, CodecConfig};

/// A single input to encode
struct CodingJob<'a> {
    /// Position in the batch, for ordering output
    index: usize,
    input: &'a [u8],
}

/// Result of coding a single input
struct CodedInput {
    index: usize,
    result: Result<Encoded>,
}

/// Batch coder that spreads independent inputs over threads
pub struct ParallelCodec {
    config: CodecConfig,
}

impl ParallelCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    fn effective_threads(&self) -> usize {
        match self.config.num_threads {
            0 => num_cpus::get().clamp(1, 32),
            n => n.clamp(1, 32),
        }
    }
}

impl BatchEncoder for ParallelCodec {
    fn compress_batch<I: AsRef<[u8]> + Sync>(
        &self,
        inputs: &[I],
    ) -> Result<Vec<Result<Encoded>>> {
        let num_threads = self.effective_threads().min(inputs.len());

        // For one thread (or fewer than two inputs), run the pipelines inline
        if num_threads <= 1 {
            return HuffmanCodec::new(self.config.clone()).compress_batch(inputs);
        }

        self.compress_parallel(inputs, num_threads)
    }
}

impl ParallelCodec {
    fn compress_parallel<I: AsRef<[u8]> + Sync>(
        &self,
        inputs: &[I],
        num_threads: usize,
    ) -> Result<Vec<Result<Encoded>>> {
        let channel_capacity = num_threads * 4;

        let (job_tx, job_rx): (Sender<CodingJob<'_>>, Receiver<CodingJob<'_>>) =
            bounded(channel_capacity);
        let (result_tx, result_rx): (Sender<CodedInput>, Receiver<CodedInput>) =
            bounded(channel_capacity);

        debug!("coding {} inputs on {} threads", inputs.len(), num_threads);

        let result = crossbeam::scope(|scope| {
            for _ in 0..num_threads {
                let job_rx = job_rx.clone();
                let result_tx = result_tx.clone();
                let codec = HuffmanCodec::new(self.config.clone());

                scope.spawn(move |_| {
                    worker_thread(codec, job_rx, result_tx);
                });
            }

            // Drop our copies of the channels that workers use
            drop(job_rx);
            drop(result_tx);

            scope.spawn(move |_| {
                for (index, input) in inputs.iter().enumerate() {
                    if job_tx.send(CodingJob { index, input: input.as_ref() }).is_err() {
                        break;
                    }
                }
            });

            collect_in_order(inputs.len(), result_rx)
        });

        result.map_err(|_| Error::Internal("Thread panicked".to_string()))
    }
}

/// Worker thread function: runs the full pipeline for each job
fn worker_thread(
    codec: HuffmanCodec,
    job_rx: Receiver<CodingJob<'_>>,
    result_tx: Sender<CodedInput>,
) {
    while let Ok(job) = job_rx.recv() {
        let result = codec.compress(job.input);

        if result_tx.send(CodedInput { index: job.index, result }).is_err() {
            // Main thread has stopped, exit
            break;
        }
    }
}

/// Place every result at its input's position
fn collect_in_order(len: usize, result_rx: Receiver<CodedInput>) -> Vec<Result<Encoded>> {
    let mut slots: Vec<Option<Result<Encoded>>> = (0..len).map(|_| None).collect();

    for coded in result_rx.iter() {
        slots[coded.index] = Some(coded.result);
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(index, slot)| {
            slot.unwrap_or_else(|| Err(Error::Internal(format!("No result for input {}", index))))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_matches_single() {
        let inputs: Vec<Vec<u8>> = (0..40)
            .map(|i| format!("input number {} with some repeated text {}", i, "ab".repeat(i)))
            .map(String::into_bytes)
            .collect();

        let config = CodecConfig { num_threads: 4, verify: true };
        let parallel = ParallelCodec::new(config.clone()).compress_batch(&inputs).unwrap();
        let single = HuffmanCodec::new(config).compress_batch(&inputs).unwrap();

        assert_eq!(parallel.len(), inputs.len());
        for ((input, p), s) in inputs.iter().zip(parallel).zip(single) {
            let p = p.unwrap();
            let s = s.unwrap();
            assert_eq!(p.stream(), s.stream());
            assert_eq!(&p.decode().unwrap(), input);
        }
    }

    #[test]
    fn test_parallel_empty_and_single_inputs() {
        let inputs: Vec<&[u8]> =
            vec![b"".as_slice(), b"q".as_slice(), b"qqqq".as_slice(), b"".as_slice()];
        let codec = ParallelCodec::new(CodecConfig { num_threads: 3, ..Default::default() });
        let results = codec.compress_batch(&inputs).unwrap();

        assert_eq!(results.len(), 4);
        for (input, result) in inputs.iter().zip(results) {
            assert_eq!(result.unwrap().decode().unwrap(), *input);
        }
    }

    #[test]
    fn test_parallel_empty_batch() {
        let inputs: Vec<Vec<u8>> = Vec::new();
        let codec = ParallelCodec::new(CodecConfig { num_threads: 4, ..Default::default() });
        assert!(codec.compress_batch(&inputs).unwrap().is_empty());
    }

    #[test]
    fn test_effective_threads() {
        let codec = ParallelCodec::new(CodecConfig { num_threads: 0, ..Default::default() });
        let threads = codec.effective_threads();
        assert!(threads >= 1);
        assert!(threads <= 32);

        let codec = ParallelCodec::new(CodecConfig { num_threads: 100, ..Default::default() });
        assert_eq!(codec.effective_threads(), 32); // Capped at 32
    }
}
