pub mod encoded;
pub mod parallel;
pub mod single;

pub use encoded::Encoded;
pub use parallel::ParallelCodec;
pub use single::HuffmanCodec;
