pub mod codes;
pub mod decoder;
pub mod encoder;
pub mod frequency;
pub mod tree;

pub use codes::{code_table, CodeTable};
pub use decoder::{decode, HuffmanDecoder};
pub use encoder::{encode, HuffmanEncoder};
pub use frequency::{frequencies, FrequencyTable};
pub use tree::{build_tree, HuffmanTree, Node};
