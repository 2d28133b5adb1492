pub mod reader;
pub mod string;
pub mod writer;

pub use reader::BitReader;
pub use string::BitString;
pub use writer::BitWriter;
