mod command;
mod parser;
mod resolve;
mod rough_path;
mod tokens;

pub use command::Command;
pub use parser::{parse_path, parse_tokens, Segment};
pub use resolve::{resolve, ResolvedSegment};
pub use rough_path::RoughPath;
pub use tokens::{tokenize, Token};
