pub mod block_quote;
pub mod callout_fence;
pub mod code_fence;
pub mod heading;
pub mod hero;
pub mod image;
pub mod list;
pub mod paragraph;
pub mod pipe_table;

pub use block_quote::BlockQuote;
pub use callout_fence::{CalloutFence, CalloutOpen};
pub use code_fence::{CodeFence, FenceKind};
pub use heading::Heading;
pub use hero::{BoldLine, Meta, Rule};
pub use image::{Image, ImageLine};
pub use list::{ListKind, ListMarker};
pub use paragraph::Paragraph;
pub use pipe_table::PipeTable;
