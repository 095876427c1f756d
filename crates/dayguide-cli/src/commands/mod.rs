pub mod labels;
pub mod parse;
pub mod text;
