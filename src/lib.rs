pub mod clippings;
pub mod pipeline;
pub mod utility;
