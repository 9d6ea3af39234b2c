pub mod form;
pub mod recommendation;
