pub mod industry;
pub mod survey;
pub mod table;
