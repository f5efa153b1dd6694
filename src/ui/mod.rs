pub mod cards;
pub mod panels;
pub mod report;
