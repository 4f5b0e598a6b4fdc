pub mod cart;
pub mod catalog;
pub mod multiplication;
pub mod product;
pub mod random_number;
pub mod registration;
pub mod survey;
