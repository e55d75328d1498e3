pub mod category;
pub mod name;
pub mod price;
pub mod rating;
