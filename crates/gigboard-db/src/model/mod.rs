pub mod category;
pub mod skill;
pub mod subcategory;
pub mod user;
