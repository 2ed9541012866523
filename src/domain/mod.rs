pub mod department;
pub mod error;
pub mod repository;
