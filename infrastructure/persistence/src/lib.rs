pub mod db;
pub mod errors;
pub mod query;
pub mod seed;
pub mod category {
    pub mod entity;
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
