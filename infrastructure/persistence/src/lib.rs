pub mod store;
pub mod cart {
    pub mod repository;
}
pub mod item {
    pub mod repository;
}
