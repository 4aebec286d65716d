pub mod store;
pub mod event {
    pub mod entity;
    pub mod repository;
}
pub mod ingredient {
    pub mod entity;
    pub mod repository;
}
pub mod meal {
    pub mod entity;
    pub mod repository;
}
pub mod participant {
    pub mod entity;
    pub mod repository;
}
pub mod shopping_list {
    pub mod entity;
    pub mod repository;
}
