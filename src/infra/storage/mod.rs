pub mod entity;
pub mod mapper;
pub mod sea_orm_repo;
