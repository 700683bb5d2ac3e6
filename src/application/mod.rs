/// Application layer: use case orchestration, DTOs and read models
pub mod dto;
pub mod read_models;
pub mod use_cases;
