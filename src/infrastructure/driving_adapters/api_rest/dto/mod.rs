//! Data Transfer Objects

pub mod country;

pub use country::{
    CountryResponseDto, DeleteResponseDto, ListCountriesParams, RefreshResponseDto,
    StatusResponseDto,
};
