pub mod api;
pub mod fragments;
