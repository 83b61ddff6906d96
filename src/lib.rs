// ABOUTME: Library crate for Museum Genesis Lab exposing the wizard core for testing

#![allow(missing_docs)]

pub mod app;
pub mod cli;
pub mod components;
pub mod concept;
pub mod export;
pub mod steps;
pub mod summary;
