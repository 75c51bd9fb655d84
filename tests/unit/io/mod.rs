mod cli;
mod configuration;
mod error;
mod image;
