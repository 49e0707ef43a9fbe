// List the different tasks here
pub mod example;
pub mod find;
pub mod ubench;
