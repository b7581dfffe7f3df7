pub mod data;
pub mod io;
pub mod printing;
pub mod settings;

#[cfg(test)]
pub mod tests;
