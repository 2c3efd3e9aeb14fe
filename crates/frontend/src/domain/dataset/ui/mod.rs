pub mod intake;
pub mod transcript;
