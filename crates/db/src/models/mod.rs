pub mod person;
pub mod planet;
