pub mod interp;
pub mod property;
pub mod vector;
