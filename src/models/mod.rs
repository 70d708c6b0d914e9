pub mod profile;
pub mod distribution;
pub mod compensation;
pub mod person;
pub mod search;

pub use profile::*;
pub use distribution::*;
pub use compensation::*;
pub use person::*;
pub use search::*;
