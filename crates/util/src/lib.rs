pub mod paths;
pub mod payload;
pub mod urls;

pub use paths::*;
pub use payload::*;
pub use urls::*;
