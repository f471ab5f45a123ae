mod avatar_resolver;

pub use avatar_resolver::*;
