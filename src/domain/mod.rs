// Domain concepts for Enumsmith.

pub mod flavor;
pub mod namespace;
