//! Access pass registry

mod extend;
mod issue;

pub use extend::*;
pub use issue::*;
