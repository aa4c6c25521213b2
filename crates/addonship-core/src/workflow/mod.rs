//! Workflow orchestration for addonship

mod changelog;
mod publish;

#[cfg(test)]
pub(crate) mod testing;

pub use changelog::*;
pub use publish::*;
