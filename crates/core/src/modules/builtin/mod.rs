//! Loadable modules shipped with fed.
//!
//! The registry resolves module names against this factory table; anything
//! it cannot resolve is reported and skipped.

mod setup_env;
mod skip_list;

pub use setup_env::SetupEnvModule;
pub use skip_list::SkipListModule;

use super::Module;

/// Resolve a registry name to a module instance.
pub fn create(name: &str) -> Option<Box<dyn Module>> {
    match name {
        setup_env::NAME => Some(Box::new(SetupEnvModule)),
        skip_list::NAME => Some(Box::new(SkipListModule)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve() {
        assert!(create("setup-env").is_some());
        assert!(create("skip-list").is_some());
        assert!(create("does-not-exist").is_none());
    }
}
