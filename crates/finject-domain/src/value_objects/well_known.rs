//! Parsed forms of the names in [`crate::constants`]

use super::ClassName;
use crate::constants;
use once_cell::sync::Lazy;

fn known(name: &str) -> ClassName {
    // Constants are spelled package.Class and always parse
    ClassName::best_guess(name).unwrap_or_else(|_| ClassName::new("", name))
}

pub static FRAGMENT_INJECT: Lazy<ClassName> = Lazy::new(|| known(constants::FRAGMENT_INJECT));
pub static FRAGMENT_MODULE: Lazy<ClassName> = Lazy::new(|| known(constants::FRAGMENT_MODULE));
pub static DAGGER_MODULE: Lazy<ClassName> = Lazy::new(|| known(constants::DAGGER_MODULE));
pub static JAVAX_QUALIFIER: Lazy<ClassName> = Lazy::new(|| known(constants::JAVAX_QUALIFIER));
pub static FRAGMENT: Lazy<ClassName> = Lazy::new(|| known(constants::FRAGMENT));
pub static FRAGMENT_INJECT_FACTORY: Lazy<ClassName> =
    Lazy::new(|| known(constants::FRAGMENT_INJECT_FACTORY));
pub static JAVAX_PROVIDER: Lazy<ClassName> = Lazy::new(|| known(constants::JAVAX_PROVIDER));
pub static JAVAX_INJECT: Lazy<ClassName> = Lazy::new(|| known(constants::JAVAX_INJECT));
pub static DAGGER_BINDS: Lazy<ClassName> = Lazy::new(|| known(constants::DAGGER_BINDS));
pub static DAGGER_INTO_MAP: Lazy<ClassName> = Lazy::new(|| known(constants::DAGGER_INTO_MAP));
pub static DAGGER_CLASS_KEY: Lazy<ClassName> = Lazy::new(|| known(constants::DAGGER_CLASS_KEY));
pub static JAVA_OVERRIDE: Lazy<ClassName> = Lazy::new(|| known(constants::JAVA_OVERRIDE));
pub static GENERATED_PROCESSING: Lazy<ClassName> =
    Lazy::new(|| known(constants::GENERATED_PROCESSING));
pub static GENERATED_LEGACY: Lazy<ClassName> = Lazy::new(|| known(constants::GENERATED_LEGACY));
