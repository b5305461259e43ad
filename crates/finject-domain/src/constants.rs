//! Domain constants
//!
//! Fully-qualified names of the annotations and runtime types the processor understands, and
//! the fixed pieces of every generated name.

// ============================================================================
// MARKER ANNOTATIONS
// ============================================================================

/// Marks the constructor of an injection target
pub const FRAGMENT_INJECT: &str = "com.vikingsen.inject.fragment.FragmentInject";

/// Marks the aggregator declaration
pub const FRAGMENT_MODULE: &str = "com.vikingsen.inject.fragment.FragmentModule";

/// DI framework module capability
pub const DAGGER_MODULE: &str = "dagger.Module";

/// Marks annotation types usable as binding qualifiers
pub const JAVAX_QUALIFIER: &str = "javax.inject.Qualifier";

// ============================================================================
// RUNTIME TYPES REFERENCED BY GENERATED CODE
// ============================================================================

/// Common base type of every injection target
pub const FRAGMENT: &str = "androidx.fragment.app.Fragment";

/// Shared factory capability implemented by every generated factory
pub const FRAGMENT_INJECT_FACTORY: &str = "com.vikingsen.inject.fragment.FragmentInjectFactory";

/// Deferred-provider shape
pub const JAVAX_PROVIDER: &str = "javax.inject.Provider";

/// Constructor injection marker
pub const JAVAX_INJECT: &str = "javax.inject.Inject";

pub const DAGGER_BINDS: &str = "dagger.Binds";
pub const DAGGER_INTO_MAP: &str = "dagger.multibindings.IntoMap";
pub const DAGGER_CLASS_KEY: &str = "dagger.multibindings.ClassKey";
pub const JAVA_OVERRIDE: &str = "java.lang.Override";

/// Preferred `@Generated` marker (JDK 9+)
pub const GENERATED_PROCESSING: &str = "javax.annotation.processing.Generated";

/// Legacy `@Generated` marker
pub const GENERATED_LEGACY: &str = "javax.annotation.Generated";

// ============================================================================
// GENERATED NAMES
// ============================================================================

/// `<TargetSimpleName>_InjectFactory`
pub const FACTORY_SUFFIX: &str = "_InjectFactory";

/// `FragmentInject_<AggregatorSimpleName>`
pub const MODULE_PREFIX: &str = "FragmentInject_";

/// `bind_<target reflection name with '.' replaced>`
pub const BIND_METHOD_PREFIX: &str = "bind_";

/// Creation operation of the factory capability
pub const CREATE_METHOD: &str = "create";

/// Parameter name of every binding method
pub const BIND_PARAMETER: &str = "factory";

/// Member of the DI module annotation listing included modules
pub const MODULE_INCLUDES: &str = "includes";

// ============================================================================
// GENERATED MARKER CONTENT
// ============================================================================

pub const GENERATOR_NAME: &str = "com.vikingsen.inject.fragment.processor.FragmentInjectProcessor";
pub const GENERATOR_COMMENTS: &str = "https://github.com/hansenji/FragmentInject";

/// Leading comment of every generated file
pub const FILE_COMMENT: &str = "Generated by @FragmentInject. Do not modify!";
