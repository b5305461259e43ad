//! Violation Definition Macro
//!
//! Provides a declarative macro for defining violation enums with
//! automatic trait implementations.
//!
//! # Example
//!
//! ```ignore
//! define_violations! {
//!     pub enum InjectViolation {
//!         #[violation(
//!             id = "FI001",
//!             category = Target,
//!             severity = Error,
//!             message = "@FragmentInject-using types must not be private"
//!         )]
//!         PrivateTarget { element: ClassName },
//!     }
//! }
//! ```

/// Macro to define violation enums with automatic trait implementations
///
/// This macro generates:
/// - The enum with all variants
/// - `Display` implementation with formatted messages
/// - `Violation` trait implementation
///
/// Every variant must have an `element: ClassName` field naming the declaration the violation
/// is reported against. Messages and suggestions may refer to any field by name
/// (`"{generated}"`).
#[macro_export]
macro_rules! define_violations {
    (
        $vis:vis enum $name:ident {
            $(
                #[violation(
                    id = $id:literal,
                    category = $category:ident,
                    severity = $severity:ident,
                    message = $msg:literal
                    $(, suggestion = $suggestion:literal)?
                )]
                $variant:ident {
                    $( $field:ident : $field_ty:ty ),* $(,)?
                }
            ),* $(,)?
        }
    ) => {
        #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
        $vis enum $name {
            $( $variant { $( $field: $field_ty ),* } ),*
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        Self::$variant { $( $field ),* } => {
                            let _ = ($( $field, )*);
                            write!(f, $msg)
                        }
                    ),*
                }
            }
        }

        impl $crate::violation_trait::Violation for $name {
            fn id(&self) -> &str {
                match self {
                    $( Self::$variant { .. } => $id ),*
                }
            }

            fn category(&self) -> $crate::violation_trait::ViolationCategory {
                match self {
                    $( Self::$variant { .. } => $crate::violation_trait::ViolationCategory::$category ),*
                }
            }

            fn severity(&self) -> $crate::violation_trait::Severity {
                match self {
                    $( Self::$variant { .. } => $crate::violation_trait::Severity::$severity ),*
                }
            }

            fn element(&self) -> &finject_domain::ClassName {
                match self {
                    $( Self::$variant { element, .. } => element ),*
                }
            }

            fn suggestion(&self) -> Option<String> {
                match self {
                    $(
                        Self::$variant { $( $field ),* } => {
                            let _ = ($( $field, )*);
                            $crate::define_violations!(@suggestion $($suggestion)?)
                        }
                    ),*
                }
            }
        }
    };

    // Suggestion helper - with suggestion template
    (@suggestion $suggestion:literal) => {
        Some(format!($suggestion))
    };

    // Suggestion helper - no suggestion
    (@suggestion) => {
        None
    };
}
