//! Diagnostics reported by the processor

use finject_domain::ClassName;

define_violations! {
    pub enum InjectViolation {
        #[violation(
            id = "FI001",
            category = Target,
            severity = Error,
            message = "@FragmentInject-using types must not be private"
        )]
        PrivateTarget { element: ClassName },

        #[violation(
            id = "FI002",
            category = Target,
            severity = Error,
            message = "Nested @FragmentInject-using types must be static",
            suggestion = "Declare the nested type static so it does not need an enclosing instance"
        )]
        InnerTarget { element: ClassName },

        #[violation(
            id = "FI003",
            category = Target,
            severity = Error,
            message = "@FragmentInject-using types must be a subtype of androidx.fragment.app.Fragment"
        )]
        NotAFragment { element: ClassName },

        #[violation(
            id = "FI004",
            category = Target,
            severity = Error,
            message = "Multiple @FragmentInject-annotated constructors found."
        )]
        MultipleInjectConstructors { element: ClassName },

        #[violation(
            id = "FI005",
            category = Target,
            severity = Error,
            message = "@FragmentInject constructor must not be private"
        )]
        PrivateInjectConstructor { element: ClassName },

        #[violation(
            id = "FI006",
            category = Module,
            severity = Error,
            message = "Multiple @FragmentModule-annotated modules found.",
            suggestion = "Keep @FragmentModule on a single module"
        )]
        MultipleModules { element: ClassName },

        #[violation(
            id = "FI007",
            category = Module,
            severity = Error,
            message = "@FragmentModule must also be annotated as Dagger @Module"
        )]
        MissingDaggerModule { element: ClassName },

        #[violation(
            id = "FI008",
            category = Consistency,
            severity = Error,
            message = "@FragmentModule's @Module must include {generated}",
            suggestion = "Add the generated module to @Module(includes = ...)"
        )]
        MissingInclude { element: ClassName, generated: String },

        #[violation(
            id = "FI009",
            category = Consistency,
            severity = Warning,
            message = "@FragmentInject type {element} was found after {module} was generated and is not registered in it"
        )]
        UnregisteredTarget { element: ClassName, module: ClassName },
    }
}
