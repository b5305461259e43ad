//! Java source rendering
//!
//! Renders a [`JavaFile`] as Java source. Referenced types are imported and written by their
//! simple names unless that would be ambiguous; `java.lang` and same-package types are never
//! imported. Output depends only on the input, so identical inputs give identical bytes.

use crate::constants::JAVA_INDENT;
use finject_domain::{
    Annotation, AnnotationValue, ClassName, Expression, JavaFile, MethodKind, MethodSpec,
    Modifier, Statement, TypeName, TypeSpec, TypeVariableName,
};
use std::collections::{BTreeSet, HashMap};
use std::fmt::Write;

const JAVA_LANG: &str = "java.lang";

/// Render `file` as Java source
pub fn render_java(file: &JavaFile) -> String {
    let names = NameScope::for_file(file);
    let mut out = String::new();

    if let Some(comment) = &file.file_comment {
        for line in comment.lines() {
            out.push_str("// ");
            out.push_str(line);
            out.push('\n');
        }
    }
    if !file.package_name.is_empty() {
        let _ = writeln!(out, "package {};", file.package_name);
        out.push('\n');
    }
    let imports = names.imports();
    if !imports.is_empty() {
        for import in &imports {
            let _ = writeln!(out, "import {import};");
        }
        out.push('\n');
    }

    names.type_spec(&mut out, &file.type_spec);
    out
}

/// Simple-name resolution for one file
struct NameScope {
    package_name: String,
    /// Simple name of a top-level class to the class it denotes in this file
    short_names: HashMap<String, ClassName>,
}

impl NameScope {
    fn for_file(file: &JavaFile) -> Self {
        let mut referenced = Vec::new();
        collect_type_spec(&file.type_spec, &mut referenced);

        let own = file.class_name();
        let mut short_names = HashMap::new();
        short_names.insert(own.simple_name().to_string(), own);
        for class in referenced {
            let top = class.top_level_class_name();
            short_names
                .entry(top.simple_name().to_string())
                .or_insert(top);
        }
        Self {
            package_name: file.package_name.clone(),
            short_names,
        }
    }

    fn imports(&self) -> BTreeSet<String> {
        self.short_names
            .values()
            .filter(|top| {
                top.package_name() != self.package_name && top.package_name() != JAVA_LANG
            })
            .map(ClassName::canonical_name)
            .collect()
    }

    fn class_name(&self, class: &ClassName) -> String {
        let top = class.top_level_class_name();
        if self.short_names.get(top.simple_name()) == Some(&top) {
            class.simple_names().join(".")
        } else {
            class.canonical_name()
        }
    }

    fn type_name(&self, type_name: &TypeName) -> String {
        match type_name {
            TypeName::Primitive(primitive) => primitive.keyword().to_string(),
            TypeName::Class(class) => self.class_name(class),
            TypeName::Parameterized { raw, arguments } => {
                let arguments: Vec<String> = arguments.iter().map(|a| self.type_name(a)).collect();
                format!("{}<{}>", self.class_name(raw), arguments.join(", "))
            }
            TypeName::Variable(variable) => variable.name.clone(),
            TypeName::Array(component) => format!("{}[]", self.type_name(component)),
            TypeName::Annotated { annotations, inner } => {
                let mut rendered = String::new();
                for annotation in annotations {
                    rendered.push_str(&self.annotation_inline(annotation));
                    rendered.push(' ');
                }
                rendered.push_str(&self.type_name(inner));
                rendered
            }
        }
    }

    fn type_variable(&self, variable: &TypeVariableName) -> String {
        if variable.bounds.is_empty() {
            return variable.name.clone();
        }
        let bounds: Vec<String> = variable.bounds.iter().map(|b| self.type_name(b)).collect();
        format!("{} extends {}", variable.name, bounds.join(" & "))
    }

    fn annotation_value(&self, value: &AnnotationValue) -> String {
        match value {
            AnnotationValue::Class(type_name) => format!("{}.class", self.type_name(type_name)),
            AnnotationValue::Error(written) => format!("{written}.class"),
            AnnotationValue::String(value) => string_literal(value),
            AnnotationValue::Bool(value) => value.to_string(),
            AnnotationValue::Int(value) => value.to_string(),
            AnnotationValue::Enum {
                type_name,
                constant,
            } => format!("{}.{constant}", self.class_name(type_name)),
            AnnotationValue::Array(values) => {
                let values: Vec<String> = values.iter().map(|v| self.annotation_value(v)).collect();
                format!("{{{}}}", values.join(", "))
            }
        }
    }

    fn annotation_inline(&self, annotation: &Annotation) -> String {
        let name = self.class_name(&annotation.type_name);
        match annotation.members.as_slice() {
            [] => format!("@{name}"),
            [only] if only.name == "value" => {
                format!("@{name}({})", self.annotation_value(&only.value))
            }
            members => {
                let members: Vec<String> = members
                    .iter()
                    .map(|m| format!("{} = {}", m.name, self.annotation_value(&m.value)))
                    .collect();
                format!("@{name}({})", members.join(", "))
            }
        }
    }

    /// A declaration annotation on its own lines; several members go one per line
    fn annotation_block(&self, out: &mut String, annotation: &Annotation, depth: usize) {
        let indent = JAVA_INDENT.repeat(depth);
        if annotation.members.len() < 2 {
            let _ = writeln!(out, "{indent}{}", self.annotation_inline(annotation));
            return;
        }
        let member_indent = JAVA_INDENT.repeat(depth + 2);
        let _ = writeln!(out, "{indent}@{}(", self.class_name(&annotation.type_name));
        let last = annotation.members.len() - 1;
        for (i, member) in annotation.members.iter().enumerate() {
            let separator = if i == last { "" } else { "," };
            let _ = writeln!(
                out,
                "{member_indent}{} = {}{separator}",
                member.name,
                self.annotation_value(&member.value)
            );
        }
        let _ = writeln!(out, "{indent})");
    }

    fn expression(&self, expression: &Expression) -> String {
        match expression {
            Expression::Name(name) => name.clone(),
            Expression::ThisField(name) => format!("this.{name}"),
            Expression::Invoke {
                receiver,
                method,
                arguments,
            } => format!(
                "{}.{method}({})",
                self.expression(receiver),
                self.arguments(arguments)
            ),
            Expression::New {
                type_name,
                arguments,
            } => format!(
                "new {}({})",
                self.type_name(type_name),
                self.arguments(arguments)
            ),
        }
    }

    fn arguments(&self, arguments: &[Expression]) -> String {
        arguments
            .iter()
            .map(|a| self.expression(a))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn statement(&self, statement: &Statement) -> String {
        match statement {
            Statement::Assign { target, value } => {
                format!("{} = {};", self.expression(target), self.expression(value))
            }
            Statement::Return(value) => format!("return {};", self.expression(value)),
        }
    }

    fn type_spec(&self, out: &mut String, spec: &TypeSpec) {
        for annotation in &spec.annotations {
            self.annotation_block(out, annotation, 0);
        }
        let _ = write!(out, "{}class {}", modifiers(&spec.modifiers), spec.name);
        if !spec.superinterfaces.is_empty() {
            let interfaces: Vec<String> = spec
                .superinterfaces
                .iter()
                .map(|i| self.type_name(i))
                .collect();
            let _ = write!(out, " implements {}", interfaces.join(", "));
        }
        out.push_str(" {\n");

        let mut first = true;
        for field in &spec.fields {
            let _ = writeln!(
                out,
                "{JAVA_INDENT}{}{} {};",
                modifiers(&field.modifiers),
                self.type_name(&field.type_name),
                field.name
            );
            first = false;
        }
        for method in &spec.methods {
            if !first {
                out.push('\n');
            }
            self.method(out, method, &spec.name);
            first = false;
        }
        out.push_str("}\n");
    }

    fn method(&self, out: &mut String, method: &MethodSpec, type_name: &str) {
        for annotation in &method.annotations {
            self.annotation_block(out, annotation, 1);
        }
        out.push_str(JAVA_INDENT);
        out.push_str(&modifiers(&method.modifiers));
        if !method.type_variables.is_empty() {
            let variables: Vec<String> = method
                .type_variables
                .iter()
                .map(|v| self.type_variable(v))
                .collect();
            let _ = write!(out, "<{}> ", variables.join(", "));
        }
        match &method.kind {
            MethodKind::Constructor => out.push_str(type_name),
            MethodKind::Method { name, returns } => {
                let returns = returns
                    .as_ref()
                    .map_or_else(|| "void".to_string(), |r| self.type_name(r));
                let _ = write!(out, "{returns} {name}");
            }
        }
        let parameters: Vec<String> = method
            .parameters
            .iter()
            .map(|p| format!("{} {}", self.type_name(&p.type_name), p.name))
            .collect();
        let _ = write!(out, "({})", parameters.join(", "));

        if method.is_abstract() {
            out.push_str(";\n");
            return;
        }
        out.push_str(" {\n");
        let body_indent = JAVA_INDENT.repeat(2);
        for statement in &method.body {
            let _ = writeln!(out, "{body_indent}{}", self.statement(statement));
        }
        let _ = writeln!(out, "{JAVA_INDENT}}}");
    }
}

/// Modifiers in canonical order, each followed by a space
fn modifiers(modifiers: &[Modifier]) -> String {
    let ordered: BTreeSet<Modifier> = modifiers.iter().copied().collect();
    ordered
        .into_iter()
        .map(|m| format!("{} ", m.keyword()))
        .collect()
}

fn string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            other => literal.push(other),
        }
    }
    literal.push('"');
    literal
}

// ============================================================================
// Referenced class collection
// ============================================================================

fn collect_type_spec(spec: &TypeSpec, out: &mut Vec<ClassName>) {
    for annotation in &spec.annotations {
        collect_annotation(annotation, out);
    }
    for interface in &spec.superinterfaces {
        collect_type(interface, out);
    }
    for field in &spec.fields {
        collect_type(&field.type_name, out);
    }
    for method in &spec.methods {
        for annotation in &method.annotations {
            collect_annotation(annotation, out);
        }
        for variable in &method.type_variables {
            for bound in &variable.bounds {
                collect_type(bound, out);
            }
        }
        if let MethodKind::Method {
            returns: Some(returns),
            ..
        } = &method.kind
        {
            collect_type(returns, out);
        }
        for parameter in &method.parameters {
            collect_type(&parameter.type_name, out);
        }
        for statement in &method.body {
            match statement {
                Statement::Assign { target, value } => {
                    collect_expression(target, out);
                    collect_expression(value, out);
                }
                Statement::Return(value) => collect_expression(value, out),
            }
        }
    }
}

fn collect_type(type_name: &TypeName, out: &mut Vec<ClassName>) {
    match type_name {
        TypeName::Primitive(_) => {}
        TypeName::Class(class) => out.push(class.clone()),
        TypeName::Parameterized { raw, arguments } => {
            out.push(raw.clone());
            for argument in arguments {
                collect_type(argument, out);
            }
        }
        TypeName::Variable(variable) => {
            for bound in &variable.bounds {
                collect_type(bound, out);
            }
        }
        TypeName::Array(component) => collect_type(component, out),
        TypeName::Annotated { annotations, inner } => {
            for annotation in annotations {
                collect_annotation(annotation, out);
            }
            collect_type(inner, out);
        }
    }
}

fn collect_annotation(annotation: &Annotation, out: &mut Vec<ClassName>) {
    out.push(annotation.type_name.clone());
    for member in &annotation.members {
        collect_annotation_value(&member.value, out);
    }
}

fn collect_annotation_value(value: &AnnotationValue, out: &mut Vec<ClassName>) {
    match value {
        AnnotationValue::Class(type_name) => collect_type(type_name, out),
        AnnotationValue::Enum { type_name, .. } => out.push(type_name.clone()),
        AnnotationValue::Array(values) => {
            for value in values {
                collect_annotation_value(value, out);
            }
        }
        AnnotationValue::Error(_)
        | AnnotationValue::String(_)
        | AnnotationValue::Bool(_)
        | AnnotationValue::Int(_) => {}
    }
}

fn collect_expression(expression: &Expression, out: &mut Vec<ClassName>) {
    match expression {
        Expression::Name(_) | Expression::ThisField(_) => {}
        Expression::Invoke {
            receiver,
            arguments,
            ..
        } => {
            collect_expression(receiver, out);
            for argument in arguments {
                collect_expression(argument, out);
            }
        }
        Expression::New {
            type_name,
            arguments,
        } => {
            collect_type(type_name, out);
            for argument in arguments {
                collect_expression(argument, out);
            }
        }
    }
}
