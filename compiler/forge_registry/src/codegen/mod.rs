//! Dispatcher code generation.
//!
//! Turns one [`CapabilityGroup`] into Rust source for a dispatcher: a unit
//! struct named after the capability type with a `create` function that
//! maps an id to a new instance. The body is a null check, one equality
//! test per id in discovery order, and a final unknown-id error. Nothing in
//! the output inspects types at runtime.
//!
//! Output depends only on the group, so equal groups give identical text.

mod writer;

use forge_ir::{QualifiedName, TypeKind};

use crate::{CapabilityGroup, DISPATCHER_SUFFIX, RUNTIME_CRATE};

use writer::SourceWriter;

/// First line of every generated file.
pub const GENERATED_HEADER: &str = "// @generated by forge. Do not edit.";

/// Generated dispatcher for one capability group.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct DispatchArtifact {
    /// Module the capability type lives in. `None` for a single-segment name.
    pub package: Option<QualifiedName>,
    /// Dispatcher name, e.g. `MealFactory`.
    pub name: String,
    /// The capability type the dispatcher creates.
    pub capability: QualifiedName,
    /// Registered ids, in the order `create` tests them.
    pub ids: Vec<String>,
    /// Body of `create`, unindented.
    pub operation_body: String,
    /// The complete file.
    pub source: String,
}

/// Generate the dispatcher for `group`.
pub fn generate(group: &CapabilityGroup) -> DispatchArtifact {
    let name = format!("{}{DISPATCHER_SUFFIX}", group.simple_name());
    let output = output_type(group.name(), group.kind());
    let operation_body = operation_body(group);
    let ids: Vec<String> = group.ids().map(str::to_string).collect();

    let mut w = SourceWriter::new();
    w.line(GENERATED_HEADER);
    w.blank();
    w.line(&format!("/// Creates `{}` instances by id.", group.name()));
    w.line(&format!("pub struct {name};"));
    w.blank();
    w.block(&format!("impl {name} {{"), "}", |w| {
        w.line("/// Ids this factory can create, in registration order.");
        w.line(&format!(
            "pub const IDS: &'static [&'static str] = &[{}];",
            ids.iter()
                .map(|id| string_literal(id))
                .collect::<Vec<_>>()
                .join(", ")
        ));
        w.blank();
        w.line("/// Creates a new instance registered under `id`.");
        w.block(
            &format!(
                "pub fn create(id: Option<&str>) -> Result<{output}, {RUNTIME_CRATE}::DispatchError> {{"
            ),
            "}",
            |w| {
                for line in operation_body.lines() {
                    w.line(line);
                }
            },
        );
    });
    w.blank();
    w.block(
        &format!("impl {RUNTIME_CRATE}::Dispatch for {name} {{"),
        "}",
        |w| {
            w.line(&format!("type Output = {output};"));
            w.blank();
            w.block("fn ids() -> &'static [&'static str] {", "}", |w| {
                w.line("Self::IDS");
            });
            w.blank();
            w.block(
                &format!(
                    "fn create(id: Option<&str>) -> Result<Self::Output, {RUNTIME_CRATE}::DispatchError> {{"
                ),
                "}",
                |w| w.line(&format!("{name}::create(id)")),
            );
        },
    );

    DispatchArtifact {
        package: group.name().parent(),
        name,
        capability: group.name().clone(),
        ids,
        operation_body,
        source: w.finish(),
    }
}

/// What `create` returns for a capability type.
fn output_type(capability: &QualifiedName, kind: TypeKind) -> String {
    match kind {
        TypeKind::Interface => format!("Box<dyn {capability}>"),
        TypeKind::Class => capability.to_string(),
    }
}

/// Expression building a fresh instance of `concrete` as the output type.
fn construct(concrete: &QualifiedName, kind: TypeKind) -> String {
    match kind {
        TypeKind::Interface => format!("Box::new({concrete}::new())"),
        TypeKind::Class => format!("::core::convert::Into::into({concrete}::new())"),
    }
}

fn operation_body(group: &CapabilityGroup) -> String {
    let mut w = SourceWriter::new();
    w.block("let Some(id) = id else {", "};", |w| {
        w.line(&format!(
            "return Err({RUNTIME_CRATE}::DispatchError::NullArgument);"
        ));
    });
    for descriptor in group.iter() {
        w.block(
            &format!("if id == {} {{", string_literal(&descriptor.id)),
            "}",
            |w| {
                w.line(&format!(
                    "return Ok({});",
                    construct(&descriptor.name, group.kind())
                ));
            },
        );
    }
    w.line(&format!(
        "Err({RUNTIME_CRATE}::DispatchError::unknown_id(id))"
    ));
    w.finish()
}

/// Render `value` as a Rust string literal.
///
/// `str`'s `Debug` output quotes and escapes exactly as a literal needs.
fn string_literal(value: &str) -> String {
    format!("{value:?}")
}

#[cfg(test)]
mod tests;
