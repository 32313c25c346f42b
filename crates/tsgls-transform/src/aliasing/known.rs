//! Kinds whose friendly type follows from their syntax alone.

use super::raw_types::parse_raw_type;
use super::{RootAliaser, Step, TypeName};
use tsgls_ir::IrCommand;
use tsgls_ir::command_names::{DICTIONARY_TYPE, LIST_TYPE};
use tsgls_syntax::{NodeIndex, SyntaxKind};

pub(super) fn known_kind(aliaser: &RootAliaser<'_>, node: NodeIndex, depth: usize) -> Step {
    let Some(kind) = aliaser.arena.kind(node) else {
        return Step::Next;
    };
    match kind {
        SyntaxKind::ArrayLiteralExpression => array_literal(aliaser, node, depth).into(),
        SyntaxKind::BooleanKeyword | SyntaxKind::TrueKeyword | SyntaxKind::FalseKeyword => {
            Step::Settled(Some(TypeName::text("boolean")))
        }
        SyntaxKind::ElementAccessExpression => element_access(aliaser, node, depth).into(),
        SyntaxKind::NewExpression => aliaser
            .arena
            .get_call(node)
            .map(|call| TypeName::text(aliaser.arena.node_text(call.expression)))
            .into(),
        SyntaxKind::NumberKeyword => Step::Settled(Some(TypeName::text("float"))),
        SyntaxKind::NumericLiteral => {
            Step::Settled(Some(numeric_literal_type(aliaser.arena.node_text(node))))
        }
        SyntaxKind::TypeLiteral => type_literal(aliaser, node, depth).into(),
        SyntaxKind::StringKeyword | SyntaxKind::StringLiteral => {
            Step::Settled(Some(TypeName::text("string")))
        }
        SyntaxKind::VariableDeclaration => variable_declaration(aliaser, node, depth).into(),
        _ => Step::Next,
    }
}

/// `int` for integral literals (`7`, `0x1F`, `1_000`), `float` otherwise.
pub(super) fn numeric_literal_type(text: &str) -> TypeName {
    let lower = text.to_ascii_lowercase();
    let is_radix = ["0x", "0o", "0b"].iter().any(|prefix| lower.starts_with(prefix));
    if is_radix || !lower.contains(['.', 'e']) {
        TypeName::text("int")
    } else {
        TypeName::text("float")
    }
}

/// `list type : T` when every element shares the friendly type `T`.
fn array_literal(aliaser: &RootAliaser<'_>, node: NodeIndex, depth: usize) -> Option<TypeName> {
    let elements = aliaser.arena.get_list(node)?;
    let (first, rest) = elements.split_first()?;
    let element = aliaser.resolve(*first, depth)?;
    for other in rest {
        if aliaser.resolve(*other, depth).as_ref() != Some(&element) {
            return None;
        }
    }
    Some(TypeName::Command(IrCommand::new(LIST_TYPE).arg(element)))
}

/// Element type of a list, value type of a dictionary.
fn element_access(aliaser: &RootAliaser<'_>, node: NodeIndex, depth: usize) -> Option<TypeName> {
    let access = aliaser.arena.get_access(node)?;
    let container = aliaser.resolve(access.expression, depth)?;
    let command = container.as_command()?;
    match command.name.as_str() {
        LIST_TYPE => command.args.first().cloned(),
        DICTIONARY_TYPE => command.args.get(1).cloned(),
        _ => None,
    }
}

/// `{ [key: K]: V }` as `dictionary type : K V`.
fn type_literal(aliaser: &RootAliaser<'_>, node: NodeIndex, depth: usize) -> Option<TypeName> {
    let Some(members) = aliaser.arena.get_list(node) else {
        return parse_raw_type(aliaser.arena.node_text(node));
    };
    let [member] = members.as_slice() else {
        return None;
    };
    let signature = aliaser.arena.get_index_signature(*member)?;
    let key = signature
        .parameters
        .first()
        .and_then(|param| aliaser.arena.get_value_decl(*param))
        .and_then(|param| param.type_annotation)?;
    let key = aliaser.resolve(key, depth)?;
    let value = aliaser.resolve(signature.type_annotation?, depth)?;
    Some(TypeName::Command(
        IrCommand::new(DICTIONARY_TYPE).arg(key).arg(value),
    ))
}

/// Declared annotation, else the initializer's type.
fn variable_declaration(
    aliaser: &RootAliaser<'_>,
    node: NodeIndex,
    depth: usize,
) -> Option<TypeName> {
    let decl = aliaser.arena.get_value_decl(node)?;
    match (decl.type_annotation, decl.initializer) {
        (Some(annotation), _) => aliaser.resolve(annotation, depth),
        (None, Some(initializer)) => aliaser.resolve(initializer, depth),
        (None, None) => None,
    }
}
