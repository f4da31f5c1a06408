use crate::ast::{Node, Root};
use crate::value::{Map, Value};

/// Turns a syntax tree into plain values, dropping every span.
pub fn materialize(root: Root) -> Value {
    value(root.child)
}

fn value(node: Node) -> Value {
    match node {
        Node::Object(object) => {
            let mut map = Map::with_capacity(object.properties.len());

            for property in object.properties {
                // Later duplicates overwrite the value in place
                map.insert(property.key.value, value(property.value));
            }

            Value::Object(map)
        }
        Node::Array(array) => Value::Array(array.elements.into_iter().map(value).collect()),
        Node::String(literal) => Value::String(literal.value),
        Node::Number(literal) => Value::Number(literal.value),
        Node::Boolean(literal) => Value::Bool(literal.value),
        Node::Null(_) => Value::Null,
    }
}
