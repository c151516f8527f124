//! Context placement and role mapping per [`RequestShape`].
//!
//! Placement rules:
//!
//! - [`RequestShape::Gemini`]: system turns are dropped, assistant turns are
//!   renamed `model`, and when there are resources the context is prefixed
//!   onto the first remaining turn as `"{context}\n\nUser: {text}"`.
//! - [`RequestShape::TurnArray`]: only user and assistant turns are kept, and
//!   when there are resources the context is prefixed onto the first one.
//! - [`RequestShape::SystemRole`]: existing system turns are replaced by one
//!   leading system turn carrying the context, with or without resources.
//!
//! Adaptation is a pure function of its inputs.

use serde_json::{Value, json};
use torque_search::SearchResult;

use crate::context::build_context;
use crate::provider::RequestShape;
use crate::types::{Role, Turn};

/// The wire role name for `role` under `shape`, or `None` when the shape
/// drops turns of that role.
pub fn wire_role(shape: RequestShape, role: Role) -> Option<&'static str> {
    match (shape, role) {
        (_, Role::User) => Some("user"),
        (RequestShape::Gemini, Role::Assistant) => Some("model"),
        (_, Role::Assistant) => Some("assistant"),
        (RequestShape::SystemRole, Role::System) => Some("system"),
        (RequestShape::Gemini | RequestShape::TurnArray, Role::System) => None,
    }
}

/// Merge the search context into `turns` and render them in the wire
/// format of `shape`.
///
/// Gemini turns render as `{"role", "parts": [{"text"}]}`; the other shapes
/// render as `{"role", "content"}`.
pub fn adapt_turns(
    turns: &[Turn],
    resources: Option<&[SearchResult]>,
    shape: RequestShape,
) -> Vec<Value> {
    place(turns, resources, shape)
        .into_iter()
        .map(|(role, text)| match shape {
            RequestShape::Gemini => json!({
                "role": role,
                "parts": [{ "text": text }],
            }),
            RequestShape::TurnArray | RequestShape::SystemRole => json!({
                "role": role,
                "content": text,
            }),
        })
        .collect()
}

/// Apply role mapping and context placement, producing `(role, text)` pairs.
fn place(
    turns: &[Turn],
    resources: Option<&[SearchResult]>,
    shape: RequestShape,
) -> Vec<(&'static str, String)> {
    let augmented = resources.is_some_and(|r| !r.is_empty());

    let mut placed: Vec<(&'static str, String)> = turns
        .iter()
        .filter(|turn| !(shape == RequestShape::SystemRole && turn.role == Role::System))
        .filter_map(|turn| wire_role(shape, turn.role).map(|role| (role, turn.content.clone())))
        .collect();

    match shape {
        RequestShape::Gemini => {
            if augmented && let Some((_, first)) = placed.first_mut() {
                *first = format!("{}\n\nUser: {first}", build_context(resources));
            }
        }
        RequestShape::TurnArray => {
            if augmented && let Some((_, first)) = placed.first_mut() {
                *first = format!("{}\n\n{first}", build_context(resources));
            }
        }
        RequestShape::SystemRole => {
            placed.insert(0, ("system", build_context(resources)));
        }
    }

    placed
}
