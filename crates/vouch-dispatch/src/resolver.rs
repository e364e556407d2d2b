//! Strict-type and transit call resolution.
//!
//! A *strict-type call* is a name composed purely of type tokens joined
//! by `Or`, each with an optional `not` prefix (`nullOrInt`, `notString`);
//! it resolves directly to a type-expression check. A *transit call*
//! mixes declared method names with a trailing type check
//! (`arrayXGetErrorIfNotNullOrInt`); it is decomposed by greedy
//! longest-prefix matching against the evolving target's scheme table.

use vouch_common::error::{format_template, TypeError, WRONG_TYPE_TEMPLATE};
use vouch_common::value::Value;
use vouch_expr::parse;
use vouch_types::has_type;

use crate::name::{composed_parts, fragments, join_fragments, lcfirst};
use crate::scheme::{MethodScheme, SchemeReturn, SchemeTable};
use crate::target::{CallTarget, Resolved};

/// Fragment that separates type tokens inside a call name.
const TYPE_DELIMITER: &str = "Or";

/// Message template for a scheme argument that failed its declared type.
const ARGUMENT_TEMPLATE: &str =
    "The \"%s\" argument of the \"%s\" method should be one of types %s. Got: %s";

// ── Strict-type calls ────────────────────────────────────────────────────

/// Whether `name` is purely a composition of type tokens with optional
/// `not` prefixes, joined by `Or`.
pub fn is_strict_type_call(name: &str) -> bool {
    composed_parts(name, TYPE_DELIMITER).iter().all(|part| {
        let token = strip_not(part);
        !token.is_empty() && has_type(&token)
    })
}

/// Remove a leading `not` prefix, re-normalizing the remainder to
/// lower-camel: `notInt` → `int`. A bare `not` or a lowercase
/// continuation (`notable`) is not a negated type name.
fn strip_not(part: &str) -> String {
    match part.strip_prefix("not") {
        Some(rest) if rest.starts_with(|c: char| c.is_ascii_uppercase()) => lcfirst(rest),
        _ => part.to_string(),
    }
}

/// Reconstruct the type expression a strict-type call denotes, keeping
/// the tokens as written: `notIntOrNull` → `notInt|null`.
fn strict_call_expression(name: &str) -> String {
    composed_parts(name, TYPE_DELIMITER).join("|")
}

/// Execute a strict-type call.
///
/// The first argument is the value under test; the second, if present,
/// is a custom error-message template (a string, or null for the
/// default). Surplus arguments are ignored.
pub fn strict_type_call(name: &str, mut args: Vec<Value>) -> Result<Value, TypeError> {
    if args.is_empty() {
        return Err(TypeError::argument(format!(
            "The first argument of the \"{name}\" method should be a value."
        )));
    }
    let value = args.remove(0);
    let template = extract_template(name, args.first())?;
    strict_call_with(name, value, template.as_deref(), None)
}

/// Validate and read an optional error-template argument.
fn extract_template(name: &str, arg: Option<&Value>) -> Result<Option<String>, TypeError> {
    match arg {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(template)) => Ok(Some(template.clone())),
        Some(other) => Err(TypeError::argument(format!(
            "The second argument of the \"{name}\" method should be an error message, {} given.",
            other.type_name()
        ))),
    }
}

/// Shared strict-check execution; `fallback` is a target-stored template
/// used when the caller supplied none.
fn strict_call_with(
    name: &str,
    value: Value,
    template: Option<&str>,
    fallback: Option<&str>,
) -> Result<Value, TypeError> {
    let expression = strict_call_expression(name);
    let expr = parse(&expression)?;
    if expr.matches(&value) {
        return Ok(value);
    }
    let template = template.or(fallback).unwrap_or(WRONG_TYPE_TEMPLATE);
    Err(TypeError::wrong_type(format_template(
        template,
        &[&expression, value.type_name()],
    )))
}

// ── Transit calls ────────────────────────────────────────────────────────

/// Longest candidate method-name prefix of `frags` declared in `table`,
/// with the number of fragments it consumes. Greedy: a later, longer
/// match supersedes an earlier one.
fn longest_prefix<'a>(
    table: &'a SchemeTable,
    frags: &[&str],
) -> Option<(&'a MethodScheme, usize)> {
    let mut candidate = String::new();
    let mut best = None;

    for (i, frag) in frags.iter().enumerate() {
        if candidate.is_empty() {
            candidate.push_str(&lcfirst(frag));
        } else {
            candidate.push_str(frag);
        }
        if let Some(scheme) = table.get(&candidate) {
            best = Some((scheme, i + 1));
        }
    }

    best
}

/// Whether a whole-remainder type check outranks a method match of
/// `consumed` fragments. Type expressions act as terminal matches in the
/// same greedy longest-match contest as declared methods, so
/// `nullOrInt` beats the one-fragment `null` method.
fn type_check_outranks(remainder_is_type: bool, remaining: usize, consumed: usize) -> bool {
    remainder_is_type && remaining > consumed
}

/// Whether `name` decomposes into declared method prefixes (walked
/// statically over the scheme tables) with an empty or strict-type
/// remainder.
pub fn is_transit_call(name: &str, table: &'static SchemeTable) -> bool {
    let frags = fragments(name);
    if frags.is_empty() {
        return false;
    }

    let mut table = table;
    let mut pos = 0;
    let mut matched_any = false;

    while pos < frags.len() {
        let remaining = frags.len() - pos;
        let remainder_is_type = is_strict_type_call(&join_fragments(&frags[pos..]));

        match longest_prefix(table, &frags[pos..]) {
            Some((scheme, consumed))
                if !type_check_outranks(remainder_is_type, remaining, consumed) =>
            {
                matched_any = true;
                pos += consumed;
                if pos == frags.len() {
                    return true;
                }
                match scheme.return_kind() {
                    SchemeReturn::Table(next) => table = next(),
                    // A plain value has no methods; only a trailing type
                    // check can consume the rest.
                    SchemeReturn::Expr(_) => {
                        return is_strict_type_call(&join_fragments(&frags[pos..]));
                    }
                }
            }
            _ => return matched_any && remainder_is_type,
        }
    }

    true
}

/// Execute a transit call: decompose `name` into chained method
/// invocations on an evolving target, with an optional trailing
/// strict-type check on the final value.
pub fn call_transit(
    name: &str,
    mut args: Vec<Value>,
    target: Box<dyn CallTarget>,
) -> Result<Resolved, TypeError> {
    let frags = fragments(name);
    if frags.is_empty() {
        return Err(TypeError::method_not_found(name));
    }

    let mut current = Resolved::Target(target);
    let mut pos = 0;

    while pos < frags.len() {
        let remainder = join_fragments(&frags[pos..]);

        let tgt = match &current {
            Resolved::Target(target) => target.as_ref(),
            Resolved::Value(value) => {
                // Plain values have no methods; only a trailing type
                // check can consume the rest of the name.
                return finish_with_type_check(&remainder, value.clone(), None, args);
            }
        };

        let matched = longest_prefix(tgt.schemes(), &frags[pos..]);
        let remainder_is_type = is_strict_type_call(&remainder);
        let step = match matched {
            Some((scheme, consumed))
                if !type_check_outranks(remainder_is_type, frags.len() - pos, consumed) =>
            {
                Some((scheme, consumed))
            }
            _ => None,
        };

        let Some((scheme, consumed)) = step else {
            let template = tgt.error_template().map(str::to_string);
            let value = tgt.unwrap_value();
            return finish_with_type_check(&remainder, value, template.as_deref(), args);
        };

        // Every step consumes at least one fragment, so the remaining
        // name strictly shrinks and the loop terminates.
        let is_final = pos + consumed == frags.len();
        let bound = bind_arguments(scheme, &mut args, is_final)?;
        let next = tgt.invoke(scheme.name(), bound)?;
        current = next;
        pos += consumed;
    }

    Ok(current)
}

/// Apply the trailing strict-type check of a transit call, or fail with
/// `MethodNotFound` when the remainder is not a type composition.
fn finish_with_type_check(
    remainder: &str,
    value: Value,
    stored_template: Option<&str>,
    args: Vec<Value>,
) -> Result<Resolved, TypeError> {
    if !is_strict_type_call(remainder) {
        return Err(TypeError::method_not_found(remainder));
    }
    let template = extract_template(remainder, args.first())?;
    strict_call_with(remainder, value, template.as_deref(), stored_template).map(Resolved::Value)
}

/// Bind a method's arguments from the front of the caller's list.
///
/// Required arguments must be present. Defaulted parameters take their
/// declared defaults mid-chain and absorb remaining caller arguments only
/// on the final step; every bound value is validated against its declared
/// type expression.
fn bind_arguments(
    scheme: &MethodScheme,
    args: &mut Vec<Value>,
    is_final: bool,
) -> Result<Vec<Value>, TypeError> {
    let required = scheme.required_count();
    if args.len() < required {
        return Err(TypeError::ArgumentCount {
            method: scheme.name().to_string(),
            required,
            given: args.len(),
        });
    }

    let take = if is_final {
        args.len().min(scheme.arity())
    } else {
        required
    };
    let mut bound: Vec<Value> = args.drain(..take).collect();

    for arg in &scheme.args()[bound.len()..] {
        match arg.default() {
            Some(value) => bound.push(value.clone()),
            None => {
                return Err(TypeError::ArgumentCount {
                    method: scheme.name().to_string(),
                    required,
                    given: bound.len(),
                })
            }
        }
    }

    for (arg, value) in scheme.args().iter().zip(&bound) {
        let expr = parse(arg.expression())?;
        if !expr.matches(value) {
            return Err(TypeError::wrong_type(format_template(
                ARGUMENT_TEMPLATE,
                &[
                    arg.name(),
                    scheme.name(),
                    arg.expression(),
                    value.type_name(),
                ],
            )));
        }
    }

    Ok(bound)
}

// ── Unified dispatch ─────────────────────────────────────────────────────

/// The unified dispatcher: a strict-type call if the name qualifies, a
/// transit call if it decomposes against the target, `MethodNotFound`
/// otherwise.
pub fn resolve_call(
    name: &str,
    args: Vec<Value>,
    target: Box<dyn CallTarget>,
) -> Result<Resolved, TypeError> {
    if is_strict_type_call(name) {
        return strict_type_call(name, args).map(Resolved::Value);
    }
    if is_transit_call(name, target.schemes()) {
        return call_transit(name, args, target);
    }
    Err(TypeError::method_not_found(name))
}
