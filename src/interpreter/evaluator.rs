use log::trace;

use crate::interpreter::{
    context::{Context, Namespace},
    value::Value,
};

/// Reduces raw expression text to a [`Value`].
///
/// The rules are checked top to bottom on every call and the first match
/// wins; the ordering is the semantics. Operators split on their FIRST
/// occurrence only, into exactly two parts, and both halves are evaluated
/// recursively — there is no precedence and no associativity. Each recursive
/// call sees a strictly shorter string, so evaluation always terminates.
///
/// The function is total. Unresolved names, malformed splits, and division
/// by zero all degrade into a number (possibly infinite or NaN) or into the
/// input text returned verbatim; nothing panics and nothing errors.
///
/// Two quirks are preserved on purpose:
/// - The single-`*` rule runs before the `**` rule and matches the first
///   star of a `**` pair, so exponentiation syntax is actually evaluated as
///   multiplication of an odd split. `"2**3"` splits into `"2"` and `"*3"`;
///   the right half splits again into `""` and `"3"`, and the empty text
///   coerces to zero, so the whole expression computes `2 * (0 * 3) = 0`.
/// - A reference to a name that was never declared (or was declared without
///   an initializer) falls through the namespace rules and, if no operator
///   matches either, comes back as literal text.
///
/// # Examples
/// ```
/// use arsharp::interpreter::{context::Context, evaluator::evaluate, value::Value};
///
/// let context = Context::new();
/// assert_eq!(evaluate("2+3", &context), Value::Number(5.0));
/// assert_eq!(evaluate("-3.5", &context), Value::Number(-3.5));
/// assert_eq!(evaluate("var{unknown}", &context), Value::from("var{unknown}"));
/// ```
#[must_use]
pub fn evaluate(expression: &str, context: &Context) -> Value {
    if let Ok(number) = expression.trim().parse::<f64>() {
        return Value::Number(number);
    }

    if expression.contains(Namespace::Variable.marker()) {
        let name = Namespace::Variable.extract_name(expression);
        if let Some(value) = context.lookup(Namespace::Variable, name) {
            return value.clone();
        }
    } else if expression.contains(Namespace::Constant.marker()) {
        let name = Namespace::Constant.extract_name(expression);
        if let Some(value) = context.lookup(Namespace::Constant, name) {
            return value.clone();
        }
    }

    if expression.contains(Namespace::Grand.marker()) {
        let name = Namespace::Grand.extract_name(expression);
        if let Some(value) = context.lookup(Namespace::Grand, name) {
            return value.clone();
        }
    }

    if let Some((left, right)) = expression.split_once('+') {
        return binary(left, right, context, |lhs, rhs| lhs + rhs);
    }
    if let Some((left, right)) = expression.split_once('-') {
        return binary(left, right, context, |lhs, rhs| lhs - rhs);
    }
    if let Some((left, right)) = expression.split_once('*') {
        // Also claims the first star of every `**` pair.
        return binary(left, right, context, |lhs, rhs| lhs * rhs);
    }
    if let Some((left, right)) = expression.split_once('/') {
        // Division by zero yields inf/NaN per IEEE 754 and is propagated.
        return binary(left, right, context, |lhs, rhs| lhs / rhs);
    }
    if let Some((left, right)) = expression.split_once("**") {
        // Unreachable from program text: the single `*` split above fires
        // first for any expression containing `**`. Kept so the power rule
        // stays individually testable.
        return binary(left, right, context, f64::powf);
    }
    if let Some((left, right)) = expression.split_once('%') {
        return remainder(left, right, context);
    }

    trace!("expression not reduced, returned verbatim: {expression:?}");
    Value::Text(expression.to_string())
}

fn binary(left: &str, right: &str, context: &Context, apply: fn(f64, f64) -> f64) -> Value {
    let lhs = evaluate(left, context).as_number();
    let rhs = evaluate(right, context).as_number();

    Value::Number(apply(lhs, rhs))
}

/// Integer-style remainder, as the host `%` operator computes it.
///
/// Operands are truncated to integers first. Remainder by zero (and the one
/// overflowing case, `i64::MIN % -1`) maps to NaN instead of a fault, per
/// the total-evaluation contract.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn remainder(left: &str, right: &str, context: &Context) -> Value {
    let lhs = evaluate(left, context).as_number() as i64;
    let rhs = evaluate(right, context).as_number() as i64;

    lhs.checked_rem(rhs)
       .map_or(Value::Number(f64::NAN), |result| Value::Number(result as f64))
}
