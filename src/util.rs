/// Fixed-offset text slicing.
///
/// ArSharp extracts names and print payloads by dropping fixed numbers of
/// characters off both ends of a line. This module provides that operation
/// in a form that is safe for multi-byte input and degrades to the empty
/// string instead of failing when the text is too short.
pub mod text;
