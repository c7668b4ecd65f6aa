//! Standard command schemas.
//!
//! Registration order is matching order; `SchemaRegistry::with_standard`
//! registers these in the order listed here.

use crate::role::SemanticRole::{
    Destination, Duration, Event, Patient, Quantity, ResponseType, Source,
};
use crate::schema::{CommandSchema, RoleSpec};
use crate::value::ValueType::{Expression, Literal, Reference, Selector};

/// Languages whose targets are unmarked in `set` and `fetch`.
const PREPOSITIONAL: [&str; 4] = ["en", "es", "it", "ar"];

fn unmarked_in_prepositional(spec: RoleSpec) -> RoleSpec {
    PREPOSITIONAL
        .iter()
        .fold(spec, |spec, language| spec.marker(language, ""))
}

/// Every standard schema, in registration order.
#[must_use]
pub fn standard_schemas() -> Vec<CommandSchema> {
    let element = [Selector, Reference, Expression];
    let anything = [Literal, Reference, Selector, Expression];

    vec![
        // Classes and attributes
        CommandSchema::new("toggle")
            .role(RoleSpec::required(Patient, &[Selector, Reference, Expression]).at(1, 2))
            .role(
                RoleSpec::optional(Destination, &element)
                    .at(2, 1)
                    .markers(&[("en", "on"), ("es", "en"), ("it", "su"), ("ar", "على")]),
            )
            .describe("Toggle a class or attribute on an element"),
        CommandSchema::new("add")
            .role(RoleSpec::required(Patient, &[Selector, Expression]).at(1, 2))
            .role(
                RoleSpec::optional(Destination, &element)
                    .at(2, 1)
                    .markers(&[("en", "to"), ("es", "a"), ("it", "a"), ("ar", "إلى")]),
            )
            .describe("Add a class or attribute to an element"),
        CommandSchema::new("remove")
            .role(RoleSpec::required(Patient, &element).at(1, 2))
            .role(RoleSpec::optional(Source, &element).at(2, 1))
            .describe("Remove a class, attribute, or element"),
        // Visibility
        CommandSchema::new("show")
            .role(RoleSpec::optional(Patient, &element))
            .describe("Show an element"),
        CommandSchema::new("hide")
            .role(RoleSpec::optional(Patient, &element))
            .describe("Hide an element"),
        // Variables and content
        CommandSchema::new("set")
            .role(unmarked_in_prepositional(
                RoleSpec::required(Destination, &element)
                    .at(1, 1)
                    .markers(&[("ja", "を"), ("ko", "를"), ("tr", "'i")]),
            ))
            .role(RoleSpec::required(Patient, &anything).at(2, 2).markers(&[
                ("en", "to"),
                ("es", "a"),
                ("it", "a"),
                ("ar", "إلى"),
                ("ja", "に"),
                ("ko", "로"),
                ("tr", "'e"),
            ]))
            .describe("Assign a value to a variable or property"),
        CommandSchema::new("put")
            .role(RoleSpec::required(Patient, &anything).at(1, 1))
            .role(RoleSpec::required(Destination, &element).at(2, 2).markers(&[
                ("en", "into"),
                ("es", "en"),
                ("it", "in"),
                ("ar", "في"),
                ("ja", "に"),
                ("ko", "에"),
                ("tr", "'e"),
            ]))
            .describe("Put a value into an element"),
        CommandSchema::new("increment")
            .role(RoleSpec::required(Patient, &element).at(1, 1))
            .role(RoleSpec::optional(Quantity, &[Literal, Reference, Expression]).at(2, 2))
            .describe("Increase a number"),
        CommandSchema::new("decrement")
            .role(RoleSpec::required(Patient, &element).at(1, 1))
            .role(RoleSpec::optional(Quantity, &[Literal, Reference, Expression]).at(2, 2))
            .describe("Decrease a number"),
        CommandSchema::new("append")
            .role(RoleSpec::required(Patient, &[Literal, Reference, Expression]).at(1, 1))
            .role(
                RoleSpec::optional(Destination, &element)
                    .at(2, 2)
                    .markers(&[("en", "to"), ("es", "a"), ("it", "a"), ("ar", "إلى")]),
            )
            .describe("Append a value to a string, array, or element"),
        CommandSchema::new("take")
            .role(RoleSpec::required(Patient, &[Selector]).at(1, 2))
            .role(RoleSpec::optional(Source, &element).at(2, 1))
            .describe("Move a class from its siblings to an element"),
        CommandSchema::new("log")
            .role(RoleSpec::required(Patient, &anything))
            .describe("Write a value to the console"),
        // Events
        CommandSchema::new("send")
            .role(unmarked_in_prepositional(
                RoleSpec::required(Event, &[Literal])
                    .at(1, 2)
                    .markers(&[("ja", "を"), ("ko", "를"), ("tr", "'i")]),
            ))
            .role(
                RoleSpec::optional(Destination, &element)
                    .at(2, 1)
                    .markers(&[("en", "to"), ("es", "a"), ("it", "a"), ("ar", "إلى")]),
            )
            .describe("Dispatch an event"),
        CommandSchema::new("trigger")
            .role(unmarked_in_prepositional(
                RoleSpec::required(Event, &[Literal])
                    .at(1, 2)
                    .markers(&[("ja", "を"), ("ko", "를"), ("tr", "'i")]),
            ))
            .role(
                RoleSpec::optional(Destination, &element)
                    .at(2, 1)
                    .markers(&[("en", "on"), ("es", "en"), ("it", "su"), ("ar", "على")]),
            )
            .describe("Dispatch an event on an element"),
        // Async
        CommandSchema::new("wait")
            .role(RoleSpec::required(Duration, &[Literal, Reference]))
            .describe("Pause for a duration"),
        CommandSchema::new("fetch")
            .role(unmarked_in_prepositional(RoleSpec::required(
                Source,
                &[Literal, Reference, Expression],
            )))
            .role(RoleSpec::optional(ResponseType, &[Literal]).at(2, 2))
            .describe("Request a URL"),
        // Navigation and calls
        CommandSchema::new("go")
            .role(
                RoleSpec::required(Destination, &anything)
                    .markers(&[("en", "to"), ("es", "a"), ("it", "a"), ("ar", "إلى")]),
            )
            .describe("Navigate to a URL or scroll to an element"),
        CommandSchema::new("call")
            .role(RoleSpec::required(Patient, &[Expression, Reference, Literal]))
            .describe("Call a function"),
        CommandSchema::new("focus")
            .role(RoleSpec::optional(Patient, &element))
            .describe("Focus an element"),
        CommandSchema::new("blur")
            .role(RoleSpec::optional(Patient, &element))
            .describe("Blur an element"),
        // Control flow
        CommandSchema::new("halt").describe("Stop the handler and the event"),
        CommandSchema::new("exit").describe("Leave the handler"),
        CommandSchema::new("return")
            .role(RoleSpec::optional(Patient, &anything))
            .describe("Leave the handler with a value"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperfixi_i18n::KeywordCategory;

    #[test]
    fn one_schema_per_command() {
        let schemas = standard_schemas();
        for command in KeywordCategory::Commands.canonical_words() {
            let count = schemas.iter().filter(|s| s.action == *command).count();
            assert_eq!(count, 1, "{command}");
        }
    }

    #[test]
    fn set_targets_are_unmarked_in_prepositional_languages() {
        let schemas = standard_schemas();
        let set = schemas.iter().find(|s| s.action == "set").unwrap();
        let destination = set.spec(&Destination).unwrap();
        assert_eq!(destination.marker_override.get("en").map(String::as_str), Some(""));
        assert_eq!(destination.marker_override.get("ja").map(String::as_str), Some("を"));
    }
}
