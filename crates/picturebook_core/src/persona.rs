//! Persona specification.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Fixed system-level configuration of the assistant, created once per session.
///
/// # Examples
///
/// ```
/// use picturebook_core::PersonaSpec;
///
/// let persona = PersonaSpec::builder()
///     .name("Children's Author")
///     .instructions("Explain topics via simple stories.")
///     .model("gpt-4-1106-preview")
///     .build()
///     .unwrap();
///
/// assert_eq!(persona.model(), "gpt-4-1106-preview");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct PersonaSpec {
    /// Display name of the persona
    name: String,
    /// System instructions
    instructions: String,
    /// Model identifier
    model: String,
}

impl PersonaSpec {
    /// Creates a new builder for `PersonaSpec`.
    pub fn builder() -> PersonaSpecBuilder {
        PersonaSpecBuilder::default()
    }
}
